use domain::prescriptions::Prescription;

use crate::portal::Portal;

use super::loadable::Loadable;

/// The patient's prescription list.
#[derive(Default)]
pub struct MyPrescriptionsScreen {
    prescriptions: Loadable<Vec<Prescription>>,
}

impl MyPrescriptionsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prescriptions(&self) -> &Loadable<Vec<Prescription>> {
        &self.prescriptions
    }

    pub async fn refresh(&mut self, portal: &Portal) {
        self.prescriptions = Loadable::Loading;
        match portal.patient_prescriptions().await {
            Ok(list) => self.prescriptions = Loadable::Ready(list),
            Err(error) => {
                tracing::warn!("Failed to load prescriptions: {error}");
                self.prescriptions = Loadable::Failed("Failed to load prescriptions.".to_string());
            }
        }
    }
}
