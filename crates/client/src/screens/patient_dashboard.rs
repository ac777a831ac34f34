use domain::profile::Profile;

use crate::portal::Portal;

use super::loadable::Loadable;

/// The patient's landing screen: profile card plus quick links.
#[derive(Default)]
pub struct PatientDashboardScreen {
    profile: Loadable<Profile>,
}

impl PatientDashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &Loadable<Profile> {
        &self.profile
    }

    pub async fn refresh(&mut self, portal: &Portal) {
        self.profile = Loadable::Loading;
        match portal.profile().await {
            Ok(profile) => self.profile = Loadable::Ready(profile),
            Err(error) => {
                tracing::warn!("Failed to load profile: {error}");
                self.profile = Loadable::Failed("Failed to load profile".to_string());
            }
        }
    }
}
