use domain::booking::{AvailabilitySlot, Weekday};
use domain::profile::{Profile, Specialization};

use crate::portal::Portal;

use super::loadable::Loadable;

/// Everything the dashboard shows at once.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub profile: Profile,
    pub specializations: Vec<Specialization>,
    pub availability: Vec<AvailabilitySlot>,
}

/// The add-slot input form. All three fields are required before a
/// request is made.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SlotForm {
    pub weekday: Option<Weekday>,
    pub start_time: String,
    pub end_time: String,
}

impl SlotForm {
    fn validate(&self) -> Result<AvailabilitySlot, domain::Error> {
        let weekday = self.weekday.ok_or_else(|| {
            domain::Error::validation("Pick a weekday for the slot")
        })?;
        if self.start_time.trim().is_empty() || self.end_time.trim().is_empty() {
            return Err(domain::Error::validation(
                "Both start and end times are required",
            ));
        }
        Ok(AvailabilitySlot {
            weekday,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        })
    }
}

/// The doctor's profile, specialization and weekly availability manager.
///
/// Both writes (set specialization, add slot) are followed by a full
/// refetch rather than a local patch, mirroring the pull-based
/// consistency of the rest of the portal. Duplicate or overlapping slots
/// are not rejected client-side.
#[derive(Default)]
pub struct DoctorDashboardScreen {
    data: Loadable<DashboardData>,
    slot_form: SlotForm,
    message: Option<String>,
}

impl DoctorDashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &Loadable<DashboardData> {
        &self.data
    }

    pub fn slot_form(&self) -> &SlotForm {
        &self.slot_form
    }

    pub fn slot_form_mut(&mut self) -> &mut SlotForm {
        &mut self.slot_form
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fetches profile, specialization lookup and availability in order.
    pub async fn refresh(&mut self, portal: &Portal) {
        self.data = Loadable::Loading;
        let fetched = async {
            let profile = portal.profile().await?;
            let specializations = portal.specializations().await?;
            let availability = portal.availability().await?;
            Ok::<_, crate::errors::Error>(DashboardData {
                profile,
                specializations,
                availability,
            })
        }
        .await;
        match fetched {
            Ok(data) => self.data = Loadable::Ready(data),
            Err(error) => {
                tracing::warn!("Failed to load dashboard: {error}");
                self.data = Loadable::Failed(
                    "Failed to load dashboard data. Please try again.".to_string(),
                );
            }
        }
    }

    /// Posts the chosen specialization, then refetches the whole
    /// dashboard as a consistency refresh.
    pub async fn set_specialization(&mut self, portal: &Portal, specialization_id: i64) {
        match portal.set_specialization(specialization_id).await {
            Ok(()) => {
                self.message = Some("Specialization updated successfully!".to_string());
                self.refresh(portal).await;
            }
            Err(error) => {
                tracing::warn!("Failed to update specialization: {error}");
                self.message = Some("Failed to update specialization.".to_string());
            }
        }
    }

    /// Posts the slot form, then resets it and refetches. Validation
    /// failures never reach the network.
    pub async fn add_slot(&mut self, portal: &Portal) {
        let slot = match self.slot_form.validate() {
            Ok(slot) => slot,
            Err(error) => {
                self.message = Some(error.to_string());
                return;
            }
        };
        match portal.add_availability(&slot).await {
            Ok(()) => {
                self.slot_form = SlotForm::default();
                self.message = Some("Availability slot added successfully!".to_string());
                self.refresh(portal).await;
            }
            Err(error) => {
                tracing::warn!("Failed to add availability slot: {error}");
                self.message = Some("Failed to add availability slot.".to_string());
            }
        }
    }
}
