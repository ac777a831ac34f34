use domain::reports::ReportList;

use crate::portal::Portal;

use super::loadable::Loadable;

/// The patient's uploaded reports, with the server-derived summary PDF
/// link when one exists.
#[derive(Default)]
pub struct MyReportsScreen {
    reports: Loadable<ReportList>,
}

impl MyReportsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &Loadable<ReportList> {
        &self.reports
    }

    pub async fn refresh(&mut self, portal: &Portal) {
        self.reports = Loadable::Loading;
        match portal.my_reports().await {
            Ok(list) => self.reports = Loadable::Ready(list),
            Err(error) => {
                tracing::warn!("Failed to load reports: {error}");
                self.reports = Loadable::Failed("Could not load reports".to_string());
            }
        }
    }
}
