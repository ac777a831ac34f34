use domain::reports::ReportUpload;

use crate::portal::Portal;

/// The report upload form. Title and file are both required; the form
/// clears after a successful upload.
#[derive(Default)]
pub struct UploadReportScreen {
    title: String,
    file_name: String,
    bytes: Vec<u8>,
    message: Option<String>,
}

impl UploadReportScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_file(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.file_name = file_name.into();
        self.bytes = bytes;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub async fn submit(&mut self, portal: &Portal) {
        let upload = ReportUpload {
            title: self.title.clone(),
            file_name: self.file_name.clone(),
            bytes: self.bytes.clone(),
        };
        if let Err(error) = upload.validate() {
            self.message = Some(error.to_string());
            return;
        }
        match portal.upload_report(&upload).await {
            Ok(()) => {
                self.title.clear();
                self.file_name.clear();
                self.bytes.clear();
                self.message = Some("Report uploaded successfully".to_string());
            }
            Err(error) => {
                tracing::warn!("Report upload failed: {error}");
                self.message = Some("Upload failed".to_string());
            }
        }
    }
}
