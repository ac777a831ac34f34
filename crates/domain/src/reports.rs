use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// An uploaded medical report.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub file: String,
}

/// The patient's report listing, with the server-derived summary PDF when
/// one has been generated.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct ReportList {
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default)]
    pub summary_pdf: Option<String>,
}

/// A report upload: title plus file content, sent as a multipart form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportUpload {
    pub title: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ReportUpload {
    /// Both title and file are required before the upload is attempted.
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation {
                message: "Report title is required".to_string(),
            });
        }
        if self.file_name.trim().is_empty() || self.bytes.is_empty() {
            return Err(Error::Validation {
                message: "Report file is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_requires_title_and_file() {
        let upload = ReportUpload {
            title: "  ".into(),
            file_name: "scan.pdf".into(),
            bytes: vec![1],
        };
        assert!(upload.validate().is_err());

        let upload = ReportUpload {
            title: "Blood work".into(),
            file_name: "scan.pdf".into(),
            bytes: vec![],
        };
        assert!(upload.validate().is_err());

        let upload = ReportUpload {
            title: "Blood work".into(),
            file_name: "scan.pdf".into(),
            bytes: vec![1, 2, 3],
        };
        assert!(upload.validate().is_ok());
    }

    #[test]
    fn report_list_tolerates_missing_summary() {
        let list: ReportList = serde_json::from_str(r#"{"reports": []}"#).unwrap();
        assert!(list.summary_pdf.is_none());
    }
}
