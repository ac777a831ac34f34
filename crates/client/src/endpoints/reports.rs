use domain::reports::{ReportList, ReportUpload};

use crate::errors::Error;
use crate::portal::Portal;
use crate::transport::Part;

impl Portal {
    /// The patient's reports with the server-derived summary PDF, if any.
    pub async fn my_reports(&self) -> Result<ReportList, Error> {
        self.api.get("/reports/my/").await
    }

    /// Uploads one report as a multipart form.
    pub async fn upload_report(&self, upload: &ReportUpload) -> Result<(), Error> {
        upload.validate()?;
        self.api
            .post_multipart(
                "/reports/upload/",
                vec![
                    Part::Text {
                        name: "title".to_string(),
                        value: upload.title.clone(),
                    },
                    Part::File {
                        name: "file".to_string(),
                        file_name: upload.file_name.clone(),
                        bytes: upload.bytes.clone(),
                    },
                ],
            )
            .await
    }
}
