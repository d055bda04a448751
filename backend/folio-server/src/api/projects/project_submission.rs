//! Multipart form parsing for project submissions.

use crate::ApiResult;

use axum::extract::Multipart;
use bytes::Bytes;

pub const NAME_FIELD: &str = "projectName";
pub const DESCRIPTION_FIELD: &str = "projectDescription";
pub const IMAGE_FIELD: &str = "image";

/// Image file part of a submission, not yet written anywhere
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// File name as sent by the client
    pub file_name: String,
    pub data: Bytes,
}

/// The fields of one `POST /api/projects` form.
///
/// Missing text fields stay empty. Unknown fields are skipped and a repeated
/// field keeps its last value.
#[derive(Debug, Clone, Default)]
pub struct ProjectSubmission {
    pub name: String,
    pub description: String,
    pub image: Option<UploadedImage>,
}

impl ProjectSubmission {
    pub async fn from_multipart(mut multipart: Multipart) -> ApiResult<Self> {
        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(str::to_owned);

            match field_name.as_deref() {
                Some(NAME_FIELD) => submission.name = field.text().await?,
                Some(DESCRIPTION_FIELD) => submission.description = field.text().await?,
                Some(IMAGE_FIELD) => {
                    // A part without a filename is a plain text field, not a file
                    let Some(file_name) = field.file_name().map(str::to_owned) else {
                        continue;
                    };
                    let data = field.bytes().await?;

                    // Untouched browser file inputs send an empty nameless file
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }

                    submission.image = Some(UploadedImage { file_name, data });
                }
                _ => {}
            }
        }

        Ok(submission)
    }
}
