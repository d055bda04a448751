//! Project REST API handlers

use crate::{ApiError, ApiResult, AppState, ProjectSubmission};

use folio_core::ProjectRecord;

use axum::{
    Json,
    extract::{Multipart, State},
};
use log::{info, warn};

const SAVED_MESSAGE: &str = "Project saved!";
const SAVE_FAILED_MESSAGE: &str = "Error saving project";
const LOAD_FAILED_MESSAGE: &str = "Error loading projects";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/projects
///
/// Store the optional image, then append the project record. If the append
/// fails the image just written is removed again.
pub async fn submit_project(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<&'static str> {
    let submission = ProjectSubmission::from_multipart(multipart).await?;

    let upload = match submission.image {
        Some(image) => Some(
            state
                .uploads
                .save(Some(&image.file_name), image.data)
                .await
                .map_err(|e| ApiError::internal(SAVE_FAILED_MESSAGE, e))?,
        ),
        None => None,
    };

    let record = ProjectRecord::new(
        submission.name,
        submission.description,
        upload.as_ref().map(|u| u.public_url.clone()),
    );
    let name = record.name.clone();

    if let Err(e) = state.store.append(record).await {
        if let Some(ref upload) = upload
            && let Err(remove_err) = state.uploads.remove(upload).await
        {
            warn!(
                "Failed to remove orphaned upload {}: {}",
                upload.path.display(),
                remove_err
            );
        }
        return Err(ApiError::internal(SAVE_FAILED_MESSAGE, e));
    }

    match upload {
        Some(upload) => info!("Saved project \"{}\" with image {}", name, upload.public_url),
        None => info!("Saved project \"{}\"", name),
    }

    Ok(SAVED_MESSAGE)
}

/// GET /api/projects
///
/// List all projects in submission order
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectRecord>>> {
    let projects = state
        .store
        .list_all()
        .await
        .map_err(|e| ApiError::internal(LOAD_FAILED_MESSAGE, e))?;

    Ok(Json(projects))
}
