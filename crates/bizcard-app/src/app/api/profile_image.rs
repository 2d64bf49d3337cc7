//! Profile image uploads.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Serialize;

use super::PROFILE_IMAGE_COMPONENT;
use super::response::write_error;
use crate::error::AppError;
use crate::state_handler::get_image_from_depot;

/// ## Summary
/// Upload response payload
#[derive(Debug, Serialize)]
pub struct ProfileImageResponse {
    pub src: String,
}

/// ## Summary
/// POST /profile-image - Replaces the displayed profile image with the raw
/// request body.
///
/// ## Errors
/// Returns HTTP 415 for a non-image `Content-Type`, 413 over the size limit,
/// 409 if a newer upload superseded this one.
#[handler]
async fn upload(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let image = match get_image_from_depot(depot) {
        Ok(image) => image,
        Err(e) => {
            write_error(res, &e);
            return;
        }
    };

    let media_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let body = match req.payload_with_max_size(image.max_bytes()).await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            tracing::debug!(error = %e, max = image.max_bytes(), "Failed to read image body");
            res.status_code(StatusCode::PAYLOAD_TOO_LARGE);
            return;
        }
    };

    match image.load(body, &media_type).await {
        Ok(src) => res.render(Json(ProfileImageResponse { src })),
        Err(e) => write_error(res, &AppError::from(e)),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PROFILE_IMAGE_COMPONENT).post(upload)
}
