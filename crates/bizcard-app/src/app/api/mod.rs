mod app_specific;
mod blob;
mod card;
mod contact;
mod profile_image;
mod response;

use salvo::Router;

pub use bizcard_core::constants::{
    BLOB_ROUTE_COMPONENT, CONTACT_FILE_COMPONENT, CONTACT_OPEN_COMPONENT,
    CONTACT_ROUTE_COMPONENT, PROFILE_IMAGE_COMPONENT,
};

/// ## Summary
/// Constructs the router with the card page and every contact route.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(card::routes())
        .push(contact::routes())
        .push(blob::routes())
        .push(profile_image::routes())
        .push(app_specific::routes())
}
