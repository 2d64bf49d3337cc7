pub mod api;

use std::sync::Arc;

use bizcard_core::config::Settings;
use bizcard_service::delivery::{ContactFileDelivery, ObjectStore};
use bizcard_service::image::ProfileImage;
use salvo::Router;
use salvo::logging::Logger;

use crate::config::ConfigHandler;
use crate::state_handler::StateHandler;

/// ## Summary
/// Builds the full router: request logging, configuration and shared state
/// hoops, then every route.
///
/// Each call gets its own temporary-object store and profile image slot.
#[must_use]
pub fn router(settings: &Settings) -> Router {
    let store = Arc::new(ObjectStore::new());
    let delivery = Arc::new(ContactFileDelivery::from_config(store, &settings.delivery));
    let image = Arc::new(ProfileImage::from_config(&settings.card, &settings.image));

    Router::new()
        .hoop(Logger::new())
        .hoop(ConfigHandler {
            settings: settings.clone(),
        })
        .hoop(StateHandler { delivery, image })
        .push(api::routes())
}
