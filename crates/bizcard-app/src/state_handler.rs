//! Makes the shared delivery service and image slot available to handlers.

use std::sync::Arc;

use bizcard_core::error::CoreError;
use bizcard_service::delivery::ContactFileDelivery;
use bizcard_service::image::ProfileImage;
use salvo::async_trait;

use crate::error::AppResult;

pub struct StateHandler {
    pub delivery: Arc<ContactFileDelivery>,
    pub image: Arc<ProfileImage>,
}

#[async_trait]
impl salvo::Handler for StateHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.delivery));
        depot.inject(Arc::clone(&self.image));
    }
}

/// ## Summary
/// Retrieves the contact delivery service from the depot.
///
/// ## Errors
/// Returns an error if the service is not found in the depot.
pub fn get_delivery_from_depot(depot: &salvo::Depot) -> AppResult<Arc<ContactFileDelivery>> {
    depot
        .obtain::<Arc<ContactFileDelivery>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Contact delivery not found in depot").into())
}

/// ## Summary
/// Retrieves the profile image slot from the depot.
///
/// ## Errors
/// Returns an error if the slot is not found in the depot.
pub fn get_image_from_depot(depot: &salvo::Depot) -> AppResult<Arc<ProfileImage>> {
    depot
        .obtain::<Arc<ProfileImage>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Profile image not found in depot").into())
}
