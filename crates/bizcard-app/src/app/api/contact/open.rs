use bizcard_core::config::DeliveryPolicy;
use bizcard_rfc::rfc::vcard::ContactRecord;
use bizcard_service::delivery::Delivery;
use salvo::http::StatusCode;
use salvo::{Depot, Response, handler};

use crate::app::api::response::{set_header, write_error};
use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::state_handler::get_delivery_from_depot;

/// ## Summary
/// GET /contact/open - Hands the card off to the client's contact importer
/// with a `303 See Other` to a temporary object.
///
/// ## Side Effects
/// The temporary object is released after the configured delay.
#[handler]
pub(super) async fn open(depot: &mut Depot, res: &mut Response) {
    match deliver_handoff(depot) {
        Ok(Delivery::Handoff { location }) => {
            res.status_code(StatusCode::SEE_OTHER);
            set_header(res, "Location", &location);
        }
        Ok(Delivery::Download(file)) => {
            tracing::warn!(filename = %file.filename, "Handoff delivery produced a download");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Err(e) => write_error(res, &e),
    }
}

fn deliver_handoff(depot: &Depot) -> AppResult<Delivery> {
    let settings = get_config_from_depot(depot)?;
    let delivery = get_delivery_from_depot(depot)?;

    let record = ContactRecord::from(&settings.card);
    Ok(delivery.deliver_record(&record, DeliveryPolicy::Handoff)?)
}
