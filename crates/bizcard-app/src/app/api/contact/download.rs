use bizcard_core::config::DeliveryPolicy;
use bizcard_core::constants::VCARD_CONTENT_TYPE;
use bizcard_rfc::rfc::vcard::ContactRecord;
use bizcard_service::delivery::{Delivery, DownloadFile};
use salvo::http::StatusCode;
use salvo::{Depot, Response, handler};

use crate::app::api::response::{set_header, write_bytes, write_error};
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};
use crate::state_handler::get_delivery_from_depot;

/// ## Summary
/// GET /contact.vcf - Serves the card as a vCard attachment.
///
/// ## Side Effects
/// Creates a temporary object for the file and releases it before the
/// response is written.
#[handler]
pub(super) async fn download(depot: &mut Depot, res: &mut Response) {
    match deliver_download(depot) {
        Ok(file) => {
            tracing::debug!(filename = %file.filename, bytes = file.blob.len(), "Serving contact file");
            res.status_code(StatusCode::OK);
            set_header(
                res,
                "Content-Disposition",
                &format!("attachment; filename=\"{}\"", file.filename),
            );
            write_bytes(res, VCARD_CONTENT_TYPE, file.blob.bytes.clone());
        }
        Err(e) => write_error(res, &e),
    }
}

fn deliver_download(depot: &Depot) -> AppResult<DownloadFile> {
    let settings = get_config_from_depot(depot)?;
    let delivery = get_delivery_from_depot(depot)?;

    let record = ContactRecord::from(&settings.card);
    match delivery.deliver_record(&record, DeliveryPolicy::Download)? {
        Delivery::Download(file) => Ok(file),
        Delivery::Handoff { .. } => Err(AppError::CoreError(
            bizcard_core::error::CoreError::InvariantViolation(
                "Download delivery produced a handoff",
            ),
        )),
    }
}
