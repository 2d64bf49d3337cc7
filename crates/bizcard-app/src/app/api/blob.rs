//! Temporary objects issued by the contact handoff.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler};
use uuid::Uuid;

use super::BLOB_ROUTE_COMPONENT;
use super::response::{set_header, write_bytes, write_error};
use crate::state_handler::get_delivery_from_depot;

/// ## Summary
/// GET /blob/{id} - Serves a live temporary object inline.
///
/// ## Errors
/// Returns HTTP 404 if the id is malformed, unknown, or already released.
#[handler]
async fn serve_blob(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(id) = req
        .param::<String>("id")
        .and_then(|raw| Uuid::parse_str(&raw).ok())
    else {
        tracing::debug!("Malformed temporary object id");
        res.status_code(StatusCode::NOT_FOUND);
        return;
    };

    let delivery = match get_delivery_from_depot(depot) {
        Ok(delivery) => delivery,
        Err(e) => {
            write_error(res, &e);
            return;
        }
    };

    match delivery.store().get(&id) {
        Ok(blob) => {
            res.status_code(StatusCode::OK);
            set_header(res, "Content-Disposition", "inline");
            set_header(res, "Cache-Control", "no-store");
            write_bytes(res, &blob.media_type, blob.bytes.clone());
        }
        Err(e) => write_error(res, &e.into()),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(BLOB_ROUTE_COMPONENT).push(Router::with_path("{id}").get(serve_blob))
}
