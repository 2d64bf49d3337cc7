//! Saving the card as a contact file.

mod download;
mod open;

use salvo::Router;

use super::{CONTACT_FILE_COMPONENT, CONTACT_OPEN_COMPONENT, CONTACT_ROUTE_COMPONENT};

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path(CONTACT_FILE_COMPONENT).get(download::download))
        .push(
            Router::with_path(CONTACT_ROUTE_COMPONENT)
                .push(Router::with_path(CONTACT_OPEN_COMPONENT).get(open::open)),
        )
}
