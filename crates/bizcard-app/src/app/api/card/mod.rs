//! The card page.

mod escape;
mod page;

use salvo::writing::Text;
use salvo::{Depot, Response, Router, handler};

use super::response::write_error;
use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::state_handler::get_image_from_depot;

/// ## Summary
/// GET / - Renders the card with the current profile image.
#[handler]
async fn card_page(depot: &mut Depot, res: &mut Response) {
    match render_from_depot(depot) {
        Ok(html) => res.render(Text::Html(html)),
        Err(e) => write_error(res, &e),
    }
}

fn render_from_depot(depot: &Depot) -> AppResult<String> {
    let settings = get_config_from_depot(depot)?;
    let image = get_image_from_depot(depot)?;

    Ok(page::render(
        &settings.card,
        &image.current(),
        settings.delivery.policy,
    ))
}

#[must_use]
pub fn routes() -> Router {
    Router::new().get(card_page)
}
