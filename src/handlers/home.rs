//! Handler for GET / — the HTML form page.

use crate::event::GatewayResponse;
use crate::handlers::AppContext;

/// Return the form page. The template is loaded once at startup, so this
/// handler is a pure lookup.
pub fn handle_home(ctx: &AppContext) -> GatewayResponse {
    GatewayResponse::html(ctx.form_html.as_ref())
}
