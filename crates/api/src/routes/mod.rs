pub mod health;
pub mod slide;
pub mod slider;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages/{page_id}/slider            get, upsert, delete configuration
/// /pages/{page_id}/slider/options    Swiper options object
/// /pages/{page_id}/slider/embed.js   page-init script
/// /pages/{page_id}/slider/slides     list (?active=true&today=...), create
///
/// /slides/{id}                       get, replace, delete
/// /slides/{id}/links                 get, replace call-to-action
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pages/{page_id}/slider", slider::router())
        .nest("/slides", slide::router())
}
