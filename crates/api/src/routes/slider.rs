//! Route definitions for per-page slider configuration, mounted at
//! `/pages/{page_id}/slider`.
//!
//! ```text
//! GET/PUT/DELETE /           -> configuration
//! GET            /options    -> Swiper options object
//! GET            /embed.js   -> page-init script
//! GET/POST       /slides     -> slide collection
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{slide, slider};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(slider::get_slider)
                .put(slider::upsert_slider)
                .delete(slider::delete_slider),
        )
        .route("/options", get(slider::get_options))
        .route("/embed.js", get(slider::get_embed_script))
        .route("/slides", get(slide::list_slides).post(slide::create_slide))
}
