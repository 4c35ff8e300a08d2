//! Route definitions for individual slides, mounted at `/slides`.
//!
//! ```text
//! GET/PUT/DELETE /{id}        -> single slide
//! GET/PUT        /{id}/links  -> call-to-action
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::slide;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(slide::get_slide)
                .put(slide::update_slide)
                .delete(slide::delete_slide),
        )
        .route("/{id}/links", get(slide::get_links).put(slide::put_links))
}
