//! Handlers for per-page slider configuration and its rendered outputs
//! (the Swiper options object and the page-init script).

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use heroslide_core::error::CoreError;
use heroslide_core::options::{build_options, options_json, Effect, SwiperOptions};
use heroslide_core::types::DbId;
use heroslide_db::models::slider::{Slider, SliderInput};
use heroslide_db::repositories::{SlideRepo, SliderRepo};

use crate::embed::init_snippet;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a page has a slider, returning the full row.
async fn ensure_slider_exists(pool: &sqlx::PgPool, page_id: DbId) -> AppResult<Slider> {
    SliderRepo::find_by_page(pool, page_id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: page_id,
        })
    })
}

/// Reject out-of-set effect values at the boundary.
fn validate_input(input: &SliderInput) -> AppResult<()> {
    if let Some(effect) = &input.effect {
        effect.parse::<Effect>()?;
    }
    Ok(())
}

/// Slider row enriched with the slide-existence flag.
#[derive(Debug, Serialize)]
pub struct SliderResponse {
    #[serde(flatten)]
    pub slider: Slider,
    pub has_slides: bool,
}

// ---------------------------------------------------------------------------
// GET /pages/{page_id}/slider
// ---------------------------------------------------------------------------

/// Get a page's slider configuration, with whether it has any slides.
pub async fn get_slider(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slider = ensure_slider_exists(&state.pool, page_id).await?;
    let has_slides = SlideRepo::exists_for_slider(&state.pool, slider.id).await?;
    Ok(Json(DataResponse {
        data: SliderResponse { slider, has_slides },
    }))
}

// ---------------------------------------------------------------------------
// PUT /pages/{page_id}/slider
// ---------------------------------------------------------------------------

/// Create or update a page's slider. Creation defaults apply only when the
/// slider does not exist yet; an update touches only the provided fields.
pub async fn upsert_slider(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<SliderInput>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    if let Some(updated) = SliderRepo::update_by_page(&state.pool, page_id, &input).await? {
        tracing::debug!(page_id, "Slider updated");
        return Ok((StatusCode::OK, Json(DataResponse { data: updated })));
    }

    let created = SliderRepo::create(&state.pool, page_id, &input).await?;
    tracing::info!(page_id, id = created.id, "Slider created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// DELETE /pages/{page_id}/slider
// ---------------------------------------------------------------------------

/// Remove a page's slider, cascading to its slides and links.
pub async fn delete_slider(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if SliderRepo::delete_by_page(&state.pool, page_id).await? {
        tracing::info!(page_id, "Slider deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: page_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// GET /pages/{page_id}/slider/options
// ---------------------------------------------------------------------------

/// The Swiper options object for a page.
///
/// Served bare (no `data` envelope): the client library consumes it as-is.
pub async fn get_options(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<Json<SwiperOptions>> {
    let slider = ensure_slider_exists(&state.pool, page_id).await?;
    Ok(Json(build_options(&slider.settings())))
}

// ---------------------------------------------------------------------------
// GET /pages/{page_id}/slider/embed.js
// ---------------------------------------------------------------------------

/// The page-init script: idempotent, timing-safe, options inlined.
pub async fn get_embed_script(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slider = ensure_slider_exists(&state.pool, page_id).await?;
    let snippet = init_snippet(page_id, &options_json(&slider.settings()));
    Ok((
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        snippet,
    ))
}
