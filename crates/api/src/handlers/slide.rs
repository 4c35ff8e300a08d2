//! Handlers for slides and their call-to-action links.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use heroslide_core::error::CoreError;
use heroslide_core::slide::{
    mobile_image_or_fallback, overlay_opacity_css, validate_slide, Alignment, CallToAction,
    MediaType, Theme,
};
use heroslide_core::types::DbId;
use heroslide_db::models::slide::{Slide, SlideInput};
use heroslide_db::repositories::{SlideLinkRepo, SlideRepo, SliderRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing a slider's slides.
#[derive(Debug, Deserialize)]
pub struct ListSlidesParams {
    /// When true, only slides whose date window covers "today" are returned.
    pub active: Option<bool>,
    /// Override for "today" (`YYYY-MM-DD`); defaults to the current UTC date.
    pub today: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a slide exists, returning the full row.
async fn ensure_slide_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Slide> {
    SlideRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Slide",
            id,
        })
    })
}

/// Reject out-of-set enum values at the boundary, returning the resolved
/// media type for validation.
fn parse_enums(input: &SlideInput) -> AppResult<MediaType> {
    if let Some(theme) = &input.theme {
        theme.parse::<Theme>()?;
    }
    if let Some(alignment) = &input.alignment {
        alignment.parse::<Alignment>()?;
    }
    match &input.media_type {
        Some(media_type) => Ok(media_type.parse::<MediaType>()?),
        None => Ok(MediaType::default()),
    }
}

/// Run slide validation against the write and the slide's current
/// call-to-action state, blocking the write on any collected message.
fn check_slide(
    input: &SlideInput,
    media_type: MediaType,
    cta: &CallToAction,
) -> AppResult<()> {
    let (has_cover, button_count) = match cta {
        CallToAction::None => (false, 0),
        CallToAction::Cover { .. } => (true, 0),
        CallToAction::Buttons { buttons } => (false, buttons.len()),
    };
    let result = validate_slide(&input.check(media_type, has_cover, button_count));
    if result.is_valid {
        Ok(())
    } else {
        Err(AppError::SlideValidation(result.errors))
    }
}

/// Slide row enriched with derived display fields and its call-to-action.
#[derive(Debug, Serialize)]
pub struct SlideDetail {
    #[serde(flatten)]
    pub slide: Slide,
    /// Overlay opacity as a CSS alpha string (stored 70 -> "0.7").
    pub overlay_opacity_css: String,
    /// Mobile image path, falling back to the desktop image when unset.
    pub display_image: Option<String>,
    pub call_to_action: CallToAction,
}

impl SlideDetail {
    fn assemble(slide: Slide, call_to_action: CallToAction) -> Self {
        let overlay_opacity_css = overlay_opacity_css(slide.overlay_opacity);
        let display_image = mobile_image_or_fallback(
            slide.image_path.as_deref(),
            slide.mobile_image_path.as_deref(),
        )
        .map(str::to_string);
        Self {
            slide,
            overlay_opacity_css,
            display_image,
            call_to_action,
        }
    }
}

// ---------------------------------------------------------------------------
// GET /pages/{page_id}/slider/slides
// ---------------------------------------------------------------------------

/// List a slider's slides in display order, optionally filtered to those
/// active today.
pub async fn list_slides(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Query(params): Query<ListSlidesParams>,
) -> AppResult<impl IntoResponse> {
    let slider = SliderRepo::find_by_page(&state.pool, page_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: page_id,
        }))?;

    let slides = if params.active.unwrap_or(false) {
        let today = params.today.unwrap_or_else(|| Utc::now().date_naive());
        SlideRepo::list_active_for_slider(&state.pool, slider.id, today).await?
    } else {
        SlideRepo::list_for_slider(&state.pool, slider.id).await?
    };

    tracing::debug!(page_id, count = slides.len(), "Listed slides");
    Ok(Json(DataResponse { data: slides }))
}

// ---------------------------------------------------------------------------
// POST /pages/{page_id}/slider/slides
// ---------------------------------------------------------------------------

/// Create a slide under a page's slider.
pub async fn create_slide(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<SlideInput>,
) -> AppResult<impl IntoResponse> {
    let slider = SliderRepo::find_by_page(&state.pool, page_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: page_id,
        }))?;

    let media_type = parse_enums(&input)?;
    // A new slide has no links yet, so the cover/buttons rule cannot trip.
    check_slide(&input, media_type, &CallToAction::None)?;

    let created = SlideRepo::create(&state.pool, slider.id, &input).await?;
    tracing::info!(page_id, id = created.id, name = %created.name, "Slide created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /slides/{id}
// ---------------------------------------------------------------------------

/// Get a single slide with derived display fields and its call-to-action.
pub async fn get_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slide = ensure_slide_exists(&state.pool, id).await?;
    let cta = SlideLinkRepo::call_to_action(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: SlideDetail::assemble(slide, cta),
    }))
}

// ---------------------------------------------------------------------------
// PUT /slides/{id}
// ---------------------------------------------------------------------------

/// Replace a slide's editable fields. The write is re-validated against the
/// slide's current call-to-action state and re-normalized.
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SlideInput>,
) -> AppResult<impl IntoResponse> {
    ensure_slide_exists(&state.pool, id).await?;

    let media_type = parse_enums(&input)?;
    let cta = SlideLinkRepo::call_to_action(&state.pool, id).await?;
    check_slide(&input, media_type, &cta)?;

    let updated = SlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slide",
            id,
        }))?;
    tracing::debug!(id, "Slide updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /slides/{id}
// ---------------------------------------------------------------------------

/// Delete a slide and its links.
pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if SlideRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Slide deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Slide",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// GET /slides/{id}/links
// ---------------------------------------------------------------------------

/// Get a slide's call-to-action.
pub async fn get_links(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_slide_exists(&state.pool, id).await?;
    let cta = SlideLinkRepo::call_to_action(&state.pool, id).await?;
    Ok(Json(DataResponse { data: cta }))
}

// ---------------------------------------------------------------------------
// PUT /slides/{id}/links
// ---------------------------------------------------------------------------

/// Replace a slide's call-to-action. The tagged union in the request body
/// makes the cover-vs-buttons exclusivity structural.
pub async fn put_links(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(cta): Json<CallToAction>,
) -> AppResult<impl IntoResponse> {
    ensure_slide_exists(&state.pool, id).await?;

    let mut errors = Vec::new();
    let links: Vec<_> = match &cta {
        CallToAction::None => Vec::new(),
        CallToAction::Cover { link } => vec![link],
        CallToAction::Buttons { buttons } => buttons.iter().collect(),
    };
    for link in links {
        if link.url.is_empty() {
            errors.push(format!("Link '{}' requires a URL", link.label));
        }
    }
    if !errors.is_empty() {
        return Err(AppError::SlideValidation(errors));
    }

    SlideLinkRepo::set_call_to_action(&state.pool, id, &cta).await?;
    tracing::debug!(id, "Slide call-to-action replaced");
    Ok(Json(DataResponse { data: cta }))
}
