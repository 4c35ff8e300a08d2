//! Slide model and DTOs.

use chrono::NaiveDate;
use heroslide_core::slide::{MediaType, SlideCheck};
use heroslide_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slide {
    pub id: DbId,
    pub slider_id: DbId,
    pub name: String,
    pub content: String,
    pub theme: String,
    pub alignment: String,
    pub overlay_opacity: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_order: i32,
    pub media_type: String,
    pub image_path: Option<String>,
    pub mobile_image_path: Option<String>,
    pub video_mp4_path: Option<String>,
    pub video_webm_path: Option<String>,
    pub video_poster_path: Option<String>,
    pub clip_start_secs: Option<f64>,
    pub clip_end_secs: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for slide writes. Both create and update replace the full editable
/// record, mirroring how the editing form submits every field; absent
/// optional fields fall back to their documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlideInput {
    pub name: String,
    pub content: Option<String>,
    pub theme: Option<String>,
    pub alignment: Option<String>,
    pub overlay_opacity: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_order: Option<i32>,
    pub media_type: Option<String>,
    pub image_path: Option<String>,
    pub mobile_image_path: Option<String>,
    pub video_mp4_path: Option<String>,
    pub video_webm_path: Option<String>,
    pub video_poster_path: Option<String>,
    pub clip_start_secs: Option<f64>,
    pub clip_end_secs: Option<f64>,
}

impl SlideInput {
    /// Validation view of this write, combined with the slide's current
    /// call-to-action state.
    pub fn check(&self, media_type: MediaType, has_cover_link: bool, button_count: usize) -> SlideCheck<'_> {
        SlideCheck {
            media_type,
            image_path: self.image_path.as_deref(),
            video_mp4_path: self.video_mp4_path.as_deref(),
            video_webm_path: self.video_webm_path.as_deref(),
            clip_start_secs: self.clip_start_secs,
            clip_end_secs: self.clip_end_secs,
            has_cover_link,
            button_count,
        }
    }
}
