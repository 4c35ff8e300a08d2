//! Slide link model.
//!
//! Rows store the cover-vs-button distinction in `kind`; the API surface
//! exposes them as the `CallToAction` tagged union from core.

use heroslide_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// `kind` column value for a cover link.
pub const KIND_COVER: &str = "cover";

/// `kind` column value for a button.
pub const KIND_BUTTON: &str = "button";

/// A row from the `slide_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SlideLink {
    pub id: DbId,
    pub slide_id: DbId,
    pub kind: String,
    pub label: String,
    pub url: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
}
