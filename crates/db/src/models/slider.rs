//! Slider configuration model and DTOs.

use heroslide_core::options::{Effect, SliderSettings};
use heroslide_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sliders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slider {
    pub id: DbId,
    pub page_id: DbId,
    pub effect: String,
    #[serde(rename = "loop")]
    pub loop_enabled: bool,
    pub speed: i32,
    pub pagination: bool,
    pub navigation: bool,
    pub scrollbar: bool,
    #[serde(rename = "lazy")]
    pub lazy_loading: bool,
    pub autoplay: bool,
    pub autoplay_delay: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Slider {
    /// View of the row as plain settings for the options builder. A legacy
    /// blank effect column degrades to the default effect here.
    pub fn settings(&self) -> SliderSettings {
        SliderSettings {
            effect: Effect::from_stored(&self.effect),
            loop_enabled: self.loop_enabled,
            speed: self.speed,
            pagination: self.pagination,
            navigation: self.navigation,
            scrollbar: self.scrollbar,
            lazy: self.lazy_loading,
            autoplay: self.autoplay,
            autoplay_delay: self.autoplay_delay,
        }
    }
}

/// DTO for the slider upsert. Absent fields fall back to creation defaults
/// on insert and keep their stored value on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SliderInput {
    pub effect: Option<String>,
    #[serde(rename = "loop")]
    pub loop_enabled: Option<bool>,
    pub speed: Option<i32>,
    pub pagination: Option<bool>,
    pub navigation: Option<bool>,
    pub scrollbar: Option<bool>,
    #[serde(rename = "lazy")]
    pub lazy_loading: Option<bool>,
    pub autoplay: Option<bool>,
    pub autoplay_delay: Option<i32>,
}
