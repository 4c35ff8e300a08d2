//! Swiper options builder.
//!
//! Turns a slider's stored settings into the options object consumed by the
//! Swiper client library. Pure and total: every input produces a valid
//! options object, with documented fallbacks for zero/empty values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Transition speed fallback (ms) when the stored value is zero or negative.
pub const DEFAULT_SPEED_MS: i32 = 600;

/// Autoplay delay fallback (ms) when the stored value is zero or negative.
pub const DEFAULT_AUTOPLAY_DELAY_MS: i32 = 5000;

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// Transition effect. Closed set; out-of-set values are rejected at the API
/// boundary rather than passed through to the client library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    #[default]
    Slide,
    Fade,
    Coverflow,
    Flip,
    Cube,
    Creative,
    Cards,
}

impl Effect {
    pub const ALL: &'static [Effect] = &[
        Effect::Slide,
        Effect::Fade,
        Effect::Coverflow,
        Effect::Flip,
        Effect::Cube,
        Effect::Creative,
        Effect::Cards,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Effect::Slide => "slide",
            Effect::Fade => "fade",
            Effect::Coverflow => "coverflow",
            Effect::Flip => "flip",
            Effect::Cube => "cube",
            Effect::Creative => "creative",
            Effect::Cards => "cards",
        }
    }

    /// Lenient parse for values read back from storage: an empty string maps
    /// to the default effect instead of failing, so a legacy blank column
    /// still renders a working slider.
    pub fn from_stored(s: &str) -> Effect {
        if s.is_empty() {
            Effect::default()
        } else {
            s.parse().unwrap_or_default()
        }
    }
}

impl FromStr for Effect {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slide" => Ok(Effect::Slide),
            "fade" => Ok(Effect::Fade),
            "coverflow" => Ok(Effect::Coverflow),
            "flip" => Ok(Effect::Flip),
            "cube" => Ok(Effect::Cube),
            "creative" => Ok(Effect::Creative),
            "cards" => Ok(Effect::Cards),
            other => Err(CoreError::Validation(format!(
                "Invalid effect '{other}'. Must be one of: slide, fade, coverflow, flip, cube, creative, cards"
            ))),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// A slider's stored settings, independent of any storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderSettings {
    pub effect: Effect,
    pub loop_enabled: bool,
    pub speed: i32,
    pub pagination: bool,
    pub navigation: bool,
    pub scrollbar: bool,
    pub lazy: bool,
    pub autoplay: bool,
    pub autoplay_delay: i32,
}

impl Default for SliderSettings {
    /// Creation-time defaults. Applied once when a slider is created, never
    /// re-applied on subsequent edits.
    fn default() -> Self {
        Self {
            effect: Effect::Slide,
            loop_enabled: true,
            speed: DEFAULT_SPEED_MS,
            pagination: true,
            navigation: true,
            scrollbar: false,
            lazy: false,
            autoplay: true,
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY_MS,
        }
    }
}

// ---------------------------------------------------------------------------
// Options object
// ---------------------------------------------------------------------------

/// The options object handed to `new Swiper(el, options)`.
///
/// Optional groups serialize only when their feature flag is enabled. Key
/// order is not part of the contract; the consumer treats this as a plain
/// options object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwiperOptions {
    pub effect: Effect,
    #[serde(rename = "loop")]
    pub loop_enabled: bool,
    pub speed: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollbar: Option<ScrollbarOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<AutoplayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy: Option<LazyOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    pub el: String,
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationOptions {
    pub next_el: String,
    pub prev_el: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbarOptions {
    pub el: String,
    pub hide: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoplayOptions {
    pub delay: i32,
    pub disable_on_interaction: bool,
    pub pause_on_mouse_enter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LazyOptions {
    pub preload_images: bool,
    pub load_prev_next: bool,
    pub load_on_transition_start: bool,
}

/// Build the Swiper options object from stored settings.
///
/// `effect`, `loop` and `speed` are always present; each optional group is
/// present iff its flag is enabled. Zero/negative `speed` and
/// `autoplay_delay` fall back to their documented defaults.
pub fn build_options(settings: &SliderSettings) -> SwiperOptions {
    SwiperOptions {
        effect: settings.effect,
        loop_enabled: settings.loop_enabled,
        speed: if settings.speed > 0 {
            settings.speed
        } else {
            DEFAULT_SPEED_MS
        },
        pagination: settings.pagination.then(|| PaginationOptions {
            el: ".swiper-pagination".to_string(),
            clickable: true,
        }),
        navigation: settings.navigation.then(|| NavigationOptions {
            next_el: ".swiper-button-next".to_string(),
            prev_el: ".swiper-button-prev".to_string(),
        }),
        scrollbar: settings.scrollbar.then(|| ScrollbarOptions {
            el: ".swiper-scrollbar".to_string(),
            hide: false,
        }),
        autoplay: settings.autoplay.then(|| AutoplayOptions {
            delay: if settings.autoplay_delay > 0 {
                settings.autoplay_delay
            } else {
                DEFAULT_AUTOPLAY_DELAY_MS
            },
            disable_on_interaction: false,
            pause_on_mouse_enter: true,
        }),
        lazy: settings.lazy.then(|| LazyOptions {
            preload_images: false,
            load_prev_next: true,
            load_on_transition_start: true,
        }),
    }
}

/// Serialize the options object for template injection.
///
/// serde_json leaves `/` unescaped, so selector strings render verbatim.
pub fn options_json(settings: &SliderSettings) -> String {
    serde_json::to_string(&build_options(settings))
        .unwrap_or_else(|_| "{}".to_string())
}
