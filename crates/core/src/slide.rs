//! Slide normalization and validation.
//!
//! Normalization (opacity clamping, CSS alpha conversion) is applied
//! silently on every write. Validation collects human-readable messages
//! into a [`ValidationResult`]; any message blocks the write and is
//! surfaced to the editor rather than raised as a fault.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Closed enums
// ---------------------------------------------------------------------------

/// Slide content theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CoreError::Validation(format!(
                "Invalid theme '{other}'. Must be one of: light, dark"
            ))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content block alignment within the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }
}

impl FromStr for Alignment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            "center" => Ok(Alignment::Center),
            other => Err(CoreError::Validation(format!(
                "Invalid alignment '{other}'. Must be one of: left, right, center"
            ))),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slide media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl FromStr for MediaType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            other => Err(CoreError::Validation(format!(
                "Invalid media type '{other}'. Must be one of: image, video"
            ))),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Call to action
// ---------------------------------------------------------------------------

/// A labelled link attached to a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub label: String,
    pub url: String,
}

/// A slide's call-to-action surface.
///
/// A slide carries either a single cover link wrapping the whole slide or a
/// list of buttons, never both. The tagged union makes the exclusivity
/// structural on the write path instead of a post-hoc check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CallToAction {
    #[default]
    None,
    Cover { link: LinkRef },
    Buttons { buttons: Vec<LinkRef> },
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Clamp an overlay opacity percentage to [0, 100]. Applied on every write,
/// regardless of input magnitude or sign.
pub fn clamp_overlay_opacity(value: i32) -> i32 {
    value.clamp(0, 100)
}

/// Convert a stored overlay opacity percentage to a CSS alpha string:
/// clamp to [0, 100], divide by 100, round to two decimals (70 -> "0.7").
pub fn overlay_opacity_css(value: i32) -> String {
    let alpha = f64::from(clamp_overlay_opacity(value)) / 100.0;
    let rounded = (alpha * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Mobile image path with desktop fallback: when no mobile image is set,
/// the desktop image is used.
pub fn mobile_image_or_fallback<'a>(
    image: Option<&'a str>,
    mobile_image: Option<&'a str>,
) -> Option<&'a str> {
    mobile_image.filter(|p| !p.is_empty()).or(image)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Outcome of validating a slide write. Any collected message blocks the
/// write; an empty list means the slide is acceptable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// The fields of a slide write that validation inspects.
#[derive(Debug, Clone, Copy)]
pub struct SlideCheck<'a> {
    pub media_type: MediaType,
    pub image_path: Option<&'a str>,
    pub video_mp4_path: Option<&'a str>,
    pub video_webm_path: Option<&'a str>,
    pub clip_start_secs: Option<f64>,
    pub clip_end_secs: Option<f64>,
    pub has_cover_link: bool,
    pub button_count: usize,
}

fn is_set(path: Option<&str>) -> bool {
    path.is_some_and(|p| !p.is_empty())
}

/// Validate a slide write, collecting every violation.
///
/// - A cover link and buttons must not be present together.
/// - Image slides need an image; video slides need at least one of the
///   MP4/WebM sources.
/// - A clip range with the end before the start is rejected (unlike the
///   date window, which is silently corrected on write).
pub fn validate_slide(check: &SlideCheck<'_>) -> ValidationResult {
    let mut errors = Vec::new();

    if check.has_cover_link && check.button_count > 0 {
        errors.push(
            "A slide can have either a cover link or buttons, not both".to_string(),
        );
    }

    match check.media_type {
        MediaType::Image => {
            if !is_set(check.image_path) {
                errors.push("An image slide requires an image".to_string());
            }
        }
        MediaType::Video => {
            if !is_set(check.video_mp4_path) && !is_set(check.video_webm_path) {
                errors.push(
                    "A video slide requires at least one of an MP4 or WebM source".to_string(),
                );
            }
        }
    }

    if let (Some(start), Some(end)) = (check.clip_start_secs, check.clip_end_secs) {
        if end < start {
            errors.push(format!(
                "Video clip end ({end}s) must not precede clip start ({start}s)"
            ));
        }
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn image_check() -> SlideCheck<'static> {
        SlideCheck {
            media_type: MediaType::Image,
            image_path: Some("slides/hero.jpg"),
            video_mp4_path: None,
            video_webm_path: None,
            clip_start_secs: None,
            clip_end_secs: None,
            has_cover_link: false,
            button_count: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Enum parsing
    // -----------------------------------------------------------------------

    #[test]
    fn theme_round_trips() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_matches!("blue".parse::<Theme>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn alignment_round_trips() {
        assert_eq!("center".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_matches!("middle".parse::<Alignment>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn media_type_round_trips() {
        assert_eq!("video".parse::<MediaType>().unwrap(), MediaType::Video);
        assert_matches!("audio".parse::<MediaType>(), Err(CoreError::Validation(_)));
    }

    // -----------------------------------------------------------------------
    // Opacity
    // -----------------------------------------------------------------------

    #[test]
    fn opacity_clamped_on_both_ends() {
        assert_eq!(clamp_overlay_opacity(-10), 0);
        assert_eq!(clamp_overlay_opacity(150), 100);
        assert_eq!(clamp_overlay_opacity(42), 42);
    }

    #[test]
    fn opacity_css_conversion() {
        assert_eq!(overlay_opacity_css(70), "0.7");
        assert_eq!(overlay_opacity_css(75), "0.75");
        assert_eq!(overlay_opacity_css(0), "0");
        assert_eq!(overlay_opacity_css(100), "1");
        assert_eq!(overlay_opacity_css(150), "1");
        assert_eq!(overlay_opacity_css(-10), "0");
    }

    // -----------------------------------------------------------------------
    // Image fallback
    // -----------------------------------------------------------------------

    #[test]
    fn mobile_image_falls_back_to_desktop() {
        assert_eq!(
            mobile_image_or_fallback(Some("desktop.jpg"), None),
            Some("desktop.jpg")
        );
        assert_eq!(
            mobile_image_or_fallback(Some("desktop.jpg"), Some("")),
            Some("desktop.jpg")
        );
        assert_eq!(
            mobile_image_or_fallback(Some("desktop.jpg"), Some("mobile.jpg")),
            Some("mobile.jpg")
        );
        assert_eq!(mobile_image_or_fallback(None, None), None);
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    #[test]
    fn valid_image_slide_passes() {
        let result = validate_slide(&image_check());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn cover_link_and_buttons_conflict() {
        let check = SlideCheck {
            has_cover_link: true,
            button_count: 2,
            ..image_check()
        };
        let result = validate_slide(&check);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("cover link")));
    }

    #[test]
    fn cover_link_alone_passes() {
        let check = SlideCheck {
            has_cover_link: true,
            ..image_check()
        };
        assert!(validate_slide(&check).is_valid);
    }

    #[test]
    fn neither_cover_nor_buttons_passes() {
        assert!(validate_slide(&image_check()).is_valid);
    }

    #[test]
    fn image_slide_without_image_rejected() {
        let check = SlideCheck {
            image_path: None,
            ..image_check()
        };
        let result = validate_slide(&check);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn empty_image_path_counts_as_unset() {
        let check = SlideCheck {
            image_path: Some(""),
            ..image_check()
        };
        assert!(!validate_slide(&check).is_valid);
    }

    #[test]
    fn video_slide_requires_a_source() {
        let check = SlideCheck {
            media_type: MediaType::Video,
            image_path: None,
            ..image_check()
        };
        assert!(!validate_slide(&check).is_valid);

        let with_mp4 = SlideCheck {
            video_mp4_path: Some("slides/hero.mp4"),
            ..check
        };
        assert!(validate_slide(&with_mp4).is_valid);

        let with_webm = SlideCheck {
            video_webm_path: Some("slides/hero.webm"),
            ..check
        };
        assert!(validate_slide(&with_webm).is_valid);
    }

    #[test]
    fn inverted_clip_range_rejected() {
        let check = SlideCheck {
            media_type: MediaType::Video,
            video_mp4_path: Some("slides/hero.mp4"),
            image_path: None,
            clip_start_secs: Some(12.0),
            clip_end_secs: Some(4.0),
            ..image_check()
        };
        let result = validate_slide(&check);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("clip")));
    }

    #[test]
    fn equal_clip_boundaries_accepted() {
        let check = SlideCheck {
            media_type: MediaType::Video,
            video_mp4_path: Some("slides/hero.mp4"),
            image_path: None,
            clip_start_secs: Some(5.0),
            clip_end_secs: Some(5.0),
            ..image_check()
        };
        assert!(validate_slide(&check).is_valid);
    }

    #[test]
    fn multiple_violations_all_reported() {
        let check = SlideCheck {
            media_type: MediaType::Video,
            image_path: None,
            video_mp4_path: None,
            video_webm_path: None,
            clip_start_secs: Some(10.0),
            clip_end_secs: Some(1.0),
            has_cover_link: true,
            button_count: 1,
        };
        let result = validate_slide(&check);
        assert_eq!(result.errors.len(), 3);
    }
}
