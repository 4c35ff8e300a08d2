//! Pure domain logic for the heroslide service.
//!
//! This crate has zero internal dependencies so it can be used by both the
//! API/repository layer and any future worker or CLI tooling. It covers the
//! Swiper options builder, the slide visibility schedule, and slide
//! normalization/validation.

pub mod error;
pub mod options;
pub mod schedule;
pub mod slide;
pub mod types;
