//! Request handlers, grouped by resource.

pub mod slide;
pub mod slider;
