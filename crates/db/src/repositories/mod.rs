//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod slide_link_repo;
pub mod slide_repo;
pub mod slider_repo;

pub use slide_link_repo::SlideLinkRepo;
pub use slide_repo::SlideRepo;
pub use slider_repo::SliderRepo;
