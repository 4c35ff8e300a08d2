//! HTTP layer for the heroslide service.

pub mod config;
pub mod embed;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
