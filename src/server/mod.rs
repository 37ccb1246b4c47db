//! HTTP server: router assembly and shared handler state

pub mod router;

pub use router::{AppState, build_router};
