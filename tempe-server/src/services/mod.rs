//! Services
//!
//! - [`app`] - router assembly and HTTP middleware stack

pub mod app;

pub use app::{build_app, build_router};
