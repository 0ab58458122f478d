//! Tempe Client - HTTP client for the tempe server
//!
//! Typed calls for every `/api` endpoint, a login session kept in a JSON
//! file, the stock-aware sale form and the page loaders.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod pages;
pub mod sale;
pub mod session;

pub use client::{Health, Me, TempeClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use sale::{DraftError, SaleDraft};
pub use session::{Session, SessionStore};
