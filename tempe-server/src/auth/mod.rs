//! Authentication
//!
//! - [`JwtService`] - token issue and validation
//! - [`CurrentUser`] - the logged-in user
//! - [`require_auth`] - middleware guarding `/api/`
//! - [`password`] - argon2 hashing

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
