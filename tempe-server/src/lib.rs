//! Tempe Server - production, sales and payroll bookkeeping for a tempe business
//!
//! # Overview
//!
//! - **Database** (`db`): SQLite through sqlx, embedded migrations
//! - **Auth** (`auth`): JWT bearer tokens + Argon2 passwords
//! - **HTTP API** (`api`): REST endpoints under `/api`
//! - **Ledger**: stock balances are folded from stored movements with
//!   `shared::ledger`; nothing derived is stored
//!
//! # Layout
//!
//! ```text
//! tempe-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, middleware, passwords
//! ├── services/      # router assembly
//! ├── api/           # routes and handlers
//! ├── utils/         # logging, dates, validation
//! └── db/            # pool and repositories
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::{build_app, build_router};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Security event log, routed to the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Start logging as configured (`RUST_LOG` overrides the level)
pub fn setup_environment(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
}
