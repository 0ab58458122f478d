use std::net::SocketAddr;

use thiserror::Error;

use crate::utils::AppError;

/// Startup and serve failures; request errors use [`AppError`]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] AppError),

    #[error("Failed to prepare work dir {path}: {source}")]
    WorkDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to seed admin user: {0}")]
    Seed(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;
