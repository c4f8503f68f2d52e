//! Error types.
//!
//! # Classification
//! - `DecodeError`: malformed or missing snapshot/payload. Always recovered
//!   locally by substituting a safe default.
//! - `StoreError`, `SurfaceError`, `NotificationError`: a port failed.
//! - `DispatchError`: the relay or renderer could not finish a write/render.
//!   Logged and swallowed at the host-facing boundary.
//!
//! Losing a concurrent whole-snapshot write is not an error; it is the
//! consistency model (last writer wins).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("snapshot is empty")]
    Empty,

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid store key '{0}'")]
    InvalidKey(String),

    #[error("store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("surface view could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("surface {0} is not placed")]
    NotPlaced(String),

    #[error("surface host lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification host rejected request: {0}")]
    Rejected(String),

    #[error("no client with id '{0}'")]
    UnknownClient(String),

    #[error("notification host lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("store: {0}")]
    Store(#[from] StoreError),

    #[error("decode: {0}")]
    Decode(#[from] DecodeError),

    #[error("surface: {0}")]
    Surface(#[from] SurfaceError),
}
