//! Unified application error type.
//! All modules (models, core, storage, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Bad user input. Recovered locally: the form stays open and the message is
/// shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a number, got '{raw}'")]
    NotANumber { field: &'static str, raw: String },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Workout input
    // ---------------------------
    #[error("Invalid workout: {0}")]
    Validation(#[from] ValidationError),

    #[error("Workout not recorded: {0}")]
    NotRecorded(String),

    // ---------------------------
    // Environment
    // ---------------------------
    #[error("Geolocation unavailable: {0}")]
    GeolocationUnavailable(String),

    #[error("Stored workouts are corrupt: {0}")]
    StorageCorrupt(String),

    // ---------------------------
    // Store invariants
    // ---------------------------
    #[error("Duplicate workout id: {0}")]
    DuplicateId(String),

    #[error("Workout not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
