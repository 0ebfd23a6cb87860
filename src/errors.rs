//! Error types for recordkit
//!
//! One enum covers both tools. Menu loops print these and carry on, so every
//! variant's message is written for the person at the keyboard.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the record tools
#[derive(Error, Debug)]
pub enum RecordError {
    /// Query attempted before any CSV was loaded
    #[error("Load data first.")]
    NoData,

    /// Path resolution exhausted every candidate location
    #[error("File not found (tried {} location(s))", .attempts.len())]
    FileNotFound { attempts: Vec<PathBuf> },

    /// No rows matched the requested city
    #[error("City not found.")]
    CityNotFound { city: String },

    /// AQI summary found nothing numeric to aggregate
    #[error("No AQI numeric values found in data.")]
    NoNumericValues,

    /// One or more AQI cells could not be parsed as integers
    #[error("AQI values could not be converted to int: {invalid} malformed value(s), first was {first:?}")]
    InvalidAqi { invalid: usize, first: String },

    /// Lookup by patient ID failed
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// Lookup by doctor ID failed
    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    /// Load requested but the records file does not exist
    #[error("No saved records found.")]
    NoSavedRecords { path: PathBuf },

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Input ended (Ctrl-C, Ctrl-D or EOF) while a field was being asked
    #[error("Input closed")]
    InputClosed,

    /// Console input errors
    #[error("Input error: {0}")]
    Input(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for record operations
pub type Result<T> = std::result::Result<T, RecordError>;

/// Convert anyhow errors to RecordError
impl From<anyhow::Error> for RecordError {
    fn from(err: anyhow::Error) -> Self {
        RecordError::Generic(err.to_string())
    }
}
