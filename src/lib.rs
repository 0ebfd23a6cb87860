//! recordkit - two small menu-driven record tools
//!
//! - **air**: load a CSV of air-quality readings, preview, filter by city,
//!   summarize AQI and chart a city's AQI trend
//! - **hospital**: manage patients and doctors, assign doctors, and save or
//!   load everything as one JSON file
//!
//! The tools share only the terminal plumbing (`repl`), configuration
//! (`cli`) and the error type.

pub mod errors;
pub mod cli;
pub mod repl;

pub mod air;
pub mod hospital;

// Re-export commonly used types
pub use errors::{RecordError, Result};
