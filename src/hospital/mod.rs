//! Hospital Patient Management System
//!
//! Patients and doctors live in registries keyed by their IDs and are saved
//! to, or loaded from, a single JSON file on request.

pub mod menu;
pub mod models;
pub mod persistence;
pub mod registry;

pub use menu::{HospitalCommand, HospitalMenu};
pub use models::{Doctor, Patient, PatientStatus};
pub use persistence::{RecordStore, DEFAULT_RECORDS_FILE};
pub use registry::HospitalRegistry;
