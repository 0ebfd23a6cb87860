//! Records file persistence
//!
//! The whole registry is one pretty-printed JSON document. Saving overwrites
//! it; loading builds a fresh registry or fails without side effects.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{RecordError, Result};
use crate::hospital::registry::HospitalRegistry;

/// Default records file name, relative to the working directory
pub const DEFAULT_RECORDS_FILE: &str = "hospital_records.json";

/// Reads and writes the hospital records file
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `registry` to disk, replacing any previous file
    pub fn save(&self, registry: &HospitalRegistry) -> Result<()> {
        let json = serde_json::to_string_pretty(registry)?;
        fs::write(&self.path, json)?;

        log::info!(
            "Saved {} patient(s) and {} doctor(s) to {}",
            registry.patient_count(),
            registry.doctor_count(),
            self.path.display()
        );
        Ok(())
    }

    /// Read a registry back from disk
    pub fn load(&self) -> Result<HospitalRegistry> {
        if !self.path.exists() {
            return Err(RecordError::NoSavedRecords {
                path: self.path.clone(),
            });
        }

        let json = fs::read_to_string(&self.path)?;
        let registry: HospitalRegistry = serde_json::from_str(&json)?;

        log::info!(
            "Loaded {} patient(s) and {} doctor(s) from {}",
            registry.patient_count(),
            registry.doctor_count(),
            self.path.display()
        );
        Ok(registry)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_RECORDS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hospital::models::{Doctor, Patient};
    use tempfile::TempDir;

    fn create_test_store() -> (RecordStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join(DEFAULT_RECORDS_FILE));
        (store, temp_dir)
    }

    #[test]
    fn test_missing_file() {
        let (store, _temp) = create_test_store();
        assert!(matches!(store.load(), Err(RecordError::NoSavedRecords { .. })));
    }

    #[test]
    fn test_save_overwrites() {
        let (store, _temp) = create_test_store();
        let mut registry = HospitalRegistry::new();
        registry.add_patient(Patient::new("P1", "Asha", "34", "Flu"));
        store.save(&registry).unwrap();

        store.save(&HospitalRegistry::new()).unwrap();
        assert_eq!(store.load().unwrap().patient_count(), 0);
    }

    #[test]
    fn test_saved_file_is_indented() {
        let (store, _temp) = create_test_store();
        let mut registry = HospitalRegistry::new();
        registry.add_doctor(Doctor::new("D1", "Dr. Rao", "ENT"));
        store.save(&registry).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\n  \"doctors\""));
    }

    #[test]
    fn test_malformed_json() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load(), Err(RecordError::Serialization(_))));
    }

    #[test]
    fn test_missing_section_rejected() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), r#"{"patients": {}}"#).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_loads_hand_written_file() {
        let (store, _temp) = create_test_store();
        let json = r#"{
            "patients": {
                "P1": {"name": "Asha", "patient_id": "P1", "age": "34",
                       "disease": "Flu", "status": "Discharged", "doctor_id": null}
            },
            "doctors": {
                "D1": {"name": "Dr. Rao", "doctor_id": "D1", "specialization": "ENT"}
            }
        }"#;
        fs::write(store.path(), json).unwrap();

        let registry = store.load().unwrap();
        assert_eq!(registry.patient("P1").unwrap().name, "Asha");
        assert_eq!(registry.doctor("D1").unwrap().specialization, "ENT");
    }
}
