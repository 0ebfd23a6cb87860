//! In-memory patient and doctor registries

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{RecordError, Result};
use crate::hospital::models::{Doctor, Patient};

/// Both registries; also the shape of the records file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalRegistry {
    patients: BTreeMap<String, Patient>,
    doctors: BTreeMap<String, Doctor>,
}

impl HospitalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the patient's ID. An existing entry is replaced whole.
    pub fn add_patient(&mut self, patient: Patient) -> Option<Patient> {
        self.patients.insert(patient.patient_id.clone(), patient)
    }

    /// Insert under the doctor's ID. An existing entry is replaced whole.
    pub fn add_doctor(&mut self, doctor: Doctor) -> Option<Doctor> {
        self.doctors.insert(doctor.doctor_id.clone(), doctor)
    }

    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    pub fn doctor(&self, doctor_id: &str) -> Option<&Doctor> {
        self.doctors.get(doctor_id)
    }

    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.doctors.values()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    /// Every patient whose ID or name contains `keyword`, ignoring case
    pub fn search_patients(&self, keyword: &str) -> Vec<&Patient> {
        self.patients.values().filter(|p| p.matches(keyword)).collect()
    }

    pub fn discharge_patient(&mut self, patient_id: &str) -> Result<()> {
        self.patient_mut(patient_id)?.discharge();
        Ok(())
    }

    /// Put a discharged patient back to `Admitted`
    pub fn readmit_patient(&mut self, patient_id: &str) -> Result<()> {
        self.patient_mut(patient_id)?.admit();
        Ok(())
    }

    /// Point a patient at a doctor. Both IDs must exist; on failure nothing
    /// changes.
    pub fn assign_doctor(&mut self, patient_id: &str, doctor_id: &str) -> Result<()> {
        if !self.patients.contains_key(patient_id) {
            return Err(RecordError::PatientNotFound(patient_id.to_string()));
        }
        if !self.doctors.contains_key(doctor_id) {
            return Err(RecordError::DoctorNotFound(doctor_id.to_string()));
        }
        self.patient_mut(patient_id)?.assign_doctor(doctor_id);
        Ok(())
    }

    fn patient_mut(&mut self, patient_id: &str) -> Result<&mut Patient> {
        self.patients
            .get_mut(patient_id)
            .ok_or_else(|| RecordError::PatientNotFound(patient_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hospital::models::PatientStatus;

    fn registry() -> HospitalRegistry {
        let mut registry = HospitalRegistry::new();
        registry.add_patient(Patient::new("P1", "Asha Verma", "34", "Flu"));
        registry.add_patient(Patient::new("P2", "Ravi Kumar", "50", "Asthma"));
        registry.add_doctor(Doctor::new("D1", "Dr. Rao", "Pulmonology"));
        registry
    }

    #[test]
    fn test_overwrite_replaces_fully() {
        let mut registry = registry();
        registry.assign_doctor("P1", "D1").unwrap();

        let previous = registry.add_patient(Patient::new("P1", "Meera", "61", "Fracture"));
        assert_eq!(previous.unwrap().name, "Asha Verma");

        let patient = registry.patient("P1").unwrap();
        assert_eq!(patient.name, "Meera");
        assert_eq!(patient.age, "61");
        assert_eq!(patient.disease, "Fracture");
        assert!(patient.doctor_id.is_none());
        assert_eq!(registry.patient_count(), 2);
    }

    #[test]
    fn test_search_unbounded() {
        let registry = registry();
        assert_eq!(registry.search_patients("p").len(), 2);
        assert_eq!(registry.search_patients("kumar").len(), 1);
        assert!(registry.search_patients("zzz").is_empty());
    }

    #[test]
    fn test_discharge() {
        let mut registry = registry();
        registry.discharge_patient("P2").unwrap();
        assert_eq!(registry.patient("P2").unwrap().status, PatientStatus::Discharged);

        assert!(matches!(
            registry.discharge_patient("P9"),
            Err(RecordError::PatientNotFound(_))
        ));
    }

    #[test]
    fn test_readmit() {
        let mut registry = registry();
        registry.discharge_patient("P1").unwrap();
        registry.readmit_patient("P1").unwrap();
        assert_eq!(registry.patient("P1").unwrap().status, PatientStatus::Admitted);
    }

    #[test]
    fn test_assign_doctor() {
        let mut registry = registry();
        registry.assign_doctor("P1", "D1").unwrap();
        assert_eq!(registry.patient("P1").unwrap().doctor_id.as_deref(), Some("D1"));
    }

    #[test]
    fn test_assign_missing_doctor_leaves_patient() {
        let mut registry = registry();
        registry.assign_doctor("P1", "D1").unwrap();

        let err = registry.assign_doctor("P1", "D9").unwrap_err();
        assert!(matches!(err, RecordError::DoctorNotFound(ref id) if id == "D9"));
        assert_eq!(registry.patient("P1").unwrap().doctor_id.as_deref(), Some("D1"));
    }

    #[test]
    fn test_assign_missing_patient() {
        let mut registry = registry();
        assert!(matches!(
            registry.assign_doctor("P9", "D1"),
            Err(RecordError::PatientNotFound(_))
        ));
    }

    #[test]
    fn test_document_shape() {
        let value = serde_json::to_value(registry()).unwrap();
        assert_eq!(value["patients"]["P1"]["name"], "Asha Verma");
        assert_eq!(value["doctors"]["D1"]["specialization"], "Pulmonology");
    }
}
