//! Patient and doctor records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Admission state of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PatientStatus {
    #[default]
    Admitted,
    Discharged,
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientStatus::Admitted => write!(f, "Admitted"),
            PatientStatus::Discharged => write!(f, "Discharged"),
        }
    }
}

/// A patient, keyed by `patient_id` in the registry.
///
/// `doctor_id` is a plain reference into the doctor registry; nothing keeps it
/// pointing at a doctor that still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub patient_id: String,
    /// As entered
    pub age: String,
    pub disease: String,
    pub status: PatientStatus,
    pub doctor_id: Option<String>,
}

impl Patient {
    /// New admitted patient with no doctor
    pub fn new(
        patient_id: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
        disease: impl Into<String>,
    ) -> Self {
        Patient {
            name: name.into(),
            patient_id: patient_id.into(),
            age: age.into(),
            disease: disease.into(),
            status: PatientStatus::Admitted,
            doctor_id: None,
        }
    }

    pub fn admit(&mut self) {
        self.status = PatientStatus::Admitted;
    }

    pub fn discharge(&mut self) {
        self.status = PatientStatus::Discharged;
    }

    pub fn assign_doctor(&mut self, doctor_id: impl Into<String>) {
        self.doctor_id = Some(doctor_id.into());
    }

    /// Case-insensitive substring match on ID or name
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.patient_id.to_lowercase().contains(&keyword)
            || self.name.to_lowercase().contains(&keyword)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.patient_id, self.name)
    }
}

/// A doctor, keyed by `doctor_id` in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub doctor_id: String,
    pub specialization: String,
}

impl Doctor {
    pub fn new(
        doctor_id: impl Into<String>,
        name: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Doctor {
            name: name.into(),
            doctor_id: doctor_id.into(),
            specialization: specialization.into(),
        }
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.doctor_id, self.name)
    }
}
