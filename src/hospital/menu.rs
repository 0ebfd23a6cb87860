//! Menu for the hospital tool (choices 0-9)

use crate::errors::{RecordError, Result};
use crate::hospital::models::{Doctor, Patient};
use crate::hospital::persistence::RecordStore;
use crate::hospital::registry::HospitalRegistry;
use crate::repl::{ask_field, DisplayManager, LineSource, Menu};

const ENTRIES: &[(&str, &str)] = &[
    ("1", "Add Patient"),
    ("2", "View Patients"),
    ("3", "Search Patient"),
    ("4", "Discharge Patient"),
    ("5", "Add Doctor"),
    ("6", "View Doctors"),
    ("7", "Assign Doctor to Patient"),
    ("8", "Save Records"),
    ("9", "Load Records"),
    ("0", "Exit"),
];

/// Hospital menu choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HospitalCommand {
    AddPatient,
    ViewPatients,
    SearchPatient,
    DischargePatient,
    AddDoctor,
    ViewDoctors,
    AssignDoctor,
    Save,
    Load,
    Exit,
    Invalid { input: String },
}

impl HospitalCommand {
    /// Exact match; the hospital tool takes answers as typed
    pub fn parse(choice: &str) -> Self {
        match choice {
            "1" => HospitalCommand::AddPatient,
            "2" => HospitalCommand::ViewPatients,
            "3" => HospitalCommand::SearchPatient,
            "4" => HospitalCommand::DischargePatient,
            "5" => HospitalCommand::AddDoctor,
            "6" => HospitalCommand::ViewDoctors,
            "7" => HospitalCommand::AssignDoctor,
            "8" => HospitalCommand::Save,
            "9" => HospitalCommand::Load,
            "0" => HospitalCommand::Exit,
            other => HospitalCommand::Invalid { input: other.to_string() },
        }
    }
}

/// Interactive front end over a `HospitalRegistry`
pub struct HospitalMenu {
    registry: HospitalRegistry,
    store: RecordStore,
}

impl HospitalMenu {
    pub fn new(registry: HospitalRegistry, store: RecordStore) -> Self {
        HospitalMenu { registry, store }
    }

    pub fn registry(&self) -> &HospitalRegistry {
        &self.registry
    }

    fn add_patient(&mut self, input: &mut dyn LineSource, display: &DisplayManager) -> Result<()> {
        display.show_section("--- Add Patient ---");
        let id = ask_field(input, "Enter Patient ID: ")?;
        let name = ask_field(input, "Enter Name: ")?;
        let age = ask_field(input, "Enter Age: ")?;
        let disease = ask_field(input, "Enter Disease: ")?;

        if self.registry.add_patient(Patient::new(id, name, age, disease)).is_some() {
            log::debug!("Replaced an existing patient record");
        }
        display.show_success("Patient added successfully.");
        Ok(())
    }

    fn view_patients(&self, display: &DisplayManager) {
        display.show_section("--- Patient List ---");
        if self.registry.patient_count() == 0 {
            display.show_info("No patient records found.");
            return;
        }

        display.show_info(&format!(
            "{:<10}{:<20}{:<10}{:<20}{:<15}{}",
            "ID", "Name", "Age", "Disease", "Status", "Doctor ID"
        ));
        display.show_rule(70);
        for p in self.registry.patients() {
            display.show_info(&format!(
                "{:<10}{:<20}{:<10}{:<20}{:<15}{}",
                p.patient_id,
                p.name,
                p.age,
                p.disease,
                p.status.to_string(),
                p.doctor_id.as_deref().unwrap_or("None")
            ));
        }
    }

    fn search_patient(&self, input: &mut dyn LineSource, display: &DisplayManager) -> Result<()> {
        let keyword = ask_field(input, "Enter patient ID or name: ")?;
        let found = self.registry.search_patients(&keyword);
        if found.is_empty() {
            display.show_info("No matching patient found.");
        }
        for patient in found {
            display.show_info(&patient.to_string());
        }
        Ok(())
    }

    fn discharge_patient(&mut self, input: &mut dyn LineSource, display: &DisplayManager) -> Result<()> {
        let id = ask_field(input, "Enter Patient ID to discharge: ")?;
        match self.registry.discharge_patient(&id) {
            Ok(()) => display.show_success("Patient discharged successfully."),
            Err(RecordError::PatientNotFound(_)) => display.show_warning("Invalid Patient ID."),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn add_doctor(&mut self, input: &mut dyn LineSource, display: &DisplayManager) -> Result<()> {
        display.show_section("--- Add Doctor ---");
        let id = ask_field(input, "Enter Doctor ID: ")?;
        let name = ask_field(input, "Enter Doctor Name: ")?;
        let specialization = ask_field(input, "Enter Specialization: ")?;

        self.registry.add_doctor(Doctor::new(id, name, specialization));
        display.show_success("Doctor added successfully.");
        Ok(())
    }

    fn view_doctors(&self, display: &DisplayManager) {
        display.show_section("--- Doctor List ---");
        if self.registry.doctor_count() == 0 {
            display.show_info("No doctor records available.");
            return;
        }

        display.show_info(&format!("{:<10}{:<20}{}", "ID", "Name", "Specialization"));
        display.show_rule(50);
        for d in self.registry.doctors() {
            display.show_info(&format!("{:<10}{:<20}{}", d.doctor_id, d.name, d.specialization));
        }
    }

    fn assign_doctor(&mut self, input: &mut dyn LineSource, display: &DisplayManager) -> Result<()> {
        let patient_id = ask_field(input, "Enter Patient ID: ")?;
        let doctor_id = ask_field(input, "Enter Doctor ID: ")?;
        self.registry.assign_doctor(&patient_id, &doctor_id)?;
        display.show_success("Doctor assigned successfully.");
        Ok(())
    }

    fn save(&self, display: &DisplayManager) -> Result<()> {
        self.store
            .save(&self.registry)
            .map_err(|e| RecordError::Generic(format!("Error saving file: {}", e)))?;
        display.show_success("Records saved successfully.");
        Ok(())
    }

    fn load(&mut self, display: &DisplayManager) -> Result<()> {
        match self.store.load() {
            Ok(registry) => {
                self.registry = registry;
                display.show_success("Records loaded successfully.");
                Ok(())
            }
            Err(RecordError::NoSavedRecords { .. }) => {
                display.show_info("No saved records found.");
                Ok(())
            }
            Err(e) => Err(RecordError::Generic(format!("Error loading data: {}", e))),
        }
    }
}

impl Menu for HospitalMenu {
    type Command = HospitalCommand;

    fn title(&self) -> &str {
        "Hospital Management System"
    }

    fn entries(&self) -> &[(&'static str, &'static str)] {
        ENTRIES
    }

    fn parse(&self, choice: &str) -> HospitalCommand {
        HospitalCommand::parse(choice)
    }

    fn execute(
        &mut self,
        command: HospitalCommand,
        input: &mut dyn LineSource,
        display: &DisplayManager,
    ) -> Result<bool> {
        match command {
            HospitalCommand::AddPatient => self.add_patient(input, display)?,
            HospitalCommand::ViewPatients => self.view_patients(display),
            HospitalCommand::SearchPatient => self.search_patient(input, display)?,
            HospitalCommand::DischargePatient => self.discharge_patient(input, display)?,
            HospitalCommand::AddDoctor => self.add_doctor(input, display)?,
            HospitalCommand::ViewDoctors => self.view_doctors(display),
            HospitalCommand::AssignDoctor => self.assign_doctor(input, display)?,
            HospitalCommand::Save => self.save(display)?,
            HospitalCommand::Load => self.load(display)?,
            HospitalCommand::Exit => {
                display.show_info("Goodbye.");
                return Ok(false);
            }
            HospitalCommand::Invalid { input } => {
                log::debug!("Rejected menu choice {:?}", input);
                display.show_warning("Invalid choice. Try again.");
            }
        }
        Ok(true)
    }
}
