// 🏥 Healthcare - patients, prescriptions, lookup by patient id

use crate::entities::{Patient, Prescription};
use crate::error::{RecordError, RecordResult};
use crate::repository::{Identified, KeyedRepository};
use anyhow::Result;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::io::{BufRead, Write};
use tracing::debug;

/// Validate a typed-in patient id
///
/// Surrounding whitespace is ignored. Any 32-bit integer is accepted,
/// negatives included, and simply matches no patient. Anything else is
/// `InvalidValue`.
pub fn parse_patient_id(input: &str) -> RecordResult<i32> {
    let trimmed = input.trim();
    trimmed.parse::<i32>().map_err(|_| RecordError::InvalidValue {
        field: "patient id",
        value: trimmed.to_string(),
        reason: "Please enter a valid Patient ID.",
    })
}

#[derive(Default)]
pub struct HealthSystemApp {
    patients: KeyedRepository<Patient>,
    prescriptions: KeyedRepository<Prescription>,
    /// patient id -> prescriptions, rebuilt by `build_prescription_map`
    prescription_map: HashMap<u32, Vec<Prescription>>,
}

impl HealthSystemApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) -> RecordResult<()> {
        self.patients.add(patient)
    }

    /// Store a prescription; its patient must already be registered
    pub fn add_prescription(&mut self, prescription: Prescription) -> RecordResult<()> {
        if !self.patients.contains(&prescription.patient_id) {
            return Err(RecordError::NotFound {
                kind: Patient::KIND,
                id: prescription.patient_id.to_string(),
                context: "",
            });
        }
        self.prescriptions.add(prescription)
    }

    pub fn seed_data(&mut self) -> RecordResult<()> {
        self.add_patient(Patient::new(1, "Ama Mensah", 29, "Female"))?;
        self.add_patient(Patient::new(2, "Kwame Boateng", 42, "Male"))?;
        self.add_patient(Patient::new(3, "Akua Asante", 35, "Female"))?;

        let now = Utc::now();
        self.add_prescription(Prescription::new(101, 1, "Amoxicillin", now - Duration::days(5)))?;
        self.add_prescription(Prescription::new(102, 2, "Paracetamol", now - Duration::days(3)))?;
        self.add_prescription(Prescription::new(103, 1, "Ibuprofen", now - Duration::days(1)))?;
        self.add_prescription(Prescription::new(104, 3, "Vitamin C", now))?;
        self.add_prescription(Prescription::new(105, 2, "Cetirizine", now - Duration::days(2)))?;
        Ok(())
    }

    /// Group every stored prescription under its patient id
    pub fn build_prescription_map(&mut self) {
        self.prescription_map.clear();
        for prescription in self.prescriptions.iter() {
            self.prescription_map
                .entry(prescription.patient_id)
                .or_default()
                .push(prescription.clone());
        }
        debug!(patients = self.prescription_map.len(), "prescription map rebuilt");
    }

    /// Prescriptions for one patient in the order they were added
    ///
    /// Negative ids are never stored, so they always come back empty.
    pub fn prescriptions_for(&self, patient_id: i32) -> &[Prescription] {
        u32::try_from(patient_id)
            .ok()
            .and_then(|id| self.prescription_map.get(&id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn print_all_patients(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "\n=== All Patients ===")?;
        for patient in self.patients.iter() {
            writeln!(out, "{}", patient)?;
        }
        Ok(())
    }

    pub fn print_prescriptions_for_patient(&self, patient_id: i32, out: &mut impl Write) -> Result<()> {
        writeln!(out, "\n=== Prescriptions for Patient ID {} ===", patient_id)?;
        let prescriptions = self.prescriptions_for(patient_id);
        if prescriptions.is_empty() {
            writeln!(out, "No prescriptions found for this patient.")?;
        }
        for prescription in prescriptions {
            writeln!(out, "{}", prescription)?;
        }
        Ok(())
    }
}

/// Seed, list patients, then look up one patient's prescriptions
///
/// The id comes from `preset` when given, otherwise one line of `input`.
pub fn run(preset: Option<&str>, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut app = HealthSystemApp::new();
    app.seed_data()?;
    app.build_prescription_map();
    app.print_all_patients(out)?;

    let line = match preset {
        Some(value) => value.to_string(),
        None => {
            write!(out, "\nEnter Patient ID to view prescriptions: ")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };

    match parse_patient_id(&line) {
        Ok(patient_id) => app.print_prescriptions_for_patient(patient_id, out)?,
        Err(_) => writeln!(out, "Invalid input. Please enter a valid Patient ID.")?,
    }
    Ok(())
}
