// 🏥 Patient + Prescription Entities

use super::DISPLAY_DATE_FORMAT;
use crate::repository::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// PATIENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: u32, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Patient {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl Identified for Patient {
    type Id = u32;
    const KIND: &'static str = "Patient";

    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}, Age: {}, Gender: {})",
            self.name, self.id, self.age, self.gender
        )
    }
}

// ============================================================================
// PRESCRIPTION
// ============================================================================

/// A medication issued to one patient (foreign key: `patient_id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: u32,
    pub patient_id: u32,
    pub medication_name: String,
    pub date_issued: DateTime<Utc>,
}

impl Prescription {
    pub fn new(
        id: u32,
        patient_id: u32,
        medication_name: impl Into<String>,
        date_issued: DateTime<Utc>,
    ) -> Self {
        Prescription {
            id,
            patient_id,
            medication_name: medication_name.into(),
            date_issued,
        }
    }
}

impl Identified for Prescription {
    type Id = u32;
    const KIND: &'static str = "Prescription";

    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Issued: {})",
            self.medication_name,
            self.date_issued.format(DISPLAY_DATE_FORMAT)
        )
    }
}
