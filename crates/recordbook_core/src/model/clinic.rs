//! Patient and prescription records.

use crate::model::record::Keyed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: i32, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl Keyed for Patient {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }
}

/// Prescription issued to one patient.
///
/// `patient_id` is a soft reference; nothing enforces that the patient exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i32,
    pub patient_id: i32,
    pub medication_name: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: i32,
        patient_id: i32,
        medication_name: impl Into<String>,
        date_issued: NaiveDate,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication_name: medication_name.into(),
            date_issued,
        }
    }
}

impl Keyed for Prescription {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }
}
