//! Patient lookup and prescription history use cases.
//!
//! # Responsibility
//! - Hold patients and prescriptions in permissive stores.
//! - Serve prescriptions per patient through a rebuilt secondary index.
//! - Resolve one line of user input into a selection outcome.
//!
//! # Invariants
//! - The prescription index always reflects the current prescription store;
//!   every write rebuilds it in full.
//! - `select_patient` performs no I/O.

use crate::model::clinic::{Patient, Prescription};
use crate::repo::record_store::RecordStore;
use crate::repo::secondary_index::SecondaryIndex;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SelectionResult = Result<Selection, SelectionError>;

/// Successful interpretation of one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Empty input or `q`.
    Quit,
    Found {
        patient: Patient,
        prescriptions: Vec<Prescription>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Input is neither a quit command nor an integer id.
    InvalidInput(String),
    /// Input parsed, but no such patient exists.
    UnknownPatient {
        id: i32,
        available: Vec<(i32, String)>,
    },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(input) => {
                write!(f, "Please enter a valid number for Patient ID (got `{input}`).")
            }
            Self::UnknownPatient { id, .. } => write!(f, "Patient with ID {id} does not exist."),
        }
    }
}

impl Error for SelectionError {}

#[derive(Default)]
pub struct ClinicService {
    patients: RecordStore<Patient>,
    prescriptions: RecordStore<Prescription>,
    by_patient: SecondaryIndex<i32, Prescription>,
}

impl ClinicService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    pub fn add_prescription(&mut self, prescription: Prescription) {
        self.prescriptions.push(prescription);
        self.rebuild_prescription_index();
    }

    /// Removes the first prescription with `id`; returns whether one existed.
    pub fn remove_prescription(&mut self, id: i32) -> bool {
        let removed = self.prescriptions.remove_by(|item| item.id == id);
        if removed {
            self.rebuild_prescription_index();
        }
        removed
    }

    /// Regroups every prescription by patient id.
    pub fn rebuild_prescription_index(&mut self) {
        self.by_patient =
            SecondaryIndex::build(self.prescriptions.iter().cloned(), |item| item.patient_id);
        debug!(
            "event=index_rebuild module=clinic status=ok prescriptions={} patients={}",
            self.prescriptions.len(),
            self.by_patient.len()
        );
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.get_all()
    }

    pub fn patient(&self, id: i32) -> Option<Patient> {
        self.patients.find(&id)
    }

    /// Prescriptions issued to `patient_id` in insertion order.
    pub fn prescriptions_for(&self, patient_id: i32) -> &[Prescription] {
        self.by_patient.get(&patient_id)
    }

    pub fn prescription_index(&self) -> &SecondaryIndex<i32, Prescription> {
        &self.by_patient
    }

    /// Interprets one line of user input.
    pub fn select_patient(&self, input: &str) -> SelectionResult {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") {
            return Ok(Selection::Quit);
        }

        let id = trimmed
            .parse::<i32>()
            .map_err(|_| SelectionError::InvalidInput(trimmed.to_string()))?;

        match self.patients.find(&id) {
            Some(patient) => {
                info!("event=patient_select module=clinic status=ok id={id}");
                Ok(Selection::Found {
                    prescriptions: self.prescriptions_for(id).to_vec(),
                    patient,
                })
            }
            None => {
                info!("event=patient_select module=clinic status=error error_code=unknown_patient id={id}");
                Err(SelectionError::UnknownPatient {
                    id,
                    available: self
                        .patients
                        .iter()
                        .map(|patient| (patient.id, patient.name.clone()))
                        .collect(),
                })
            }
        }
    }
}
