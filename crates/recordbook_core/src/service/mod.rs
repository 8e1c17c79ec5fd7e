//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, storage and parsing calls per exercise.
//! - Keep the CLI decoupled from storage and parsing details.

pub mod clinic_service;
pub mod finance_service;
pub mod grading_service;
pub mod inventory_service;
pub mod warehouse_service;
