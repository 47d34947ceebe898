//! Health records domain module.
//!
//! Patients and prescriptions live in separate repositories; prescriptions are
//! additionally indexed by patient once both are seeded.

pub mod patient;
pub mod prescription;
pub mod system;

pub use patient::{Gender, Patient, PatientId};
pub use prescription::{Prescription, PrescriptionId};
pub use system::HealthSystem;
