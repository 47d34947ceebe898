//! Health records service: patients, prescriptions and the per-patient index.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use recordkeep_core::{DomainResult, Entity, Presenter, Report, Repository};

use crate::patient::{Gender, Patient, PatientId};
use crate::prescription::{Prescription, PrescriptionId};

/// Owns the patient and prescription repositories.
///
/// The prescription index is derived data: it is built from the prescription
/// repository on demand and only stores ids, so the repository stays the
/// source of truth.
#[derive(Debug, Default)]
pub struct HealthSystem {
    patients: Repository<Patient>,
    prescriptions: Repository<Prescription>,
    by_patient: HashMap<PatientId, Vec<PrescriptionId>>,
}

impl HealthSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&self) -> &Repository<Patient> {
        &self.patients
    }

    pub fn prescriptions(&self) -> &Repository<Prescription> {
        &self.prescriptions
    }

    pub fn get_patient(&self, id: PatientId) -> DomainResult<&Patient> {
        self.patients.get_by_id(id)
    }

    pub fn add_patient(&mut self, patient: Patient, out: &mut dyn Presenter) -> Report {
        let target = format!("patient #{}", patient.id());
        let report = match self.patients.add(patient) {
            Ok(()) => Report::completed("add_patient", target, "registered"),
            Err(err) => Report::failed("add_patient", target, err),
        };
        report.publish(out)
    }

    pub fn add_prescription(&mut self, prescription: Prescription, out: &mut dyn Presenter) -> Report {
        let target = format!("prescription #{}", prescription.id());
        let report = match self.prescriptions.add(prescription) {
            Ok(()) => Report::completed("add_prescription", target, "recorded"),
            Err(err) => Report::failed("add_prescription", target, err),
        };
        report.publish(out)
    }

    /// Populate the fixed demo records. Dates are relative to `today`.
    ///
    /// Failed inserts are reported and skipped; only failures are returned.
    pub fn seed_data(&mut self, today: NaiveDate, out: &mut dyn Presenter) -> Vec<Report> {
        let patients = [
            Patient::new(PatientId::new(1), "John Doe", 30, Gender::Male),
            Patient::new(PatientId::new(2), "Jane Smith", 25, Gender::Female),
            Patient::new(PatientId::new(3), "Alice Brown", 40, Gender::Female),
        ];
        let prescriptions = [
            (101, 1, "Paracetamol", 5),
            (102, 1, "Ibuprofen", 2),
            (103, 2, "Amoxicillin", 10),
            (104, 3, "Cough Syrup", 1),
            (105, 2, "Vitamin C", 3),
        ]
        .map(|(id, patient, medication, days_ago)| {
            Prescription::new(
                PrescriptionId::new(id),
                PatientId::new(patient),
                medication,
                today - Days::new(days_ago),
            )
        });

        let mut failures = Vec::new();
        for patient in patients {
            let target = format!("patient #{}", patient.id());
            if let Err(err) = self.patients.add(patient) {
                failures.push(Report::failed("seed", target, err).publish(out));
            }
        }
        for prescription in prescriptions {
            let target = format!("prescription #{}", prescription.id());
            if let Err(err) = self.prescriptions.add(prescription) {
                failures.push(Report::failed("seed", target, err).publish(out));
            }
        }

        tracing::debug!(
            patients = self.patients.len(),
            prescriptions = self.prescriptions.len(),
            "health records seeded"
        );
        failures
    }

    /// Group prescriptions by patient, preserving repository order.
    ///
    /// Rebuilds from scratch, so calling it again after more prescriptions
    /// were added never duplicates entries.
    pub fn build_prescription_map(&mut self) {
        self.by_patient.clear();
        for prescription in self.prescriptions.iter() {
            self.by_patient
                .entry(prescription.patient_id())
                .or_default()
                .push(prescription.id());
        }
        tracing::debug!(patients = self.by_patient.len(), "prescription map built");
    }

    /// Prescriptions indexed for a patient, oldest insert first. Empty when the
    /// patient has none or the map has not been built.
    pub fn prescriptions_for(&self, patient_id: PatientId) -> Vec<&Prescription> {
        self.by_patient
            .get(&patient_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.prescriptions.get_by_id(*id).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn print_all_patients(&self, out: &mut dyn Presenter) {
        out.line("All Patients:");
        for patient in self.patients.iter() {
            out.line(&patient.to_string());
        }
    }

    pub fn print_prescriptions_for_patient(&self, patient_id: PatientId, out: &mut dyn Presenter) {
        let prescriptions = self.prescriptions_for(patient_id);
        if prescriptions.is_empty() {
            out.line(&format!("No prescriptions found for patient ID {patient_id}."));
            return;
        }
        out.section(&format!("Prescriptions for Patient ID {patient_id}:"));
        for prescription in prescriptions {
            out.line(&prescription.to_string());
        }
    }

    /// Seed, index, then list all patients and one patient's prescriptions.
    pub fn run_demo(&mut self, today: NaiveDate, patient_id: PatientId, out: &mut dyn Presenter) {
        self.seed_data(today, out);
        self.build_prescription_map();
        self.print_all_patients(out);
        self.print_prescriptions_for_patient(patient_id, out);
    }
}
