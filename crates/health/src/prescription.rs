use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recordkeep_core::{Entity, numeric_id};

use crate::patient::PatientId;

numeric_id! {
    pub struct PrescriptionId;
}

/// A medication issued to one patient. `patient_id` is a foreign key into the
/// patient repository; it is not checked on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    id: PrescriptionId,
    patient_id: PatientId,
    medication_name: String,
    date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: PrescriptionId,
        patient_id: PatientId,
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

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn medication_name(&self) -> &str {
        &self.medication_name
    }

    pub fn date_issued(&self) -> NaiveDate {
        self.date_issued
    }
}

impl Entity for Prescription {
    type Id = PrescriptionId;
    const KIND: &'static str = "prescription";

    fn id(&self) -> PrescriptionId {
        self.id
    }
}

impl core::fmt::Display for Prescription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Prescription ID: {}, Medication: {}, Date: {}",
            self.id,
            self.medication_name,
            self.date_issued.format("%Y-%m-%d")
        )
    }
}
