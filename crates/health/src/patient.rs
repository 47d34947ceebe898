use serde::{Deserialize, Serialize};

use recordkeep_core::{Entity, numeric_id};

numeric_id! {
    pub struct PatientId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
    gender: Gender,
}

impl Patient {
    pub fn new(id: PatientId, name: impl Into<String>, age: u32, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

impl Entity for Patient {
    type Id = PatientId;
    const KIND: &'static str = "patient";

    fn id(&self) -> PatientId {
        self.id
    }
}

impl core::fmt::Display for Patient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            self.id, self.name, self.age, self.gender
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_all_fields() {
        let p = Patient::new(PatientId::new(2), "Jane Smith", 25, Gender::Female);
        assert_eq!(p.to_string(), "ID: 2, Name: Jane Smith, Age: 25, Gender: Female");
    }
}
