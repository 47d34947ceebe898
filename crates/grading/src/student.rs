use serde::{Deserialize, Serialize};

use recordkeep_core::{ValueObject, numeric_id};

numeric_id! {
    /// Student number as written in the grade input; may be negative.
    pub struct StudentId(i32);
}

/// Letter grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl ValueObject for Grade {}

impl Grade {
    /// 80+ is A, 70+ B, 60+ C, 50+ D, anything lower F.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 60 => Grade::C,
            s if s >= 50 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub full_name: String,
    pub score: i32,
}

impl Student {
    pub fn new(id: StudentId, full_name: impl Into<String>, score: i32) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// One report line, e.g. `Alice (ID: 1): Score = 85, Grade = A`.
    pub fn summary(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}
