//! Student result record and letter-grade classification.
//!
//! # Responsibility
//! - Hold one parsed student line.
//! - Map numeric scores onto letter grades.
//!
//! # Invariants
//! - Grade bands are inclusive and checked from highest to lowest:
//!   80-100 A, 70-79 B, 60-69 C, 50-59 D, anything else F.

use crate::model::record::Keyed;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Highest score accepted by the parser.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Classifies a score. Out-of-band values fall through to `F`.
    pub fn from_score(score: u32) -> Self {
        match score {
            80..=100 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub score: u32,
}

impl Student {
    pub fn new(id: i32, full_name: impl Into<String>, score: u32) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// Report line: `FullName (ID: <id>): Score = <score>, Grade = <grade>`.
    pub fn report_line(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

impl Keyed for Student {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }
}
