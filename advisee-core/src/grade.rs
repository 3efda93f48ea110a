//! Enumerations exposed at the planner boundary
//!
//! - `Grade`: letter grades on a 4.3-max scale (blank is `Option::None`)
//! - `Status`: whether a course has been taken
//! - `Semester`: term names used on the declaration form

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

/// A recorded letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
    /// Pass
    #[serde(rename = "P")]
    P,
    /// Repeat
    #[serde(rename = "R")]
    R,
}

impl Grade {
    /// All grades in form order
    pub fn all() -> &'static [Grade] {
        &[
            Grade::APlus,
            Grade::A,
            Grade::AMinus,
            Grade::BPlus,
            Grade::B,
            Grade::BMinus,
            Grade::CPlus,
            Grade::C,
            Grade::CMinus,
            Grade::D,
            Grade::F,
            Grade::P,
            Grade::R,
        ]
    }

    /// Letter as printed on a transcript
    pub fn letter(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
            Grade::P => "P",
            Grade::R => "R",
        }
    }

    /// Grade points per credit
    pub fn points(&self) -> f64 {
        match self {
            Grade::APlus => 4.3,
            Grade::A => 4.0,
            Grade::AMinus => 3.7,
            Grade::BPlus => 3.3,
            Grade::B => 3.0,
            Grade::BMinus => 2.7,
            Grade::CPlus => 2.3,
            Grade::C => 2.0,
            Grade::CMinus => 1.7,
            Grade::D => 1.0,
            Grade::F | Grade::P | Grade::R => 0.0,
        }
    }

    /// Parse a grade, treating blank or unrecognized text as no grade
    pub fn parse_lenient(s: &str) -> Option<Grade> {
        s.parse().ok()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::str::FromStr for Grade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Grade::all()
            .iter()
            .copied()
            .find(|g| g.letter() == wanted)
            .ok_or_else(|| Error::Parse(format!("Unknown grade: {}", s)))
    }
}

/// Progress status of a course slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "Not Taken")]
    NotTaken,
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl Status {
    /// All statuses in form order
    pub fn all() -> &'static [Status] {
        &[Status::NotTaken, Status::Completed, Status::InProgress]
    }

    /// Label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            Status::NotTaken => "Not Taken",
            Status::Completed => "Completed",
            Status::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match normalized.as_str() {
            "nottaken" | "none" | "n" => Ok(Status::NotTaken),
            "completed" | "complete" | "done" | "c" => Ok(Status::Completed),
            "inprogress" | "progress" | "ip" | "i" => Ok(Status::InProgress),
            _ => Err(Error::Parse(format!("Unknown status: {}", s))),
        }
    }
}

/// Academic term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Semester {
    #[default]
    Fall,
    Winter,
    Spring,
    Summer,
}

impl Semester {
    pub fn all() -> &'static [Semester] {
        &[
            Semester::Fall,
            Semester::Winter,
            Semester::Spring,
            Semester::Summer,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Semester::Fall => "Fall",
            Semester::Winter => "Winter",
            Semester::Spring => "Spring",
            Semester::Summer => "Summer",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Semester {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fall" | "autumn" => Ok(Semester::Fall),
            "winter" => Ok(Semester::Winter),
            "spring" => Ok(Semester::Spring),
            "summer" => Ok(Semester::Summer),
            _ => Err(Error::Parse(format!("Unknown semester: {}", s))),
        }
    }
}
