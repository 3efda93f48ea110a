//! Major requirement plans
//!
//! A plan is an ordered list of requirement sections, each an ordered list of
//! course slots. Slots are either fixed to a catalog course or open for the
//! student to fill in.

mod reference;

pub use reference::PlanStore;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// What a slot accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlotKind {
    /// A specific course
    Fixed { code: String },
    /// Any course the student supplies
    Open {
        /// Placeholder shown in the form (e.g. "ELEC1XXX")
        pattern: String,
        /// What kind of course belongs here
        label: String,
    },
}

/// One course line in a requirement section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSlot {
    pub kind: SlotKind,
    /// Nominal credit value
    pub credits: u32,
    /// Must be filled to satisfy the section
    pub required: bool,
}

impl RequirementSlot {
    pub fn fixed(code: impl Into<String>, credits: u32, required: bool) -> Self {
        Self {
            kind: SlotKind::Fixed { code: code.into() },
            credits,
            required,
        }
    }

    pub fn open(
        pattern: impl Into<String>,
        label: impl Into<String>,
        credits: u32,
        required: bool,
    ) -> Self {
        Self {
            kind: SlotKind::Open {
                pattern: pattern.into(),
                label: label.into(),
            },
            credits,
            required,
        }
    }

    /// Whether the student supplies the course code
    pub fn is_open(&self) -> bool {
        matches!(self.kind, SlotKind::Open { .. })
    }

    /// Code a fresh entry starts with: the fixed code, or blank
    pub fn default_code(&self) -> &str {
        match &self.kind {
            SlotKind::Fixed { code } => code,
            SlotKind::Open { .. } => "",
        }
    }

    /// Placeholder for open slots
    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            SlotKind::Fixed { .. } => None,
            SlotKind::Open { pattern, .. } => Some(pattern),
        }
    }
}

/// An ordered group of slots with a credit target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSection {
    pub name: String,
    pub required_credits: u32,
    pub slots: Vec<RequirementSlot>,
}

impl RequirementSection {
    /// Sum of nominal slot credits
    pub fn slot_credits(&self) -> u32 {
        self.slots.iter().map(|s| s.credits).sum()
    }

    pub fn slot(&self, index: usize) -> Result<&RequirementSlot> {
        self.slots.get(index).ok_or_else(|| Error::SlotOutOfRange {
            section: self.name.clone(),
            index,
            len: self.slots.len(),
        })
    }
}

/// Requirements for one major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorPlan {
    /// Short key (e.g. "BIOL")
    pub key: String,
    /// Display name (e.g. "BSc Biology Major")
    pub name: String,
    pub total_credits: u32,
    pub sections: Vec<RequirementSection>,
}

impl MajorPlan {
    /// Find a section by exact name
    pub fn section(&self, name: &str) -> Result<&RequirementSection> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| self.section_not_found(name))
    }

    /// Resolve a user-supplied section reference
    ///
    /// Accepts the exact name, a case-insensitive name, or a 1-based
    /// section number.
    pub fn resolve_section(&self, query: &str) -> Result<&RequirementSection> {
        let query = query.trim();
        if let Ok(section) = self.section(query) {
            return Ok(section);
        }

        if let Some(section) = self
            .sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(query))
        {
            return Ok(section);
        }

        query
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.sections.get(i))
            .ok_or_else(|| self.section_not_found(query))
    }

    /// Total number of slots across all sections
    pub fn slot_count(&self) -> usize {
        self.sections.iter().map(|s| s.slots.len()).sum()
    }

    /// Check the authored credit invariants
    ///
    /// Every section's slots must add up to its required credits, and the
    /// sections must add up to the plan total.
    pub fn validate(&self) -> Result<()> {
        for section in &self.sections {
            let sum = section.slot_credits();
            if sum != section.required_credits {
                return Err(Error::Validation(format!(
                    "{}: section '{}' slots add up to {} credits, expected {}",
                    self.key, section.name, sum, section.required_credits
                )));
            }
        }

        let sections_total: u32 = self.sections.iter().map(|s| s.required_credits).sum();
        if sections_total != self.total_credits {
            return Err(Error::Validation(format!(
                "{}: sections add up to {} credits, expected {}",
                self.key, sections_total, self.total_credits
            )));
        }

        Ok(())
    }

    fn section_not_found(&self, name: &str) -> Error {
        Error::SectionNotFound {
            major: self.key.clone(),
            section: name.to_string(),
        }
    }
}
