//! Planner session state
//!
//! A `SessionState` owns everything a student edits during planning: the
//! selected major, one `CourseEntry` per touched slot and the student's
//! details. It is passed explicitly to the calculator and renderers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::grade::{Grade, Status};
use crate::plan::{MajorPlan, PlanStore, RequirementSlot, SlotKind};
use crate::student::StudentInfo;
use crate::{Error, Result};

/// How course entries are shared between majors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EntryScope {
    /// Entries are keyed by section name and slot index only, so majors with
    /// the same section names see each other's entries
    #[default]
    Shared,
    /// Entries are also keyed by major
    PerMajor,
}

impl EntryScope {
    pub fn name(&self) -> &'static str {
        match self {
            EntryScope::Shared => "shared",
            EntryScope::PerMajor => "per-major",
        }
    }
}

impl fmt::Display for EntryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for EntryScope {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "shared" => Ok(EntryScope::Shared),
            "per-major" | "major" | "isolated" => Ok(EntryScope::PerMajor),
            _ => Err(Error::Parse(format!("Unknown entry scope: {}", s))),
        }
    }
}

/// Identifies one slot's entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    /// Major key under `EntryScope::PerMajor`, `None` when shared
    pub major: Option<String>,
    pub section: String,
    pub index: usize,
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.major {
            Some(major) => write!(f, "{}/{}_{}", major, self.section, self.index),
            None => write!(f, "{}_{}", self.section, self.index),
        }
    }
}

/// What the student has recorded for one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Course code, blank until supplied for open slots
    pub code: String,
    pub credits: u32,
    /// `None` is a blank grade
    pub grade: Option<Grade>,
    pub status: Status,
}

impl CourseEntry {
    /// A fresh entry with the slot's defaults
    pub fn for_slot(slot: &RequirementSlot) -> Self {
        Self {
            code: slot.default_code().to_string(),
            credits: slot.credits,
            grade: None,
            status: Status::NotTaken,
        }
    }

    /// Completed with a recorded grade
    pub fn is_earned(&self) -> bool {
        self.status == Status::Completed && self.grade.is_some()
    }
}

/// Optional edits to apply to a `CourseEntry`
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub code: Option<String>,
    pub credits: Option<u32>,
    /// `Some(None)` clears the grade
    pub grade: Option<Option<Grade>>,
    pub status: Option<Status>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.credits.is_none() && self.grade.is_none() && self.status.is_none()
    }
}

/// Read access to course entries by plan position
///
/// The calculator and row builder only need this view, so they can be
/// driven by anything that can resolve a slot to an entry.
pub trait EntrySource {
    fn entry_at(&self, major: &str, section: &str, index: usize) -> Option<&CourseEntry>;
}

/// One student's planning session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    major: Option<String>,
    /// Comes from config on every load
    #[serde(skip)]
    scope: EntryScope,
    #[serde(default, with = "entry_list")]
    entries: BTreeMap<SlotKey, CourseEntry>,
    #[serde(default)]
    student: StudentInfo,
}

impl SessionState {
    pub fn new(scope: EntryScope) -> Self {
        Self {
            scope,
            ..Default::default()
        }
    }

    pub fn scope(&self) -> EntryScope {
        self.scope
    }

    /// Change how entries are keyed. Entries stored under the other scope
    /// stay in the session but are not visible until switched back.
    pub fn set_scope(&mut self, scope: EntryScope) {
        if self.scope != scope {
            tracing::info!(from = %self.scope, to = %scope, "Entry scope changed");
            self.scope = scope;
        }
    }

    /// Key of the selected major, if any
    pub fn selected_major(&self) -> Option<&str> {
        self.major.as_deref()
    }

    /// Select the active major. An unknown key leaves the selection unchanged.
    ///
    /// Existing entries are kept.
    pub fn select_major<'a>(&mut self, key: &str, store: &'a PlanStore) -> Result<&'a MajorPlan> {
        let plan = store.get_plan(key)?;
        tracing::info!(major = %plan.key, previous = ?self.major, "Major selected");
        self.major = Some(plan.key.clone());
        Ok(plan)
    }

    pub fn clear_major(&mut self) {
        self.major = None;
    }

    /// Plan of the selected major
    pub fn selected_plan<'a>(&self, store: &'a PlanStore) -> Result<Option<&'a MajorPlan>> {
        self.major.as_deref().map(|k| store.get_plan(k)).transpose()
    }

    /// Plan of the selected major, failing when none is selected
    pub fn require_plan<'a>(&self, store: &'a PlanStore) -> Result<&'a MajorPlan> {
        self.selected_plan(store)?.ok_or(Error::NoMajorSelected)
    }

    pub fn slot_key(&self, major: &str, section: &str, index: usize) -> SlotKey {
        SlotKey {
            major: match self.scope {
                EntryScope::Shared => None,
                EntryScope::PerMajor => Some(major.to_string()),
            },
            section: section.to_string(),
            index,
        }
    }

    pub fn entry(&self, key: &SlotKey) -> Option<&CourseEntry> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&SlotKey, &CourseEntry)> {
        self.entries.iter()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entry for a slot, created with slot defaults on first access
    pub fn entry_or_default(
        &mut self,
        plan: &MajorPlan,
        section: &str,
        index: usize,
    ) -> Result<&mut CourseEntry> {
        let slot = plan.section(section)?.slot(index)?;
        let key = self.slot_key(&plan.key, section, index);

        let entry = self.entries.entry(key).or_insert_with_key(|key| {
            tracing::debug!(slot = %key, "Creating course entry");
            CourseEntry::for_slot(slot)
        });

        // Fixed slots always carry their own code, even if the entry was
        // first created under another major's plan.
        if let SlotKind::Fixed { code } = &slot.kind {
            if entry.code != *code {
                entry.code = code.clone();
            }
        }

        Ok(entry)
    }

    /// Apply an edit to a slot's entry
    ///
    /// The whole update is checked before anything changes: code edits are
    /// rejected on fixed slots and credits above `max_credits` are rejected.
    pub fn update_entry(
        &mut self,
        plan: &MajorPlan,
        section: &str,
        index: usize,
        update: EntryUpdate,
        max_credits: u32,
    ) -> Result<&CourseEntry> {
        let slot = plan.section(section)?.slot(index)?;

        if let (Some(_), SlotKind::Fixed { code }) = (&update.code, &slot.kind) {
            return Err(Error::Validation(format!(
                "{} slot {} is fixed to {}; its code can't be changed",
                section, index, code
            )));
        }

        if let Some(credits) = update.credits {
            if credits > max_credits {
                return Err(Error::InvalidCredits {
                    credits,
                    max: max_credits,
                });
            }
        }

        let entry = self.entry_or_default(plan, section, index)?;
        if let Some(code) = update.code {
            entry.code = code.trim().to_uppercase();
        }
        if let Some(credits) = update.credits {
            entry.credits = credits;
        }
        if let Some(grade) = update.grade {
            entry.grade = grade;
        }
        if let Some(status) = update.status {
            entry.status = status;
        }

        tracing::debug!(
            major = %plan.key,
            section,
            index,
            code = %entry.code,
            credits = entry.credits,
            grade = ?entry.grade,
            status = %entry.status,
            "Course entry updated"
        );

        Ok(entry)
    }

    /// Drop every course entry
    pub fn reset_entries(&mut self) {
        tracing::info!(count = self.entries.len(), "Clearing course entries");
        self.entries.clear();
    }

    pub fn student(&self) -> &StudentInfo {
        &self.student
    }

    pub fn student_mut(&mut self) -> &mut StudentInfo {
        &mut self.student
    }
}

impl EntrySource for SessionState {
    fn entry_at(&self, major: &str, section: &str, index: usize) -> Option<&CourseEntry> {
        self.entries.get(&self.slot_key(major, section, index))
    }
}

/// JSON maps need string keys, so entries are stored as a list of pairs
mod entry_list {
    use super::{CourseEntry, SlotKey};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct StoredRef<'a> {
        key: &'a SlotKey,
        entry: &'a CourseEntry,
    }

    #[derive(Deserialize)]
    struct Stored {
        key: SlotKey,
        entry: CourseEntry,
    }

    pub fn serialize<S: Serializer>(
        entries: &BTreeMap<SlotKey, CourseEntry>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(entries.iter().map(|(key, entry)| StoredRef { key, entry }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<SlotKey, CourseEntry>, D::Error> {
        let stored = Vec::<Stored>::deserialize(deserializer)?;
        Ok(stored.into_iter().map(|s| (s.key, s.entry)).collect())
    }
}
