//! Form rows for a plan
//!
//! Turns a plan plus the current entries into one flat descriptor per slot,
//! so a form can be drawn without knowing about sessions or catalogs.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::grade::{Grade, Status};
use crate::plan::{MajorPlan, SlotKind};
use crate::session::{CourseEntry, EntrySource};

/// Everything needed to draw one slot of the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRow {
    pub section: String,
    /// Position within the section
    pub index: usize,
    /// Course code; blank for untouched open slots
    pub code: String,
    /// Placeholder pattern for open slots
    pub placeholder: Option<String>,
    pub course_name: String,
    pub credits: u32,
    pub grade: Option<Grade>,
    pub status: Status,
    /// Only open slots take a student-supplied code
    pub code_editable: bool,
    pub required: bool,
}

/// Build rows for every slot, in section and slot order
///
/// Slots without an entry show the defaults a fresh entry would have. The
/// source is not modified.
pub fn plan_rows<S: EntrySource>(plan: &MajorPlan, source: &S, catalog: &Catalog) -> Vec<PlanRow> {
    let mut rows = Vec::with_capacity(plan.slot_count());

    for section in &plan.sections {
        for (index, slot) in section.slots.iter().enumerate() {
            let entry = source
                .entry_at(&plan.key, &section.name, index)
                .cloned()
                .unwrap_or_else(|| CourseEntry::for_slot(slot));

            let (code, placeholder, course_name) = match &slot.kind {
                SlotKind::Fixed { code } => {
                    (code.clone(), None, catalog.display_name(code).to_string())
                }
                SlotKind::Open { pattern, label } => {
                    let name = if entry.code.is_empty() {
                        label.clone()
                    } else {
                        catalog.display_name(&entry.code).to_string()
                    };
                    (entry.code.clone(), Some(pattern.clone()), name)
                }
            };

            rows.push(PlanRow {
                section: section.name.clone(),
                index,
                code,
                placeholder,
                course_name,
                credits: entry.credits,
                grade: entry.grade,
                status: entry.status,
                code_editable: slot.is_open(),
                required: slot.required,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CUSTOM_COURSE_NAME;
    use crate::plan::PlanStore;
    use crate::session::{EntryUpdate, SessionState};

    #[test]
    fn test_rows_for_fresh_session() {
        let store = PlanStore::reference();
        let catalog = Catalog::reference();
        let plan = store.get_plan("BIOL").unwrap();
        let session = SessionState::default();

        let rows = plan_rows(plan, &session, &catalog);
        assert_eq!(rows.len(), 30);
        assert_eq!(session.entry_count(), 0);

        let first = &rows[0];
        assert_eq!(first.section, "Level 1 Courses");
        assert_eq!(first.code, "BIOL1020");
        assert_eq!(first.course_name, "Diversity of Life I");
        assert_eq!(first.credits, 3);
        assert_eq!(first.status, Status::NotTaken);
        assert!(!first.code_editable);
        assert!(first.required);

        let elective = &rows[4];
        assert_eq!(elective.code, "");
        assert_eq!(elective.placeholder.as_deref(), Some("ELEC1XXX"));
        assert_eq!(elective.course_name, "Level 1 Elective");
        assert!(elective.code_editable);
        assert!(!elective.required);
    }

    #[test]
    fn test_rows_reflect_entries() {
        let store = PlanStore::reference();
        let catalog = Catalog::reference();
        let plan = store.get_plan("BIOL").unwrap();
        let mut session = SessionState::default();

        let custom = EntryUpdate {
            code: Some("PHYS1001".to_string()),
            credits: Some(4),
            grade: Some(Some(Grade::B)),
            status: Some(Status::Completed),
        };
        session
            .update_entry(plan, "Level 1 Courses", 5, custom, 6)
            .unwrap();

        let known = EntryUpdate {
            code: Some("BIOC2370".to_string()),
            ..Default::default()
        };
        session
            .update_entry(plan, "Level 2 Major Courses", 5, known, 6)
            .unwrap();

        let rows = plan_rows(plan, &session, &catalog);
        let custom_row = &rows[5];
        assert_eq!(custom_row.code, "PHYS1001");
        assert_eq!(custom_row.course_name, CUSTOM_COURSE_NAME);
        assert_eq!(custom_row.credits, 4);
        assert_eq!(custom_row.grade, Some(Grade::B));

        let known_row = rows
            .iter()
            .find(|r| r.section == "Level 2 Major Courses" && r.index == 5)
            .unwrap();
        assert_eq!(known_row.course_name, "Cell Signals");
    }
}
