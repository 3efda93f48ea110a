//! Advisee Core - Core library for AdviseeMatrix degree planning
//!
//! This crate holds the course catalog, the major requirement plans, the
//! planner session and the progress/GPA calculator that works over them.

pub mod catalog;
pub mod config;
pub mod declaration;
pub mod error;
pub mod grade;
pub mod plan;
pub mod progress;
pub mod rows;
pub mod session;
pub mod student;

pub use catalog::{Catalog, CourseCategory, CourseRecord};
pub use config::Config;
pub use declaration::{render_declaration, render_for_session, DeclarationFormat};
pub use error::{Error, Result};
pub use grade::{Grade, Semester, Status};
pub use plan::{MajorPlan, PlanStore, RequirementSection, RequirementSlot, SlotKind};
pub use progress::{
    gpa, grade_to_points, overall_progress, quality_points, section_percent_complete,
    section_progress, AdvisoryBand, OverallSummary, ProgressReport, SectionSummary, SectionTally,
};
pub use rows::{plan_rows, PlanRow};
pub use session::{CourseEntry, EntryScope, EntrySource, EntryUpdate, SessionState, SlotKey};
pub use student::{StudentInfo, StudentUpdate};
