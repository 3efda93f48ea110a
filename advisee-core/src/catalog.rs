//! Static course catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name shown for codes the catalog doesn't know
pub const CUSTOM_COURSE_NAME: &str = "Custom Course";

/// Whether a course is a core requirement or an elective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseCategory {
    Core,
    Elective,
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseCategory::Core => write!(f, "core"),
            CourseCategory::Elective => write!(f, "elective"),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course code (e.g. "BIOL1020")
    pub code: String,
    /// Display name
    pub name: String,
    /// Credit value
    pub credits: u32,
    /// Course level, 1-3
    pub level: u8,
    pub category: CourseCategory,
}

impl CourseRecord {
    fn new(code: &str, name: &str, credits: u32, level: u8, category: CourseCategory) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            credits,
            level,
            category,
        }
    }
}

/// Read-only lookup table of courses keyed by code
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: BTreeMap<String, CourseRecord>,
}

impl Catalog {
    /// Build a catalog from records; later duplicates replace earlier ones
    pub fn from_records(records: impl IntoIterator<Item = CourseRecord>) -> Self {
        let courses = records
            .into_iter()
            .map(|r| (r.code.clone(), r))
            .collect();
        Self { courses }
    }

    /// The reference catalog for the biology programmes
    pub fn reference() -> Self {
        use CourseCategory::{Core, Elective};

        Self::from_records([
            CourseRecord::new("BIOL1020", "Diversity of Life I", 3, 1, Core),
            CourseRecord::new("BIOL1025", "Diversity of Life II", 3, 1, Core),
            CourseRecord::new("BIOC1015", "Intro. To Biochemistry", 3, 1, Core),
            CourseRecord::new("BIOL1030", "Introduction to Genetics", 3, 1, Core),
            CourseRecord::new("BIOL2373", "Skills for Biologists", 3, 2, Core),
            CourseRecord::new("BIOC2365", "Primary Metabolism", 3, 2, Elective),
            CourseRecord::new("BIOC2366", "Protein Biochemistry", 3, 2, Elective),
            CourseRecord::new("BIOC2370", "Cell Signals", 3, 2, Elective),
            CourseRecord::new("BIOC2371", "Molecular Techniques", 3, 2, Elective),
        ])
    }

    /// Look up a course by code. Unknown codes are normal (custom courses).
    pub fn lookup(&self, code: &str) -> Option<&CourseRecord> {
        self.courses.get(code.trim())
    }

    /// Whether the code is a catalog course
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Catalog name for a code, or "Custom Course"
    pub fn display_name(&self, code: &str) -> &str {
        self.lookup(code)
            .map(|c| c.name.as_str())
            .unwrap_or(CUSTOM_COURSE_NAME)
    }

    /// Iterate over all courses, ordered by code
    pub fn iter(&self) -> impl Iterator<Item = &CourseRecord> {
        self.courses.values()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
