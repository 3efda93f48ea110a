//! Authored requirement plans and the store that serves them

use super::{MajorPlan, RequirementSection, RequirementSlot};
use crate::{Error, Result};

/// Every reference slot carries this many credits
const SLOT_CREDITS: u32 = 3;

/// Read-only store of major plans, in authored order
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    plans: Vec<MajorPlan>,
}

impl PlanStore {
    /// Build a store from plans
    pub fn new(plans: Vec<MajorPlan>) -> Self {
        Self { plans }
    }

    /// The Biology and Biochemistry reference plans
    pub fn reference() -> Self {
        Self::new(vec![biology(), biochemistry()])
    }

    /// `(key, display name)` pairs in authored order
    pub fn list_majors(&self) -> Vec<(&str, &str)> {
        self.plans
            .iter()
            .map(|p| (p.key.as_str(), p.name.as_str()))
            .collect()
    }

    /// Get the plan for a major key
    pub fn get_plan(&self, key: &str) -> Result<&MajorPlan> {
        let wanted = key.trim().to_ascii_uppercase();
        self.plans
            .iter()
            .find(|p| p.key == wanted)
            .ok_or_else(|| Error::MajorNotFound(key.to_string()))
    }

    pub fn plans(&self) -> &[MajorPlan] {
        &self.plans
    }

    /// Validate every plan in the store
    pub fn validate(&self) -> Result<()> {
        self.plans.iter().try_for_each(MajorPlan::validate)
    }
}

fn fixed(code: &str, required: bool) -> RequirementSlot {
    RequirementSlot::fixed(code, SLOT_CREDITS, required)
}

fn open(pattern: &str, required: bool) -> RequirementSlot {
    RequirementSlot::open(pattern, open_label(pattern), SLOT_CREDITS, required)
}

fn open_many(pattern: &str, count: usize, required: bool) -> impl Iterator<Item = RequirementSlot> + '_ {
    (0..count).map(move |_| open(pattern, required))
}

fn open_label(pattern: &str) -> &'static str {
    match pattern {
        "ELEC1XXX" => "Level 1 Elective",
        "ELEC2XXX" => "Level 2 Elective",
        "ELEC3XXX" => "Level 3 Elective",
        "BIOL3XXX" => "Level 3 Biology Elective",
        "BIOC3XXX" => "Level 3 Biochemistry Elective",
        "ECOL3XXX" => "Level 3 Ecology Elective",
        "MICR3XXX" => "Level 3 Microbiology Elective",
        _ => "Elective",
    }
}

fn section(name: &str, required_credits: u32, slots: Vec<RequirementSlot>) -> RequirementSection {
    RequirementSection {
        name: name.to_string(),
        required_credits,
        slots,
    }
}

/// Level 1 is shared by both majors
fn level_one() -> RequirementSection {
    let mut slots = vec![
        fixed("BIOL1020", true),
        fixed("BIOL1025", true),
        fixed("BIOC1015", true),
        fixed("BIOL1030", true),
    ];
    slots.extend(open_many("ELEC1XXX", 4, false));
    section("Level 1 Courses", 24, slots)
}

fn biology() -> MajorPlan {
    let mut level_two = vec![
        fixed("BIOL2373", true),
        fixed("BIOC2365", false),
        fixed("BIOC2366", false),
        fixed("BIOC2370", false),
        fixed("BIOC2371", false),
    ];
    level_two.extend(open_many("ELEC2XXX", 5, false));

    let level_three: Vec<_> = open_many("BIOL3XXX", 4, false)
        .chain(open_many("BIOC3XXX", 2, false))
        .chain(open_many("ECOL3XXX", 1, false))
        .chain(open_many("MICR3XXX", 1, false))
        .chain(open_many("ELEC3XXX", 4, false))
        .collect();

    MajorPlan {
        key: "BIOL".to_string(),
        name: "BSc Biology Major".to_string(),
        total_credits: 90,
        sections: vec![
            level_one(),
            section("Level 2 Major Courses", 30, level_two),
            section("Level 3 Major Courses", 36, level_three),
        ],
    }
}

fn biochemistry() -> MajorPlan {
    let mut level_two = vec![
        fixed("BIOC2365", true),
        fixed("BIOC2366", true),
        fixed("BIOC2370", true),
        fixed("BIOC2371", true),
    ];
    level_two.extend(open_many("ELEC2XXX", 6, false));

    let level_three: Vec<_> = open_many("BIOC3XXX", 4, true)
        .chain(open_many("BIOL3XXX", 2, false))
        .chain(open_many("ELEC3XXX", 6, false))
        .collect();

    MajorPlan {
        key: "BIOC".to_string(),
        name: "BSc Biochemistry Major".to_string(),
        total_credits: 90,
        sections: vec![
            level_one(),
            section("Level 2 Major Courses", 30, level_two),
            section("Level 3 Major Courses", 36, level_three),
        ],
    }
}
