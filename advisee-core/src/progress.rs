//! Quality points, GPA and degree progress
//!
//! Every function here is pure and total. Only entries that are
//! `Completed` with a recorded grade count toward earned credits; in-progress
//! or ungraded work contributes nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grade::Grade;
use crate::plan::{MajorPlan, RequirementSection};
use crate::session::{CourseEntry, EntrySource};

/// Percent at or above which the degree is nearly done
const NEAR_COMPLETION_PERCENT: f64 = 75.0;

/// Grade points for a grade; blank is 0.0
pub fn grade_to_points(grade: Option<Grade>) -> f64 {
    grade.map(|g| g.points()).unwrap_or(0.0)
}

/// Grade points scaled by credits
pub fn quality_points(grade: Option<Grade>, credits: u32) -> f64 {
    grade_to_points(grade) * f64::from(credits)
}

/// Grade-point average, 0.0 when nothing has been earned
pub fn gpa(earned_credits: u32, quality_points: f64) -> f64 {
    if earned_credits > 0 {
        quality_points / f64::from(earned_credits)
    } else {
        0.0
    }
}

/// Share of required credits earned, as a percentage
///
/// A section that requires nothing is complete.
pub fn section_percent_complete(earned_credits: u32, required_credits: u32) -> f64 {
    if required_credits == 0 {
        return 100.0;
    }
    100.0 * f64::from(earned_credits) / f64::from(required_credits)
}

/// Earned credits and quality points
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionTally {
    pub earned_credits: u32,
    pub quality_points: f64,
}

impl SectionTally {
    pub fn gpa(&self) -> f64 {
        gpa(self.earned_credits, self.quality_points)
    }
}

impl std::ops::Add for SectionTally {
    type Output = SectionTally;

    fn add(self, rhs: SectionTally) -> SectionTally {
        SectionTally {
            earned_credits: self.earned_credits.saturating_add(rhs.earned_credits),
            quality_points: self.quality_points + rhs.quality_points,
        }
    }
}

/// Sum earned credits and quality points over a section's entries
pub fn section_progress<'a>(entries: impl IntoIterator<Item = &'a CourseEntry>) -> SectionTally {
    entries
        .into_iter()
        .filter(|e| e.is_earned())
        .fold(SectionTally::default(), |tally, e| {
            tally
                + SectionTally {
                    earned_credits: e.credits,
                    quality_points: quality_points(e.grade, e.credits),
                }
        })
}

/// Entries recorded for a section's slots; slots never touched are skipped
pub fn section_entries<'a, S: EntrySource>(
    plan: &'a MajorPlan,
    section: &'a RequirementSection,
    source: &'a S,
) -> impl Iterator<Item = &'a CourseEntry> + 'a {
    (0..section.slots.len()).filter_map(move |i| source.entry_at(&plan.key, &section.name, i))
}

/// Advisory message band for overall progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryBand {
    Complete,
    NearCompletion,
    InProgress,
}

impl AdvisoryBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 100.0 {
            AdvisoryBand::Complete
        } else if percent >= NEAR_COMPLETION_PERCENT {
            AdvisoryBand::NearCompletion
        } else {
            AdvisoryBand::InProgress
        }
    }

    /// Advice shown with the overall summary
    pub fn message(&self, remaining_credits: i64) -> String {
        match self {
            AdvisoryBand::Complete => "Degree requirements completed!".to_string(),
            AdvisoryBand::NearCompletion => {
                format!("Almost there! {} credits remaining.", remaining_credits)
            }
            AdvisoryBand::InProgress => {
                format!("Keep going! {} credits remaining.", remaining_credits)
            }
        }
    }
}

impl fmt::Display for AdvisoryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryBand::Complete => write!(f, "requirements complete"),
            AdvisoryBand::NearCompletion => write!(f, "near completion"),
            AdvisoryBand::InProgress => write!(f, "in progress"),
        }
    }
}

/// Progress for one requirement section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub name: String,
    pub earned_credits: u32,
    pub required_credits: u32,
    pub quality_points: f64,
    pub gpa: f64,
    pub percent_complete: f64,
}

/// Progress across the whole plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    pub earned_credits: u32,
    pub total_credits: u32,
    pub quality_points: f64,
    pub gpa: f64,
    pub percent_complete: f64,
    /// May be negative when edited credits push earned past the total
    pub remaining_credits: i64,
    pub band: AdvisoryBand,
    pub advisory_message: String,
}

/// Section-by-section and overall progress for a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub major: String,
    pub major_name: String,
    pub sections: Vec<SectionSummary>,
    pub overall: OverallSummary,
}

/// Compute progress for every section of a plan and the plan as a whole
pub fn overall_progress<S: EntrySource>(plan: &MajorPlan, source: &S) -> ProgressReport {
    let mut total = SectionTally::default();
    let mut sections = Vec::with_capacity(plan.sections.len());

    for section in &plan.sections {
        let tally = section_progress(section_entries(plan, section, source));
        total = total + tally;

        sections.push(SectionSummary {
            name: section.name.clone(),
            earned_credits: tally.earned_credits,
            required_credits: section.required_credits,
            quality_points: tally.quality_points,
            gpa: tally.gpa(),
            percent_complete: section_percent_complete(tally.earned_credits, section.required_credits),
        });
    }

    let percent_complete = section_percent_complete(total.earned_credits, plan.total_credits);
    let remaining_credits = i64::from(plan.total_credits) - i64::from(total.earned_credits);
    let band = AdvisoryBand::from_percent(percent_complete);
    let overall = OverallSummary {
        earned_credits: total.earned_credits,
        total_credits: plan.total_credits,
        quality_points: total.quality_points,
        gpa: total.gpa(),
        percent_complete,
        remaining_credits,
        band,
        advisory_message: band.message(remaining_credits),
    };

    tracing::debug!(
        major = %plan.key,
        earned = overall.earned_credits,
        gpa = overall.gpa,
        "Progress computed"
    );

    ProgressReport {
        major: plan.key.clone(),
        major_name: plan.name.clone(),
        sections,
        overall,
    }
}
