//! Record a course for one slot

use advisee_core::{EntryUpdate, Grade, Status};
use clap::Args;
use serde::Serialize;

use super::{no_major_selected, Context};
use crate::output::print_one;

/// Record a course, grade or status for a slot of the selected major
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Section name or number (e.g. "Level 1 Courses" or 1)
    pub section: String,

    /// Slot number within the section, starting at 1
    pub slot: usize,

    /// Course code (open slots only)
    #[arg(short, long)]
    pub code: Option<String>,

    /// Credits for this course
    #[arg(long)]
    pub credits: Option<u32>,

    /// Letter grade (A+ .. F, P, R); "none" clears it
    #[arg(short, long)]
    pub grade: Option<String>,

    /// Status: not-taken, completed, in-progress
    #[arg(short, long)]
    pub status: Option<Status>,
}

#[derive(Serialize)]
struct UpdatedEntry<'a> {
    section: &'a str,
    slot: usize,
    code: &'a str,
    credits: u32,
    grade: Option<Grade>,
    status: Status,
}

impl SetArgs {
    /// Execute the set command
    pub fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let index = self
            .slot
            .checked_sub(1)
            .ok_or_else(|| anyhow::anyhow!("Slot numbers start at 1"))?;

        let update = EntryUpdate {
            code: self.code.clone(),
            credits: self.credits,
            grade: self.grade.as_deref().map(parse_grade).transpose()?,
            status: self.status,
        };
        if update.is_empty() {
            anyhow::bail!("Nothing to change. Pass --code, --credits, --grade or --status");
        }

        let mut session = ctx.load_session()?;
        let plan = session
            .selected_plan(&ctx.plans)?
            .ok_or_else(no_major_selected)?;
        let section = plan.resolve_section(&self.section)?;

        let entry = session
            .update_entry(plan, &section.name, index, update, ctx.config.planner.max_credits)?
            .clone();
        ctx.save_session(&session)?;

        let updated = UpdatedEntry {
            section: &section.name,
            slot: self.slot,
            code: &entry.code,
            credits: entry.credits,
            grade: entry.grade,
            status: entry.status,
        };

        print_one(ctx.json, updated, |u| {
            let code = if u.code.is_empty() { "(no code)" } else { u.code };
            let grade = u.grade.map(|g| g.to_string()).unwrap_or_else(|| "no grade".to_string());
            println!(
                "Updated {} #{}: {} ({} credits, {}, {})",
                u.section,
                u.slot,
                code,
                u.credits,
                grade,
                u.status
            );
        })
    }
}

/// Parse a grade argument; blank, "-" and "none" clear the grade
fn parse_grade(s: &str) -> anyhow::Result<Option<Grade>> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Ok(Some(trimmed.parse::<Grade>()?))
}
