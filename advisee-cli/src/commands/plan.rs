//! Course checklist for a major

use advisee_core::{plan_rows, PlanRow};
use clap::Args;

use super::{no_major_selected, Context};
use crate::output::print_one;

/// Show the course checklist
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Major key (defaults to the selected major)
    pub major: Option<String>,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let session = ctx.load_session()?;
        let plan = match &self.major {
            Some(key) => ctx.plans.get_plan(key)?,
            None => session
                .selected_plan(&ctx.plans)?
                .ok_or_else(no_major_selected)?,
        };

        let rows = plan_rows(plan, &session, &ctx.catalog);

        print_one(ctx.json, rows, |rows| {
            println!("{} Requirements", plan.name);

            for section in &plan.sections {
                println!();
                println!(
                    "{} (Required: {} credits)",
                    section.name, section.required_credits
                );
                for row in rows.iter().filter(|r| r.section == section.name) {
                    println!("  {}", format_row(row));
                }
            }

            println!();
            println!("* required   ~ open slot (enter your own course code)");
        })
    }
}

fn format_row(row: &PlanRow) -> String {
    let marker = match (row.required, row.code_editable) {
        (true, _) => "*",
        (false, true) => "~",
        (false, false) => " ",
    };
    let code = if row.code.is_empty() {
        row.placeholder.clone().unwrap_or_default()
    } else {
        row.code.clone()
    };
    let grade = row.grade.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string());

    format!(
        "{:>2}. {} {:<9} {:<32} {} cr  {:<2}  {}",
        row.index + 1,
        marker,
        code,
        row.course_name,
        row.credits,
        grade,
        row.status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisee_core::{Grade, Status};

    fn row() -> PlanRow {
        PlanRow {
            section: "Level 1 Courses".to_string(),
            index: 4,
            code: String::new(),
            placeholder: Some("ELEC1XXX".to_string()),
            course_name: "Level 1 Elective".to_string(),
            credits: 3,
            grade: None,
            status: Status::NotTaken,
            code_editable: true,
            required: false,
        }
    }

    #[test]
    fn test_format_open_row_shows_placeholder() {
        let line = format_row(&row());
        assert!(line.starts_with(" 5. ~ ELEC1XXX"));
        assert!(line.contains("Level 1 Elective"));
        assert!(line.ends_with("Not Taken"));
    }

    #[test]
    fn test_format_filled_row() {
        let mut r = row();
        r.code = "CHEM1010".to_string();
        r.grade = Some(Grade::AMinus);
        r.status = Status::Completed;
        let line = format_row(&r);
        assert!(line.contains("CHEM1010"));
        assert!(line.contains("A-"));
        assert!(line.ends_with("Completed"));
    }
}
