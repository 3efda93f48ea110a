//! Progress summary

use advisee_core::{overall_progress, AdvisoryBand, ProgressReport};

use super::{no_major_selected, Context};
use crate::output::{print_one, progress_bar};

/// Show per-section and overall progress for the selected major
pub fn show_summary(ctx: &Context) -> anyhow::Result<()> {
    let session = ctx.load_session()?;
    let plan = session
        .selected_plan(&ctx.plans)?
        .ok_or_else(no_major_selected)?;

    let report = overall_progress(plan, &session);
    print_one(ctx.json, report, print_report)
}

fn print_report(report: &ProgressReport) {
    println!("Progress Summary: {}", report.major_name);
    println!();

    for section in &report.sections {
        println!("{}", section.name);
        println!(
            "  Credits:     {}/{} ({:.1}% complete)",
            section.earned_credits, section.required_credits, section.percent_complete
        );
        println!("  Section GPA: {:.2}", section.gpa);
        println!();
    }

    let overall = &report.overall;
    println!("Overall Summary");
    println!(
        "  Total Credits: {}/{} ({:.1}% complete)",
        overall.earned_credits, overall.total_credits, overall.percent_complete
    );
    println!("  Overall GPA:   {:.2}", overall.gpa);
    println!("  {}", progress_bar(overall.percent_complete, 30));
    println!();

    let prefix = match overall.band {
        AdvisoryBand::Complete => "Congratulations!",
        AdvisoryBand::NearCompletion | AdvisoryBand::InProgress => "Status:",
    };
    println!("{} {}", prefix, overall.advisory_message);
}
