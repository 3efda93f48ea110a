//! Major listing and selection

use clap::Args;
use serde::Serialize;

use super::Context;
use crate::output::print_one;

#[derive(Serialize)]
struct MajorListing {
    key: String,
    name: String,
    total_credits: u32,
    selected: bool,
}

/// List majors, marking the selected one
pub fn list_majors(ctx: &Context) -> anyhow::Result<()> {
    let session = ctx.load_session()?;
    let selected = session.selected_major();

    let majors: Vec<MajorListing> = ctx
        .plans
        .plans()
        .iter()
        .map(|p| MajorListing {
            key: p.key.clone(),
            name: p.name.clone(),
            total_credits: p.total_credits,
            selected: selected == Some(p.key.as_str()),
        })
        .collect();

    print_one(ctx.json, majors, |majors| {
        println!("Available Majors:");
        println!();
        for m in majors {
            let marker = if m.selected { "*" } else { " " };
            println!("  {} {} - {} ({} credits)", marker, m.key, m.name, m.total_credits);
        }
    })
}

/// Select the major to plan for
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Major key (e.g. BIOL, BIOC)
    pub major: String,
}

impl SelectArgs {
    /// Execute the select command
    pub fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let mut session = ctx.load_session()?;
        let plan = session.select_major(&self.major, &ctx.plans)?;
        ctx.save_session(&session)?;

        let listing = MajorListing {
            key: plan.key.clone(),
            name: plan.name.clone(),
            total_credits: plan.total_credits,
            selected: true,
        };
        print_one(ctx.json, listing, |m| {
            println!("Selected {} - {}", m.key, m.name);
        })
    }
}
