//! Clear planner state

use advisee_core::StudentInfo;
use clap::Args;

use super::Context;

/// Clear recorded courses
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Also forget the selected major and student details
    #[arg(long)]
    pub all: bool,

    /// Delete the session file without reading it
    #[arg(long, conflicts_with = "all")]
    pub purge: bool,
}

impl ResetArgs {
    /// Execute the reset command
    pub fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        if self.purge {
            if ctx.store.reset()? {
                println!("Session file removed ({})", ctx.store.path().display());
            } else {
                println!("No session to remove.");
            }
            return Ok(());
        }

        let mut session = ctx.load_session()?;
        let count = session.entry_count();
        session.reset_entries();

        if self.all {
            session.clear_major();
            *session.student_mut() = StudentInfo::default();
        }

        ctx.save_session(&session)?;
        println!("Cleared {} course entr{}.", count, if count == 1 { "y" } else { "ies" });
        if self.all {
            println!("Major selection and student details cleared.");
        }
        Ok(())
    }
}
