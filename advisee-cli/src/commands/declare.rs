//! Declaration of Major form

use std::path::PathBuf;

use advisee_core::{render_for_session, DeclarationFormat, Error};
use clap::Args;

use super::{no_major_selected, Context};

/// Render the Declaration of Major form for the selected major
#[derive(Args, Debug)]
pub struct DeclareArgs {
    /// Output format (text, html); defaults to the configured format
    #[arg(short, long)]
    pub format: Option<DeclarationFormat>,

    /// Shorthand for --format html
    #[arg(long, conflicts_with = "format")]
    pub html: bool,

    /// Write the form to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DeclareArgs {
    fn resolve_format(&self, configured: DeclarationFormat) -> DeclarationFormat {
        if self.html {
            DeclarationFormat::Html
        } else {
            self.format.unwrap_or(configured)
        }
    }

    /// Execute the declare command
    pub fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let session = ctx.load_session()?;
        let format = self.resolve_format(ctx.config.declaration.format);

        let missing = session.student().missing_fields();
        if !missing.is_empty() {
            eprintln!("Warning: student details missing: {}", missing.join(", "));
        }

        let now = chrono::Local::now().naive_local();
        let document = match render_for_session(&session, &ctx.plans, now, format) {
            Ok(doc) => doc,
            Err(Error::NoMajorSelected) => return Err(no_major_selected()),
            Err(e) => return Err(e.into()),
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &document)?;
                println!("Declaration form written to {}", path.display());
            }
            None => print!("{}", document),
        }

        Ok(())
    }
}
