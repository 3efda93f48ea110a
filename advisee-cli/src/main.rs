//! Advisee CLI - Command line interface for AdviseeMatrix
//!
//! Degree planning from the terminal: pick a major, record courses and see
//! credit and GPA progress.

mod commands;
mod output;

use std::path::PathBuf;

use advisee_core::{Config, EntryScope};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{Context, DeclareArgs, PlanArgs, ResetArgs, SelectArgs, SetArgs, StudentArgs};

/// AdviseeMatrix: degree planning and progress tracking
#[derive(Parser, Debug)]
#[command(name = "advisee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Session file (overrides config and env)
    #[arg(long, global = true, env = "ADVISEE_SESSION_PATH")]
    session: Option<PathBuf>,

    /// Whether course entries are shared between majors (shared, per-major)
    ///
    /// Overrides ADVISEE_ENTRY_SCOPE and the config file.
    #[arg(long, global = true)]
    entry_scope: Option<EntryScope>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// List available majors
    #[command(visible_alias = "m")]
    Majors,

    /// Select the major to plan for
    Select(SelectArgs),

    /// Show the course checklist for a major
    #[command(visible_alias = "p")]
    Plan(PlanArgs),

    /// Record a course, grade or status for a slot
    Set(SetArgs),

    /// Show or edit student details
    Student(StudentArgs),

    /// Show credit and GPA progress for the selected major
    #[command(visible_alias = "s")]
    Summary,

    /// Render the Declaration of Major form
    Declare(DeclareArgs),

    /// Clear recorded courses
    Reset(ResetArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Commands that need neither config nor a session
    match cli.command {
        Some(Commands::Version) => {
            println!("advisee {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        None => {
            println!("AdviseeMatrix - Degree planning tool");
            println!();
            println!("Use --help for usage information");
            return Ok(());
        }
        Some(_) => {}
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.session.clone(), cli.entry_scope)?;

    tracing::debug!(
        max_credits = config.planner.max_credits,
        entry_scope = %config.planner.entry_scope,
        session_path = ?config.store.session_path,
        "Configuration loaded"
    );

    let ctx = Context::new(config, cli.json, cli.verbose)?;

    match cli.command {
        Some(Commands::Version) | None => {}
        Some(Commands::Majors) => commands::list_majors(&ctx)?,
        Some(Commands::Select(args)) => args.execute(&ctx)?,
        Some(Commands::Plan(args)) => args.execute(&ctx)?,
        Some(Commands::Set(args)) => args.execute(&ctx)?,
        Some(Commands::Student(args)) => args.execute(&ctx)?,
        Some(Commands::Summary) => commands::show_summary(&ctx)?,
        Some(Commands::Declare(args)) => args.execute(&ctx)?,
        Some(Commands::Reset(args)) => args.execute(&ctx)?,
        Some(Commands::Config) => show_config(&ctx),
    }

    Ok(())
}

fn show_config(ctx: &Context) {
    let config = &ctx.config;
    println!("Advisee Configuration");
    println!("=====================");
    println!();
    println!("Planner Settings:");
    println!("  max_credits: {}", config.planner.max_credits);
    println!("  entry_scope: {}", config.planner.entry_scope);
    println!();
    println!("Declaration Settings:");
    println!("  format: {}", config.declaration.format);
    println!();
    println!("Session file: {}", ctx.store.path().display());
    if ctx.store.exists() {
        println!("  (exists)");
    } else {
        println!("  (not found - starts empty)");
    }
    println!();
    if let Some(path) = Config::default_config_path() {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }
}
