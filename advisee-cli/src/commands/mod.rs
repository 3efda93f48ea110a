//! CLI command implementations

pub mod declare;
pub mod majors;
pub mod plan;
pub mod reset;
pub mod set;
pub mod student;
pub mod summary;

pub use declare::DeclareArgs;
pub use majors::{list_majors, SelectArgs};
pub use plan::PlanArgs;
pub use reset::ResetArgs;
pub use set::SetArgs;
pub use student::StudentArgs;
pub use summary::show_summary;

use advisee_core::{Catalog, Config, PlanStore, SessionState};
use advisee_store::SessionStore;

/// Shared state for one command invocation
pub struct Context {
    pub config: Config,
    pub store: SessionStore,
    pub plans: PlanStore,
    pub catalog: Catalog,
    pub json: bool,
    pub verbose: bool,
}

impl Context {
    pub fn new(config: Config, json: bool, verbose: bool) -> anyhow::Result<Self> {
        let store = match &config.store.session_path {
            Some(path) => SessionStore::open_at(path.clone()),
            None => SessionStore::open_default()?,
        };

        Ok(Self {
            config,
            store,
            plans: PlanStore::reference(),
            catalog: Catalog::reference(),
            json,
            verbose,
        })
    }

    /// Load the session with the configured entry scope and credit limit
    pub fn load_session(&self) -> anyhow::Result<SessionState> {
        Ok(self
            .store
            .load(self.config.planner.entry_scope, self.config.planner.max_credits)?)
    }

    pub fn save_session(&self, session: &SessionState) -> anyhow::Result<()> {
        self.store.save(session)?;
        if self.verbose {
            tracing::info!(path = %self.store.path().display(), "Session written");
        }
        Ok(())
    }
}

/// Error for commands that need a selected major
pub(crate) fn no_major_selected() -> anyhow::Error {
    anyhow::anyhow!("No major selected. Run `advisee select <KEY>` first (see `advisee majors`)")
}
