//! Configuration management for AdviseeMatrix
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (ADVISEE_*)
//! 3. Config file (~/.config/advisee/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::declaration::DeclarationFormat;
use crate::session::EntryScope;
use crate::{Error, Result};

/// Largest credit value a student may enter for one course
pub const DEFAULT_MAX_CREDITS: u32 = 6;

/// No course carries more credits than this, whatever the config says
pub const CREDIT_CEILING: u32 = 6;

/// Planner behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Upper bound for edited credit values
    pub max_credits: u32,

    /// Whether entries are shared between majors
    pub entry_scope: EntryScope,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_credits: DEFAULT_MAX_CREDITS,
            entry_scope: EntryScope::Shared,
        }
    }
}

/// Session file location
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Session file path (defaults to the platform data directory)
    pub session_path: Option<PathBuf>,
}

/// Declaration form output
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeclarationConfig {
    pub format: DeclarationFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub planner: PlannerConfig,
    pub store: StoreConfig,
    pub declaration: DeclarationConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Check values that serde can't bound
    pub fn validate(&self) -> Result<()> {
        if self.planner.max_credits > CREDIT_CEILING {
            return Err(Error::Config(format!(
                "max_credits {} is above the limit of {}",
                self.planner.max_credits, CREDIT_CEILING
            )));
        }
        Ok(())
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/advisee/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("advisee").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - ADVISEE_MAX_CREDITS: Largest credit value per course
    /// - ADVISEE_ENTRY_SCOPE: `shared` or `per-major`
    /// - ADVISEE_SESSION_PATH: Session file path
    /// - ADVISEE_DECLARATION_FORMAT: `text` or `html`
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(max) = var("ADVISEE_MAX_CREDITS") {
            self.planner.max_credits = max.trim().parse().map_err(|_| {
                Error::Config(format!("ADVISEE_MAX_CREDITS is not a number: {}", max))
            })?;
        }

        if let Some(scope) = var("ADVISEE_ENTRY_SCOPE") {
            self.planner.entry_scope = scope.parse()?;
        }

        if let Some(path) = var("ADVISEE_SESSION_PATH") {
            self.store.session_path = Some(PathBuf::from(path));
        }

        if let Some(format) = var("ADVISEE_DECLARATION_FORMAT") {
            self.declaration.format = format.parse()?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        session_path: Option<PathBuf>,
        entry_scope: Option<EntryScope>,
    ) -> Self {
        if let Some(path) = session_path {
            self.store.session_path = Some(path);
        }

        if let Some(scope) = entry_scope {
            self.planner.entry_scope = scope;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        session_path: Option<PathBuf>,
        entry_scope: Option<EntryScope>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()?
            .with_cli_overrides(session_path, entry_scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.planner.max_credits, 6);
        assert_eq!(config.planner.entry_scope, EntryScope::Shared);
        assert!(config.store.session_path.is_none());
        assert_eq!(config.declaration.format, DeclarationFormat::Text);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some(PathBuf::from("/tmp/session.json")),
            Some(EntryScope::PerMajor),
        );

        assert_eq!(
            config.store.session_path,
            Some(PathBuf::from("/tmp/session.json"))
        );
        assert_eq!(config.planner.entry_scope, EntryScope::PerMajor);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ADVISEE_MAX_CREDITS", "4"),
            ("ADVISEE_ENTRY_SCOPE", "per-major"),
            ("ADVISEE_DECLARATION_FORMAT", "html"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_overrides_from(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.planner.max_credits, 4);
        assert_eq!(config.planner.entry_scope, EntryScope::PerMajor);
        assert_eq!(config.declaration.format, DeclarationFormat::Html);
        assert!(config.store.session_path.is_none());
    }

    #[test]
    fn test_env_override_rejects_bad_number() {
        let result = Config::default().with_overrides_from(|name| {
            (name == "ADVISEE_MAX_CREDITS").then(|| "six".to_string())
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_env_override_rejects_credits_above_ceiling() {
        let result = Config::default().with_overrides_from(|name| {
            (name == "ADVISEE_MAX_CREDITS").then(|| "4294967295".to_string())
        });
        assert!(matches!(result, Err(Error::Config(_))));

        let config = Config::default()
            .with_overrides_from(|name| (name == "ADVISEE_MAX_CREDITS").then(|| "6".to_string()))
            .unwrap();
        assert_eq!(config.planner.max_credits, CREDIT_CEILING);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[planner]
max_credits = 5
entry_scope = "per-major"

[store]
session_path = "/var/lib/advisee/session.json"

[declaration]
format = "html"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.planner.max_credits, 5);
        assert_eq!(config.planner.entry_scope, EntryScope::PerMajor);
        assert_eq!(
            config.store.session_path,
            Some(PathBuf::from("/var/lib/advisee/session.json"))
        );
        assert_eq!(config.declaration.format, DeclarationFormat::Html);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[planner]
entry_scope = "per-major"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // max_credits should use default
        assert_eq!(config.planner.max_credits, 6);
        assert_eq!(config.planner.entry_scope, EntryScope::PerMajor);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[planner]\nmax_credits = 3\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.planner.max_credits, 3);

        std::fs::write(&path, "[planner]\nmax_credits = 4294967295\n").unwrap();
        assert!(matches!(
            Config::load_from_file(&path),
            Err(Error::Config(_))
        ));

        std::fs::write(&path, "[planner\n").unwrap();
        assert!(matches!(
            Config::load_from_file(&path),
            Err(Error::Config(_))
        ));
    }
}
