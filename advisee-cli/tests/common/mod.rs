use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated home and session file for one test
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub session: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        std::fs::create_dir_all(&home).expect("create isolated home");
        let session = tmp.path().join("session.json");

        Self {
            _tmp: tmp,
            home,
            session,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("advisee").expect("advisee binary");
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("XDG_DATA_HOME", self.home.join(".local/share"))
            .env("ADVISEE_SESSION_PATH", &self.session)
            .env_remove("ADVISEE_ENTRY_SCOPE")
            .env_remove("ADVISEE_MAX_CREDITS")
            .env_remove("ADVISEE_DECLARATION_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run a command that must succeed and return its stdout
    pub fn run(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().expect("run advisee");
        assert!(
            output.status.success(),
            "advisee {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        serde_json::from_str(&self.run(&full)).expect("json output")
    }
}
