//! Shared testing harness for `panel-roles` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated site directory.
pub(crate) struct TestContext {
    root: TempDir,
    site_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated site.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let site_dir = root.path().join("site");
        fs::create_dir_all(&site_dir).expect("Failed to create test site directory");
        Self { root, site_dir }
    }

    /// Path to the site root.
    pub(crate) fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// Build a command for invoking the compiled `panel-roles` binary within the site.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("panel-roles").expect("Failed to locate panel-roles binary");
        cmd.current_dir(&self.site_dir).env_remove("PANEL_ROLES_LOG");
        cmd
    }

    /// Write `roles.yml` at the site root.
    pub(crate) fn write_roles(&self, content: &str) {
        self.write_file("roles.yml", content);
    }

    /// Write `site.toml` at the site root.
    pub(crate) fn write_site_config(&self, content: &str) {
        self.write_file("site.toml", content);
    }

    /// Write an account file under `accounts/`.
    pub(crate) fn write_account(&self, username: &str, content: &str) {
        self.write_file(&format!("accounts/{}.yml", username), content);
    }

    /// Write a file relative to the site root, creating parent directories.
    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.site_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// The standard three-role site used by most tests.
    pub(crate) fn with_standard_site(self) -> Self {
        self.write_roles(
            r#"
- id: admin
  name: Admin
  permissions: false
- id: editor
  name: Editor
  default: true
  permissions:
    panel.user.create: false
    panel.user.update: false
    panel.user.delete: false
    panel.plugin.install: true
- id: client
  name: Client
  panel: false
"#,
        );
        self.write_account("ada", "role: admin\nemail: ada@example.com\n");
        self.write_account("bob", "role: editor\n");
        self.write_account("cy", "role: editor\nemail: cy@example.com\n");
        self.write_account("dee", "language: en\n");
        self
    }
}
