//! Site configuration domain models.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Where a site keeps its role definitions and user accounts.
///
/// Loaded from `site.toml`; every field has a default so the file is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub roles: RolesSettings,
    #[serde(default)]
    pub accounts: AccountsSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RolesSettings {
    /// Role definition file, relative to the site root.
    #[serde(default = "default_roles_file")]
    pub file: PathBuf,
}

impl Default for RolesSettings {
    fn default() -> Self {
        Self { file: default_roles_file() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountsSettings {
    /// Account directory, relative to the site root.
    #[serde(default = "default_accounts_dir")]
    pub dir: PathBuf,
}

impl Default for AccountsSettings {
    fn default() -> Self {
        Self { dir: default_accounts_dir() }
    }
}

fn default_roles_file() -> PathBuf {
    PathBuf::from("roles.yml")
}

fn default_accounts_dir() -> PathBuf {
    PathBuf::from("accounts")
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.roles.file.as_os_str().is_empty() {
            return Err(AppError::config_error("roles.file must not be empty"));
        }
        if self.accounts.dir.as_os_str().is_empty() {
            return Err(AppError::config_error("accounts.dir must not be empty"));
        }
        Ok(())
    }

    /// Absolute location of the role definition file.
    pub fn roles_file(&self, root: &Path) -> PathBuf {
        root.join(&self.roles.file)
    }

    /// Absolute location of the account directory.
    pub fn accounts_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.accounts.dir)
    }
}
