//! Filesystem adapter implementations for the site ports.
//!
//! Provides [`RoleDefinitionFile`] for `RoleDefinitionSource` and
//! [`AccountsDirectory`] for `UserRegistry`. [`SiteRoot`] resolves the paths
//! named in `site.toml` and refuses any that escape the site root.

mod accounts_directory;
mod role_definition_file;

use std::path::{Component, Path, PathBuf};

use crate::domain::{AppError, SiteConfig};

pub use accounts_directory::AccountsDirectory;
pub use role_definition_file::RoleDefinitionFile;

/// A site directory on disk.
#[derive(Debug, Clone)]
pub struct SiteRoot {
    root: PathBuf,
}

impl SiteRoot {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Role definition source for this site.
    pub fn role_definitions(&self, config: &SiteConfig) -> Result<RoleDefinitionFile, AppError> {
        let path = config.roles_file(&self.root);
        self.validate_path_within_root(&path)?;
        Ok(RoleDefinitionFile::new(path))
    }

    /// User registry for this site.
    pub fn accounts(&self, config: &SiteConfig) -> Result<AccountsDirectory, AppError> {
        let dir = config.accounts_dir(&self.root);
        self.validate_path_within_root(&dir)?;
        Ok(AccountsDirectory::new(dir))
    }

    /// Validates that a path (after logical normalization) is within the root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        if !normalize_path(&full_path).starts_with(normalize_path(&self.root)) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{AccountsSettings, RolesSettings};
    use tempfile::TempDir;

    fn test_site() -> (TempDir, SiteRoot) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let site = SiteRoot::new(dir.path().to_path_buf());
        (dir, site)
    }

    #[test]
    fn validate_path_prevents_traversal() {
        let (_dir, site) = test_site();

        let result = site.validate_path_within_root(&site.root().join("../roles.yml"));
        assert!(result.is_err(), "Should detect simple traversal");

        let result =
            site.validate_path_within_root(&site.root().join("nonexistent/../../roles.yml"));
        assert!(result.is_err(), "Should detect traversal through missing components");

        let result = site.validate_path_within_root(&site.root().join("config/../roles.yml"));
        assert!(result.is_ok(), "Should allow .. that stays within root: {:?}", result.err());
    }

    #[test]
    fn configured_paths_must_stay_inside_site() {
        let (_dir, site) = test_site();
        let config = SiteConfig {
            roles: RolesSettings { file: PathBuf::from("../../etc/roles.yml") },
            accounts: AccountsSettings { dir: PathBuf::from("/var/accounts") },
        };

        assert!(matches!(site.role_definitions(&config), Err(AppError::PathTraversal(_))));
        assert!(matches!(site.accounts(&config), Err(AppError::PathTraversal(_))));
    }

    #[test]
    fn default_paths_resolve_under_root() {
        let (_dir, site) = test_site();
        let config = SiteConfig::default();

        assert_eq!(site.role_definitions(&config).unwrap().path(), site.root().join("roles.yml"));
        assert_eq!(site.accounts(&config).unwrap().dir(), site.root().join("accounts"));
    }

    #[test]
    fn normalize_path_resolves_dots() {
        assert_eq!(normalize_path(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
    }
}
