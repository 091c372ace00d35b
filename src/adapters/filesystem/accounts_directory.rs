use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{AppError, User};
use crate::ports::UserRegistry;

const ACCOUNT_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// User registry backed by a directory with one YAML file per account.
///
/// The username is the lowercased file stem; `role` and `email` come from the
/// file body. Other account fields are ignored. When two files map to the same
/// username, the first file in path order wins.
#[derive(Debug, Clone)]
pub struct AccountsDirectory {
    dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct AccountFile {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl AccountsDirectory {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_account(&self, path: &Path) -> Result<Option<User>, AppError> {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return Ok(None);
        };

        let content = fs::read_to_string(path)?;
        let account: AccountFile = if content.trim().is_empty() {
            AccountFile::default()
        } else {
            serde_yaml::from_str(&content)
                .map_err(|err| AppError::parse_error(path.display().to_string(), err))?
        };

        Ok(Some(User {
            username: stem.to_lowercase(),
            role: account.role,
            email: account.email,
        }))
    }
}

fn is_account_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ACCOUNT_EXTENSIONS.contains(&ext))
}

impl UserRegistry for AccountsDirectory {
    fn users(&self) -> Result<Vec<User>, AppError> {
        if !self.dir.is_dir() {
            debug!(dir = %self.dir.display(), "no accounts directory");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if is_account_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut users: Vec<User> = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(user) = self.read_account(&path)? else {
                continue;
            };
            if users.iter().any(|existing| existing.username == user.username) {
                warn!(
                    username = %user.username,
                    file = %path.display(),
                    "account file duplicates an existing username, skipping"
                );
                continue;
            }
            users.push(user);
        }

        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}
