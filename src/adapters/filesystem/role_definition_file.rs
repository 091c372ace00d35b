use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, RoleData};
use crate::ports::RoleDefinitionSource;

/// Role definitions stored as a YAML sequence of role records.
#[derive(Debug, Clone)]
pub struct RoleDefinitionFile {
    path: PathBuf,
}

impl RoleDefinitionFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RoleDefinitionSource for RoleDefinitionFile {
    fn load_role_definitions(&self) -> Result<Vec<RoleData>, AppError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no role definition file");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yaml::from_str(&content)
            .map_err(|err| AppError::parse_error(self.path.display().to_string(), err))
    }
}
