//! Site configuration loading from the site root.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config;
use crate::domain::{AppError, SiteConfig};

/// Load and parse `site.toml`, falling back to defaults when it is absent.
pub fn load_config(root: &Path) -> Result<SiteConfig, AppError> {
    let config_path = config::paths::site_config(root);

    if !config_path.exists() {
        debug!(path = %config_path.display(), "no site config, using defaults");
        return Ok(SiteConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    config::parse_config_content(&content)
}
