//! Pure parse/validate for site configuration (`site.toml`).

use crate::domain::{AppError, SiteConfig};

/// Parse and validate site configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<SiteConfig, AppError> {
    let config: SiteConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
