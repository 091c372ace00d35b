use std::path::{Path, PathBuf};

/// Site configuration file name.
pub const SITE_CONFIG_FILENAME: &str = "site.toml";

/// `<root>/site.toml`
pub fn site_config(root: &Path) -> PathBuf {
    root.join(SITE_CONFIG_FILENAME)
}
