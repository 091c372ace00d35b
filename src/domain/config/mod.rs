pub mod parse;
pub mod paths;
pub mod site;

pub use parse::parse_config_content;
pub use site::{AccountsSettings, RolesSettings, SiteConfig};
