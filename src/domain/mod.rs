pub mod config;
pub mod error;
pub mod roles;
pub mod user;

pub use config::SiteConfig;
pub use error::AppError;
pub use roles::{
    FlagValue, Permission, PermissionSet, PermissionsInput, Role, RoleCatalog, RoleData,
    RoleDebugInfo, RoleError, RoleSummary, SUPERUSER_ROLE_ID,
};
pub use user::User;
