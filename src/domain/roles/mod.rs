pub mod catalog;
pub mod error;
pub mod permission;
pub mod permission_set;
pub mod role;
pub mod role_data;

pub use catalog::RoleCatalog;
pub use error::RoleError;
pub use permission::Permission;
pub use permission_set::PermissionSet;
pub use role::{Role, RoleDebugInfo, RoleSummary, SUPERUSER_ROLE_ID};
pub use role_data::{FlagValue, PermissionsInput, RoleData};
