//! panel-roles: role and permission model for a CMS administrative panel.
//!
//! A [`Role`] is built once from a loosely-typed [`RoleData`] record and then
//! answers permission queries. The role named `admin` passes every check.
//! A [`RoleCatalog`] holds the roles of one site; the user registry that
//! backs [`Role::users`] is supplied by the caller through [`UserRegistry`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    PermissionCheck, PermissionEntry, RoleDetail, check_permission, check_permission_at,
    list_roles, list_roles_at, role_users, role_users_at, show_role, show_role_at,
};
pub use domain::{
    AppError, FlagValue, Permission, PermissionSet, PermissionsInput, Role, RoleCatalog, RoleData,
    RoleDebugInfo, RoleError, RoleSummary, SUPERUSER_ROLE_ID, SiteConfig, User,
};
pub use ports::{RoleDefinitionSource, UserRegistry};
