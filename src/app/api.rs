//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against a site directory.

use std::path::PathBuf;

use crate::adapters::filesystem::{AccountsDirectory, RoleDefinitionFile, SiteRoot};
use crate::app::{
    AppContext,
    commands::{check, list, show, users},
};

pub use crate::app::commands::check::PermissionCheck;
pub use crate::app::commands::show::{PermissionEntry, RoleDetail};
pub use crate::domain::{AppError, RoleSummary, User};

/// Create an `AppContext` for the site at `path`.
fn create_context(
    path: PathBuf,
) -> Result<AppContext<RoleDefinitionFile, AccountsDirectory>, AppError> {
    let site = SiteRoot::new(path);
    let config = crate::app::config::load_config(site.root())?;
    Ok(AppContext::new(site.role_definitions(&config)?, site.accounts(&config)?))
}

// =============================================================================
// List Command API
// =============================================================================

/// List every role of the site in the current directory.
pub fn list_roles() -> Result<Vec<RoleSummary>, AppError> {
    list_roles_at(std::env::current_dir()?)
}

/// List every role of the site at the specified path.
pub fn list_roles_at(path: impl Into<PathBuf>) -> Result<Vec<RoleSummary>, AppError> {
    let ctx = create_context(path.into())?;
    list::execute(&ctx)
}

// =============================================================================
// Show Command API
// =============================================================================

/// Show one role of the site in the current directory.
pub fn show_role(role: &str) -> Result<RoleDetail, AppError> {
    show_role_at(role, std::env::current_dir()?)
}

/// Show one role of the site at the specified path.
pub fn show_role_at(role: &str, path: impl Into<PathBuf>) -> Result<RoleDetail, AppError> {
    let ctx = create_context(path.into())?;
    show::execute(&ctx, role)
}

// =============================================================================
// Check Command API
// =============================================================================

/// Check a permission for a role of the site in the current directory.
pub fn check_permission(role: &str, permission: &str) -> Result<PermissionCheck, AppError> {
    check_permission_at(role, permission, std::env::current_dir()?)
}

/// Check a permission for a role of the site at the specified path.
pub fn check_permission_at(
    role: &str,
    permission: &str,
    path: impl Into<PathBuf>,
) -> Result<PermissionCheck, AppError> {
    let ctx = create_context(path.into())?;
    check::execute(&ctx, role, permission)
}

// =============================================================================
// Users Command API
// =============================================================================

/// Users assigned a role of the site in the current directory.
pub fn role_users(role: &str) -> Result<Vec<User>, AppError> {
    role_users_at(role, std::env::current_dir()?)
}

/// Users assigned a role of the site at the specified path.
pub fn role_users_at(role: &str, path: impl Into<PathBuf>) -> Result<Vec<User>, AppError> {
    let ctx = create_context(path.into())?;
    users::execute(&ctx, role)
}
