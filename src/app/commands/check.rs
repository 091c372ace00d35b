use serde::Serialize;

use super::find_role;
use crate::app::AppContext;
use crate::domain::{AppError, Permission};
use crate::ports::{RoleDefinitionSource, UserRegistry};

/// Outcome of a single permission check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    pub role: String,
    pub permission: String,
    pub granted: bool,
    /// Granted through the superuser bypass rather than the permission table.
    pub superuser: bool,
    /// Whether the key is one of the built-in panel permissions.
    pub known: bool,
}

pub fn execute<S, U>(
    ctx: &AppContext<S, U>,
    role_id: &str,
    permission: &str,
) -> Result<PermissionCheck, AppError>
where
    S: RoleDefinitionSource,
    U: UserRegistry,
{
    let catalog = ctx.catalog()?;
    let role = find_role(&catalog, role_id)?;

    Ok(PermissionCheck {
        role: role.id().to_string(),
        permission: permission.to_string(),
        granted: role.has_permission(permission),
        superuser: role.is_superuser(),
        known: Permission::from_key(permission).is_some(),
    })
}
