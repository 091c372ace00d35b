use serde::Serialize;

use super::find_role;
use crate::app::AppContext;
use crate::domain::{AppError, Role, RoleDebugInfo};
use crate::ports::{RoleDefinitionSource, UserRegistry};

/// Full view of one role.
#[derive(Debug, Clone, Serialize)]
pub struct RoleDetail {
    #[serde(flatten)]
    pub info: RoleDebugInfo,
    pub superuser: bool,
    /// Effective value of every permission key the role knows about.
    pub permissions: Vec<PermissionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionEntry {
    pub key: String,
    pub granted: bool,
    /// Whether the key is one of the built-in panel permissions.
    pub known: bool,
}

pub fn execute<S, U>(ctx: &AppContext<S, U>, role_id: &str) -> Result<RoleDetail, AppError>
where
    S: RoleDefinitionSource,
    U: UserRegistry,
{
    let catalog = ctx.catalog()?;
    let role = find_role(&catalog, role_id)?;

    Ok(RoleDetail {
        info: role.debug_info(ctx.users())?,
        superuser: role.is_superuser(),
        permissions: permission_entries(role),
    })
}

fn permission_entries(role: &Role) -> Vec<PermissionEntry> {
    let known = role.permissions().iter().map(|(permission, _)| PermissionEntry {
        key: permission.key().to_string(),
        granted: role.allows(permission),
        known: true,
    });
    let extra = role.permissions().extra().keys().map(|key| PermissionEntry {
        key: key.clone(),
        granted: role.has_permission(key),
        known: false,
    });
    known.chain(extra).collect()
}
