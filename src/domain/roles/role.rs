use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::error::RoleError;
use super::permission::Permission;
use super::permission_set::PermissionSet;
use super::role_data::{PermissionsInput, RoleData};
use crate::domain::{AppError, User};
use crate::ports::UserRegistry;

/// Identifier of the role that passes every permission check.
pub const SUPERUSER_ROLE_ID: &str = "admin";

/// A named access-control profile for the panel.
///
/// Immutable once constructed; safe to share between any number of readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: String,
    name: String,
    permissions: PermissionSet,
    default: bool,
}

/// Flat, display-oriented view of a role.
///
/// Deliberately leaves out the permission table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    pub id: String,
    pub name: String,
    pub is_default: bool,
    pub has_panel_access: bool,
}

/// Diagnostic dump of a role: its summary plus the users assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDebugInfo {
    #[serde(flatten)]
    pub summary: RoleSummary,
    pub users: Vec<User>,
}

impl Role {
    /// Build a role from a raw definition.
    ///
    /// `permissions` is resolved in order: defaults, then a grant map merged
    /// on top or the `false` sentinel denying everything, then the legacy
    /// `panel` flag overriding `panel.access`.
    pub fn new(data: RoleData) -> Result<Self, RoleError> {
        let id = required(data.id, "id")?;
        let name = required(data.name, "name")?;

        let mut permissions = PermissionSet::allow_all();
        match data.permissions {
            Some(PermissionsInput::Grants(grants)) => {
                for (key, value) in &grants {
                    permissions.set(key, value.is_true());
                }
            }
            Some(PermissionsInput::DenyAll) => permissions = PermissionSet::deny_all(),
            Some(PermissionsInput::Ignored) => {
                debug!(role = %id, "unsupported permissions value, keeping defaults");
            }
            None => {}
        }

        if let Some(panel) = data.panel.and_then(|flag| flag.as_bool()) {
            permissions.set(Permission::PanelAccess.key(), panel);
        }

        let default = data.default.is_some_and(|flag| flag.is_true());

        Ok(Self { id, name, permissions, default })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether users without an explicit role fall back to this one.
    pub fn is_default(&self) -> bool {
        self.default
    }

    /// The stored permission table. Ignores the superuser bypass.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Whether this is the superuser role, which passes every check.
    pub fn is_superuser(&self) -> bool {
        self.id == SUPERUSER_ROLE_ID
    }

    /// Whether this role may perform the action behind `key`.
    pub fn has_permission(&self, key: &str) -> bool {
        self.is_superuser() || self.permissions.get(key) == Some(true)
    }

    pub fn allows(&self, permission: Permission) -> bool {
        self.is_superuser() || self.permissions.allows(permission)
    }

    /// Legacy single-flag panel access.
    pub fn has_panel_access(&self) -> bool {
        self.has_permission(Permission::PanelAccess.key())
    }

    pub fn summary(&self) -> RoleSummary {
        RoleSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            is_default: self.is_default(),
            has_panel_access: self.has_panel_access(),
        }
    }

    /// Users the registry reports as assigned to this role.
    pub fn users<R>(&self, registry: &R) -> Result<Vec<User>, AppError>
    where
        R: UserRegistry + ?Sized,
    {
        registry.users_with_role(&self.id)
    }

    pub fn debug_info<R>(&self, registry: &R) -> Result<RoleDebugInfo, AppError>
    where
        R: UserRegistry + ?Sized,
    {
        Ok(RoleDebugInfo { summary: self.summary(), users: self.users(registry)? })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RoleError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RoleError::MissingField { field }),
    }
}
