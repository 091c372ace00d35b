use tracing::{debug, warn};

use super::error::RoleError;
use super::role::{Role, SUPERUSER_ROLE_ID};
use super::role_data::RoleData;
use crate::domain::User;

/// The set of roles configured for one site.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    /// Build the catalog from role definitions.
    ///
    /// With no definitions the built-in `admin` and `editor` roles are used.
    /// A later definition reusing an id replaces the earlier one in place.
    pub fn from_definitions(definitions: Vec<RoleData>) -> Result<Self, RoleError> {
        let definitions =
            if definitions.is_empty() { builtin_definitions() } else { definitions };

        let mut roles: Vec<Role> = Vec::with_capacity(definitions.len());
        for data in definitions {
            let role = Role::new(data)?;
            match roles.iter().position(|existing| existing.id() == role.id()) {
                Some(index) => {
                    warn!(role = %role, "duplicate role definition replaces earlier one");
                    roles[index] = role;
                }
                None => roles.push(role),
            }
        }

        let catalog = Self { roles };
        if catalog.get(SUPERUSER_ROLE_ID).is_none() {
            return Err(RoleError::MissingAdminRole);
        }
        if catalog.find_default().is_none() {
            return Err(RoleError::MissingDefaultRole);
        }

        debug!(roles = catalog.len(), "role catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.id() == id)
    }

    /// First role flagged as default.
    pub fn find_default(&self) -> Option<&Role> {
        self.roles.iter().find(|role| role.is_default())
    }

    /// The role a user effectively holds: their assigned role when it exists
    /// in this catalog, the default role otherwise.
    pub fn role_for(&self, user: &User) -> Option<&Role> {
        user.role.as_deref().and_then(|id| self.get(id)).or_else(|| self.find_default())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.roles.iter().map(Role::id).collect()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

fn builtin_definitions() -> Vec<RoleData> {
    vec![
        RoleData::new(SUPERUSER_ROLE_ID, "Admin").with_default(true).with_panel(true),
        RoleData::new("editor", "Editor").with_panel(true),
    ]
}

impl<'a> IntoIterator for &'a RoleCatalog {
    type Item = &'a Role;
    type IntoIter = std::slice::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}
