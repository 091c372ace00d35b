use crate::domain::{AppError, RoleCatalog};
use crate::ports::{RoleDefinitionSource, UserRegistry};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: RoleDefinitionSource, U: UserRegistry> {
    roles: S,
    users: U,
}

impl<S: RoleDefinitionSource, U: UserRegistry> AppContext<S, U> {
    /// Create a new application context.
    pub fn new(roles: S, users: U) -> Self {
        Self { roles, users }
    }

    /// Get a reference to the role definition source.
    pub fn roles(&self) -> &S {
        &self.roles
    }

    /// Get a reference to the user registry.
    pub fn users(&self) -> &U {
        &self.users
    }

    /// Build the role catalog from the configured definitions.
    pub fn catalog(&self) -> Result<RoleCatalog, AppError> {
        let definitions = self.roles.load_role_definitions()?;
        Ok(RoleCatalog::from_definitions(definitions)?)
    }
}
