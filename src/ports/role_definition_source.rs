use crate::domain::{AppError, RoleData};

/// Port for reading the role definitions configured for a site.
pub trait RoleDefinitionSource {
    /// Load every configured role definition, in configuration order.
    ///
    /// An empty list means no roles are configured and the built-in
    /// catalog applies.
    fn load_role_definitions(&self) -> Result<Vec<RoleData>, AppError>;
}
