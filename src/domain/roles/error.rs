/// Role construction error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    #[error("The role {field} is missing")]
    MissingField { field: &'static str },

    #[error("No admin role is configured")]
    MissingAdminRole,

    #[error("No default role is configured")]
    MissingDefaultRole,
}
