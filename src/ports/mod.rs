mod role_definition_source;
mod user_registry;

pub use role_definition_source::RoleDefinitionSource;
pub use user_registry::UserRegistry;
