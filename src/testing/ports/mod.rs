mod role_definition_source_stub;
mod user_registry_stub;

pub use self::role_definition_source_stub::StubRoleDefinitionSource;
pub use self::user_registry_stub::StubUserRegistry;
