pub mod ports;

pub use ports::StubRoleDefinitionSource;
pub use ports::StubUserRegistry;
