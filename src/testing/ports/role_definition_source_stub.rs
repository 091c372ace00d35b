use crate::domain::{AppError, RoleData};
use crate::ports::RoleDefinitionSource;

/// Role definition source serving a fixed list.
#[derive(Default)]
pub struct StubRoleDefinitionSource {
    definitions: Vec<RoleData>,
}

impl StubRoleDefinitionSource {
    pub fn new(definitions: Vec<RoleData>) -> Self {
        Self { definitions }
    }
}

impl RoleDefinitionSource for StubRoleDefinitionSource {
    fn load_role_definitions(&self) -> Result<Vec<RoleData>, AppError> {
        Ok(self.definitions.clone())
    }
}
