pub mod check;
pub mod list;
pub mod show;
pub mod users;

use crate::domain::{AppError, Role, RoleCatalog};

/// Look up a role by id, failing with `RoleNotFound`.
fn find_role<'a>(catalog: &'a RoleCatalog, id: &str) -> Result<&'a Role, AppError> {
    catalog.get(id).ok_or_else(|| AppError::RoleNotFound(id.to_string()))
}
