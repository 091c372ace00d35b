use super::find_role;
use crate::app::AppContext;
use crate::domain::{AppError, User};
use crate::ports::{RoleDefinitionSource, UserRegistry};

/// Users explicitly assigned the given role.
pub fn execute<S, U>(ctx: &AppContext<S, U>, role_id: &str) -> Result<Vec<User>, AppError>
where
    S: RoleDefinitionSource,
    U: UserRegistry,
{
    let catalog = ctx.catalog()?;
    find_role(&catalog, role_id)?.users(ctx.users())
}
