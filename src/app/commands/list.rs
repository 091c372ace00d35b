use crate::app::AppContext;
use crate::domain::{AppError, RoleSummary};
use crate::ports::{RoleDefinitionSource, UserRegistry};

/// Summaries of every role in catalog order.
pub fn execute<S, U>(ctx: &AppContext<S, U>) -> Result<Vec<RoleSummary>, AppError>
where
    S: RoleDefinitionSource,
    U: UserRegistry,
{
    let catalog = ctx.catalog()?;
    Ok(catalog.iter().map(|role| role.summary()).collect())
}
