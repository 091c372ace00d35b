use crate::domain::{AppError, User};

/// Port for the externally owned registry of panel users.
pub trait UserRegistry {
    /// Every user known to the registry.
    fn users(&self) -> Result<Vec<User>, AppError>;

    /// Users explicitly assigned `role_id`.
    fn users_with_role(&self, role_id: &str) -> Result<Vec<User>, AppError> {
        Ok(self.users()?.into_iter().filter(|user| user.has_role(role_id)).collect())
    }
}
