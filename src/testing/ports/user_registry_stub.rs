use std::sync::Mutex;

use crate::domain::{AppError, User};
use crate::ports::UserRegistry;

/// In-memory user registry that records every role it is queried for.
pub struct StubUserRegistry {
    users: Vec<User>,
    queried_roles: Mutex<Vec<String>>,
}

impl StubUserRegistry {
    pub fn new(users: Vec<User>) -> Self {
        Self { users, queried_roles: Mutex::new(Vec::new()) }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Role ids passed to `users_with_role`, in call order.
    pub fn queried_roles(&self) -> Vec<String> {
        self.queried_roles.lock().unwrap().clone()
    }
}

impl UserRegistry for StubUserRegistry {
    fn users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.clone())
    }

    fn users_with_role(&self, role_id: &str) -> Result<Vec<User>, AppError> {
        self.queried_roles.lock().unwrap().push(role_id.to_string());
        Ok(self.users.iter().filter(|user| user.has_role(role_id)).cloned().collect())
    }
}
