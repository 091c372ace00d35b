use serde::{Deserialize, Serialize};

/// A panel user as reported by the user registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Assigned role id, if any.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>, role: Option<&str>) -> Self {
        Self { username: username.into(), role: role.map(str::to_string), email: None }
    }

    /// Whether this user is explicitly assigned `role_id`.
    pub fn has_role(&self, role_id: &str) -> bool {
        self.role.as_deref() == Some(role_id)
    }
}
