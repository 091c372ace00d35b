use std::collections::BTreeMap;

use super::permission::Permission;

/// Permission table of a role.
///
/// Known permissions live in a fixed table indexed by [`Permission`]. Keys that
/// are not known permissions are kept verbatim in an overflow map so that
/// older or extended role definitions keep working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionSet {
    known: [bool; Permission::COUNT],
    extra: BTreeMap<String, bool>,
}

impl PermissionSet {
    /// Every known permission granted.
    pub fn allow_all() -> Self {
        Self { known: [true; Permission::COUNT], extra: BTreeMap::new() }
    }

    /// Every known permission denied.
    pub fn deny_all() -> Self {
        Self { known: [false; Permission::COUNT], extra: BTreeMap::new() }
    }

    /// Whether a known permission is granted.
    pub fn allows(&self, permission: Permission) -> bool {
        self.known[permission.index()]
    }

    /// Stored value for an arbitrary key, `None` when the key was never set.
    pub fn get(&self, key: &str) -> Option<bool> {
        match Permission::from_key(key) {
            Some(permission) => Some(self.allows(permission)),
            None => self.extra.get(key).copied(),
        }
    }

    /// Known permissions with their values, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Permission, bool)> + '_ {
        Permission::ALL.iter().map(|p| (*p, self.known[p.index()]))
    }

    /// Keys outside the known set, as supplied by the role definition.
    pub fn extra(&self) -> &BTreeMap<String, bool> {
        &self.extra
    }

    /// Number of known permissions currently granted.
    pub fn granted_count(&self) -> usize {
        self.known.iter().filter(|granted| **granted).count()
    }

    pub(crate) fn set(&mut self, key: &str, value: bool) {
        match Permission::from_key(key) {
            Some(permission) => self.known[permission.index()] = value,
            None => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::allow_all()
    }
}
