//! Construction record for [`Role`](super::Role).
//!
//! Role definitions come from hand-edited configuration, so the optional
//! fields are loosely typed: a flag may hold a real boolean or anything else,
//! and `permissions` may be a map, the `false` sentinel, or junk. Each shape
//! has a defined meaning and none of them is an error.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A configuration value that is expected to be a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    /// A genuine boolean.
    Bool(bool),
    /// Any other value (string, number, list, null, ...).
    Other,
}

impl FlagValue {
    /// `true` only for a genuine boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, FlagValue::Bool(true))
    }

    /// The boolean, if this is a genuine boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(value) => Some(*value),
            FlagValue::Other => None,
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl<'de> Deserialize<'de> for FlagValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match dto::RawFlag::deserialize(deserializer)? {
            dto::RawFlag::Bool(value) => FlagValue::Bool(value),
            dto::RawFlag::Other(_) => FlagValue::Other,
        })
    }
}

/// The `permissions` field of a role definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionsInput {
    /// Per-key overrides merged over the defaults.
    Grants(BTreeMap<String, FlagValue>),
    /// The literal `false`: deny every known permission.
    DenyAll,
    /// Anything else; the defaults stay in place.
    Ignored,
}

impl PermissionsInput {
    /// Build a grant map from `(key, value)` pairs.
    pub fn grants<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        PermissionsInput::Grants(
            entries.into_iter().map(|(k, v)| (k.into(), FlagValue::Bool(v))).collect(),
        )
    }
}

impl<'de> Deserialize<'de> for PermissionsInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match dto::RawPermissions::deserialize(deserializer)? {
            dto::RawPermissions::Grants(grants) => PermissionsInput::Grants(
                grants.into_iter().map(|(key, value)| (key.0, value)).collect(),
            ),
            dto::RawPermissions::Toggle(false) => PermissionsInput::DenyAll,
            dto::RawPermissions::Toggle(true) | dto::RawPermissions::Other(_) => {
                PermissionsInput::Ignored
            }
        })
    }
}

/// Raw role definition as found in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoleData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub permissions: Option<PermissionsInput>,
    /// Legacy single-flag panel access.
    #[serde(default)]
    pub panel: Option<FlagValue>,
    #[serde(default)]
    pub default: Option<FlagValue>,
}

impl RoleData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: Some(id.into()), name: Some(name.into()), ..Self::default() }
    }

    pub fn with_permissions(mut self, permissions: PermissionsInput) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn with_panel(mut self, panel: impl Into<FlagValue>) -> Self {
        self.panel = Some(panel.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<FlagValue>) -> Self {
        self.default = Some(default.into());
        self
    }
}

mod dto {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub enum RawFlag {
        Bool(bool),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub enum RawPermissions {
        Grants(BTreeMap<GrantKey, FlagValue>),
        Toggle(bool),
        Other(IgnoredAny),
    }

    /// Mapping key of a grant; scalar keys of any type are read as text.
    #[derive(PartialEq, Eq, PartialOrd, Ord)]
    pub struct GrantKey(pub String);

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Text(String),
        Bool(bool),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    impl<'de> Deserialize<'de> for GrantKey {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(GrantKey(match RawKey::deserialize(deserializer)? {
                RawKey::Text(key) => key,
                RawKey::Bool(key) => u8::from(key).to_string(),
                RawKey::Signed(key) => key.to_string(),
                RawKey::Unsigned(key) => key.to_string(),
                RawKey::Float(key) => key.to_string(),
            }))
        }
    }
}
