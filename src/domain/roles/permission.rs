use std::fmt;
use std::str::FromStr;

/// A known panel permission.
///
/// Each variant maps to one dot-namespaced permission key as it appears in
/// role definitions (e.g. `panel.user.delete`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    PanelAccess,
    PageCreate,
    PageUpdate,
    PageDelete,
    PageSort,
    PageHide,
    PageMove,
    SiteUpdate,
    FileUpload,
    FileReplace,
    FileRename,
    FileUpdate,
    FileSort,
    FileDelete,
    UserCreate,
    UserUpdate,
    UserDelete,
    AvatarUpload,
    AvatarDelete,
}

impl Permission {
    /// Number of known permissions.
    pub const COUNT: usize = 19;

    /// Every known permission, in canonical order.
    pub const ALL: [Permission; Permission::COUNT] = [
        Permission::PanelAccess,
        Permission::PageCreate,
        Permission::PageUpdate,
        Permission::PageDelete,
        Permission::PageSort,
        Permission::PageHide,
        Permission::PageMove,
        Permission::SiteUpdate,
        Permission::FileUpload,
        Permission::FileReplace,
        Permission::FileRename,
        Permission::FileUpdate,
        Permission::FileSort,
        Permission::FileDelete,
        Permission::UserCreate,
        Permission::UserUpdate,
        Permission::UserDelete,
        Permission::AvatarUpload,
        Permission::AvatarDelete,
    ];

    /// The permission key used in role definitions.
    pub fn key(&self) -> &'static str {
        match self {
            Permission::PanelAccess => "panel.access",
            Permission::PageCreate => "panel.page.create",
            Permission::PageUpdate => "panel.page.update",
            Permission::PageDelete => "panel.page.delete",
            Permission::PageSort => "panel.page.sort",
            Permission::PageHide => "panel.page.hide",
            Permission::PageMove => "panel.page.move",
            Permission::SiteUpdate => "panel.site.update",
            Permission::FileUpload => "panel.file.upload",
            Permission::FileReplace => "panel.file.replace",
            Permission::FileRename => "panel.file.rename",
            Permission::FileUpdate => "panel.file.update",
            Permission::FileSort => "panel.file.sort",
            Permission::FileDelete => "panel.file.delete",
            Permission::UserCreate => "panel.user.create",
            Permission::UserUpdate => "panel.user.update",
            Permission::UserDelete => "panel.user.delete",
            Permission::AvatarUpload => "panel.avatar.upload",
            Permission::AvatarDelete => "panel.avatar.delete",
        }
    }

    /// Look up a known permission by its exact key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }

    /// Position of this permission in the fixed permission table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown permission '{}'", s))
    }
}
