//! Show command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_show(root: PathBuf, role: &str, json: bool) -> Result<(), AppError> {
    let detail = crate::app::api::show_role_at(role, root)?;

    if json {
        return super::print_json(&detail);
    }

    let summary = &detail.info.summary;
    println!("{} ({})", summary.name, summary.id);
    println!("  default:      {}", summary.is_default);
    println!("  panel access: {}", summary.has_panel_access);
    if detail.superuser {
        println!("  superuser:    every permission is granted");
    }

    println!("Permissions:");
    for entry in &detail.permissions {
        let marker = if entry.granted { "✅" } else { "❌" };
        let suffix = if entry.known { "" } else { " (custom)" };
        println!("  {} {}{}", marker, entry.key, suffix);
    }

    println!("Users:");
    if detail.info.users.is_empty() {
        println!("  (none)");
    }
    for user in &detail.info.users {
        println!("  • {}", user.username);
    }
    Ok(())
}
