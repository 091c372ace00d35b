//! List command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_list(root: PathBuf, json: bool) -> Result<(), AppError> {
    let summaries = crate::app::api::list_roles_at(root)?;

    if json {
        return super::print_json(&summaries);
    }

    for summary in &summaries {
        let mut flags = Vec::new();
        if summary.is_default {
            flags.push("default");
        }
        if summary.has_panel_access {
            flags.push("panel");
        }
        println!("{:<16} {:<24} {}", summary.id, summary.name, flags.join(", "));
    }
    Ok(())
}
