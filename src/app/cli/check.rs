//! Check command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

/// Prints `granted` or `denied`; the exit code is 0 only when granted.
pub fn run_check(root: PathBuf, role: &str, permission: &str) -> Result<i32, AppError> {
    let check = crate::app::api::check_permission_at(role, permission, root)?;

    if check.granted {
        println!("granted");
        Ok(0)
    } else {
        println!("denied");
        Ok(1)
    }
}
