//! Users command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_users(root: PathBuf, role: &str, json: bool) -> Result<(), AppError> {
    let users = crate::app::api::role_users_at(role, root)?;

    if json {
        return super::print_json(&users);
    }

    for user in &users {
        match &user.email {
            Some(email) => println!("{} <{}>", user.username, email),
            None => println!("{}", user.username),
        }
    }
    Ok(())
}
