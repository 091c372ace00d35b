//! CLI Adapter.

mod check;
mod list;
mod show;
mod users;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PANEL_ROLES_LOG";

#[derive(Parser)]
#[command(name = "panel-roles")]
#[command(version)]
#[command(about = "Inspect the panel roles and permissions of a site", long_about = None)]
struct Cli {
    /// Site root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every configured role
    #[clap(visible_alias = "ls")]
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one role with its permissions and users
    Show {
        /// Role id
        role: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether a role holds a permission (exit 1 when denied)
    Check {
        /// Role id
        role: String,
        /// Permission key, e.g. panel.user.delete
        permission: String,
    },
    /// List the users assigned to a role
    Users {
        /// Role id
        role: String,
        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = resolve_root(cli.root).and_then(|root| match cli.command {
        Commands::List { json } => list::run_list(root, json).map(|_| 0),
        Commands::Show { role, json } => show::run_show(root, &role, json).map(|_| 0),
        Commands::Check { role, permission } => check::run_check(root, &role, &permission),
        Commands::Users { role, json } => users::run_users(root, &role, json).map(|_| 0),
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
