//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `todo_core` linkage and environment-driven logging setup.
//! - Drive one scripted session the way a presentation layer would and
//!   print the resulting render snapshot.

use std::process::ExitCode;
use todo_core::{CoreConfig, TaskListStore};

fn main() -> ExitCode {
    println!("todo_core version={}", todo_core::core_version());

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    match config.init_logging() {
        Ok(true) => println!("logging level={}", config.log_level),
        Ok(false) => {}
        Err(err) => {
            eprintln!("logging error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut store = TaskListStore::new();

    store.set_title_draft("Errands");
    store.set_description_draft("  Buy milk  ");
    let errands = store.add_task();

    store.set_title_draft("Ignored");
    store.set_description_draft("   ");
    store.add_task();
    store.clear_drafts();

    let chores = store.add_task_with("Chores", "Take out trash");
    store.add_task_with("", "Call plumber");

    if let Some(id) = errands {
        store.edit_task(id, "Buy oat milk");
    }
    if let Some(id) = chores {
        store.delete_task(id);
    }

    match serde_json::to_string_pretty(&store.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("snapshot encode failed: {err}");
            ExitCode::FAILURE
        }
    }
}
