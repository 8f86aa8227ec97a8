//! Core state logic for the to-do list widget.
//! This crate is the single source of truth for task list invariants; the
//! presentation layer only renders state and forwards user intents.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::DraftBuffers;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use service::id_source::{IdSource, RandomIdSource};
pub use service::task_list_store::{StoreSnapshot, TaskListStore, MAX_ID_ATTEMPTS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
