//! Core use-case services.
//!
//! # Responsibility
//! - Expose the task list transitions the presentation layer calls.
//! - Keep UI bindings decoupled from repository details.

pub mod id_source;
pub mod task_list_store;
