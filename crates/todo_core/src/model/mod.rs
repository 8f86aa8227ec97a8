//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the task record and the pending-input buffers.
//! - Keep identifier rules in one place.
//!
//! # Invariants
//! - Every task is identified by a non-nil `TaskId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod draft;
pub mod task;
