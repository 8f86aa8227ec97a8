//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the storage contract the store service talks to.
//! - Keep list bookkeeping (ordering, lookup by id) out of the service.
//!
//! # Invariants
//! - Repository writes call `Task::validate()` before mutating.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`);
//!   deciding whether they are user-visible is the caller's job.

pub mod task_repo;
