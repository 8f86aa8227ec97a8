//! Identifier generation for new tasks.

use crate::model::task::TaskId;

/// Source of candidate ids for newly added tasks.
///
/// Candidates are not trusted: the store rejects nil and already-issued ids
/// and asks again.
pub trait IdSource {
    fn next_id(&mut self) -> TaskId;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&mut self) -> TaskId {
        TaskId::new_random()
    }
}

impl<F> IdSource for F
where
    F: FnMut() -> TaskId,
{
    fn next_id(&mut self) -> TaskId {
        self()
    }
}
