//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold tasks in insertion order.
//! - Provide id-addressed removal and description replacement.
//!
//! # Invariants
//! - No two stored tasks share an id.
//! - Mutations never reorder the surviving tasks.

use crate::model::task::{Task, TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task list mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    DuplicateId(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "task id already present: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract for an ordered task list.
pub trait TaskRepository {
    /// Appends a task to the end of the list.
    fn append(&mut self, task: Task) -> RepoResult<()>;
    /// Removes the task with `id`, returning it.
    fn remove(&mut self, id: TaskId) -> RepoResult<Task>;
    /// Replaces the description of the task with `id`.
    fn set_description(&mut self, id: TaskId, description: String) -> RepoResult<()>;
    fn get(&self, id: TaskId) -> Option<&Task>;
    /// All tasks in insertion order.
    fn list(&self) -> &[Task];

    fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// `Vec`-backed task repository. Contents live for the process only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn append(&mut self, task: Task) -> RepoResult<()> {
        task.validate()?;
        if self.position(task.id()).is_some() {
            return Err(RepoError::DuplicateId(task.id()));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> RepoResult<Task> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        // `Vec::remove` shifts the tail left, keeping relative order.
        Ok(self.tasks.remove(index))
    }

    fn set_description(&mut self, id: TaskId, description: String) -> RepoResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(RepoError::NotFound(id))?;
        task.set_description(description);
        Ok(())
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    fn list(&self) -> &[Task] {
        &self.tasks
    }
}
