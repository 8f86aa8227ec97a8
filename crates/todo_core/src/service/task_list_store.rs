//! Task list store service.
//!
//! # Responsibility
//! - Own the canonical task list and the two draft buffers.
//! - Provide the add/delete/edit transitions the presentation layer invokes.
//! - Hand out read access and owned snapshots for re-rendering.
//!
//! # Invariants
//! - Public transitions never fail; rejected input is a silent no-op.
//! - An id is issued at most once per store lifetime.
//! - Task text is never written to logs.

use crate::model::draft::DraftBuffers;
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{InMemoryTaskRepository, RepoError, TaskRepository};
use crate::service::id_source::{IdSource, RandomIdSource};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound on id redraws for a single add.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Owned view of the store for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    pub drafts: DraftBuffers,
}

/// Single-writer store behind the to-do widget.
///
/// Callers re-read [`TaskListStore::tasks`] and [`TaskListStore::drafts`]
/// (or take a [`TaskListStore::snapshot`]) after every mutating call.
pub struct TaskListStore<R = InMemoryTaskRepository, S = RandomIdSource>
where
    R: TaskRepository,
    S: IdSource,
{
    repo: R,
    id_source: S,
    drafts: DraftBuffers,
    issued_ids: HashSet<TaskId>,
}

impl TaskListStore {
    /// Creates an empty in-memory store with random ids.
    pub fn new() -> Self {
        Self::with_parts(InMemoryTaskRepository::new(), RandomIdSource)
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TaskRepository, S: IdSource> TaskListStore<R, S> {
    /// Creates a store over the given repository and id source.
    ///
    /// Ids already present in `repo` count as issued.
    pub fn with_parts(repo: R, id_source: S) -> Self {
        let issued_ids = repo.list().iter().map(Task::id).collect();
        Self {
            repo,
            id_source,
            drafts: DraftBuffers::default(),
            issued_ids,
        }
    }

    pub fn drafts(&self) -> &DraftBuffers {
        &self.drafts
    }

    pub fn set_title_draft(&mut self, title: impl Into<String>) {
        self.drafts.title = title.into();
    }

    pub fn set_description_draft(&mut self, description: impl Into<String>) {
        self.drafts.description = description.into();
    }

    /// Discards both drafts without adding a task.
    pub fn clear_drafts(&mut self) {
        self.drafts.clear();
    }

    /// Commits the current drafts as a new task.
    ///
    /// # Contract
    /// - No-op (drafts kept) when the description draft is blank after trim.
    /// - Title is stored verbatim; description is stored trimmed.
    /// - On success the task is appended and both drafts are cleared.
    /// - Returns the new id, or `None` for a no-op.
    pub fn add_task(&mut self) -> Option<TaskId> {
        if !self.drafts.is_committable() {
            debug!("event=task_add module=store status=skipped reason=empty_description");
            return None;
        }

        let id = self.fresh_id()?;
        let task = Task::with_id(
            id,
            self.drafts.title.clone(),
            self.drafts.description.trim(),
        )
        .ok()?;

        if let Err(err) = self.repo.append(task) {
            warn!("event=task_add module=store status=error error={err}");
            return None;
        }
        self.issued_ids.insert(id);
        self.drafts.clear();

        debug!(
            "event=task_add module=store status=ok task_id={id} count={}",
            self.repo.len()
        );
        Some(id)
    }

    /// Sets both drafts, then commits them. See [`TaskListStore::add_task`].
    ///
    /// On a no-op the drafts keep the values passed in.
    pub fn add_task_with(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<TaskId> {
        self.set_title_draft(title);
        self.set_description_draft(description);
        self.add_task()
    }

    /// Removes the task with `id`.
    ///
    /// Returns `false` (list untouched) when no task has that id.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        match self.repo.remove(id) {
            Ok(_) => {
                debug!(
                    "event=task_delete module=store status=ok task_id={id} count={}",
                    self.repo.len()
                );
                true
            }
            Err(err) => {
                log_miss("task_delete", id, &err);
                false
            }
        }
    }

    /// Replaces the description of the task with `id`, verbatim.
    ///
    /// Empty text is accepted. Returns `false` when no task has that id.
    pub fn edit_task(&mut self, id: TaskId, description: impl Into<String>) -> bool {
        match self.repo.set_description(id, description.into()) {
            Ok(()) => {
                debug!("event=task_edit module=store status=ok task_id={id}");
                true
            }
            Err(err) => {
                log_miss("task_edit", id, &err);
                false
            }
        }
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.repo.list()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Owned copy of the current state for rendering.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tasks: self.repo.list().to_vec(),
            drafts: self.drafts.clone(),
        }
    }

    fn fresh_id(&mut self) -> Option<TaskId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.id_source.next_id();
            // `issued_ids` is a superset of the live ids.
            if candidate.is_nil() || self.issued_ids.contains(&candidate) {
                debug!("event=task_id_redraw module=store status=retry");
                continue;
            }
            return Some(candidate);
        }
        warn!(
            "event=task_add module=store status=error reason=id_exhausted attempts={MAX_ID_ATTEMPTS}"
        );
        None
    }
}

fn log_miss(event: &str, id: TaskId, err: &RepoError) {
    match err {
        RepoError::NotFound(_) => {
            debug!("event={event} module=store status=skipped reason=not_found task_id={id}");
        }
        other => warn!("event={event} module=store status=error task_id={id} error={other}"),
    }
}
