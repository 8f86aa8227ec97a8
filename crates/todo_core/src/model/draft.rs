//! Pending input buffers for a task that has not been added yet.

use serde::{Deserialize, Serialize};

/// Title and description text typed by the user before committing a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBuffers {
    pub title: String,
    pub description: String,
}

impl DraftBuffers {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Whether these drafts would produce a task on add.
    ///
    /// Only the description is guarded; the title may be empty.
    pub fn is_committable(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Resets both buffers to empty strings.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}
