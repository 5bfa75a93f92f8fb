//! Tasks of the planner, and the shape of the records served by the remote source

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stable, opaque identity handle for a [`Task`].
///
/// Task identity is by handle, never by value: two tasks may carry the same title, tag and due
/// date and must remain independently addressable (so that a toggle or a delete targets the exact
/// task the user interacted with, not a value-equal twin). All lookups into a
/// [`TaskStore`](crate::TaskStore) go through this handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Pick a new (random) task ID
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task of the planner
///
/// Tasks are created and mutated only through a [`TaskStore`](crate::TaskStore), which issues
/// their IDs and enforces the title/tag normalization rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,

    /// The display title of the task. Non-empty and trimmed
    title: String,
    /// A free-form label ("Work", "Today · High"...). Never blank, see [`crate::config::DEFAULT_TAG`]
    tag: String,
    /// Whether this task is completed
    done: bool,
    /// The calendar day this task is planned for
    due_date: NaiveDate,
}

impl Task {
    pub(crate) fn new(title: String, tag: String, done: bool, due_date: NaiveDate) -> Self {
        Self {
            id: TaskId::random(),
            title,
            tag,
            done,
            due_date,
        }
    }

    pub fn id(&self) -> &TaskId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn tag(&self) -> &str { &self.tag }
    pub fn done(&self) -> bool { self.done }
    pub fn due_date(&self) -> NaiveDate { self.due_date }

    /// Flip the completion state and return the new value
    pub(crate) fn toggle_done(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}

/// A task record as served by the remote task source.
///
/// The remote schema does not carry a due date in this version: reconciled records are all
/// assigned the session's "today" (see [`TaskStore::reconcile`](crate::TaskStore::reconcile)).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteTask {
    pub title: String,
    pub tag: String,
    pub done: bool,
}
