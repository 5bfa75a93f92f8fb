//! The authoritative task collection

use chrono::{Duration, NaiveDate};

use crate::config;
use crate::error::PlannerError;
use crate::task::{RemoteTask, Task, TaskId};
use crate::week::next_or_same_friday;

/// A handle to a deleted task, required to undo the deletion.
///
/// The store only remembers the most recent deletion: a new delete supersedes the previous handle,
/// whose task is then gone for good. A still-current handle can be redeemed at any time (the store
/// enforces no undo deadline, that is a presentation concern).
#[derive(Clone, Debug)]
pub struct DeletedHandle {
    task: Task,
    position: usize,
}

impl DeletedHandle {
    /// The removed task, e.g. to name it in a "Task deleted" message
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// The index the task had in the collection when it was removed.
    ///
    /// Restoring appends to the end of the collection rather than reinserting here, so this is
    /// informational only (a list view can use it to animate the removal).
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Sole owner of the authoritative task collection.
///
/// All task reads and writes funnel through this store. Tasks are kept in insertion order, so
/// that [`Self::tasks_for_date`] is stable across unrelated mutations, and a one-slot buffer
/// holds the last removed task to support undo.
#[derive(Clone, Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_removed: Option<DeletedHandle>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection with the given remote records.
    ///
    /// Each record becomes a task due `today` (the remote schema carries no due date in this
    /// version). An empty list is the regular "no data yet" answer and seeds the collection with
    /// a fixed sample set spread across the week instead: a task due `today`, one due tomorrow,
    /// and a completed one due on the coming Friday.
    ///
    /// Reconciliation is destructive: previously added local tasks do not survive it, and any
    /// pending undo handle becomes stale. It is meant to be invoked once, at load time.
    pub fn reconcile(&mut self, remote: Vec<RemoteTask>, today: NaiveDate) {
        self.tasks.clear();
        self.last_removed = None;

        if remote.is_empty() {
            log::debug!("The remote task list is empty, seeding the sample set");
            let dues = [today, today + Duration::days(1), next_or_same_friday(today)];
            let dones = [false, false, true];
            for (i, (title, tag)) in config::SAMPLE_TASKS.iter().enumerate() {
                self.tasks.push(Task::new(title.to_string(), tag.to_string(), dones[i], dues[i]));
            }
        } else {
            log::debug!("Reconciling {} remote task records", remote.len());
            for record in remote {
                self.tasks.push(Task::new(record.title, record.tag, record.done, today));
            }
        }
    }

    /// Create a task due on `due_date` and append it to the collection.
    ///
    /// The title is trimmed and must not end up empty; a blank tag is replaced with the configured
    /// default. Returns the ID of the new task, to be used as its identity handle from now on.
    pub fn add(&mut self, title: &str, tag: &str, due_date: NaiveDate) -> Result<TaskId, PlannerError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PlannerError::TitleRequired);
        }

        let tag = match tag.trim() {
            "" => config::default_tag(),
            trimmed => trimmed.to_string(),
        };

        let task = Task::new(title.to_string(), tag, false, due_date);
        let id = *task.id();
        self.tasks.push(task);
        Ok(id)
    }

    /// Flip the completion state of the exact referenced task, returning the new state
    pub fn toggle(&mut self, id: &TaskId) -> Result<bool, PlannerError> {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            None => {
                log::warn!("Cannot toggle task {}: it is not a member of the collection", id);
                Err(PlannerError::TaskNotFound)
            },
            Some(task) => Ok(task.toggle_done()),
        }
    }

    /// Remove the exact referenced task from the collection.
    ///
    /// The removed task takes the single "last removed" slot (evicting any previous occupant,
    /// which becomes unrecoverable) and a handle to it is returned for a later [`Self::restore`].
    pub fn delete(&mut self, id: &TaskId) -> Result<DeletedHandle, PlannerError> {
        match self.tasks.iter().position(|task| task.id() == id) {
            None => {
                log::warn!("Cannot delete task {}: it is not a member of the collection", id);
                Err(PlannerError::TaskNotFound)
            },
            Some(position) => {
                let task = self.tasks.remove(position);
                let handle = DeletedHandle { task, position };
                self.last_removed = Some(handle.clone());
                Ok(handle)
            },
        }
    }

    /// Undo a deletion.
    ///
    /// Succeeds only while `handle` still designates the most recent deletion; a superseded or
    /// already-redeemed handle is reported as [`PlannerError::TaskNotFound`]. The task reappears
    /// at the end of the collection, not at its original index.
    pub fn restore(&mut self, handle: &DeletedHandle) -> Result<TaskId, PlannerError> {
        match self.last_removed.take() {
            Some(held) if held.task.id() == handle.task.id() => {
                let id = *held.task.id();
                self.tasks.push(held.task);
                Ok(id)
            },
            held => {
                // Not the handle we hold (if any): put the occupant back untouched
                self.last_removed = held;
                log::warn!("Cannot restore task {}: its deletion has been superseded", handle.task.id());
                Err(PlannerError::TaskNotFound)
            },
        }
    }

    /// All current members due on `date`, in insertion order. Read-only
    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<Task> {
        self.tasks.iter()
            .filter(|task| task.due_date() == date)
            .cloned()
            .collect()
    }

    /// Returns the task with this ID, if it is a current member
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// The whole collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
