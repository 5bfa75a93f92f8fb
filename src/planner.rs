//! This module orchestrates the task collection and the week window behind a single façade
//!
//! It is also responsible for publishing the state the presentation layer renders

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::error::PlannerError;
use crate::store::{DeletedHandle, TaskStore};
use crate::task::{RemoteTask, Task, TaskId};
use crate::traits::TaskSource;
use crate::week::{WeekDay, WeekSelector};

/// An advisory message for the user (a toast, a snackbar...)
///
/// These are purely informative: every outcome they describe is also available as a return value
/// of the corresponding [`PlannerController`] operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Nothing has happened yet
    None,
    /// The remote load finished and the collection now holds `count` tasks
    Loaded { count: usize },
    /// A task was created
    TaskAdded,
    /// A task was rejected because its title was blank
    TitleRequired,
    /// A task was toggled to "done"
    MarkedDone,
    /// A task was toggled back to "active"
    MarkedActive,
    /// A task was deleted (undo stays available until the next delete)
    TaskDeleted,
    /// The last deleted task was restored
    TaskRestored,
}

impl Default for Notice {
    fn default() -> Self {
        Self::None
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            // Blank on purpose: presentation layers show a notice only when it is non-blank
            Notice::None => Ok(()),
            Notice::Loaded { count } => write!(f, "Loaded {} tasks", count),
            Notice::TaskAdded => write!(f, "Task added"),
            Notice::TitleRequired => write!(f, "Title required"),
            Notice::MarkedDone => write!(f, "Marked done"),
            Notice::MarkedActive => write!(f, "Marked active"),
            Notice::TaskDeleted => write!(f, "Task deleted"),
            Notice::TaskRestored => write!(f, "Task restored"),
        }
    }
}

/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<Notice>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<Notice>;

/// Create a feedback channel, that can be used to retrieve the advisory messages the planner emits
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(Notice::default())
}

/// Receives the tasks visible for the currently selected day, in insertion order
pub type VisibleTasksReceiver = tokio::sync::watch::Receiver<Vec<Task>>;
/// Receives the week window (with its selection) on every successful day change
pub type WeekReceiver = tokio::sync::watch::Receiver<[WeekDay; 7]>;

/// The single coordination point between a [`TaskStore`], a [`WeekSelector`] and the presentation
/// layer.
///
/// The controller reacts to the remote-load result by reconciling it into the store, reacts to day
/// selections by re-filtering the store, and applies user mutations (create, toggle, delete with
/// undo). After each of these it republishes the list of tasks visible for the selected day, so
/// that subscribers always observe `store.tasks_for_date(selected day)` in insertion order.
///
/// All mutations are `&mut self` and run to completion before the next one: the only suspension
/// point is the remote fetch in [`Self::load`]. A task added while that fetch is outstanding does
/// not survive the reconciliation (the replacement is wholesale on purpose, see
/// [`TaskStore::reconcile`]).
pub struct PlannerController<S: TaskSource> {
    /// The remote source the initial task list comes from
    source: S,
    /// The authoritative collection
    store: TaskStore,
    /// The week window and its selected day
    week: WeekSelector,
    /// Wall-clock "today", sampled once at construction. Every relative date of the session
    /// (window anchor, reconciled due dates, sample set) derives from it, which keeps the core
    /// deterministic
    today: NaiveDate,

    visible_tx: tokio::sync::watch::Sender<Vec<Task>>,
    visible_rx: VisibleTasksReceiver,
    week_tx: tokio::sync::watch::Sender<[WeekDay; 7]>,
    week_rx: WeekReceiver,
    feedback: Option<FeedbackSender>,
}

impl<S: TaskSource> PlannerController<S> {
    /// Create a controller over an empty collection, with `today` selected in `today`'s week.
    pub fn new(source: S, today: NaiveDate) -> Self {
        Self::new_inner(source, today, None)
    }

    /// Same as [`Self::new`], but advisory messages will be sent to `feedback`
    pub fn new_with_feedback_channel(source: S, today: NaiveDate, feedback: FeedbackSender) -> Self {
        Self::new_inner(source, today, Some(feedback))
    }

    fn new_inner(source: S, today: NaiveDate, feedback: Option<FeedbackSender>) -> Self {
        let store = TaskStore::new();
        let week = WeekSelector::new(today);
        let (visible_tx, visible_rx) = tokio::sync::watch::channel(Vec::new());
        let (week_tx, week_rx) = tokio::sync::watch::channel(*week.days());

        Self {
            source,
            store,
            week,
            today,
            visible_tx,
            visible_rx,
            week_tx,
            week_rx,
            feedback,
        }
    }

    /// Subscribe to the list of visible tasks
    pub fn subscribe_visible(&self) -> VisibleTasksReceiver {
        self.visible_rx.clone()
    }

    /// Subscribe to the week window and its selection
    pub fn subscribe_week(&self) -> WeekReceiver {
        self.week_rx.clone()
    }

    /// Fetch the task list from the remote source and reconcile it into the collection.
    ///
    /// This is the one-shot initial load. It returns whether it succeeded: a fetch error is logged
    /// and leaves the whole planner untouched (retrying is up to the caller).
    pub async fn load(&mut self) -> bool {
        match self.source.fetch_tasks().await {
            Err(err) => {
                log::error!("Unable to fetch the remote task list: {}", err);
                false
            },
            Ok(remote) => {
                self.on_remote_loaded(remote);
                true
            },
        }
    }

    /// Reconcile an already-fetched task list into the collection, then republish the visible
    /// tasks for the currently selected day.
    ///
    /// See [`TaskStore::reconcile`] for the replacement semantics (wholesale, due dates defaulted
    /// to today, sample set on an empty list).
    pub fn on_remote_loaded(&mut self, remote: Vec<RemoteTask>) {
        self.store.reconcile(remote, self.today);
        self.notify(Notice::Loaded { count: self.store.len() });
        self.publish_visible();
    }

    /// Select another day of the week window and republish the tasks visible for it.
    ///
    /// On failure (`date` outside the window) nothing is republished and the selection is kept;
    /// the error is propagated rather than swallowed since day selections are built from the
    /// window itself and an out-of-window date means the caller has a bug.
    pub fn select_day(&mut self, date: NaiveDate) -> Result<(), PlannerError> {
        self.week.select(date)?;
        self.publish_week();
        self.publish_visible();
        Ok(())
    }

    /// Create a task due on the currently selected day.
    ///
    /// A blank title is rejected with no mutation (and a "Title required" notice); a blank tag is
    /// replaced with the configured default.
    pub fn add_task(&mut self, title: &str, tag: &str) -> Result<TaskId, PlannerError> {
        let due_date = self.week.current();
        self.add_task_due(title, tag, due_date)
    }

    /// Same as [`Self::add_task`], for an explicit due date rather than the selected day
    pub fn add_task_due(&mut self, title: &str, tag: &str, due_date: NaiveDate) -> Result<TaskId, PlannerError> {
        match self.store.add(title, tag, due_date) {
            Err(err) => {
                self.notify(Notice::TitleRequired);
                Err(err)
            },
            Ok(id) => {
                self.notify(Notice::TaskAdded);
                self.publish_visible();
                Ok(id)
            },
        }
    }

    /// Flip the completion state of a task, returning the new state.
    ///
    /// Toggling a task that is no longer a member is a harmless no-op for the planner; the error
    /// is still returned for callers that care.
    pub fn toggle_task(&mut self, id: &TaskId) -> Result<bool, PlannerError> {
        let done = self.store.toggle(id)?;
        self.notify(match done {
            true => Notice::MarkedDone,
            false => Notice::MarkedActive,
        });
        self.publish_visible();
        Ok(done)
    }

    /// Delete a task, returning the handle that can undo the deletion.
    ///
    /// The handle stays redeemable until the next delete supersedes it; the planner enforces no
    /// undo deadline (time-boxing the "Undo" affordance is a presentation concern).
    pub fn delete_task(&mut self, id: &TaskId) -> Result<DeletedHandle, PlannerError> {
        let handle = self.store.delete(id)?;
        self.notify(Notice::TaskDeleted);
        self.publish_visible();
        Ok(handle)
    }

    /// Undo the deletion designated by `handle`.
    ///
    /// The task reappears (at the end of the collection) and becomes visible again under its due
    /// date. Fails when the handle has been superseded by a later delete.
    pub fn undo_delete(&mut self, handle: &DeletedHandle) -> Result<TaskId, PlannerError> {
        let id = self.store.restore(handle)?;
        self.notify(Notice::TaskRestored);
        self.publish_visible();
        Ok(id)
    }

    /// The tasks visible for the selected day, as last published
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.visible_rx.borrow().clone()
    }

    /// The week window with its current selection
    pub fn week_days(&self) -> [WeekDay; 7] {
        *self.week.days()
    }

    /// The currently selected date
    pub fn selected_date(&self) -> NaiveDate {
        self.week.current()
    }

    /// Read access to the authoritative collection
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// The remote source this controller loads from
    pub fn source(&self) -> &S {
        &self.source
    }

    fn publish_visible(&self) {
        let date = self.week.current();
        let tasks = self.store.tasks_for_date(date);
        log::debug!("Publishing {} visible task(s) for {}", tasks.len(), date);
        let _ = self.visible_tx.send(tasks);
    }

    fn publish_week(&self) {
        let _ = self.week_tx.send(*self.week.days());
    }

    fn notify(&self, notice: Notice) {
        if let Some(sender) = &self.feedback {
            if sender.send(notice).is_err() {
                log::warn!("The feedback receiver is gone, dropping the notice");
            }
        }
    }
}
