//! Errors returned by planner operations

use chrono::NaiveDate;
use thiserror::Error;

/// The ways a planner operation can be rejected.
///
/// None of these is fatal: an operation that returns an error has left the planner unchanged, and
/// the `Display` output of each variant is suitable to show to the user as-is.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlannerError {
    /// A task cannot be created with a blank title
    #[error("Title required")]
    TitleRequired,

    /// The targeted task is not a current member of the collection.
    /// The caller probably displayed it just before it got deleted; treating this as a no-op is fine.
    #[error("Task not found")]
    TaskNotFound,

    /// The given date is not part of the current week window.
    /// Day selections are built from the window itself, so this indicates a bug in the caller.
    #[error("{0} is outside the displayed week")]
    InvalidSelection(NaiveDate),
}
