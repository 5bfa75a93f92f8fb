//! This crate provides the core of a week-scoped personal task planner.
//!
//! The authoritative task collection lives in a [`TaskStore`]; the navigable 7-day window and its
//! selected day live in a [`WeekSelector`].
//!
//! These two are orchestrated by a [`PlannerController`]. \
//! A `PlannerController` reconciles the task list fetched from a remote source into the store,
//! re-filters the store whenever the selected day changes, and publishes the list of tasks visible
//! for the selected day after every mutation. It is the only type a presentation layer needs to
//! talk to.
//!
//! The remote source is abstracted by the [`TaskSource`](traits::TaskSource) trait; the [`client`]
//! module provides an HTTP implementation of it, and tests can provide in-memory ones.

pub mod traits;

pub mod week;
pub use week::{WeekDay, WeekSelector};
mod task;
pub use task::{RemoteTask, Task, TaskId};
pub mod store;
pub use store::{DeletedHandle, TaskStore};
pub mod planner;
pub use planner::PlannerController;
mod error;
pub use error::PlannerError;

pub mod client;

pub mod config;
