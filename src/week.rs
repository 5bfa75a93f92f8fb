//! The navigable 7-day window and its selected day

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// One entry of the 7-day week strip
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekDay {
    date: NaiveDate,
    selected: bool,
}

impl WeekDay {
    pub fn date(&self) -> NaiveDate { self.date }
    pub fn selected(&self) -> bool { self.selected }
}

/// Owner of the week window and of the single selected day.
///
/// The window is the 7 consecutive dates starting on the most recent Sunday on/before the `today`
/// given at construction. It is a fixed snapshot for the whole session: it does not roll forward
/// if the app stays open across midnight. Exactly one entry is selected at all times.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekSelector {
    days: [WeekDay; 7],
}

impl WeekSelector {
    /// Build the window anchored on `today`'s week, with `today` selected.
    ///
    /// `today` is inside the window by construction, so the "exactly one selected" invariant holds
    /// from the start.
    pub fn new(today: NaiveDate) -> Self {
        let start = previous_or_same_sunday(today);
        let mut days = [WeekDay { date: today, selected: false }; 7];
        for (i, day) in days.iter_mut().enumerate() {
            let date = start + Duration::days(i as i64);
            *day = WeekDay { date, selected: date == today };
        }
        Self { days }
    }

    /// Move the selection to `date`.
    ///
    /// Fails with [`PlannerError::InvalidSelection`] when `date` is not one of the 7 window
    /// entries, in which case the current selection is kept.
    pub fn select(&mut self, date: NaiveDate) -> Result<(), PlannerError> {
        if self.days.iter().any(|day| day.date == date) == false {
            return Err(PlannerError::InvalidSelection(date));
        }
        for day in self.days.iter_mut() {
            day.selected = day.date == date;
        }
        Ok(())
    }

    /// The currently selected date
    pub fn current(&self) -> NaiveDate {
        self.days.iter()
            .find(|day| day.selected)
            .map(|day| day.date)
            .expect("the week window always has a selected day")
    }

    /// The whole window, in chronological order
    pub fn days(&self) -> &[WeekDay; 7] {
        &self.days
    }
}

/// The most recent Sunday on or before `date` (`date` itself when it is a Sunday)
pub fn previous_or_same_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The coming Friday on or after `date` (`date` itself when it is a Friday)
pub fn next_or_same_friday(date: NaiveDate) -> NaiveDate {
    let fri = Weekday::Fri.num_days_from_sunday() as i64;
    let cur = date.weekday().num_days_from_sunday() as i64;
    date + Duration::days((fri + 7 - cur) % 7)
}
