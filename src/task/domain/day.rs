//! Calendar-day windows used by the daily duplicate check and reports.

use chrono::{DateTime, Days, NaiveDate, Utc};

/// Half-open interval `[start, end)` covering one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayWindow {
    date: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// Returns the window for the given calendar date.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
        // The last representable date has no successor; its window runs to the
        // maximum timestamp instead.
        let end = date
            .checked_add_days(Days::new(1))
            .map_or(DateTime::<Utc>::MAX_UTC, |next| {
                next.and_time(chrono::NaiveTime::MIN).and_utc()
            });
        Self { date, start, end }
    }

    /// Returns the window of the day that contains `instant`.
    #[must_use]
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self::for_date(instant.date_naive())
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the inclusive start of the window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive end of the window.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns whether `timestamp` falls inside the window.
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}
