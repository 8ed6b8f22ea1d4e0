use time::{Duration, OffsetDateTime, PrimitiveDateTime, Time};

use super::{ProjectId, TimeEntry};

/// Calendar window used for filtering and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::Today,
        DateRange::Week,
        DateRange::Month,
        DateRange::All,
    ];

    /// Half-open `[start, end)` window around `now`, in `now`'s offset.
    /// `All` has no window.
    pub fn window(self, now: OffsetDateTime) -> Option<(OffsetDateTime, OffsetDateTime)> {
        let today = now.date();
        let (first_day, next_first_day) = match self {
            DateRange::All => return None,
            DateRange::Today => (today, today + Duration::days(1)),
            DateRange::Week => {
                let monday =
                    today - Duration::days(today.weekday().number_days_from_monday() as i64);
                (monday, monday + Duration::days(7))
            }
            DateRange::Month => {
                let first = today - Duration::days(today.day() as i64 - 1);
                // 32 days past the 1st always lands in the following month.
                let probe = first + Duration::days(32);
                (first, probe - Duration::days(probe.day() as i64 - 1))
            }
        };
        let at_midnight =
            |d| PrimitiveDateTime::new(d, Time::MIDNIGHT).assume_offset(now.offset());
        Some((at_midnight(first_day), at_midnight(next_first_day)))
    }

    pub fn contains(self, instant: OffsetDateTime, now: OffsetDateTime) -> bool {
        match self.window(now) {
            Some((start, end)) => instant >= start && instant < end,
            None => true,
        }
    }

    /// The next range in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Week => "This Week",
            DateRange::Month => "This Month",
            DateRange::All => "All Time",
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRange::Today => write!(f, "today"),
            DateRange::Week => write!(f, "week"),
            DateRange::Month => write!(f, "month"),
            DateRange::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "all" => Ok(DateRange::All),
            _ => Err(format!("Unknown date range: {}", s)),
        }
    }
}

/// Read-side restriction of the entry list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryFilter {
    pub project_id: Option<ProjectId>,
    pub range: DateRange,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn matches(&self, entry: &TimeEntry, now: OffsetDateTime) -> bool {
        if let Some(project_id) = &self.project_id {
            if &entry.project_id != project_id {
                return false;
            }
        }
        self.range.contains(entry.start_time, now)
    }

    pub fn apply<'a>(&self, entries: &'a [TimeEntry], now: OffsetDateTime) -> Vec<&'a TimeEntry> {
        entries.iter().filter(|e| self.matches(e, now)).collect()
    }
}
