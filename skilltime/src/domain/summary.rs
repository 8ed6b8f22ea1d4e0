use time::OffsetDateTime;

use super::{DateRange, TimeEntry};

/// Totals over a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_minutes: u64,
    pub total_earnings: f64,
}

impl Summary {
    /// Totals over an already-filtered list.
    pub fn of<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |mut acc, e| {
            acc.add(e);
            acc
        })
    }

    pub fn hours(&self) -> f64 {
        self.total_minutes as f64 / 60.0
    }

    /// Hours with one decimal, e.g. `"7.5"`.
    pub fn hours_display(&self) -> String {
        format!("{:.1}", self.hours())
    }

    /// Earnings with two decimals, e.g. `"375.00"`.
    pub fn earnings_display(&self) -> String {
        format!("{:.2}", self.total_earnings)
    }

    fn add(&mut self, entry: &TimeEntry) {
        self.total_minutes += entry.duration_minutes() as u64;
        self.total_earnings += entry.earnings();
    }
}

/// Totals for the entries whose start time falls in `range`.
pub fn summarize(entries: &[TimeEntry], range: DateRange, now: OffsetDateTime) -> Summary {
    Summary::of(entries.iter().filter(|e| range.contains(e.start_time, now)))
}

/// Dashboard totals; each range is its own pass over the list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summaries {
    pub today: Summary,
    pub week: Summary,
    pub month: Summary,
    pub all: Summary,
}

impl Summaries {
    pub fn compute(entries: &[TimeEntry], now: OffsetDateTime) -> Self {
        Self {
            today: summarize(entries, DateRange::Today, now),
            week: summarize(entries, DateRange::Week, now),
            month: summarize(entries, DateRange::Month, now),
            all: summarize(entries, DateRange::All, now),
        }
    }

    pub fn get(&self, range: DateRange) -> Summary {
        match range {
            DateRange::Today => self.today,
            DateRange::Week => self.week,
            DateRange::Month => self.month,
            DateRange::All => self.all,
        }
    }
}
