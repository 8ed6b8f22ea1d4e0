use serde::{Deserialize, Serialize};
use time::{macros::time, Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use super::{EntryId, Project, ProjectId, TrackerError};

/// One completed, billable span of work.
///
/// `project_name` and `hourly_rate` are snapshots taken when the entry was
/// created. Editing or deleting the project later does not change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: EntryId,
    pub project_id: ProjectId,
    pub project_name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    duration_minutes: u32,
    hourly_rate: f64,
    earnings: f64,
}

impl TimeEntry {
    pub fn new(
        id: impl Into<EntryId>,
        project: &Project,
        start_time: OffsetDateTime,
        end_time: OffsetDateTime,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            description: String::new(),
            start_time,
            end_time,
            duration_minutes,
            hourly_rate: project.hourly_rate,
            earnings: Self::compute_earnings(duration_minutes, project.hourly_rate),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// `duration / 60 * rate`. The only place earnings are derived.
    pub fn compute_earnings(duration_minutes: u32, hourly_rate: f64) -> f64 {
        duration_minutes as f64 / 60.0 * hourly_rate
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn earnings(&self) -> f64 {
        self.earnings
    }

    pub fn hours(&self) -> f64 {
        self.duration_minutes as f64 / 60.0
    }

    /// Apply an edit, recomputing earnings with the creation rule.
    ///
    /// Switching project re-snapshots its name and current rate; otherwise the
    /// entry keeps the rate it was created with.
    pub fn apply_update(
        &mut self,
        update: &EntryUpdate,
        new_project: Option<&Project>,
    ) -> Result<(), TrackerError> {
        if update.duration_minutes == Some(0) {
            return Err(TrackerError::EmptyDuration);
        }
        if let Some(project) = new_project {
            self.project_id = project.id.clone();
            self.project_name = project.name.clone();
            self.hourly_rate = project.hourly_rate;
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(minutes) = update.duration_minutes {
            self.duration_minutes = minutes;
        }
        self.earnings = Self::compute_earnings(self.duration_minutes, self.hourly_rate);
        Ok(())
    }
}

/// Input for logging time without running the timer.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualEntryForm {
    pub project_id: Option<ProjectId>,
    pub date: Date,
    pub hours: u32,
    pub minutes: u32,
    pub description: String,
}

impl ManualEntryForm {
    pub fn new(project_id: impl Into<ProjectId>, date: Date, hours: u32, minutes: u32) -> Self {
        Self {
            project_id: Some(project_id.into()),
            date,
            hours,
            minutes,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Total minutes, or `None` when the fields do not fit in a `u32`.
    pub fn duration_minutes(&self) -> Option<u32> {
        total_minutes(self.hours, self.minutes).ok()
    }

    /// The chosen date pinned to 12:00, so offset shifts never move it to
    /// a neighbouring day.
    pub fn timestamp(&self, offset: UtcOffset) -> OffsetDateTime {
        PrimitiveDateTime::new(self.date, time!(12:00)).assume_offset(offset)
    }

    /// The selected project and the total duration in minutes.
    pub fn validate(&self) -> Result<(&ProjectId, u32), TrackerError> {
        let project_id = self
            .project_id
            .as_ref()
            .ok_or(TrackerError::NoProjectSelected)?;
        let minutes = total_minutes(self.hours, self.minutes)?;
        if minutes == 0 {
            return Err(TrackerError::EmptyDuration);
        }
        Ok((project_id, minutes))
    }
}

/// `hours * 60 + minutes`, rejecting totals that overflow.
pub fn total_minutes(hours: u32, minutes: u32) -> Result<u32, TrackerError> {
    hours
        .checked_mul(60)
        .and_then(|m| m.checked_add(minutes))
        .ok_or(TrackerError::DurationTooLong { hours, minutes })
}

/// Changes to an existing entry. `None` fields are left as they are.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryUpdate {
    pub project_id: Option<ProjectId>,
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
}
