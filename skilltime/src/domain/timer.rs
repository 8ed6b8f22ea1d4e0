use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{ProjectId, TrackerError};

/// Phase derived from the running/paused flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
}

impl std::fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerPhase::Idle => write!(f, "Idle"),
            TimerPhase::Running => write!(f, "Running"),
            TimerPhase::Paused => write!(f, "Paused"),
        }
    }
}

/// The stopwatch session in progress.
///
/// All transitions are pure: the caller supplies `now` and persists the result.
/// `elapsed_seconds` only advances through [`TimerState::tick`], and only while
/// the phase is [`TimerPhase::Running`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub is_running: bool,
    pub is_paused: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    pub elapsed_seconds: u64,
    pub project_id: Option<ProjectId>,
    pub description: String,
}

/// A finished session, produced by [`TimerState::stop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSession {
    pub project_id: ProjectId,
    pub description: String,
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    pub elapsed_seconds: u64,
}

impl CompletedSession {
    /// Whole minutes worked; partial minutes are dropped.
    pub fn duration_minutes(&self) -> u32 {
        (self.elapsed_seconds / 60) as u32
    }
}

impl TimerState {
    pub fn phase(&self) -> TimerPhase {
        match (self.is_running, self.is_paused) {
            (false, _) => TimerPhase::Idle,
            (true, false) => TimerPhase::Running,
            (true, true) => TimerPhase::Paused,
        }
    }

    pub fn is_counting(&self) -> bool {
        self.phase() == TimerPhase::Running
    }

    pub fn has_project(&self) -> bool {
        self.project_id.is_some()
    }

    pub fn select_project(&mut self, project_id: Option<ProjectId>) {
        self.project_id = project_id;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Start, or resume after a pause.
    ///
    /// The original start timestamp is kept across pause/resume.
    pub fn start(&mut self, now: OffsetDateTime) -> Result<(), TrackerError> {
        if !self.has_project() {
            return Err(TrackerError::NoProjectSelected);
        }
        self.is_running = true;
        self.is_paused = false;
        self.start_time = Some(self.start_time.unwrap_or(now));
        Ok(())
    }

    /// Freeze accumulation. Only meaningful while running.
    pub fn pause(&mut self) {
        if self.phase() == TimerPhase::Running {
            self.is_paused = true;
        }
    }

    /// Advance the counter by one second. Returns whether it counted.
    pub fn tick(&mut self) -> bool {
        if self.is_counting() {
            self.elapsed_seconds += 1;
            true
        } else {
            false
        }
    }

    /// Stop the session and reset to idle.
    ///
    /// A session is only produced when time has elapsed and a project is
    /// selected; the state is reset either way.
    pub fn stop(&mut self, now: OffsetDateTime) -> Option<CompletedSession> {
        let finished = std::mem::take(self);
        if finished.elapsed_seconds == 0 {
            return None;
        }
        let project_id = finished.project_id?;
        let start_time = finished
            .start_time
            .unwrap_or_else(|| now - time::Duration::seconds(finished.elapsed_seconds as i64));
        Some(CompletedSession {
            project_id,
            description: finished.description,
            start_time,
            end_time: now,
            elapsed_seconds: finished.elapsed_seconds,
        })
    }

    pub fn elapsed_hms(&self) -> (u64, u64, u64) {
        let total = self.elapsed_seconds;
        (total / 3600, (total % 3600) / 60, total % 60)
    }

    /// Elapsed time as `HH:MM:SS`.
    pub fn format_elapsed(&self) -> String {
        let (h, m, s) = self.elapsed_hms();
        format!("{:02}:{:02}:{:02}", h, m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn with_project() -> TimerState {
        let mut timer = TimerState::default();
        timer.select_project(Some(ProjectId::new("p1")));
        timer
    }

    #[test]
    fn start_without_project_is_rejected() {
        let mut timer = TimerState::default();
        let result = timer.start(datetime!(2024-03-04 09:00 UTC));
        assert!(matches!(result, Err(TrackerError::NoProjectSelected)));
        assert_eq!(timer, TimerState::default());
    }

    #[test]
    fn start_records_timestamp_once() {
        let mut timer = with_project();
        let first = datetime!(2024-03-04 09:00 UTC);
        timer.start(first).unwrap();
        timer.pause();
        timer.start(datetime!(2024-03-04 10:00 UTC)).unwrap();
        assert_eq!(timer.start_time, Some(first));
        assert_eq!(timer.phase(), TimerPhase::Running);
    }

    #[test]
    fn ticks_only_count_while_running() {
        let mut timer = with_project();
        assert!(!timer.tick());
        timer.start(datetime!(2024-03-04 09:00 UTC)).unwrap();
        for expected in 1..=3 {
            assert!(timer.tick());
            assert_eq!(timer.elapsed_seconds, expected);
        }
        timer.pause();
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert_eq!(timer.elapsed_seconds, 3);
    }

    #[test]
    fn pause_while_idle_does_nothing() {
        let mut timer = with_project();
        timer.pause();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert!(!timer.is_paused);
    }

    #[test]
    fn stop_without_elapsed_time_yields_nothing_and_resets() {
        let mut timer = with_project();
        timer.start(datetime!(2024-03-04 09:00 UTC)).unwrap();
        assert!(timer.stop(datetime!(2024-03-04 09:00 UTC)).is_none());
        assert_eq!(timer, TimerState::default());
    }

    #[test]
    fn stop_without_project_yields_nothing_and_resets() {
        let mut timer = TimerState {
            is_running: true,
            elapsed_seconds: 120,
            ..Default::default()
        };
        assert!(timer.stop(datetime!(2024-03-04 09:02 UTC)).is_none());
        assert_eq!(timer, TimerState::default());
    }

    #[test]
    fn stop_produces_session_with_whole_minutes() {
        let mut timer = with_project();
        timer.set_description("Wireframes");
        let start = datetime!(2024-03-04 09:00 UTC);
        timer.start(start).unwrap();
        for _ in 0..(5 * 60 + 59) {
            timer.tick();
        }
        let end = datetime!(2024-03-04 09:06 UTC);
        let session = timer.stop(end).unwrap();
        assert_eq!(session.duration_minutes(), 5);
        assert_eq!(session.start_time, start);
        assert_eq!(session.end_time, end);
        assert_eq!(session.description, "Wireframes");
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn elapsed_formats_as_clock() {
        let timer = TimerState {
            elapsed_seconds: 3_725,
            ..Default::default()
        };
        assert_eq!(timer.format_elapsed(), "01:02:05");
    }

    #[test]
    fn timer_round_trips_through_json() {
        let mut timer = with_project();
        timer.start(datetime!(2024-03-04 09:00 UTC)).unwrap();
        timer.tick();
        let json = serde_json::to_string(&timer).unwrap();
        let back: TimerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, timer);
    }
}
