//! The tracker: projects, entries and the running timer behind one store.
//!
//! Every mutation updates memory first, then writes the affected key through
//! to storage. A failed write is logged and the key stays unsaved until a
//! later write of it succeeds; memory is never rolled back.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use time::{Date, OffsetDateTime, UtcOffset};

use crate::domain::{
    DateRange, EntryFilter, EntryId, EntryUpdate, ManualEntryForm, Project, ProjectForm,
    ProjectId, Summaries, Summary, TimeEntry, TimerState, TrackerError,
};
use crate::export;
use crate::store::{self, Storage, StorageKey};

pub struct Tracker<S: Storage> {
    store: S,
    projects: Vec<Project>,
    entries: Vec<TimeEntry>,
    timer: TimerState,
    unsaved: HashMap<StorageKey, String>,
}

impl<S: Storage> Tracker<S> {
    /// Load all three keys, falling back to empty lists and an idle timer.
    pub fn load(store: S) -> Self {
        let projects: Vec<Project> = store::load(&store, StorageKey::Projects, Vec::new());
        let entries: Vec<TimeEntry> = store::load(&store, StorageKey::Entries, Vec::new());
        let timer: TimerState = store::load(&store, StorageKey::Timer, TimerState::default());
        tracing::debug!(
            projects = projects.len(),
            entries = entries.len(),
            timer = %timer.phase(),
            "loaded tracker state"
        );
        Self {
            store,
            projects,
            entries,
            timer,
            unsaved: HashMap::new(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &EntryId) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    /// Failure message for a key whose latest state is not on disk, if any.
    pub fn last_persist_error(&self) -> Option<&str> {
        [StorageKey::Projects, StorageKey::Entries, StorageKey::Timer]
            .iter()
            .find_map(|key| self.unsaved.get(key))
            .map(String::as_str)
    }

    /// Write `key`, then retry any other key left unsaved by an earlier failure.
    fn persist(&mut self, key: StorageKey) {
        self.write(key);
        let pending: Vec<StorageKey> = self.unsaved.keys().copied().filter(|k| *k != key).collect();
        for key in pending {
            self.write(key);
        }
    }

    fn write(&mut self, key: StorageKey) {
        let result = match key {
            StorageKey::Projects => store::save(&self.store, key, &self.projects),
            StorageKey::Entries => store::save(&self.store, key, &self.entries),
            StorageKey::Timer => store::save(&self.store, key, &self.timer),
        };
        match result {
            Ok(()) => {
                if self.unsaved.remove(&key).is_some() {
                    tracing::info!(%key, "unsaved changes written");
                }
            }
            Err(e) => {
                tracing::error!(%key, "failed to persist, changes not saved: {}", e);
                self.unsaved.insert(key, e.to_string());
            }
        }
    }

    // Project registry

    pub fn add_project(&mut self, form: &ProjectForm) -> Result<&Project, TrackerError> {
        let project = Project::from_form(ProjectId::generate(), form)?;
        tracing::info!(id = %project.id, name = %project.name, "project added");
        self.projects.push(project);
        self.persist(StorageKey::Projects);
        let idx = self.projects.len() - 1;
        Ok(&self.projects[idx])
    }

    /// Merge the form into an existing project. Entries keep their snapshots.
    pub fn update_project(&mut self, id: &ProjectId, form: &ProjectForm) -> Result<(), TrackerError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| TrackerError::ProjectNotFound(id.clone()))?;
        project.apply_form(form)?;
        tracing::info!(%id, "project updated");
        self.persist(StorageKey::Projects);
        Ok(())
    }

    /// Whether a running or paused session is tracking time for `id`.
    pub fn is_project_in_use(&self, id: &ProjectId) -> bool {
        self.timer.is_running && self.timer.project_id.as_ref() == Some(id)
    }

    /// Remove a project. Its entries stay, with their name and rate snapshots.
    ///
    /// Refused while the timer has an active session on the project.
    pub fn delete_project(&mut self, id: &ProjectId) -> Result<Project, TrackerError> {
        if self.is_project_in_use(id) {
            return Err(TrackerError::ProjectInUse(id.clone()));
        }
        let idx = self
            .projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| TrackerError::ProjectNotFound(id.clone()))?;
        let removed = self.projects.remove(idx);
        tracing::info!(%id, "project deleted");
        self.persist(StorageKey::Projects);

        if self.timer.project_id.as_ref() == Some(id) {
            self.timer.select_project(None);
            self.persist(StorageKey::Timer);
        }
        Ok(removed)
    }

    // Timer

    pub fn select_timer_project(&mut self, id: Option<ProjectId>) -> Result<(), TrackerError> {
        if let Some(id) = &id {
            if self.project(id).is_none() {
                return Err(TrackerError::ProjectNotFound(id.clone()));
            }
        }
        self.timer.select_project(id);
        self.persist(StorageKey::Timer);
        Ok(())
    }

    pub fn set_timer_description(&mut self, description: impl Into<String>) {
        self.timer.set_description(description);
        self.persist(StorageKey::Timer);
    }

    /// Start or resume.
    pub fn start_timer(&mut self, now: OffsetDateTime) -> Result<(), TrackerError> {
        self.timer.start(now)?;
        tracing::debug!(elapsed = self.timer.elapsed_seconds, "timer running");
        self.persist(StorageKey::Timer);
        Ok(())
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
        tracing::debug!(elapsed = self.timer.elapsed_seconds, "timer paused");
        self.persist(StorageKey::Timer);
    }

    /// One second of the tick source. Returns whether the counter moved.
    pub fn tick(&mut self) -> bool {
        let counted = self.timer.tick();
        if counted {
            self.persist(StorageKey::Timer);
        }
        counted
    }

    /// Stop the timer, recording an entry when there is something to record.
    ///
    /// Earnings use the project's rate at stop time. The timer is always
    /// reset to idle.
    pub fn stop_timer(&mut self, now: OffsetDateTime) -> Option<&TimeEntry> {
        let session = self.timer.stop(now);
        self.persist(StorageKey::Timer);

        let session = session?;
        let Some(project) = self.project(&session.project_id) else {
            tracing::warn!(project = %session.project_id, "discarding session for deleted project");
            return None;
        };
        let entry = TimeEntry::new(
            EntryId::generate(),
            project,
            session.start_time,
            session.end_time,
            session.duration_minutes(),
        )
        .with_description(session.description);
        tracing::info!(
            id = %entry.id,
            project = %entry.project_name,
            minutes = entry.duration_minutes(),
            "time entry recorded from timer"
        );
        self.entries.insert(0, entry);
        self.persist(StorageKey::Entries);
        self.entries.first()
    }

    // Ledger

    pub fn add_manual_entry(
        &mut self,
        form: &ManualEntryForm,
        offset: UtcOffset,
    ) -> Result<&TimeEntry, TrackerError> {
        let (project_id, minutes) = form.validate()?;
        let project = self
            .project(project_id)
            .ok_or_else(|| TrackerError::ProjectNotFound(project_id.clone()))?;
        let at = form.timestamp(offset);
        let entry = TimeEntry::new(EntryId::generate(), project, at, at, minutes)
            .with_description(form.description.trim());
        let id = entry.id.clone();
        tracing::info!(%id, project = %entry.project_name, minutes = entry.duration_minutes(), "manual entry added");

        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        self.persist(StorageKey::Entries);
        self.entry(&id)
            .ok_or(TrackerError::EntryNotFound(id))
    }

    /// Edit an entry; earnings are recomputed with the creation rule.
    ///
    /// Naming the entry's own project is not a project change.
    pub fn update_entry(&mut self, id: &EntryId, update: &EntryUpdate) -> Result<(), TrackerError> {
        let current = self
            .entry(id)
            .map(|e| e.project_id.clone())
            .ok_or_else(|| TrackerError::EntryNotFound(id.clone()))?;
        let new_project = match &update.project_id {
            Some(pid) if *pid != current => Some(
                self.project(pid)
                    .cloned()
                    .ok_or_else(|| TrackerError::ProjectNotFound(pid.clone()))?,
            ),
            _ => None,
        };
        let entry = self
            .entries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| TrackerError::EntryNotFound(id.clone()))?;
        entry.apply_update(update, new_project.as_ref())?;
        tracing::info!(%id, "entry updated");
        self.persist(StorageKey::Entries);
        Ok(())
    }

    pub fn delete_entry(&mut self, id: &EntryId) -> Result<TimeEntry, TrackerError> {
        let idx = self
            .entries
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| TrackerError::EntryNotFound(id.clone()))?;
        let removed = self.entries.remove(idx);
        tracing::info!(%id, "entry deleted");
        self.persist(StorageKey::Entries);
        Ok(removed)
    }

    pub fn filter_entries(&self, filter: &EntryFilter, now: OffsetDateTime) -> Vec<&TimeEntry> {
        filter.apply(&self.entries, now)
    }

    pub fn summarize(&self, range: DateRange, now: OffsetDateTime) -> Summary {
        crate::domain::summarize(&self.entries, range, now)
    }

    pub fn summaries(&self, now: OffsetDateTime) -> Summaries {
        Summaries::compute(&self.entries, now)
    }

    /// Export the filtered view into `dir`.
    pub fn export_csv(
        &self,
        filter: &EntryFilter,
        now: OffsetDateTime,
        dir: &Path,
    ) -> Result<PathBuf, TrackerError> {
        let entries = self.filter_entries(filter, now);
        let today: Date = now.date();
        Ok(export::export_to_dir(dir, &entries, &self.projects, today)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StorageError};
    use std::sync::{Arc, Mutex};
    use time::macros::{date, datetime, offset};

    const NOW: OffsetDateTime = datetime!(2024-03-13 15:30 UTC);

    fn tracker_with_project(rate: f64) -> (Tracker<MemoryStore>, ProjectId) {
        let mut tracker = Tracker::load(MemoryStore::new());
        let id = tracker
            .add_project(&ProjectForm::new("Design Work", "Acme", rate))
            .unwrap()
            .id
            .clone();
        (tracker, id)
    }

    #[test]
    fn blank_project_form_adds_nothing() {
        let mut tracker = Tracker::load(MemoryStore::new());
        assert!(tracker.add_project(&ProjectForm::new("", "Acme", 10.0)).is_err());
        assert!(tracker.projects().is_empty());
    }

    #[test]
    fn stopping_timer_prepends_entry_at_current_rate() {
        let (mut tracker, pid) = tracker_with_project(50.0);
        tracker.select_timer_project(Some(pid.clone())).unwrap();
        tracker.start_timer(NOW).unwrap();
        for _ in 0..(90 * 60) {
            tracker.tick();
        }
        tracker
            .update_project(&pid, &ProjectForm::new("Design Work", "Acme", 60.0))
            .unwrap();
        let entry = tracker.stop_timer(NOW + time::Duration::minutes(90)).unwrap();
        assert_eq!(entry.duration_minutes(), 90);
        assert!((entry.earnings() - 90.0).abs() < 1e-9);
        assert_eq!(tracker.timer(), &TimerState::default());
    }

    #[test]
    fn stopping_with_no_elapsed_time_records_nothing() {
        let (mut tracker, pid) = tracker_with_project(50.0);
        tracker.select_timer_project(Some(pid)).unwrap();
        tracker.start_timer(NOW).unwrap();
        assert!(tracker.stop_timer(NOW).is_none());
        assert!(tracker.entries().is_empty());
        assert_eq!(tracker.timer(), &TimerState::default());
    }

    #[test]
    fn selecting_unknown_project_is_rejected() {
        let mut tracker = Tracker::load(MemoryStore::new());
        assert!(matches!(
            tracker.select_timer_project(Some(ProjectId::new("nope"))),
            Err(TrackerError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn manual_entries_are_kept_newest_first() {
        let (mut tracker, pid) = tracker_with_project(40.0);
        for (day, mins) in [(date!(2024 - 03 - 10), 30), (date!(2024 - 03 - 12), 45), (date!(2024 - 03 - 11), 15)] {
            let form = ManualEntryForm::new(pid.clone(), day, 0, mins);
            tracker.add_manual_entry(&form, offset!(UTC)).unwrap();
        }
        let days: Vec<u8> = tracker.entries().iter().map(|e| e.start_time.day()).collect();
        assert_eq!(days, vec![12, 11, 10]);
    }

    #[test]
    fn invalid_manual_entry_leaves_list_unchanged() {
        let (mut tracker, pid) = tracker_with_project(40.0);
        let empty = ManualEntryForm::new(pid, date!(2024 - 03 - 10), 0, 0);
        assert!(tracker.add_manual_entry(&empty, offset!(UTC)).is_err());
        let mut no_project = ManualEntryForm::new("x", date!(2024 - 03 - 10), 1, 0);
        no_project.project_id = None;
        assert!(tracker.add_manual_entry(&no_project, offset!(UTC)).is_err());
        assert!(tracker.entries().is_empty());
    }

    #[test]
    fn deleting_selected_project_clears_idle_timer_selection() {
        let (mut tracker, pid) = tracker_with_project(40.0);
        tracker.select_timer_project(Some(pid.clone())).unwrap();
        tracker.delete_project(&pid).unwrap();
        assert!(tracker.timer().project_id.is_none());
    }

    #[test]
    fn write_failure_is_recorded_and_memory_kept() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::load(store.clone());
        store.set_available(false);
        tracker
            .add_project(&ProjectForm::new("Design", "Acme", 10.0))
            .unwrap();
        assert_eq!(tracker.projects().len(), 1);
        assert!(tracker.last_persist_error().is_some());

        store.set_available(true);
        tracker
            .add_project(&ProjectForm::new("Dev", "Acme", 10.0))
            .unwrap();
        assert!(tracker.last_persist_error().is_none());
    }

    #[test]
    fn editing_with_own_project_keeps_snapshot_rate() {
        let (mut tracker, pid) = tracker_with_project(40.0);
        let form = ManualEntryForm::new(pid.clone(), date!(2024 - 03 - 10), 1, 0);
        let id = tracker.add_manual_entry(&form, offset!(UTC)).unwrap().id.clone();
        tracker
            .update_project(&pid, &ProjectForm::new("Design Work", "Acme", 100.0))
            .unwrap();

        let update = EntryUpdate {
            project_id: Some(pid),
            duration_minutes: Some(30),
            ..EntryUpdate::default()
        };
        tracker.update_entry(&id, &update).unwrap();
        let entry = tracker.entry(&id).unwrap();
        assert_eq!(entry.hourly_rate(), 40.0);
        assert!((entry.earnings() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_manual_entry_is_rejected() {
        let (mut tracker, pid) = tracker_with_project(40.0);
        let form = ManualEntryForm::new(pid, date!(2024 - 03 - 13), 80_000_000, 0);
        assert!(matches!(
            tracker.add_manual_entry(&form, offset!(UTC)),
            Err(TrackerError::DurationTooLong { .. })
        ));
        assert!(tracker.entries().is_empty());
    }

    #[test]
    fn active_session_project_cannot_be_deleted() {
        let (mut tracker, pid) = tracker_with_project(50.0);
        tracker.select_timer_project(Some(pid.clone())).unwrap();
        tracker.start_timer(NOW).unwrap();
        for _ in 0..(2 * 3600) {
            tracker.tick();
        }
        assert!(matches!(
            tracker.delete_project(&pid),
            Err(TrackerError::ProjectInUse(_))
        ));
        tracker.pause_timer();
        assert!(matches!(
            tracker.delete_project(&pid),
            Err(TrackerError::ProjectInUse(_))
        ));
        assert!(tracker.project(&pid).is_some());

        let entry = tracker.stop_timer(NOW + time::Duration::hours(2)).unwrap();
        assert_eq!(entry.duration_minutes(), 120);
        assert!((entry.earnings() - 100.0).abs() < 1e-9);
        tracker.delete_project(&pid).unwrap();
        assert_eq!(tracker.entries().len(), 1);
    }

    #[test]
    fn failed_key_stays_reported_until_it_is_written() {
        let backend = KeyFailingStore::default();
        let mut tracker = Tracker::load(backend.clone());
        let pid = tracker
            .add_project(&ProjectForm::new("Design Work", "Acme", 40.0))
            .unwrap()
            .id
            .clone();
        backend.fail(Some(StorageKey::Entries));
        let form = ManualEntryForm::new(pid, date!(2024 - 03 - 13), 1, 0);
        tracker.add_manual_entry(&form, offset!(UTC)).unwrap();
        assert!(tracker.last_persist_error().is_some());

        tracker.set_timer_description("x");
        assert!(tracker.last_persist_error().is_some());
        assert!(backend.inner.load_raw(StorageKey::Entries).unwrap().is_none());

        backend.fail(None);
        tracker.set_timer_description("y");
        assert!(tracker.last_persist_error().is_none());
        let saved: Vec<TimeEntry> = store::load(&backend.inner, StorageKey::Entries, Vec::new());
        assert_eq!(saved.len(), 1);
    }

    /// Memory store that rejects writes of one chosen key.
    #[derive(Clone, Default)]
    struct KeyFailingStore {
        inner: MemoryStore,
        failing: Arc<Mutex<Option<StorageKey>>>,
    }

    impl KeyFailingStore {
        fn fail(&self, key: Option<StorageKey>) {
            *self.failing.lock().unwrap() = key;
        }
    }

    impl Storage for KeyFailingStore {
        fn load_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
            self.inner.load_raw(key)
        }

        fn save_raw(&self, key: StorageKey, json: &str) -> Result<(), StorageError> {
            if *self.failing.lock().unwrap() == Some(key) {
                return Err(StorageError::Unavailable("disk".to_string()));
            }
            self.inner.save_raw(key, json)
        }
    }

    #[test]
    fn delete_unknown_entry_is_an_error() {
        let mut tracker = Tracker::load(MemoryStore::new());
        assert!(matches!(
            tracker.delete_entry(&EntryId::new("missing")),
            Err(TrackerError::EntryNotFound(_))
        ));
    }
}
