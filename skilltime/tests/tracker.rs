use skilltime::{
    DateRange, EntryFilter, EntryUpdate, JsonFileStore, ManualEntryForm, MemoryStore,
    ProjectColor, ProjectForm, ProjectId, TimerPhase, TimerState, Tracker,
};
use time::macros::{date, datetime, offset};
use time::{Duration, OffsetDateTime};

const NOW: OffsetDateTime = datetime!(2024-03-13 15:30 UTC);

fn add_project(tracker: &mut Tracker<impl skilltime::Storage>, name: &str, rate: f64) -> ProjectId {
    tracker
        .add_project(&ProjectForm::new(name, "Acme", rate).with_color(ProjectColor::Purple))
        .unwrap()
        .id
        .clone()
}

fn run_timer(tracker: &mut Tracker<impl skilltime::Storage>, project: &ProjectId, seconds: u64) {
    tracker.select_timer_project(Some(project.clone())).unwrap();
    tracker.set_timer_description("focused work");
    tracker.start_timer(NOW).unwrap();
    for _ in 0..seconds {
        tracker.tick();
    }
    tracker.stop_timer(NOW + Duration::seconds(seconds as i64));
}

#[test]
fn earnings_identity_holds_for_every_creation_path() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let design = add_project(&mut tracker, "Design Work", 47.5);
    let dev = add_project(&mut tracker, "Dev Work", 83.0);

    run_timer(&mut tracker, &design, 37 * 60 + 12);
    tracker
        .add_manual_entry(&ManualEntryForm::new(dev.clone(), date!(2024 - 03 - 12), 2, 5), offset!(UTC))
        .unwrap();
    let id = tracker.entries()[0].id.clone();
    tracker
        .update_entry(
            &id,
            &EntryUpdate {
                duration_minutes: Some(17),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(tracker.entries().len(), 2);
    for entry in tracker.entries() {
        let expected = entry.duration_minutes() as f64 / 60.0 * entry.hourly_rate();
        assert!((entry.earnings() - expected).abs() < 1e-9);
    }
}

#[test]
fn pausing_freezes_the_counter() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let pid = add_project(&mut tracker, "Design", 10.0);
    tracker.select_timer_project(Some(pid)).unwrap();
    tracker.start_timer(NOW).unwrap();
    tracker.tick();
    tracker.tick();
    tracker.pause_timer();
    assert_eq!(tracker.timer().phase(), TimerPhase::Paused);
    assert!(!tracker.tick());
    assert_eq!(tracker.timer().elapsed_seconds, 2);
    tracker.start_timer(NOW + Duration::minutes(5)).unwrap();
    assert!(tracker.tick());
    assert_eq!(tracker.timer().elapsed_seconds, 3);
    assert_eq!(tracker.timer().start_time, Some(NOW));
}

#[test]
fn state_round_trips_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let (projects, entries, timer) = {
        let mut tracker = Tracker::load(JsonFileStore::new(dir.path()));
        let design = add_project(&mut tracker, "Design", 50.0);
        run_timer(&mut tracker, &design, 600);
        tracker
            .add_manual_entry(
                &ManualEntryForm::new(design.clone(), date!(2024 - 03 - 01), 1, 0)
                    .with_description("kickoff"),
                offset!(+2),
            )
            .unwrap();
        tracker.select_timer_project(Some(design)).unwrap();
        tracker.start_timer(NOW).unwrap();
        tracker.tick();
        (
            tracker.projects().to_vec(),
            tracker.entries().to_vec(),
            tracker.timer().clone(),
        )
    };

    let reloaded = Tracker::load(JsonFileStore::new(dir.path()));
    assert_eq!(reloaded.projects(), projects.as_slice());
    assert_eq!(reloaded.entries(), entries.as_slice());
    assert_eq!(reloaded.timer(), &timer);
    assert_eq!(reloaded.timer().phase(), TimerPhase::Running);
}

#[test]
fn unavailable_storage_loads_default_state() {
    let store = MemoryStore::new();
    {
        let mut tracker = Tracker::load(store.clone());
        add_project(&mut tracker, "Design", 50.0);
    }
    store.set_available(false);
    let tracker = Tracker::load(store);
    assert!(tracker.projects().is_empty());
    assert!(tracker.entries().is_empty());
    assert_eq!(tracker.timer(), &TimerState::default());
}

#[test]
fn deleting_project_keeps_its_entries_untouched() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let design = add_project(&mut tracker, "Design Work", 50.0);
    run_timer(&mut tracker, &design, 90 * 60);
    let before = tracker.entries().to_vec();

    tracker.delete_project(&design).unwrap();

    assert!(tracker.project(&design).is_none());
    assert_eq!(tracker.entries(), before.as_slice());
    assert_eq!(tracker.entries()[0].project_name, "Design Work");
    assert!((tracker.entries()[0].earnings() - 75.0).abs() < 1e-9);
}

#[test]
fn filtered_export_joins_client_and_respects_filter() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = Tracker::load(MemoryStore::new());
    let design = add_project(&mut tracker, "Design Work", 50.0);
    let dev = add_project(&mut tracker, "Dev Work", 80.0);
    tracker
        .add_manual_entry(&ManualEntryForm::new(design.clone(), date!(2024 - 03 - 13), 1, 30), offset!(UTC))
        .unwrap();
    tracker
        .add_manual_entry(&ManualEntryForm::new(dev, date!(2024 - 03 - 13), 0, 30), offset!(UTC))
        .unwrap();
    tracker
        .add_manual_entry(&ManualEntryForm::new(design.clone(), date!(2024 - 01 - 02), 3, 0), offset!(UTC))
        .unwrap();

    let filter = EntryFilter::new().with_project(design).with_range(DateRange::Month);
    let path = tracker.export_csv(&filter, NOW, dir.path()).unwrap();
    let content = std::fs::read_to_string(path).unwrap();
    let rows: Vec<&str> = content.lines().skip(1).collect();
    assert_eq!(
        rows,
        vec![r#""2024-03-13","Design Work","Acme","1.50","50.00","75.00","""#]
    );
}

#[test]
fn today_summary_is_subset_of_all() {
    let mut tracker = Tracker::load(MemoryStore::new());
    let pid = add_project(&mut tracker, "Design", 60.0);
    for (day, hours) in [(date!(2024 - 03 - 13), 1), (date!(2024 - 03 - 12), 2), (date!(2023 - 12 - 01), 4)] {
        tracker
            .add_manual_entry(&ManualEntryForm::new(pid.clone(), day, hours, 0), offset!(UTC))
            .unwrap();
    }
    let summaries = tracker.summaries(NOW);
    assert_eq!(summaries.today.total_minutes, 60);
    assert_eq!(summaries.week.total_minutes, 180);
    assert_eq!(summaries.all.total_minutes, 420);
    assert_eq!(summaries.all.hours_display(), "7.0");
    assert_eq!(summaries.all.earnings_display(), "420.00");
    assert_eq!(tracker.summarize(DateRange::Today, NOW), summaries.today);
}
