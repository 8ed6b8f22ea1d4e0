//! Demo data for `skilltime dev`.

use skilltime::{ManualEntryForm, MemoryStore, ProjectColor, ProjectForm, Tracker};
use time::{Duration, OffsetDateTime, UtcOffset};

/// A memory store holding a few projects and two weeks of manual entries.
pub fn seeded_store(offset: UtcOffset) -> MemoryStore {
    let store = MemoryStore::new();
    let mut tracker = Tracker::load(store.clone());

    let projects = [
        ("Brand Refresh", "Northwind Studio", 65.0, ProjectColor::Purple),
        ("Checkout Rewrite", "Acme Retail", 95.0, ProjectColor::Blue),
        ("Retainer Support", "Globex", 80.0, ProjectColor::Teal),
    ];
    let mut ids = Vec::new();
    for (name, client, rate, color) in projects {
        match tracker.add_project(&ProjectForm::new(name, client, rate).with_color(color)) {
            Ok(project) => ids.push(project.id.clone()),
            Err(e) => tracing::warn!("failed to seed project {}: {}", name, e),
        }
    }

    let today = OffsetDateTime::now_utc().to_offset(offset).date();
    let entries: [(i64, usize, u32, u32, &str); 7] = [
        (0, 0, 1, 30, "Moodboard review"),
        (0, 1, 2, 0, "Payment form validation"),
        (1, 2, 0, 45, "Support tickets"),
        (2, 1, 3, 15, "Cart API integration"),
        (4, 0, 2, 30, "Logo variations"),
        (8, 2, 1, 0, "Monthly sync call"),
        (12, 1, 4, 0, "Checkout spike"),
    ];
    for (days_ago, project_idx, hours, minutes, note) in entries {
        let Some(project_id) = ids.get(project_idx) else {
            continue;
        };
        let form = ManualEntryForm::new(
            project_id.clone(),
            today - Duration::days(days_ago),
            hours,
            minutes,
        )
        .with_description(note);
        if let Err(e) = tracker.add_manual_entry(&form, offset) {
            tracing::warn!("failed to seed entry {}: {}", note, e);
        }
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_loads_projects_and_entries() {
        let tracker = Tracker::load(seeded_store(UtcOffset::UTC));
        assert_eq!(tracker.projects().len(), 3);
        assert_eq!(tracker.entries().len(), 7);
        assert!(tracker
            .entries()
            .windows(2)
            .all(|w| w[0].start_time >= w[1].start_time));
    }
}
