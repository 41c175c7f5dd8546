//! Reminder List
//!
//! Keeps user deadlines ordered by date. Ids are creation timestamps in
//! milliseconds and never repeat within a process.

use super::types::{Reminder, ReminderView};
use chrono::{DateTime, NaiveDate, Utc};

/// Date format accepted from the reminder form
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default)]
pub struct ReminderList {
    items: Vec<Reminder>,
    last_id: i64,
}

impl ReminderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted reminders
    pub fn from_vec(mut items: Vec<Reminder>) -> Self {
        items.sort_by_key(|r| r.date);
        let last_id = items.iter().map(|r| r.id).max().unwrap_or(0);
        Self { items, last_id }
    }

    pub fn items(&self) -> &[Reminder] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a reminder stamped with the current time.
    ///
    /// Returns `None` without touching the list if the title or date is
    /// blank or the date is not `YYYY-MM-DD`.
    pub fn add(&mut self, title: &str, date: &str) -> Option<Reminder> {
        self.add_at(title, date, Utc::now().timestamp_millis())
    }

    /// Same as [`add`](Self::add) with an explicit clock reading
    pub fn add_at(&mut self, title: &str, date: &str, now_ms: i64) -> Option<Reminder> {
        let title = title.trim();
        let date = date.trim();
        if title.is_empty() || date.is_empty() {
            return None;
        }

        let date = match NaiveDate::parse_from_str(date, DATE_FORMAT) {
            Ok(d) => d,
            Err(e) => {
                log::debug!("Ignoring reminder with unparseable date {:?}: {}", date, e);
                return None;
            }
        };

        let id = now_ms.max(self.last_id.saturating_add(1));
        self.last_id = id;

        let reminder = Reminder {
            id,
            title: title.to_string(),
            date,
        };
        self.items.push(reminder.clone());
        // stable: same-day reminders stay in creation order
        self.items.sort_by_key(|r| r.date);

        Some(reminder)
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Reminders with their status relative to `now`
    pub fn views_at(&self, now: DateTime<Utc>) -> Vec<ReminderView> {
        self.items
            .iter()
            .map(|r| ReminderView {
                reminder: r.clone(),
                status: r.status_at(now),
            })
            .collect()
    }
}
