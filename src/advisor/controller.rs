//! Advisor Controller
//!
//! Owns the student's state (profile, reminders, colleges, latest quiz
//! result) and writes it through the injected store after every change.

use super::catalog;
use super::colleges::filter_colleges;
use super::quiz;
use super::recommend::recommend;
use super::reminders::ReminderList;
use super::store::{self, Persistence, COLLEGES_KEY, PROFILE_KEY, REMINDERS_KEY};
use super::types::{
    AnswerSet, College, Course, Profile, QuizQuestion, QuizResult, Recommendation, Reminder,
    ReminderView,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct Advisor {
    store: Arc<dyn Persistence>,
    profile: Profile,
    reminders: ReminderList,
    colleges: Vec<College>,
    questions: Vec<QuizQuestion>,
    courses: Vec<Course>,
    last_result: Option<QuizResult>,
}

impl Advisor {
    /// Load persisted state, falling back to defaults for anything missing
    pub fn load(store: Arc<dyn Persistence>) -> Self {
        let profile = store::load(store.as_ref(), PROFILE_KEY, Profile::default());
        let reminders: Vec<Reminder> = store::load(store.as_ref(), REMINDERS_KEY, Vec::new());
        let colleges = store::load(store.as_ref(), COLLEGES_KEY, catalog::colleges());
        // first run seeds the entry from the reference list
        store::save(store.as_ref(), COLLEGES_KEY, &colleges);

        log::info!(
            "Advisor state loaded: {} reminders, {} colleges",
            reminders.len(),
            colleges.len()
        );

        Self {
            store,
            profile,
            reminders: ReminderList::from_vec(reminders),
            colleges,
            questions: catalog::quiz_questions(),
            courses: catalog::courses(),
            last_result: None,
        }
    }

    // ---------------- profile ----------------

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn update_profile(&mut self, profile: Profile) -> &Profile {
        self.profile = profile;
        store::save(self.store.as_ref(), PROFILE_KEY, &self.profile);
        &self.profile
    }

    // ---------------- quiz ----------------

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Score a submission and remember it as the latest result
    pub fn submit_quiz(&mut self, answers: &AnswerSet) -> QuizResult {
        let result = quiz::score(&self.questions, answers);
        log::info!(
            "Quiz scored: science={} commerce={} arts={} -> {}",
            result.scores.science,
            result.scores.commerce,
            result.scores.arts,
            result.top_stream.as_str()
        );
        self.last_result = Some(result);
        result
    }

    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }

    /// Programs and colleges for the latest result. Empty before any quiz.
    pub fn recommendation(&self) -> Recommendation {
        recommend(self.last_result.map(|r| r.top_stream), &self.colleges)
    }

    // ---------------- courses & colleges ----------------

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn colleges(&self) -> &[College] {
        &self.colleges
    }

    pub fn search_colleges(&self, query: &str) -> Vec<College> {
        filter_colleges(&self.colleges, query)
    }

    // ---------------- reminders ----------------

    pub fn add_reminder(&mut self, title: &str, date: &str) -> Option<Reminder> {
        let added = self.reminders.add(title, date)?;
        self.persist_reminders();
        log::info!("Added reminder {} for {}", added.id, added.date);
        Some(added)
    }

    pub fn remove_reminder(&mut self, id: i64) -> bool {
        let removed = self.reminders.remove(id);
        if removed {
            self.persist_reminders();
        }
        removed
    }

    pub fn clear_reminders(&mut self) {
        self.reminders.clear();
        self.persist_reminders();
    }

    pub fn reminders(&self) -> &[Reminder] {
        self.reminders.items()
    }

    pub fn reminder_views(&self) -> Vec<ReminderView> {
        self.reminder_views_at(Utc::now())
    }

    pub fn reminder_views_at(&self, now: DateTime<Utc>) -> Vec<ReminderView> {
        self.reminders.views_at(now)
    }

    fn persist_reminders(&self) {
        store::save(self.store.as_ref(), REMINDERS_KEY, self.reminders.items());
    }
}
