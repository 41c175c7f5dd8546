//! Advisor Types
//!
//! Core data structures for the career and education advisor:
//! student profile, quiz model, course/college reference data and reminders.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================
// PROFILE
// ============================================================

/// Current class of the student
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ClassLevel {
    #[default]
    #[serde(rename = "10")]
    Tenth,
    #[serde(rename = "11")]
    Eleventh,
    #[serde(rename = "12")]
    Twelfth,
    #[serde(rename = "graduated")]
    Graduated,
}

/// Student profile as entered in the profile form. Missing fields take defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Kept as free text, no validation beyond presence
    pub age: String,
    pub class: ClassLevel,
    pub district: String,
}

// ============================================================
// STREAMS & QUIZ
// ============================================================

/// Broad academic track a student can be classified into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    /// Precedence order. Earlier streams win ties.
    pub const ALL: [Stream; 3] = [Stream::Science, Stream::Commerce, Stream::Arts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Science => "science",
            Stream::Commerce => "commerce",
            Stream::Arts => "arts",
        }
    }
}

/// One integer per stream. Used both for question weights and quiz totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StreamScores {
    pub science: u32,
    pub commerce: u32,
    pub arts: u32,
}

impl StreamScores {
    pub fn get(&self, stream: Stream) -> u32 {
        match stream {
            Stream::Science => self.science,
            Stream::Commerce => self.commerce,
            Stream::Arts => self.arts,
        }
    }

    pub fn add(&mut self, stream: Stream, amount: u32) {
        match stream {
            Stream::Science => self.science += amount,
            Stream::Commerce => self.commerce += amount,
            Stream::Arts => self.arts += amount,
        }
    }
}

/// A single quiz question with its per-stream weights
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub text: String,
    pub weights: StreamScores,
}

impl QuizQuestion {
    pub fn new(id: u32, text: &str, weights: StreamScores) -> Self {
        Self {
            id,
            text: text.to_string(),
            weights,
        }
    }
}

/// Answers keyed by question id. Values are 0, 1 or 2; missing ids count as 0.
pub type AnswerSet = BTreeMap<u32, u8>;

/// Highest answer value a question accepts
pub const MAX_ANSWER: u8 = 2;

/// Outcome of a quiz submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizResult {
    pub scores: StreamScores,
    pub top_stream: Stream,
}

// ============================================================
// COURSES & COLLEGES
// ============================================================

/// A course of study and the careers it leads to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub careers: Vec<String>,
    pub description: String,
}

/// A college and the programs it offers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct College {
    pub id: u32,
    pub name: String,
    pub district: String,
    pub programs: Vec<String>,
    pub hostel: bool,
    pub internet: bool,
    pub cutoff: String,
}

/// Suggested programs for a stream plus the colleges offering them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Recommendation {
    pub suggested_programs: Vec<String>,
    pub matched_colleges: Vec<College>,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.suggested_programs.is_empty() && self.matched_colleges.is_empty()
    }
}

// ============================================================
// REMINDERS
// ============================================================

/// A user-entered deadline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    /// Creation timestamp in milliseconds
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
}

impl Reminder {
    /// Derive the display status relative to `now`
    pub fn status_at(&self, now: DateTime<Utc>) -> ReminderStatus {
        let starts = self.date.and_time(chrono::NaiveTime::MIN).and_utc();
        if starts < now {
            ReminderStatus::Passed
        } else {
            ReminderStatus::Upcoming
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReminderStatus {
    Upcoming,
    Passed,
}

/// Reminder together with its status at render time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderView {
    #[serde(flatten)]
    pub reminder: Reminder,
    pub status: ReminderStatus,
}
