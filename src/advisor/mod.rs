//! Advisor Module - Core of the Career & Education Advisor
//!
//! Architecture:
//! - Catalog: fixed quiz questions, courses, colleges
//! - Quiz: weighted scoring into a dominant stream
//! - Recommend: stream -> programs -> colleges
//! - Reminders: date-ordered deadline list
//! - Store: SQLite-backed JSON blobs
//! - Controller: owns state and persists each change

pub mod catalog;
pub mod colleges;
pub mod controller;
pub mod quiz;
pub mod recommend;
pub mod reminders;
pub mod store;
pub mod types;

pub use colleges::*;
pub use controller::*;
pub use quiz::*;
pub use recommend::*;
pub use reminders::*;
pub use store::*;
pub use types::*;
