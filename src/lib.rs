//! Career Compass Backend
//!
//! A career and education advisor for school students with:
//! - Student profile
//! - Stream quiz (science / commerce / arts) and recommendations
//! - Course-to-career cards and college search
//! - Deadline reminders

pub mod advisor;
pub mod api;
pub mod config;

pub use advisor::*;
pub use api::*;
