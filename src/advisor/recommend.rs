//! Recommendation Mapper
//!
//! Maps the dominant quiz stream to suggested programs and the colleges
//! that offer something close to them.

use super::catalog::suggested_programs;
use super::types::{College, Recommendation, Stream};

/// Build the recommendation for `top_stream`.
///
/// Program names in college data are abbreviated inconsistently, so a
/// college matches when any of its programs contains (case-insensitively)
/// the first word of any suggested program. `None` gives an empty result.
pub fn recommend(top_stream: Option<Stream>, colleges: &[College]) -> Recommendation {
    let Some(stream) = top_stream else {
        return Recommendation::default();
    };

    let programs = suggested_programs(stream);
    let tokens: Vec<String> = programs
        .iter()
        .filter_map(|p| p.split_whitespace().next())
        .map(str::to_lowercase)
        .collect();

    let matched_colleges = colleges
        .iter()
        .filter(|college| {
            college.programs.iter().any(|program| {
                let program = program.to_lowercase();
                tokens.iter().any(|token| program.contains(token.as_str()))
            })
        })
        .cloned()
        .collect();

    Recommendation {
        suggested_programs: programs.iter().map(|p| p.to_string()).collect(),
        matched_colleges,
    }
}
