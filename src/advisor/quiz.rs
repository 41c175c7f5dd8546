//! Quiz Scoring
//!
//! Turns a (possibly partial) answer set into per-stream totals and picks
//! the dominant stream.

use super::types::{AnswerSet, QuizQuestion, QuizResult, Stream, StreamScores};

/// Score an answer set against the quiz questions.
///
/// Each answer (0 when missing) is multiplied by the question's weight for
/// every stream. Ties for the highest total go to the stream listed first
/// in [`Stream::ALL`], so an unanswered quiz yields `Science`.
pub fn score(questions: &[QuizQuestion], answers: &AnswerSet) -> QuizResult {
    let mut scores = StreamScores::default();

    for question in questions {
        let value = u32::from(answers.get(&question.id).copied().unwrap_or(0));
        for stream in Stream::ALL {
            scores.add(stream, value * question.weights.get(stream));
        }
    }

    QuizResult {
        scores,
        top_stream: top_stream(&scores),
    }
}

fn top_stream(scores: &StreamScores) -> Stream {
    let mut best = Stream::ALL[0];
    for stream in Stream::ALL.into_iter().skip(1) {
        // strict comparison keeps the earlier stream on a tie
        if scores.get(stream) > scores.get(best) {
            best = stream;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::catalog::quiz_questions;

    fn answers(pairs: &[(u32, u8)]) -> AnswerSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_all_zero_defaults_to_science() {
        let result = score(&quiz_questions(), &answers(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]));
        assert_eq!(result.scores, StreamScores::default());
        assert_eq!(result.top_stream, Stream::Science);
    }

    #[test]
    fn test_empty_answers_default_to_science() {
        let result = score(&quiz_questions(), &AnswerSet::new());
        assert_eq!(result.scores, StreamScores::default());
        assert_eq!(result.top_stream, Stream::Science);
    }

    #[test]
    fn test_single_science_answer() {
        let result = score(&quiz_questions(), &answers(&[(1, 2)]));
        assert_eq!(result.scores, StreamScores { science: 4, commerce: 0, arts: 0 });
        assert_eq!(result.top_stream, Stream::Science);
    }

    #[test]
    fn test_arts_dominant() {
        let result = score(
            &quiz_questions(),
            &answers(&[(1, 0), (2, 2), (3, 0), (4, 0), (5, 1)]),
        );
        assert_eq!(result.scores, StreamScores { science: 0, commerce: 1, arts: 5 });
        assert_eq!(result.top_stream, Stream::Arts);
    }

    #[test]
    fn test_commerce_beats_arts_on_tie() {
        // q3 -> commerce 2, q2 -> arts 2
        let result = score(&quiz_questions(), &answers(&[(2, 1), (3, 1)]));
        assert_eq!(result.scores.commerce, result.scores.arts);
        assert_eq!(result.top_stream, Stream::Commerce);
    }

    #[test]
    fn test_science_beats_commerce_on_tie() {
        // q4 -> science 1, commerce 1
        let result = score(&quiz_questions(), &answers(&[(4, 1)]));
        assert_eq!(result.scores, StreamScores { science: 1, commerce: 1, arts: 0 });
        assert_eq!(result.top_stream, Stream::Science);
    }

    #[test]
    fn test_science_beats_arts_on_tie() {
        // q1 -> science 2, q2 -> arts 2
        let result = score(&quiz_questions(), &answers(&[(1, 1), (2, 1)]));
        assert_eq!(result.scores, StreamScores { science: 2, commerce: 0, arts: 2 });
        assert_eq!(result.top_stream, Stream::Science);
    }

    #[test]
    fn test_unknown_question_ids_are_ignored() {
        let result = score(&quiz_questions(), &answers(&[(99, 2)]));
        assert_eq!(result.scores, StreamScores::default());
    }
}
