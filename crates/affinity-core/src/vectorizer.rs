//! Quiz-answer vectorization.
//!
//! Converts a raw answer mapping into a fixed-length feature vector, one
//! dimension per question in question-id order.

use std::collections::HashMap;

use crate::config::constants::QUESTION_COUNT;
use crate::types::FeatureVector;

/// Answer index substituted when a question was not answered.
///
/// Policy: "not answered" is treated as answer choice 0, not as an error.
/// Kept as its own function so the policy is unit-testable on its own.
#[inline]
pub fn default_answer() -> i64 {
    0
}

/// Look up the answer for `question_id`, falling back to [`default_answer`].
///
/// No range validation is performed; an out-of-range answer index passes
/// through unchanged.
#[inline]
pub fn answer_or_default(quiz_answers: &HashMap<String, i64>, question_id: usize) -> i64 {
    quiz_answers
        .get(&question_id.to_string())
        .copied()
        .unwrap_or_else(default_answer)
}

/// Convert a quiz-answer mapping into a feature vector.
///
/// Questions 1..=10 are read in order, keyed by the string form of the
/// question id. Output length is always [`QUESTION_COUNT`]. Pure and
/// infallible.
///
/// # Example
/// ```
/// use affinity_core::vectorize;
/// use std::collections::HashMap;
///
/// let answers: HashMap<String, i64> =
///     [("1".to_string(), 1), ("2".to_string(), 2)].into_iter().collect();
/// assert_eq!(vectorize(&answers), vec![1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// ```
pub fn vectorize(quiz_answers: &HashMap<String, i64>) -> FeatureVector {
    (1..=QUESTION_COUNT)
        .map(|question_id| answer_or_default(quiz_answers, question_id) as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
        pairs.iter().map(|(q, a)| (q.to_string(), *a)).collect()
    }

    #[test]
    fn test_vectorize_full_answers() {
        let quiz = answers(&[
            ("1", 0),
            ("2", 3),
            ("3", 1),
            ("4", 2),
            ("5", 0),
            ("6", 1),
            ("7", 3),
            ("8", 2),
            ("9", 1),
            ("10", 0),
        ]);
        let vector = vectorize(&quiz);
        assert_eq!(
            vector,
            vec![0.0, 3.0, 1.0, 2.0, 0.0, 1.0, 3.0, 2.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_vectorize_always_length_ten() {
        let vector = vectorize(&HashMap::new());
        assert_eq!(vector.len(), QUESTION_COUNT);
        assert!(vector.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_missing_answers_use_default_policy() {
        let quiz = answers(&[("1", 1), ("2", 2)]);
        let vector = vectorize(&quiz);
        assert_eq!(
            vector,
            vec![1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_default_answer_is_zero() {
        assert_eq!(default_answer(), 0);
        assert_eq!(answer_or_default(&HashMap::new(), 7), 0);
    }

    #[test]
    fn test_out_of_range_answer_passes_through() {
        let quiz = answers(&[("3", 9)]);
        let vector = vectorize(&quiz);
        assert_eq!(vector[2], 9.0);
    }

    #[test]
    fn test_unknown_question_keys_ignored() {
        // Keys outside "1".."10" do not shift positions.
        let quiz = answers(&[("11", 3), ("0", 3), ("foo", 3), ("5", 2)]);
        let vector = vectorize(&quiz);
        assert_eq!(vector[4], 2.0);
        assert_eq!(vector.iter().filter(|&&x| x != 0.0).count(), 1);
    }
}
