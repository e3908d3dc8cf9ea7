//! Domain types shared across the matching pipeline.
//!
//! Wire names follow the matching API: `userId`, `quizAnswers`,
//! `sourceUserId`, `similarityScore`. All entities are transient values
//! constructed fresh per pipeline run; nothing here is mutated after
//! construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ordered feature encoding of a user's quiz answers, one dimension per
/// question (position = question id - 1). Length is always
/// [`crate::constants::QUESTION_COUNT`].
pub type FeatureVector = Vec<f32>;

/// A user record as delivered by the matching data endpoint.
///
/// `quiz_answers` maps question id ("1".."10") to answer index (0..=3).
/// Missing questions are tolerated; the vectorizer substitutes a default.
/// Answer indices outside 0..=3 are passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Opaque user identifier. Uniqueness is assumed, not enforced.
    pub user_id: String,

    /// Question id -> answer index.
    pub quiz_answers: HashMap<String, i64>,
}

impl UserRecord {
    /// Construct a record from an id and `(question_id, answer_index)` pairs.
    pub fn new(
        user_id: impl Into<String>,
        answers: impl IntoIterator<Item = (&'static str, i64)>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            quiz_answers: answers
                .into_iter()
                .map(|(q, a)| (q.to_string(), a))
                .collect(),
        }
    }
}

/// One matched partner for a source user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    /// The matched user's identifier.
    pub user_id: String,

    /// Cosine similarity score in [-1.0, 1.0].
    pub similarity_score: f32,
}

/// Ranked match list for one source user.
///
/// `matches` is sorted non-increasing by score and has at most `top_k`
/// entries. A user with zero qualifying matches gets no `UserMatches` at
/// all; an empty list is never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMatches {
    /// The user these matches belong to.
    pub source_user_id: String,

    /// Matched partners, descending by score, length <= top_k.
    pub matches: Vec<MatchEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_wire_names() {
        let record = UserRecord::new("u1", [("1", 2)]);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("quizAnswers").is_some());
        assert_eq!(json["quizAnswers"]["1"], 2);
    }

    #[test]
    fn test_user_matches_wire_names() {
        let result = UserMatches {
            source_user_id: "u1".to_string(),
            matches: vec![MatchEntry {
                user_id: "u2".to_string(),
                similarity_score: 0.87,
            }],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("sourceUserId").is_some());
        assert!(json["matches"][0].get("similarityScore").is_some());
        assert!(json["matches"][0].get("userId").is_some());
    }
}
