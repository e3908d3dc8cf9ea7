//! Wire types for the matching API's response envelope.
//!
//! The API wraps payloads as `{ success, message, data: ... }`. Match
//! results posted back are plain `UserMatches` bodies; their shape lives in
//! `affinity_core::types`.

use serde::Deserialize;

use affinity_core::UserRecord;

/// Standard API response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Whether the API reported success.
    #[serde(default)]
    pub success: bool,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// The payload.
    pub data: T,
}

/// Payload of `GET /matching/data`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingData {
    /// Users with completed quizzes.
    pub users: Vec<UserRecord>,
    /// Server-reported count; informational only.
    #[serde(default)]
    pub count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_matching_data_envelope() {
        let body = serde_json::json!({
            "success": true,
            "message": "Matching data retrieved successfully",
            "data": {
                "users": [
                    { "userId": "66f0a1", "quizAnswers": { "1": 0, "2": 3, "10": 2 } },
                    { "userId": "66f0a2", "quizAnswers": {} }
                ],
                "count": 2,
                "note": "Data prepared for cosine similarity calculation"
            }
        });

        let envelope: Envelope<MatchingData> = serde_json::from_value(body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.count, Some(2));
        assert_eq!(envelope.data.users.len(), 2);
        assert_eq!(envelope.data.users[0].user_id, "66f0a1");
        assert_eq!(envelope.data.users[0].quiz_answers["2"], 3);
    }

    #[test]
    fn test_serialize_match_result_body() {
        let result = affinity_core::UserMatches {
            source_user_id: "66f0a1".to_string(),
            matches: vec![affinity_core::MatchEntry {
                user_id: "66f0a2".to_string(),
                similarity_score: 0.87,
            }],
        };
        let body = serde_json::to_value(&result).unwrap();
        assert_eq!(body["sourceUserId"], "66f0a1");
        assert_eq!(body["matches"][0]["userId"], "66f0a2");
        assert!(body["matches"][0]["similarityScore"].as_f64().is_some());
    }
}
