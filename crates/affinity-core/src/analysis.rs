//! Answer distribution analysis.
//!
//! Diagnostic utility over a user batch: how often each answer choice was
//! picked, per question. Only answered questions are counted; the
//! vectorizer's missing-answer default is not applied here.

use std::collections::BTreeMap;

use crate::config::constants::ANSWER_CHOICES;
use crate::types::UserRecord;

/// Answer counts for one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStats {
    /// Count per answer index 0..=3.
    pub counts: [usize; ANSWER_CHOICES],
    /// Answers outside 0..=3. The schema does not validate answer indices,
    /// so the analyzer tallies strays instead of dropping them.
    pub out_of_range: usize,
}

impl QuestionStats {
    /// Total answers recorded for this question.
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.out_of_range
    }

    /// Share of each in-range answer choice, in [0.0, 1.0].
    /// All zeros if the question was never answered.
    pub fn shares(&self) -> [f64; ANSWER_CHOICES] {
        let total = self.total();
        if total == 0 {
            return [0.0; ANSWER_CHOICES];
        }
        let mut shares = [0.0; ANSWER_CHOICES];
        for (share, &count) in shares.iter_mut().zip(self.counts.iter()) {
            *share = count as f64 / total as f64;
        }
        shares
    }
}

/// Tally answer choices per question across a user batch.
///
/// Keys are question ids parsed as integers; unparsable keys are skipped.
/// The map is ordered by question id.
pub fn answer_distribution(users: &[UserRecord]) -> BTreeMap<usize, QuestionStats> {
    let mut stats: BTreeMap<usize, QuestionStats> = BTreeMap::new();

    for user in users {
        for (question_id, &answer) in &user.quiz_answers {
            let Ok(question_id) = question_id.parse::<usize>() else {
                continue;
            };
            let entry = stats.entry(question_id).or_default();
            match usize::try_from(answer) {
                Ok(index) if index < ANSWER_CHOICES => entry.counts[index] += 1,
                _ => entry.out_of_range += 1,
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRecord;

    #[test]
    fn test_distribution_counts_per_question() {
        let users = vec![
            UserRecord::new("u1", [("1", 0), ("2", 3)]),
            UserRecord::new("u2", [("1", 0), ("2", 1)]),
            UserRecord::new("u3", [("1", 2)]),
        ];
        let stats = answer_distribution(&users);

        assert_eq!(stats[&1].counts, [2, 0, 1, 0]);
        assert_eq!(stats[&2].counts, [0, 1, 0, 1]);
        assert_eq!(stats[&1].total(), 3);
        assert!(!stats.contains_key(&3));
    }

    #[test]
    fn test_distribution_out_of_range_bucket() {
        let users = vec![UserRecord::new("u1", [("4", 9)])];
        let stats = answer_distribution(&users);
        assert_eq!(stats[&4].out_of_range, 1);
        assert_eq!(stats[&4].counts, [0, 0, 0, 0]);

        let negative = vec![UserRecord::new("u2", [("5", -1)])];
        let stats = answer_distribution(&negative);
        assert_eq!(stats[&5].out_of_range, 1);
    }

    #[test]
    fn test_distribution_shares() {
        let users = vec![
            UserRecord::new("u1", [("1", 0)]),
            UserRecord::new("u2", [("1", 0)]),
            UserRecord::new("u3", [("1", 1)]),
            UserRecord::new("u4", [("1", 3)]),
        ];
        let stats = answer_distribution(&users);
        let shares = stats[&1].shares();
        assert!((shares[0] - 0.5).abs() < 1e-9);
        assert!((shares[1] - 0.25).abs() < 1e-9);
        assert_eq!(shares[2], 0.0);
        assert!((shares[3] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_empty_batch() {
        assert!(answer_distribution(&[]).is_empty());
        let unanswered = vec![UserRecord::new("u1", std::iter::empty())];
        assert!(answer_distribution(&unanswered).is_empty());
    }
}
