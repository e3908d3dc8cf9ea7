//! Match selection: thresholding, ranking, and top-k truncation.

use crate::config::MatchConfig;
use crate::types::{MatchEntry, UserMatches};

/// Select ranked matches per source user from a pairwise similarity matrix.
///
/// For each source index, every other index whose score meets the threshold
/// (inclusive) becomes a candidate. Candidates are sorted descending by
/// score and truncated to `config.top_k`. Ties keep input order: the sort is
/// stable, so equal scores rank by original index, which makes output
/// reproducible across runs.
///
/// Sources with zero qualifying candidates are omitted entirely; "no match
/// result" means "nothing to report", not "empty list".
///
/// `matrix` must be square with side `user_ids.len()`, as produced by
/// [`crate::similarity_matrix`]. Never fails for well-formed input; an
/// out-of-range threshold simply yields zero or all-inclusive results.
pub fn select_matches(
    matrix: &[Vec<f32>],
    user_ids: &[String],
    config: &MatchConfig,
) -> Vec<UserMatches> {
    let mut results = Vec::new();

    for (i, source_user_id) in user_ids.iter().enumerate() {
        let mut matches: Vec<MatchEntry> = Vec::new();

        for (j, target_user_id) in user_ids.iter().enumerate() {
            if i == j {
                continue;
            }
            let score = matrix[i][j];
            if score >= config.threshold {
                matches.push(MatchEntry {
                    user_id: target_user_id.clone(),
                    similarity_score: score,
                });
            }
        }

        matches.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        matches.truncate(config.top_k);

        if !matches.is_empty() {
            results.push(UserMatches {
                source_user_id: source_user_id.clone(),
                matches,
            });
        }
    }

    results
}
