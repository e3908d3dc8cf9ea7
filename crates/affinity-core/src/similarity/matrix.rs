//! Batch pairwise similarity matrix.

use crate::config::constants::QUESTION_COUNT;
use crate::types::FeatureVector;

use super::error::SimilarityError;
use super::primitives::cosine_similarity;

/// Compute the full pairwise cosine similarity matrix for a batch of
/// feature vectors.
///
/// The result is a symmetric n x n matrix indexed by position in `vectors`.
/// The diagonal is set to 1.0 (self-similarity) but is discarded by the
/// match selector. Each off-diagonal pair is computed once and mirrored.
///
/// O(n^2 * d) with d = 10; fine for batches in the low thousands.
///
/// # Errors
/// - `SimilarityError::DimensionMismatch` if any vector's length differs
///   from [`QUESTION_COUNT`]. This is checked here because the matrix
///   operates on raw sequences; vectors produced by
///   [`crate::vectorize`] always pass.
pub fn similarity_matrix(vectors: &[FeatureVector]) -> Result<Vec<Vec<f32>>, SimilarityError> {
    for vector in vectors {
        if vector.len() != QUESTION_COUNT {
            return Err(SimilarityError::DimensionMismatch {
                expected: QUESTION_COUNT,
                actual: vector.len(),
            });
        }
    }

    let n = vectors.len();
    let mut matrix = vec![vec![0.0f32; n]; n];

    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let score = cosine_similarity(&vectors[i], &vectors[j])?;
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
    }

    Ok(matrix)
}
