//! Core dense vector similarity primitives.

use super::error::SimilarityError;

/// Calculate L2 norm (magnitude) of a vector.
#[inline]
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Internal dot product without validation.
/// Caller must ensure vectors have equal length.
#[inline]
pub(crate) fn dot_product_unchecked(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Calculate dot product between two dense vectors.
///
/// # Errors
/// - `SimilarityError::DimensionMismatch` if vectors have different lengths
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(dot_product_unchecked(a, b))
}

/// Calculate cosine similarity between two dense vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction,
/// 0.0 means orthogonal, and -1.0 means opposite direction.
///
/// Zero-norm policy: if either vector has zero magnitude the similarity is
/// defined as 0.0 rather than NaN or an error, so fully-unanswered users
/// rank below every real match instead of poisoning downstream sorting.
///
/// # Errors
/// - `SimilarityError::DimensionMismatch` if vectors have different lengths
///
/// # Example
/// ```
/// use affinity_core::cosine_similarity;
///
/// let a = vec![1.0, 0.0];
/// let b = vec![0.0, 1.0];
/// assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
/// ```
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);

    if norm_a < f32::EPSILON || norm_b < f32::EPSILON {
        return Ok(0.0);
    }

    let result = dot_product_unchecked(a, b) / (norm_a * norm_b);
    // Clamp to valid range to handle floating point errors
    Ok(result.clamp(-1.0, 1.0))
}
