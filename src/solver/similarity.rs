//! Cosine similarity between embedding vectors

/// Cosine similarity of two equal-length vectors
///
/// Returns `dot(u, v) / (|u| * |v|)`. If either vector has zero norm the
/// result is `1.0`: a zero vector counts as fully similar to everything, so
/// downstream thresholding keeps it rather than silently dropping it.
///
/// Accumulates in `f64` to keep 300-dimension sums stable.
///
/// # Examples
/// ```
/// use codenames_solver::solver::cosine_similarity;
///
/// let u = [1.0, 0.0];
/// let v = [0.0, 2.0];
/// assert!(cosine_similarity(&u, &v).abs() < 1e-6);
/// assert!((cosine_similarity(&u, &u) - 1.0).abs() < 1e-6);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &v), 1.0);
/// ```
#[must_use]
pub fn cosine_similarity(u: &[f32], v: &[f32]) -> f32 {
    debug_assert_eq!(u.len(), v.len(), "vectors must have equal length");

    let mut dot = 0.0f64;
    let mut u_norm = 0.0f64;
    let mut v_norm = 0.0f64;
    for (&a, &b) in u.iter().zip(v) {
        let (a, b) = (f64::from(a), f64::from(b));
        dot += a * b;
        u_norm += a * a;
        v_norm += b * b;
    }

    if u_norm == 0.0 || v_norm == 0.0 {
        return 1.0;
    }

    (dot / (u_norm.sqrt() * v_norm.sqrt())) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_similarity_is_one() {
        let v = [0.3, -1.2, 4.5, 0.01];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn similarity_is_symmetric() {
        let u = [0.3, -1.2, 4.5];
        let v = [2.0, 0.7, -0.4];
        assert!((cosine_similarity(&u, &v) - cosine_similarity(&v, &u)).abs() < f32::EPSILON);
    }

    #[test]
    fn orthogonal_and_opposite() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn scale_invariant() {
        let u = [1.0, 2.0, 3.0];
        let v = [10.0, 20.0, 30.0];
        assert!((cosine_similarity(&u, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_is_fully_similar() {
        let zero = [0.0, 0.0, 0.0];
        let v = [1.0, -2.0, 3.0];
        assert!((cosine_similarity(&zero, &v) - 1.0).abs() < f32::EPSILON);
        assert!((cosine_similarity(&v, &zero) - 1.0).abs() < f32::EPSILON);
        assert!((cosine_similarity(&zero, &zero) - 1.0).abs() < f32::EPSILON);
    }
}
