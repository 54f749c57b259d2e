// Cosine similarity between two style vectors.
//
// The score is the cosine of the angle between the two 4-dimensional
// vectors: 1.0 for identical direction, 0.0 for orthogonal. Magnitude is
// irrelevant, so an author who scores twice as high on every dimension
// still matches perfectly.
//
// A zero-magnitude vector has no direction, so comparisons against it
// resolve to 0.0 rather than an error — ranking must never fail on
// incomplete catalog data.

use super::vector::StyleVector;

/// Compute the cosine similarity between two style vectors, in [0, 1].
pub fn cosine(a: &StyleVector, b: &StyleVector) -> f64 {
    let a = a.to_array();
    let b = b.to_array();

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for i in 0..a.len() {
        dot += a[i] * b[i];
        mag_a += a[i] * a[i];
        mag_b += b[i] * b[i];
    }

    let mag_a = mag_a.sqrt();
    let mag_b = mag_b.sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        let v = StyleVector::new(53.0, 10.0, 22.0, 7.0);
        let score = cosine(&v, &v);
        assert!((score - 1.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let v = StyleVector::new(53.0, 10.0, 22.0, 7.0);
        assert_eq!(cosine(&v, &StyleVector::ZERO), 0.0);
        assert_eq!(cosine(&StyleVector::ZERO, &v), 0.0);
        assert_eq!(cosine(&StyleVector::ZERO, &StyleVector::ZERO), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = StyleVector::new(60.0, 13.0, 13.0, 0.0);
        let b = StyleVector::new(40.0, 80.0, 5.0, 30.0);
        assert_eq!(cosine(&a, &b), cosine(&b, &a));
    }

    #[test]
    fn test_magnitude_invariant() {
        let a = StyleVector::new(30.0, 15.0, 10.0, 5.0);
        let b = StyleVector::new(60.0, 30.0, 20.0, 10.0);
        let score = cosine(&a, &b);
        assert!((score - 1.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = StyleVector::new(100.0, 0.0, 0.0, 0.0);
        let b = StyleVector::new(0.0, 100.0, 0.0, 0.0);
        assert_eq!(cosine(&a, &b), 0.0);
    }
}
