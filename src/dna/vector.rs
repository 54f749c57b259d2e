// StyleVector — the structured representation of how someone writes.
//
// Four named dimensions, each on a 0-100 scale. Similarity is computed
// positionally, so the dimension order (vocabulary, complexity, pacing,
// abstraction) is a contract: to_array() is the single place that order
// is defined, and every comparison goes through it.

use serde::{Deserialize, Serialize};

/// A complete style fingerprint for a piece of text or an author.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleVector {
    /// Type-token ratio — how varied the vocabulary is
    pub vocabulary: f64,
    /// Average sentence length, saturating at 30 words/sentence
    pub complexity: f64,
    /// Sentence-length variation (standard deviation)
    pub pacing: f64,
    /// Abstract-noun density
    pub abstraction: f64,
}

impl StyleVector {
    /// The defined fallback for empty or degenerate input.
    pub const ZERO: StyleVector = StyleVector {
        vocabulary: 0.0,
        complexity: 0.0,
        pacing: 0.0,
        abstraction: 0.0,
    };

    pub fn new(vocabulary: f64, complexity: f64, pacing: f64, abstraction: f64) -> Self {
        Self {
            vocabulary,
            complexity,
            pacing,
            abstraction,
        }
    }

    /// Canonical positional form. Dimension order is fixed:
    /// vocabulary, complexity, pacing, abstraction.
    pub fn to_array(self) -> [f64; 4] {
        [self.vocabulary, self.complexity, self.pacing, self.abstraction]
    }

    pub fn is_zero(self) -> bool {
        self.to_array().iter().all(|&d| d == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order_is_canonical() {
        let v = StyleVector::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_zero_vector() {
        assert!(StyleVector::ZERO.is_zero());
        assert!(!StyleVector::new(0.0, 0.0, 1.0, 0.0).is_zero());
    }

    #[test]
    fn test_serde_round_trip() {
        let v = StyleVector::new(53.0, 10.0, 0.0, 7.0);
        let json = serde_json::to_string(&v).unwrap();
        let back: StyleVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
