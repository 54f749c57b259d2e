// Style extraction — converts raw text into a StyleVector.
//
// Four metrics, each mapped onto a 0-100 scale:
//   vocabulary  — type-token ratio
//   complexity  — average sentence length
//   pacing      — sentence-length variation
//   abstraction — abstract-noun density
//
// The function is total: empty or degenerate input resolves to the zero
// vector, never an error.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

use super::vector::StyleVector;

// Everything that isn't a lowercase letter, digit, whitespace, or
// sentence-ending punctuation is stripped during normalization.
static STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s.!?]").expect("strip regex compiles"));

// Words are maximal runs of lowercase letters. Digits survive normalization
// but do not count as word characters, so "abc123" yields no word.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]+\b").expect("word regex compiles"));

// Sentences are split on runs of terminal punctuation.
static SENTENCE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence regex compiles"));

/// Closed list of common abstract-noun lemmas, matched exactly.
const ABSTRACT_LEMMAS: [&str; 21] = [
    "idea", "thought", "emotion", "freedom", "belief", "power", "justice", "truth", "memory",
    "society", "reason", "nature", "love", "time", "life", "soul", "art", "world", "wisdom",
    "fear", "hope",
];

/// Suffixes that mark a word longer than 5 characters as abstract.
const ABSTRACT_SUFFIXES: [&str; 7] = ["tion", "ism", "ity", "ment", "ness", "ance", "ence"];

/// Words-per-sentence value at which the complexity score saturates.
const COMPLEXITY_CEILING: f64 = 30.0;

/// Standard deviation at which the pacing score saturates.
const PACING_CEILING: f64 = 15.0;

/// Below this word count the type-token ratio is damped, since very short
/// samples inflate it.
const SMALL_SAMPLE_WORDS: usize = 50;
const SMALL_SAMPLE_DAMPING: f64 = 0.8;

// Abstract vocabulary is rare: the x8 multiplier saturates the score at
// roughly 12% abstract-word density.
const ABSTRACTION_MULTIPLIER: f64 = 8.0;

/// Extract a style fingerprint from raw text.
///
/// Normalization is destructive: the text is lowercased and every character
/// outside `[a-z0-9 \s . ! ?]` is dropped, including accented letters and
/// non-Latin scripts. Scores are rounded to the nearest integer.
pub fn extract(text: &str) -> StyleVector {
    let lowered = text.to_lowercase();
    let clean = STRIP_RE.replace_all(&lowered, "");

    let words: Vec<&str> = WORD_RE.find_iter(&clean).map(|m| m.as_str()).collect();
    if words.is_empty() {
        return StyleVector::ZERO;
    }

    let sentences: Vec<&str> = SENTENCE_SPLIT_RE
        .split(&clean)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    // Vocabulary: type-token ratio as a direct percentage.
    let unique: HashSet<&str> = words.iter().copied().collect();
    let mut vocabulary = unique.len() as f64 / words.len() as f64 * 100.0;
    if words.len() < SMALL_SAMPLE_WORDS {
        vocabulary *= SMALL_SAMPLE_DAMPING;
    }

    // Complexity: average words per sentence. A sentence count of zero is
    // treated as one to keep the division defined.
    let avg_sentence_len = words.len() as f64 / sentences.len().max(1) as f64;
    let complexity = (avg_sentence_len / COMPLEXITY_CEILING * 100.0).min(100.0);

    // Pacing: population standard deviation of per-sentence word counts.
    // The reference mean is the overall words-per-sentence average computed
    // above, shared with the complexity metric — not a separate mean of the
    // per-sentence lengths.
    let variance = sentences
        .iter()
        .map(|s| {
            let len = count_words(s) as f64;
            (len - avg_sentence_len).powi(2)
        })
        .sum::<f64>()
        / sentences.len().max(1) as f64;
    let pacing = (variance.sqrt() / PACING_CEILING * 100.0).min(100.0);

    // Abstraction: lemma-list hits plus long words with an abstract suffix,
    // each word counted at most once.
    let abstract_count = words.iter().filter(|w| is_abstract(w)).count();
    let abstraction =
        (abstract_count as f64 / words.len() as f64 * 100.0 * ABSTRACTION_MULTIPLIER).min(100.0);

    StyleVector::new(
        vocabulary.round(),
        complexity.round(),
        pacing.round(),
        abstraction.round(),
    )
}

/// Word count of a single sentence, under the same tokenization rule as the
/// full text.
fn count_words(sentence: &str) -> usize {
    WORD_RE.find_iter(sentence).count()
}

fn is_abstract(word: &str) -> bool {
    if ABSTRACT_LEMMAS.contains(&word) {
        return true;
    }
    word.len() > 5 && ABSTRACT_SUFFIXES.iter().any(|s| word.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_sat_fixture() {
        // 6 words, 4 unique, 2 sentences of 3 words each
        let v = extract("The cat sat. The cat ran.");
        assert_eq!(v, StyleVector::new(53.0, 10.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(extract(""), StyleVector::ZERO);
    }

    #[test]
    fn test_whitespace_only_is_zero() {
        assert_eq!(extract("   \t\n  "), StyleVector::ZERO);
    }

    #[test]
    fn test_no_letters_is_zero() {
        // Digits and punctuation survive normalization but produce no words
        assert_eq!(extract("123 456 ... !!! ???"), StyleVector::ZERO);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract("The CAT sat."), extract("the cat sat."));
    }

    #[test]
    fn test_whitespace_runs_are_irrelevant() {
        assert_eq!(extract("the   cat \t sat."), extract("the cat sat."));
    }

    #[test]
    fn test_digits_do_not_form_words() {
        // "abc123" has no word boundary between letter and digit
        assert_eq!(extract("abc123"), StyleVector::ZERO);
    }

    #[test]
    fn test_pacing_fixture() {
        // Sentences of 2 and 6 words, global average 4:
        // variance ((2-4)^2 + (6-4)^2)/2 = 4, stddev 2, pacing 13.33 -> 13
        let v = extract("one two. one two three four five six.");
        assert_eq!(v, StyleVector::new(60.0, 13.0, 13.0, 0.0));
    }

    #[test]
    fn test_abstraction_lemmas_and_suffixes() {
        // freedom + justice (lemmas), education + nation (suffix, >5 chars):
        // 4/10 abstract words saturates the score
        let v = extract("Freedom and justice shape the education of a modern nation.");
        assert_eq!(v.abstraction, 100.0);
    }

    #[test]
    fn test_suffix_requires_length_over_five() {
        // "prism" ends in -ism but is only 5 characters
        assert_eq!(extract("prism prism prism.").abstraction, 0.0);
        // "realism" qualifies
        assert!(extract("realism realism realism.").abstraction > 0.0);
    }

    #[test]
    fn test_lemma_with_suffix_counted_once() {
        // "emotion" is both a lemma and a -tion word; 1/2 abstract words
        // gives ratio 0.5 -> saturated, not double-counted past 100
        let v = extract("emotion everywhere.");
        assert_eq!(v.abstraction, 100.0);
    }

    #[test]
    fn test_small_sample_damping_boundary() {
        // 50 unique words: no damping, TTR is exactly 100
        let text_50 = unique_words(50).join(" ") + ".";
        assert_eq!(extract(&text_50).vocabulary, 100.0);

        // 49 unique words: damped to 80
        let text_49 = unique_words(49).join(" ") + ".";
        assert_eq!(extract(&text_49).vocabulary, 80.0);
    }

    #[test]
    fn test_complexity_saturates() {
        // A single 50-word sentence is well past the 30-word ceiling
        let text = unique_words(50).join(" ") + ".";
        assert_eq!(extract(&text).complexity, 100.0);
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        let v = extract("the cat sat on the mat");
        // 6 words / 1 sentence -> 20% of the ceiling
        assert_eq!(v.complexity, 20.0);
        assert_eq!(v.pacing, 0.0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let samples = [
            "a.",
            "Hope! Hope! Hope!",
            "One enormous unbroken sentence that keeps going and going without any terminal punctuation to speak of",
            "Tiny. Bursts. Then a very long meandering clause that wanders on. Stop.",
        ];
        for text in samples {
            let v = extract(text);
            for d in v.to_array() {
                assert!((0.0..=100.0).contains(&d), "{d} out of range for {text:?}");
            }
        }
    }

    fn unique_words(n: usize) -> Vec<String> {
        let letters: Vec<char> = ('a'..='z').collect();
        let mut words = Vec::with_capacity(n);
        'outer: for &a in &letters {
            for &b in &letters {
                if words.len() == n {
                    break 'outer;
                }
                words.push(format!("{a}{b}"));
            }
        }
        words
    }
}
