// Author matching — ranks the catalog against a query fingerprint.
//
// The ranker walks the candidate list once per scope (overall, then per
// era when requested), scoring each candidate with cosine similarity.
// Candidates without a stored style vector are skipped, not errors.

use serde::Serialize;

use crate::db::models::{Author, Era};

use super::similarity;
use super::vector::StyleVector;

/// Score reported when no candidate could be ranked. Below any valid score.
pub const NO_MATCH_SCORE: i64 = -1;

/// How many runners-up the debug list keeps.
const DEBUG_LIST_LEN: usize = 5;

/// An author paired with its rounded 0-100 similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAuthor {
    pub author: Author,
    pub score: i64,
}

/// The best match within a single era.
#[derive(Debug, Clone, Serialize)]
pub struct EraMatch {
    pub era: Era,
    pub best: ScoredAuthor,
}

/// A debug-list entry: candidate name and score, for inspecting runners-up.
#[derive(Debug, Clone, Serialize)]
pub struct DebugEntry {
    pub name: String,
    pub score: i64,
}

/// The complete result of ranking a query against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    /// The fingerprint extracted from the submitted text
    pub query: StyleVector,
    /// Best overall match, absent when the catalog had no usable candidate
    pub best: Option<ScoredAuthor>,
    /// Best overall score, or NO_MATCH_SCORE when `best` is absent
    pub score: i64,
    /// Best match per era; eras with no eligible candidate are omitted
    pub era_matches: Vec<EraMatch>,
    /// Top candidates by score, descending, truncated to five
    pub debug: Vec<DebugEntry>,
}

/// Rank all catalog authors against a query vector.
///
/// Ties go to the candidate seen first: the comparison is strictly greater,
/// and `authors` is iterated in catalog order. Pass `eras` to also compute
/// one best match per era.
pub fn rank(query: &StyleVector, authors: &[Author], eras: Option<&[Era]>) -> MatchOutcome {
    let mut best: Option<ScoredAuthor> = None;
    let mut debug = Vec::new();

    for author in authors {
        let Some(style) = author.style else { continue };
        let score = score_against(query, &style);

        debug.push(DebugEntry {
            name: author.name.clone(),
            score,
        });

        // First seen wins on ties — strictly greater, never greater-or-equal
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(ScoredAuthor {
                author: author.clone(),
                score,
            });
        }
    }

    // Stable sort keeps catalog order among equal scores
    debug.sort_by(|a, b| b.score.cmp(&a.score));
    debug.truncate(DEBUG_LIST_LEN);

    let era_matches = match eras {
        Some(eras) => eras
            .iter()
            .filter_map(|era| best_in_era(query, authors, era))
            .collect(),
        None => Vec::new(),
    };

    let score = best.as_ref().map_or(NO_MATCH_SCORE, |b| b.score);

    MatchOutcome {
        query: *query,
        best,
        score,
        era_matches,
        debug,
    }
}

/// Best candidate within one era, under the same first-seen tie-break.
/// Returns None when the era has no candidate with a usable vector.
fn best_in_era(query: &StyleVector, authors: &[Author], era: &Era) -> Option<EraMatch> {
    let mut best: Option<ScoredAuthor> = None;

    for author in authors.iter().filter(|a| a.era_id == Some(era.id)) {
        let Some(style) = author.style else { continue };
        let score = score_against(query, &style);

        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(ScoredAuthor {
                author: author.clone(),
                score,
            });
        }
    }

    best.map(|best| EraMatch {
        era: era.clone(),
        best,
    })
}

/// Rounded 0-100 similarity between the query and one candidate vector.
fn score_against(query: &StyleVector, candidate: &StyleVector) -> i64 {
    (similarity::cosine(query, candidate) * 100.0).round() as i64
}
