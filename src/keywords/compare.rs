// Directional keyword overlap between a candidate document and a reference.
//
// The score answers "how much of the job post does the CV cover":
//
//   match_score = floor(100 * |cv ∩ job| / |job|)
//
// It is deliberately asymmetric. Extra CV keywords never lower the score, and
// an empty reference yields a zero result instead of a division by zero or a
// fabricated 100%.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::extract::{extract_keywords, KeywordSet};
use super::tagger::RuleTagger;
use super::traits::Tagger;

/// Most missing keywords reported per comparison.
pub const MAX_MISSING_KEYWORDS: usize = 20;

/// Outcome of one comparison. Built fresh per call, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Percentage of reference keywords found in the candidate, truncated (0–100)
    pub match_score: u8,
    /// Reference keywords the candidate lacks, lexicographic, at most 20
    pub missing_keywords: Vec<String>,
}

/// Extracts keywords and scores a candidate text against a reference text.
///
/// Holds only the read-only tagger, so one instance can be shared across
/// threads for the life of the process.
pub struct KeywordComparator<T: Tagger = RuleTagger> {
    tagger: Arc<T>,
}

impl<T: Tagger> Clone for KeywordComparator<T> {
    fn clone(&self) -> Self {
        Self {
            tagger: Arc::clone(&self.tagger),
        }
    }
}

impl KeywordComparator<RuleTagger> {
    /// Comparator backed by the built-in English rule tagger.
    pub fn english() -> Self {
        Self::new(RuleTagger::english())
    }
}

impl<T: Tagger> KeywordComparator<T> {
    pub fn new(tagger: T) -> Self {
        Self {
            tagger: Arc::new(tagger),
        }
    }

    pub fn extract_keywords(&self, text: &str) -> KeywordSet {
        extract_keywords(self.tagger.as_ref(), text)
    }

    /// Score `candidate_text` (e.g. a CV) against `reference_text` (e.g. a job post).
    pub fn compare(&self, candidate_text: &str, reference_text: &str) -> ComparisonResult {
        let candidate = self.extract_keywords(candidate_text);
        let reference = self.extract_keywords(reference_text);
        let result = score_keywords(&candidate, &reference);

        debug!(
            candidate_keywords = candidate.len(),
            reference_keywords = reference.len(),
            match_score = result.match_score,
            missing = result.missing_keywords.len(),
            "Compared keyword sets"
        );

        result
    }
}

/// Score two already-extracted keyword sets.
pub fn score_keywords(candidate: &KeywordSet, reference: &KeywordSet) -> ComparisonResult {
    if reference.is_empty() {
        return ComparisonResult::default();
    }

    let matched = candidate.intersection_count(reference);
    // Integer division truncates: 99.9% reports as 99
    let match_score = (matched * 100 / reference.len()) as u8;

    let missing_keywords = reference
        .difference(candidate)
        .take(MAX_MISSING_KEYWORDS)
        .map(str::to_string)
        .collect();

    ComparisonResult {
        match_score,
        missing_keywords,
    }
}
