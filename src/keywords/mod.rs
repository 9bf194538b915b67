// Keyword extraction and CV-to-job comparison.

pub mod compare;
pub mod extract;
pub mod lemma;
pub mod lexicon;
pub mod tagger;
pub mod traits;

pub use compare::{ComparisonResult, KeywordComparator, MAX_MISSING_KEYWORDS};
pub use extract::{extract_keywords, KeywordSet};
