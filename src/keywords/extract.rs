// Keyword extraction — turns a document into its set of content lemmas.

use std::collections::BTreeSet;

use serde::Serialize;

use super::traits::Tagger;

/// Normalized, deduplicated keywords of one document.
///
/// Backed by an ordered set, so iteration is lexicographic and stable across
/// runs. That order is what `missing_keywords` inherits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of keywords present in both sets.
    pub fn intersection_count(&self, other: &KeywordSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Keywords in `self` that `other` lacks, in set order.
    pub fn difference<'a>(&'a self, other: &'a KeywordSet) -> impl Iterator<Item = &'a str> {
        self.0.difference(&other.0).map(String::as_str)
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Extract the keyword set of a text.
///
/// The whole text is lowercased first so "Python" and "python" match. A token
/// survives only if it is purely alphabetic, not a stop word, and tagged as a
/// noun, proper noun or verb; its lemma goes into the set.
pub fn extract_keywords<T: Tagger + ?Sized>(tagger: &T, text: &str) -> KeywordSet {
    let lowered = text.to_lowercase();

    tagger
        .tokenize(&lowered)
        .into_iter()
        .filter(|t| t.is_alpha && !t.is_stop && t.pos.is_content())
        .map(|t| t.lemma)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::tagger::RuleTagger;
    use crate::keywords::traits::{PosTag, Token};

    /// Splits on whitespace and tags by a fixed table — isolates the filter.
    struct TableTagger;

    impl Tagger for TableTagger {
        fn tokenize(&self, text: &str) -> Vec<Token> {
            text.split_whitespace()
                .map(|w| {
                    let (pos, is_stop) = match w {
                        "the" => (PosTag::Determiner, true),
                        "run" | "running" => (PosTag::Verb, false),
                        "fast" => (PosTag::Adjective, false),
                        "just" => (PosTag::Adverb, false),
                        "go" => (PosTag::Verb, true),
                        _ => (PosTag::Noun, false),
                    };
                    Token {
                        surface: w.to_string(),
                        lemma: if w == "running" { "run".into() } else { w.to_string() },
                        pos,
                        is_stop,
                        is_alpha: w.chars().all(char::is_alphabetic),
                    }
                })
                .collect()
        }
    }

    #[test]
    fn test_filters_stop_words_pos_and_non_alpha() {
        let set = extract_keywords(&TableTagger, "the rust running fast just go c3po");
        let words: Vec<&str> = set.iter().collect();
        assert_eq!(words, vec!["run", "rust"]);
    }

    #[test]
    fn test_lowercases_before_tagging() {
        let set = extract_keywords(&TableTagger, "THE Rust");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["rust"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = extract_keywords(&TableTagger, "rust rust run running");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_keywords(&TableTagger, "").is_empty());
        assert!(extract_keywords(&RuleTagger::english(), "").is_empty());
    }

    #[test]
    fn test_only_stop_words() {
        assert!(extract_keywords(&RuleTagger::english(), "the and of a").is_empty());
    }

    #[test]
    fn test_only_adjectives_and_adverbs() {
        let set = extract_keywords(&RuleTagger::english(), "strong excellent very quickly");
        assert!(set.is_empty(), "got {set:?}");
    }

    #[test]
    fn test_set_operations() {
        let a: KeywordSet = ["docker", "python", "rust"].into_iter().collect();
        let b: KeywordSet = ["python", "kubernetes"].into_iter().collect();
        assert_eq!(a.intersection_count(&b), 1);
        assert_eq!(b.difference(&a).collect::<Vec<_>>(), vec!["kubernetes"]);
        assert!(a.contains("rust"));
    }
}
