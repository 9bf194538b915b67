// Tagger trait — swap-ready abstraction over tokenization and lemmatization.
//
// The comparator only needs a stream of tokens carrying a lemma, a coarse
// part-of-speech tag and two flags. Keeping that behind a trait means the
// built-in rule tagger can be replaced by a statistical model later without
// touching the scoring algorithm.

use serde::Serialize;

/// Coarse part-of-speech categories (Universal Dependencies style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Interjection,
    Punctuation,
    Symbol,
    Other,
}

impl PosTag {
    /// Whether tokens with this tag carry keyword signal.
    ///
    /// Only nouns, proper nouns and verbs count. Adjectives and adverbs are
    /// excluded on purpose: they change scored outcomes if added.
    pub fn is_content(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Verb)
    }
}

/// A single linguistic unit produced by a tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Text as it appears in the (lowercased) input
    pub surface: String,
    /// Base / dictionary form
    pub lemma: String,
    pub pos: PosTag,
    pub is_stop: bool,
    /// True when every character is alphabetic (no digits, punctuation, symbols)
    pub is_alpha: bool,
}

/// Trait for turning text into tagged, lemmatized tokens.
///
/// Implementations must be deterministic: the same text always yields the
/// same tokens. They are shared across threads, so any model data must be
/// read-only after construction.
pub trait Tagger: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_tags() {
        assert!(PosTag::Noun.is_content());
        assert!(PosTag::ProperNoun.is_content());
        assert!(PosTag::Verb.is_content());
        assert!(!PosTag::Adjective.is_content());
        assert!(!PosTag::Adverb.is_content());
        assert!(!PosTag::Auxiliary.is_content());
        assert!(!PosTag::Numeral.is_content());
    }
}
