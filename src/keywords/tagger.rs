// Rule-based English tagger — the default Tagger implementation.
//
// Segments text into word, number and punctuation tokens, assigns each word a
// coarse part-of-speech tag from the lexicon plus suffix heuristics, and
// lemmatizes it. No model files, no network: everything it needs is in the
// Lexicon, which is built once and shared.

use std::sync::Arc;

use super::lemma::lemmatize;
use super::lexicon::Lexicon;
use super::traits::{PosTag, Tagger, Token};

/// Suffixes that mark an adjective when the word isn't a listed exception.
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "less", "ive", "able", "ible", "ical"];

/// Suffixes that mark a verb form.
const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify"];

/// English clitics split off the preceding word ("team's", "we're").
const CLITICS: &[&str] = &["s", "t", "re", "ve", "ll", "d", "m"];

/// Tagger driven entirely by the lexicon and suffix rules.
#[derive(Clone)]
pub struct RuleTagger {
    lexicon: Arc<Lexicon>,
}

impl RuleTagger {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Tagger backed by the shared default English lexicon.
    pub fn english() -> Self {
        Self::new(Lexicon::shared())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Coarse part-of-speech tag for a single lowercase token.
    pub fn tag(&self, word: &str) -> PosTag {
        if let Some(tag) = self.lexicon.closed_class(word) {
            return tag;
        }
        if !word.chars().all(char::is_alphabetic) {
            return non_word_tag(word);
        }
        if self.lexicon.is_proper_noun(word) {
            return PosTag::ProperNoun;
        }
        if self.lexicon.is_adverb(word) {
            return PosTag::Adverb;
        }
        if self.lexicon.is_adjective(word) {
            return PosTag::Adjective;
        }
        if self.lexicon.is_ing_noun(word) {
            return PosTag::Noun;
        }

        let len = word.chars().count();
        if !self.lexicon.is_suffix_exception(word) {
            if len > 4 && word.ends_with("ly") {
                return PosTag::Adverb;
            }
            if ADJECTIVE_SUFFIXES
                .iter()
                .any(|s| word.ends_with(s) && len > s.len() + 2)
            {
                return PosTag::Adjective;
            }
        }

        if VERB_SUFFIXES
            .iter()
            .any(|s| word.ends_with(s) && len > s.len() + 1)
        {
            return PosTag::Verb;
        }

        PosTag::Noun
    }

    fn make_token(&self, surface: String, prev: Option<PosTag>) -> Token {
        let key = surface.to_lowercase();
        let mut pos = self.tag(&key);
        // "the building", "a listing": a determiner makes the -ing form a noun
        if pos == PosTag::Verb && prev == Some(PosTag::Determiner) && key.ends_with("ing") {
            pos = PosTag::Noun;
        }
        let is_alpha = !key.is_empty() && key.chars().all(char::is_alphabetic);
        let lemma = if is_alpha {
            lemmatize(&key, pos, &self.lexicon)
        } else {
            key.clone()
        };
        let is_stop = self.lexicon.is_stop_word(&key) || self.lexicon.is_stop_word(&lemma);

        Token {
            surface,
            lemma,
            pos,
            is_stop,
            is_alpha,
        }
    }
}

impl Tagger for RuleTagger {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut prev = None;
        segment(text)
            .into_iter()
            .map(|surface| {
                let token = self.make_token(surface, prev);
                prev = Some(token.pos);
                token
            })
            .collect()
    }
}

fn non_word_tag(word: &str) -> PosTag {
    if word.chars().all(char::is_numeric) {
        PosTag::Numeral
    } else if word.chars().any(char::is_alphanumeric) {
        PosTag::Other
    } else if word.chars().all(is_punctuation) {
        PosTag::Punctuation
    } else {
        PosTag::Symbol
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
        || matches!(c, '‘' | '’' | '“' | '”' | '–' | '—' | '…' | '«' | '»')
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '’'
}

/// Split text into surface tokens.
///
/// Runs of letters and digits form one token; whitespace separates; every
/// other character stands alone. Clitics after an apostrophe become their own
/// token, and "n't" is split from its verb the way English tokenizers do
/// ("don't" -> "do", "n't").
pub fn segment(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if !c.is_alphanumeric() {
            tokens.push(c.to_string());
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_alphanumeric() {
            i += 1;
        }
        let mut word: String = chars[start..i].iter().collect();

        // Apostrophe followed by letters: clitic or part of a name
        if i + 1 < chars.len() && is_apostrophe(chars[i]) && chars[i + 1].is_alphabetic() {
            let tail_start = i + 1;
            let mut j = tail_start;
            while j < chars.len() && chars[j].is_alphanumeric() {
                j += 1;
            }
            let tail: String = chars[tail_start..j].iter().collect();
            let tail_lower = tail.to_lowercase();

            if tail_lower == "t" && word.len() > 1 && word.to_lowercase().ends_with('n') {
                word.pop();
                tokens.push(word);
                tokens.push(format!("n{}{}", chars[i], tail));
            } else if CLITICS.contains(&tail_lower.as_str()) {
                tokens.push(word);
                tokens.push(format!("{}{}", chars[i], tail));
            } else {
                // "o'neil" stays one (non-alphabetic) token
                tokens.push(format!("{}{}{}", word, chars[i], tail));
            }
            i = j;
            continue;
        }

        tokens.push(word);
    }

    tokens
}
