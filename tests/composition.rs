// Composition tests — verifying that the modules chain together correctly.
//
// These tests exercise the data flow a user request goes through:
//   lexicon overrides -> tagger -> comparator -> lead log -> admin stats
// Filesystem side effects stay inside temp directories.

use std::sync::Arc;

use cvmatch::admin::{AdminStats, StatsSources};
use cvmatch::keywords::lexicon::Lexicon;
use cvmatch::keywords::tagger::RuleTagger;
use cvmatch::keywords::traits::{PosTag, Tagger, Token};
use cvmatch::keywords::KeywordComparator;
use cvmatch::leads::{LeadLog, LeadOutcome};

fn comparator_with_overrides(json: &str) -> KeywordComparator {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.json");
    std::fs::write(&path, json).unwrap();
    let lexicon = Lexicon::load(Some(&path)).unwrap();
    KeywordComparator::new(RuleTagger::new(Arc::new(lexicon)))
}

// ============================================================
// Chain: Lexicon overrides -> Tagger -> Comparator
// ============================================================

#[test]
fn extra_stop_words_drop_out_of_the_score() {
    let job = "Python developer with Docker";
    let default = KeywordComparator::english().compare("Python", job);
    let custom = comparator_with_overrides(r#"{ "extra_stop_words": ["developer"] }"#)
        .compare("Python", job);

    assert!(default.missing_keywords.iter().any(|k| k == "developer"));
    assert!(!custom.missing_keywords.iter().any(|k| k == "developer"));
    assert!(custom.match_score > default.match_score);
}

#[test]
fn protected_terms_keep_their_form_end_to_end() {
    let c = comparator_with_overrides(r#"{ "protected_terms": ["kubernetes", "pandas"] }"#);
    let keywords = c.extract_keywords("Data wrangling with pandas");
    assert!(keywords.contains("pandas"));
}

#[test]
fn broken_overrides_fail_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Lexicon::load(Some(&path)).is_err());
    assert!(Lexicon::load(Some(&dir.path().join("absent.json"))).is_err());
}

#[test]
fn comparator_is_shareable_across_threads() {
    let c = KeywordComparator::english();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = c.clone();
            std::thread::spawn(move || c.compare("Python developer", "Python Docker developer"))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].missing_keywords, vec!["docker"]);
}

// ============================================================
// Custom Tagger plugged into the comparator
// ============================================================

/// Whitespace tagger that treats every word as a noun.
struct NounTagger;

impl Tagger for NounTagger {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|w| Token {
                surface: w.to_string(),
                lemma: w.to_string(),
                pos: PosTag::Noun,
                is_stop: false,
                is_alpha: w.chars().all(char::is_alphabetic),
            })
            .collect()
    }
}

#[test]
fn comparator_accepts_any_tagger() {
    let c = KeywordComparator::new(NounTagger);
    let result = c.compare("alpha beta", "Alpha beta gamma delta");
    assert_eq!(result.match_score, 50);
    assert_eq!(result.missing_keywords, vec!["delta", "gamma"]);
}

// ============================================================
// Chain: Comparison -> Lead log -> Admin stats
// ============================================================

#[test]
fn comparison_with_lead_shows_up_in_stats() {
    let dir = tempfile::tempdir().unwrap();
    let sources = StatsSources {
        leads: dir.path().join("leads.csv"),
        payments: dir.path().join("payment_clicks.csv"),
        feedback: dir.path().join("usage_log.csv"),
    };

    let result = KeywordComparator::english().compare("Python", "Python Kubernetes");
    assert_eq!(result.match_score, 50);

    let log = LeadLog::new(sources.leads.clone());
    assert_eq!(
        log.record("Someone@Example.com").unwrap(),
        LeadOutcome::Recorded("Someone@Example.com".to_string())
    );

    std::fs::write(&sources.payments, "email,timestamp\nsomeone@example.com,2026-02-01 12:00:00\n")
        .unwrap();

    let stats = AdminStats::load(&sources).unwrap();
    assert_eq!(stats.lead_count, 1);
    assert_eq!(stats.checkout_clicks, 1);
    assert_eq!(stats.conversion_rate, 100.0);
    assert_eq!(stats.payment_timeline.len(), 1);

    // Only the email and timestamp were written
    let leads = std::fs::read_to_string(&sources.leads).unwrap();
    assert!(leads.contains("Someone@Example.com,"));
    assert!(!leads.to_lowercase().contains("python"));
}
