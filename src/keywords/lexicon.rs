// English language data for the rule tagger.
//
// Everything the tagger and lemmatizer look up lives here: the stop word list
// (NLTK's English function words from the `stop-words` crate, plus a few
// light verbs and filler nouns), closed-class words with their fixed tags,
// irregular inflections, and terms that must never be lemmatized. The data is
// read-only once built. `Lexicon::shared()` builds the default English lexicon
// once per process; `Lexicon::load` applies an optional JSON overrides file
// at startup and fails fast if that file is unusable.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use serde::Deserialize;
use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

use super::traits::PosTag;

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "what", "which", "whoever", "whatever", "whichever", "someone", "somebody",
    "something", "anyone", "anybody", "anything", "everyone", "everybody", "everything",
    "nobody", "nothing", "oneself",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "few", "many", "much", "several", "another", "such",
    "other", "own", "same",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "without", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to", "from", "up",
    "down", "over", "under", "within", "across", "along", "among", "around", "behind",
    "beside", "besides", "beyond", "despite", "except", "inside", "outside", "onto", "toward",
    "towards", "upon", "via", "per", "throughout", "amid", "near", "off", "out", "like",
    "unlike", "versus", "vs",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "if", "because", "although", "though", "while",
    "whereas", "unless", "until", "since", "whether", "than", "once", "as", "when", "where",
    "whenever", "wherever", "how", "why",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ought", "wo", "ca", "sha",
];

const PARTICLES: &[&str] = &["not", "n't", "'s", "'", "’s", "to"];

const INTERJECTIONS: &[&str] = &["yes", "oh", "ok", "okay", "hello", "hi", "hey", "please", "thanks", "wow"];

const NUMERALS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion",
];

/// Adverbs that don't end in -ly.
const ADVERBS: &[&str] = &[
    "very", "also", "often", "always", "never", "sometimes", "usually", "already", "still",
    "just", "even", "ever", "again", "soon", "now", "then", "here", "there", "too", "quite",
    "rather", "almost", "perhaps", "maybe", "well", "hard", "together", "abroad",
    "away", "back", "forward", "ahead", "instead", "however", "therefore", "thus", "hence",
    "moreover", "furthermore", "otherwise", "meanwhile", "nonetheless", "nevertheless",
    "today", "tomorrow", "yesterday", "anywhere", "everywhere", "somewhere", "nowhere",
    "more", "most", "less", "least", "only", "else", "indeed", "not",
];

/// Common adjectives in job postings and CVs that no suffix rule catches.
const ADJECTIVES: &[&str] = &[
    "good", "great", "strong", "excellent", "outstanding", "new", "old", "large", "small",
    "big", "high", "low", "senior", "junior", "key", "main", "major", "minor",
    "top", "best", "better", "fast", "quick", "solid", "deep", "broad", "wide", "long",
    "short", "full", "remote", "hybrid", "complex", "simple", "modern", "proven",
    "relevant", "related", "desired", "preferred", "required", "skilled", "talented",
    "motivated", "passionate", "proficient", "fluent", "familiar",
    "able", "capable", "competent", "diverse", "dynamic", "robust", "scalable", "reliable",
    "secure", "agile", "smart", "bright", "clear", "clean", "open",
    "free", "real", "true", "ideal", "similar", "different", "various", "multiple", "current",
    "previous", "recent", "future", "internal", "external", "global", "local", "national",
    "international", "independent", "efficient", "effective", "exceptional",
    "interesting", "exciting", "challenging", "demanding", "rewarding", "competitive",
    "attractive", "flexible", "friendly", "basic", "advanced", "intermediate", "extensive",
    "strategic", "technical", "analytical", "critical", "practical",
    "logical", "creative", "innovative", "collaborative", "proactive", "responsible",
    "accountable", "qualified", "eager", "keen", "willing", "ready", "successful",
    "natural", "general", "special", "specific", "certain", "common", "public", "private",
    "overall", "daily", "weekly", "monthly", "yearly", "annual",
];

/// Words that look like adjectives or adverbs by suffix but are nouns or verbs.
const SUFFIX_EXCEPTIONS: &[&str] = &[
    "apply", "supply", "reply", "rely", "ally", "fly", "family", "assembly", "anomaly",
    "monopoly", "italy", "july", "butterfly", "jelly", "belly", "bully", "rally", "tally",
    "multiply", "comply", "imply", "folly", "holly", "lily", "poly", "oily", "jolly",
    "executive", "objective", "initiative", "representative", "perspective", "directive",
    "incentive", "alternative", "narrative", "detective", "archive", "motive", "native",
    "olive", "drive", "hive", "five", "live", "give", "dive", "thrive", "arrive", "derive",
    "strive", "survive", "revive", "deprive", "relative", "operative", "adhesive",
    "explosive", "locomotive", "conservative", "progressive", "prerogative", "additive",
    "table", "variable", "deliverable", "cable", "stable", "fable", "label", "vegetable",
    "receivable", "payable", "bible", "syllable", "constable", "timetable", "turntable",
    "mobile", "candidate",
];

/// High-frequency verbs and nouns with no skill signal, stopped on top of the
/// function word list.
const LIGHT_WORDS: &[&str] = &[
    "make", "made", "makes", "making", "get", "gets", "got", "getting", "take", "takes",
    "took", "taken", "taking", "give", "gives", "gave", "given", "go", "goes", "went", "gone",
    "see", "seen", "saw", "say", "says", "put", "puts", "show", "shows", "showed", "call",
    "become", "becomes", "became", "seem", "seems", "seemed", "keep", "keeps", "move",
    "done", "used", "using", "name", "part", "side", "bottom", "front", "amount", "thing",
];

/// Nouns ending in "-ing": tagged as nouns, so they keep their "-ing".
const ING_NOUNS: &[&str] = &[
    "morning", "evening", "ceiling", "wedding", "sibling", "lightning", "pudding", "darling",
    "duckling", "seedling", "inkling", "awning", "offspring", "string", "spring",
    // fields and functions
    "marketing", "accounting", "engineering", "training", "networking", "testing",
    "programming", "learning", "computing", "banking", "consulting", "recruiting",
    "manufacturing", "processing", "scheduling", "budgeting", "forecasting", "modeling",
    "modelling", "planning", "publishing", "advertising", "branding", "copywriting",
    "reporting", "auditing", "bookkeeping", "onboarding", "coaching", "nursing",
    "catering", "plumbing", "landscaping", "monitoring", "staffing", "sourcing",
    "purchasing", "merchandising", "packaging", "shipping", "pricing", "licensing",
    "financing", "outsourcing", "troubleshooting", "debugging", "benchmarking",
    "fundraising", "ticketing", "billing", "invoicing", "underwriting", "trading",
    "housekeeping", "tutoring", "lending", "hosting", "caching", "logging", "routing",
    "clustering", "scripting", "prototyping", "wireframing", "storytelling",
    // things
    "building", "clothing", "housing", "meeting", "painting", "drawing", "opening",
    "setting", "understanding", "warning", "listing", "posting",
    "offering", "funding", "filing", "briefing", "ranking", "rating", "heading",
];

/// Technology and product names: tagged as proper nouns and never lemmatized.
const PROPER_NOUNS: &[&str] = &[
    "python", "java", "javascript", "typescript", "golang", "rust", "kotlin", "swift", "scala",
    "ruby", "php", "perl", "haskell", "elixir", "erlang", "clojure", "matlab", "docker",
    "kubernetes", "terraform", "ansible", "jenkins", "github", "gitlab", "bitbucket", "git",
    "aws", "azure", "gcp", "linux", "unix", "macos", "ios", "android", "react", "angular",
    "vue", "svelte", "django", "flask", "fastapi", "spring", "rails", "laravel", "nodejs",
    "sql", "mysql", "postgres", "postgresql", "sqlite", "mongodb", "redis", "kafka", "spark",
    "hadoop", "airflow", "snowflake", "databricks", "tableau", "looker", "excel", "powerpoint",
    "salesforce", "hubspot", "jira", "confluence", "figma", "sketch", "photoshop",
    "illustrator", "tensorflow", "pytorch", "pandas", "numpy", "graphql", "html", "css",
    "sass", "webpack", "nginx", "grafana", "prometheus", "elasticsearch", "sap", "oracle",
];

/// Nouns whose plural-looking surface is also the lemma.
const PROTECTED_TERMS: &[&str] = &[
    "news", "series", "species", "analytics", "logistics", "economics", "mathematics",
    "physics", "statistics", "electronics", "robotics", "ethics", "genetics", "linguistics",
    "mechanics", "graphics", "devops", "mlops", "ops", "sales", "means", "headquarters",
    "basis", "analysis", "status", "campus", "bonus", "focus", "virus", "census", "consensus",
    "thesis", "crisis", "axis", "diagnosis", "synopsis", "emphasis", "hypothesis", "canvas",
    "atlas", "alias", "bias", "gas", "bus", "plus", "corpus", "nexus", "prospectus",
    "business", "process", "access", "success", "address", "progress", "express",
];

/// Irregular inflections mapped to their lemma.
const IRREGULAR: &[(&str, &str)] = &[
    // verbs
    ("led", "lead"), ("built", "build"), ("ran", "run"), ("wrote", "write"),
    ("written", "write"), ("writing", "write"), ("made", "make"), ("took", "take"),
    ("taken", "take"), ("gave", "give"), ("given", "give"), ("got", "get"), ("gotten", "get"),
    ("went", "go"), ("gone", "go"), ("saw", "see"), ("seen", "see"), ("knew", "know"),
    ("known", "know"), ("grew", "grow"), ("grown", "grow"), ("drove", "drive"),
    ("driven", "drive"), ("began", "begin"), ("begun", "begin"), ("brought", "bring"),
    ("bought", "buy"), ("taught", "teach"), ("thought", "think"), ("sought", "seek"),
    ("caught", "catch"), ("found", "find"), ("held", "hold"), ("kept", "keep"),
    ("left", "leave"), ("lost", "lose"), ("meant", "mean"), ("met", "meet"), ("paid", "pay"),
    ("said", "say"), ("sold", "sell"), ("sent", "send"), ("spent", "spend"),
    ("stood", "stand"), ("told", "tell"), ("understood", "understand"), ("won", "win"),
    ("chose", "choose"), ("chosen", "choose"), ("fell", "fall"), ("fallen", "fall"),
    ("felt", "feel"), ("flew", "fly"), ("flown", "fly"), ("forgot", "forget"),
    ("forgotten", "forget"), ("spoke", "speak"), ("spoken", "speak"), ("broke", "break"),
    ("broken", "break"), ("drew", "draw"), ("drawn", "draw"), ("threw", "throw"),
    ("thrown", "throw"), ("shown", "show"), ("oversaw", "oversee"), ("overseen", "oversee"),
    ("undertook", "undertake"), ("undertaken", "undertake"), ("rebuilt", "rebuild"),
    ("rewrote", "rewrite"), ("rewritten", "rewrite"), ("dealt", "deal"),
    ("lent", "lend"), ("bent", "bend"), ("fed", "feed"), ("sped", "speed"), ("bred", "breed"),
    ("fled", "flee"), ("shot", "shoot"), ("slept", "sleep"), ("swept", "sweep"),
    ("struck", "strike"), ("stuck", "stick"), ("hung", "hang"), ("dug", "dig"),
    ("sang", "sing"), ("sung", "sing"), ("rang", "ring"), ("rung", "ring"), ("swam", "swim"),
    ("wore", "wear"), ("worn", "wear"), ("tore", "tear"), ("torn", "tear"), ("bore", "bear"),
    ("borne", "bear"), ("froze", "freeze"), ("frozen", "freeze"), ("stole", "steal"),
    ("stolen", "steal"), ("woke", "wake"), ("woken", "wake"), ("rode", "ride"),
    ("ridden", "ride"), ("hid", "hide"), ("hidden", "hide"), ("bit", "bite"),
    ("bitten", "bite"), ("ate", "eat"), ("eaten", "eat"), ("forgave", "forgive"),
    ("forgiven", "forgive"), ("mistook", "mistake"), ("mistaken", "mistake"),
    ("withdrew", "withdraw"), ("withdrawn", "withdraw"), ("arose", "arise"),
    ("arisen", "arise"), ("became", "become"), ("overcame", "overcome"),
    ("outgrew", "outgrow"), ("outgrown", "outgrow"), ("embed", "embed"),
    // nouns
    ("children", "child"), ("people", "person"), ("men", "man"), ("women", "woman"),
    ("analyses", "analysis"), ("criteria", "criterion"), ("phenomena", "phenomenon"),
    ("indices", "index"), ("matrices", "matrix"), ("appendices", "appendix"),
    ("vertices", "vertex"), ("feet", "foot"), ("teeth", "tooth"), ("mice", "mouse"),
    ("geese", "goose"), ("lives", "life"), ("wives", "wife"), ("knives", "knife"),
    ("halves", "half"), ("shelves", "shelf"), ("theses", "thesis"), ("crises", "crisis"),
    ("diagnoses", "diagnosis"), ("hypotheses", "hypothesis"), ("bases", "basis"),
    ("curricula", "curriculum"), ("media", "medium"), ("alumni", "alumnus"),
    ("syllabi", "syllabus"), ("stimuli", "stimulus"), ("caches", "cache"),
    ("niches", "niche"), ("businesses", "business"), ("processes", "process"),
    ("statuses", "status"), ("campuses", "campus"), ("bonuses", "bonus"),
    ("focuses", "focus"), ("focused", "focus"), ("focusing", "focus"),
    ("focussed", "focus"), ("focussing", "focus"), ("biased", "bias"),
    ("buses", "bus"), ("viruses", "virus"), ("aliases", "alias"), ("canvases", "canvas"),
];

/// User-supplied lexicon adjustments, loaded from JSON at startup.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LexiconOverrides {
    /// Extra words to treat as stop words
    pub extra_stop_words: Vec<String>,
    /// Words to remove from the stop list (e.g. "work" for job postings)
    pub allowed_words: Vec<String>,
    /// Extra proper nouns (tool and product names)
    pub proper_nouns: Vec<String>,
    /// Extra words whose surface form is their lemma
    pub protected_terms: Vec<String>,
    /// Extra irregular forms: inflected -> lemma
    pub irregular: HashMap<String, String>,
    /// Extra "-ing" nouns ("rigging")
    pub ing_nouns: Vec<String>,
}

/// Read-only language data shared by every tagging call.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    closed_class: HashMap<&'static str, PosTag>,
    adjectives: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    suffix_exceptions: HashSet<&'static str>,
    proper_nouns: HashSet<String>,
    protected: HashSet<String>,
    irregular: HashMap<String, String>,
    ing_nouns: HashSet<String>,
}

static SHARED: OnceLock<Arc<Lexicon>> = OnceLock::new();

impl Lexicon {
    /// Build the default English lexicon.
    pub fn english() -> Self {
        // NLTK English stop words from the stop-words crate
        let stop_words: HashSet<String> = get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .chain(LIGHT_WORDS.iter().map(|w| w.to_string()))
            .collect();

        // Later tables win, so the more specific categories go last.
        let mut closed_class = HashMap::new();
        for (words, tag) in [
            (DETERMINERS, PosTag::Determiner),
            (ADPOSITIONS, PosTag::Adposition),
            (CONJUNCTIONS, PosTag::Conjunction),
            (INTERJECTIONS, PosTag::Interjection),
            (NUMERALS, PosTag::Numeral),
            (PRONOUNS, PosTag::Pronoun),
            (AUXILIARIES, PosTag::Auxiliary),
            (PARTICLES, PosTag::Particle),
        ] {
            for &w in words {
                closed_class.insert(w, tag);
            }
        }

        let lexicon = Self {
            stop_words,
            closed_class,
            adjectives: ADJECTIVES.iter().copied().collect(),
            adverbs: ADVERBS.iter().copied().collect(),
            suffix_exceptions: SUFFIX_EXCEPTIONS.iter().copied().collect(),
            proper_nouns: PROPER_NOUNS.iter().map(|s| s.to_string()).collect(),
            protected: PROTECTED_TERMS.iter().map(|s| s.to_string()).collect(),
            irregular: IRREGULAR
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ing_nouns: ING_NOUNS.iter().map(|s| s.to_string()).collect(),
        };

        debug!(
            stop_words = lexicon.stop_words.len(),
            irregular = lexicon.irregular.len(),
            "Built English lexicon"
        );

        lexicon
    }

    /// The default English lexicon, built on first use and shared afterwards.
    pub fn shared() -> Arc<Lexicon> {
        SHARED.get_or_init(|| Arc::new(Self::english())).clone()
    }

    /// Build the English lexicon and apply an overrides file if one is given.
    ///
    /// A configured path that can't be read or parsed is a startup failure:
    /// serving comparisons with a silently different word list would change
    /// every score.
    pub fn load(overrides_path: Option<&Path>) -> Result<Self> {
        let mut lexicon = Self::shared().as_ref().clone();
        let Some(path) = overrides_path else {
            return Ok(lexicon);
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon overrides from {}", path.display()))?;
        let overrides: LexiconOverrides = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed lexicon overrides in {}", path.display()))?;

        lexicon.apply(overrides);
        info!(path = %path.display(), "Loaded lexicon overrides");
        Ok(lexicon)
    }

    /// Merge overrides into this lexicon. All words are lowercased first.
    pub fn apply(&mut self, overrides: LexiconOverrides) {
        for w in overrides.extra_stop_words {
            self.stop_words.insert(w.to_lowercase());
        }
        for w in overrides.allowed_words {
            self.stop_words.remove(&w.to_lowercase());
        }
        for w in overrides.proper_nouns {
            self.proper_nouns.insert(w.to_lowercase());
        }
        for w in overrides.protected_terms {
            self.protected.insert(w.to_lowercase());
        }
        for (form, lemma) in overrides.irregular {
            self.irregular.insert(form.to_lowercase(), lemma.to_lowercase());
        }
        for w in overrides.ing_nouns {
            self.ing_nouns.insert(w.to_lowercase());
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Fixed tag for pronouns, determiners, auxiliaries and other function words.
    pub fn closed_class(&self, word: &str) -> Option<PosTag> {
        self.closed_class.get(word).copied()
    }

    pub fn is_adjective(&self, word: &str) -> bool {
        self.adjectives.contains(word)
    }

    pub fn is_adverb(&self, word: &str) -> bool {
        self.adverbs.contains(word)
    }

    /// Word that a suffix rule would misclassify as an adjective or adverb.
    pub fn is_suffix_exception(&self, word: &str) -> bool {
        self.suffix_exceptions.contains(word)
    }

    pub fn is_proper_noun(&self, word: &str) -> bool {
        self.proper_nouns.contains(word)
    }

    pub fn is_protected(&self, word: &str) -> bool {
        self.protected.contains(word)
    }

    pub fn irregular_lemma(&self, word: &str) -> Option<&str> {
        self.irregular.get(word).map(String::as_str)
    }

    /// Noun that ends in "-ing" but isn't a verb form ("marketing").
    pub fn is_ing_noun(&self, word: &str) -> bool {
        self.ing_nouns.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_has_common_stop_words() {
        let lex = Lexicon::english();
        for w in ["the", "and", "of", "a"] {
            assert!(lex.is_stop_word(w), "{w} should be a stop word");
        }
        assert!(!lex.is_stop_word("kubernetes"));
        assert!(lex.is_stop_word("using"));
    }

    #[test]
    fn test_content_words_are_not_stop_words() {
        let lex = Lexicon::english();
        for w in [
            "research", "computer", "system", "test", "information", "work", "problem",
            "value", "member",
        ] {
            assert!(!lex.is_stop_word(w), "{w} should not be a stop word");
        }
    }

    #[test]
    fn test_closed_class_lookup() {
        let lex = Lexicon::english();
        assert_eq!(lex.closed_class("the"), Some(PosTag::Determiner));
        assert_eq!(lex.closed_class("was"), Some(PosTag::Auxiliary));
        assert_eq!(lex.closed_class("they"), Some(PosTag::Pronoun));
        assert_eq!(lex.closed_class("to"), Some(PosTag::Particle));
        assert_eq!(lex.closed_class("docker"), None);
    }

    #[test]
    fn test_shared_is_built_once() {
        assert!(Arc::ptr_eq(&Lexicon::shared(), &Lexicon::shared()));
    }

    #[test]
    fn test_overrides_applied() {
        let mut lex = Lexicon::english();
        let mut irregular = HashMap::new();
        irregular.insert("Kubectl".to_string(), "kubectl".to_string());
        lex.apply(LexiconOverrides {
            extra_stop_words: vec!["Synergy".to_string()],
            allowed_words: vec!["the".to_string()],
            proper_nouns: vec!["Zig".to_string()],
            protected_terms: vec!["pipes".to_string()],
            irregular,
            ing_nouns: vec!["Rigging".to_string()],
        });
        assert!(lex.is_stop_word("synergy"));
        assert!(!lex.is_stop_word("the"));
        assert!(lex.is_proper_noun("zig"));
        assert!(lex.is_protected("pipes"));
        assert_eq!(lex.irregular_lemma("kubectl"), Some("kubectl"));
        assert!(lex.is_ing_noun("rigging"));
    }

    #[test]
    fn test_load_without_path_is_default() {
        let lex = Lexicon::load(None).unwrap();
        assert!(lex.is_stop_word("the"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Lexicon::load(Some(Path::new("/nonexistent/cvmatch-lexicon.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(Lexicon::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"extra_stop_words": ["rockstar"]}}"#).unwrap();
        let lex = Lexicon::load(Some(file.path())).unwrap();
        assert!(lex.is_stop_word("rockstar"));
        assert!(lex.is_stop_word("the"));
    }
}
