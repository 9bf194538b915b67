// Rule-based English lemmatizer.
//
// Without a dictionary we can't look base forms up, so inflections are undone
// with suffix rules in the spirit of WordNet's morphy plus Porter's step 1b
// cleanup: strip the inflection, undouble a doubled final consonant, and put
// back a silent "e" when the remaining stem ends the way English e-final
// verbs do ("manag" -> "manage", "experienc" -> "experience").
//
// What matters most is consistency: every inflected form of a word has to
// land on the same lemma, otherwise a CV saying "managed" is reported as
// missing the job post's "manages".

use super::lexicon::Lexicon;
use super::traits::PosTag;

/// Stems that look e-final by the ending rules but aren't.
const KEEP_BARE: &[&str] = &[
    "sync", "spec", "pivot", "pilot", "ballot", "robot", "depot", "snapshot", "pencil",
    "stencil", "council", "until", "fulfil", "program", "diagram", "combat",
];

/// E-final stems the ending rules miss.
const RESTORE_E: &[&str] = &[
    "writ", "rewrit", "overwrit", "underwrit", "invit", "unit", "excit", "cit", "ignit",
    "incit", "expedit", "recit", "stor", "explor", "scor", "ignor", "restor", "ador", "implor",
    "deplor", "bor", "zon", "phon", "clon", "hon", "tast", "wast", "past", "prob", "rout",
    "cop", "scop", "hop", "rop", "elop", "wip", "pip", "swip", "tun", "prun", "cach", "creat",
    "recreat", "procreat", "squar", "quot", "persuad", "dissuad", "requir", "acquir", "inquir",
    "interfer", "adher", "persever",
];

/// Stems ending in a doubled "l" that keep it.
const KEEP_DOUBLE_L: &[&str] = &["enroll", "unroll"];

/// Base forms ending in "eed" — the "ed" is not an inflection.
const BASE_EED: &[&str] = &[
    "need", "speed", "seed", "proceed", "succeed", "exceed", "feed", "breed", "bleed", "weed",
    "deed", "heed", "greed", "reed", "steed", "tweed", "indeed",
];

/// Reduce a lowercase word to its lemma given its part of speech.
///
/// Proper nouns, protected terms and every non-noun, non-verb tag come back
/// unchanged. Irregular forms are looked up before any suffix rule runs.
pub fn lemmatize(word: &str, pos: PosTag, lexicon: &Lexicon) -> String {
    if lexicon.is_proper_noun(word) || lexicon.is_protected(word) {
        return word.to_string();
    }
    if let Some(lemma) = lexicon.irregular_lemma(word) {
        return lemma.to_string();
    }

    match pos {
        PosTag::Noun => noun_lemma(word),
        PosTag::Verb => verb_lemma(word),
        _ => word.to_string(),
    }
}

/// Undo plural inflection.
pub fn noun_lemma(word: &str) -> String {
    let len = word.chars().count();
    if len <= 3 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        // "ties", "lies" are "tie", "lie" — not "ty", "ly"
        return if len > 4 {
            format!("{stem}y")
        } else {
            format!("{stem}ie")
        };
    }

    for sibilant in ["sses", "xes", "zzes", "ches", "shes"] {
        if word.ends_with(sibilant) {
            return word[..word.len() - 2].to_string();
        }
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

/// Undo verb inflection (-s, -ed, -ing).
pub fn verb_lemma(word: &str) -> String {
    let len = word.chars().count();

    if word.ends_with('s') && !word.ends_with("ss") {
        return noun_lemma(word);
    }

    if let Some(stem) = word.strip_suffix("ied") {
        return if len > 4 {
            format!("{stem}y")
        } else {
            format!("{stem}ie")
        };
    }

    if word.ends_with("eed") {
        if BASE_EED.contains(&word) {
            return word.to_string();
        }
        // "agreed" -> "agree"
        return word[..word.len() - 1].to_string();
    }

    if let Some(stem) = word.strip_suffix("ed") {
        if has_vowel(stem) {
            return restore_stem(stem);
        }
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ing") {
        // "dying", "lying", "tying"
        if stem.chars().count() == 2 && stem.ends_with('y') {
            let first = stem.chars().next().unwrap_or('y');
            return format!("{first}ie");
        }
        if has_vowel(stem) {
            return restore_stem(stem);
        }
        return word.to_string();
    }

    word.to_string()
}

/// Turn a stem left over from stripping -ed / -ing back into a base form.
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 2 && chars[n - 1] == chars[n - 2] && !is_vowel(chars[n - 1]) {
        let doubled = chars[n - 1];
        let undoubled: String = chars[..n - 1].iter().collect();
        return match doubled {
            'l' if undouble_l(stem, &chars) => undoubled,
            'l' | 's' | 'z' | 'f' => stem.to_string(),
            // "add", "err", "egg"
            _ if n < 4 => stem.to_string(),
            _ => undoubled,
        };
    }

    if needs_silent_e(stem, &chars) {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

/// "travell" -> "travel", "controll" -> "control", but "install" and "spell" stay.
fn undouble_l(stem: &str, chars: &[char]) -> bool {
    if KEEP_DOUBLE_L.contains(&stem) {
        return false;
    }
    let n = chars.len();
    if n < 4 {
        return false;
    }
    let vowel = chars[n - 3];
    let single_vowel = !is_vowel(chars[n - 4]);
    matches!(vowel, 'e' | 'o') && single_vowel && vowel_groups(&chars[..n - 2]) >= 2
}

fn needs_silent_e(stem: &str, chars: &[char]) -> bool {
    if KEEP_BARE.contains(&stem) {
        return false;
    }
    if RESTORE_E.contains(&stem) {
        return true;
    }

    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1];
    let prev = chars[n - 2];
    // Third letter from the end is a consonant: "prov-id" but not "av-oid"
    let consonant_before = n >= 3 && !is_vowel(chars[n - 3]);

    match last {
        'u' | 'v' | 'c' => true,
        'z' => prev != 'z',
        'g' => match prev {
            'd' | 'r' | 'l' => true,
            'a' => n >= 5,
            'n' => stem.ends_with("eng") || stem.ends_with("chang") || stem.ends_with("rang"),
            _ => false,
        },
        's' => match prev {
            'y' | 'i' | 'o' | 'u' | 'r' | 'n' | 'p' | 'l' => true,
            'a' => !stem.ends_with("ias"),
            _ => false,
        },
        'l' => match prev {
            'b' | 'p' | 't' | 'd' | 'g' | 'k' | 'f' | 'z' | 'c' | 'y' => true,
            'i' | 'u' => consonant_before,
            _ => false,
        },
        'p' => match prev {
            'y' => true,
            'a' => consonant_before,
            _ => false,
        },
        't' => match prev {
            'a' => n >= 3 && !matches!(chars[n - 3], 'e' | 'o' | 'a'),
            'u' | 'o' => consonant_before,
            'e' => n >= 3 && matches!(chars[n - 3], 'l' | 'p'),
            _ => false,
        },
        'd' => match prev {
            'i' | 'u' | 'o' | 'a' => consonant_before || stem.ends_with("uid"),
            _ => false,
        },
        'b' => stem.ends_with("rib"),
        'r' => match prev {
            'i' | 'u' | 'a' => consonant_before,
            _ => false,
        },
        'n' => prev == 'i' && consonant_before,
        'm' => match prev {
            'o' => stem.ends_with("com"),
            'i' | 'a' | 'u' => consonant_before,
            _ => false,
        },
        'k' => matches!(prev, 'o' | 'a' | 'i') && consonant_before,
        _ => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// A stem needs a vowel to be a word; "y" counts after the first letter.
fn has_vowel(stem: &str) -> bool {
    stem.chars()
        .enumerate()
        .any(|(i, c)| is_vowel(c) || (c == 'y' && i > 0))
}

fn vowel_groups(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for &c in chars {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(word: &str) -> String {
        lemmatize(word, PosTag::Verb, &Lexicon::shared())
    }

    fn noun(word: &str) -> String {
        lemmatize(word, PosTag::Noun, &Lexicon::shared())
    }

    #[test]
    fn test_manage_forms_share_lemma() {
        assert_eq!(noun("manages"), "manage");
        assert_eq!(verb("manages"), "manage");
        assert_eq!(verb("managed"), "manage");
        assert_eq!(verb("managing"), "manage");
    }

    #[test]
    fn test_silent_e_restored() {
        assert_eq!(verb("experienced"), "experience");
        assert_eq!(verb("produced"), "produce");
        assert_eq!(verb("solving"), "solve");
        assert_eq!(verb("analyzed"), "analyze");
        assert_eq!(verb("automated"), "automate");
        assert_eq!(verb("executed"), "execute");
        assert_eq!(verb("provided"), "provide");
        assert_eq!(verb("included"), "include");
        assert_eq!(verb("configured"), "configure");
        assert_eq!(verb("required"), "require");
        assert_eq!(verb("defined"), "define");
        assert_eq!(verb("enabled"), "enable");
        assert_eq!(verb("scheduled"), "schedule");
        assert_eq!(verb("used"), "use");
        assert_eq!(verb("parsing"), "parse");
        assert_eq!(verb("merged"), "merge");
        assert_eq!(verb("continued"), "continue");
        assert_eq!(verb("creating"), "create");
        assert_eq!(verb("guided"), "guide");
        assert_eq!(verb("described"), "describe");
        assert_eq!(verb("making"), "make");
    }

    #[test]
    fn test_no_silent_e_where_base_has_none() {
        assert_eq!(verb("developed"), "develop");
        assert_eq!(verb("worked"), "work");
        assert_eq!(verb("deployed"), "deploy");
        assert_eq!(verb("monitored"), "monitor");
        assert_eq!(verb("maintained"), "maintain");
        assert_eq!(verb("avoided"), "avoid");
        assert_eq!(verb("treated"), "treat");
        assert_eq!(verb("targeted"), "target");
        assert_eq!(verb("visited"), "visit");
        assert_eq!(verb("reporting"), "report");
        assert_eq!(verb("testing"), "test");
        assert_eq!(verb("engineering"), "engineer");
        assert_eq!(verb("syncing"), "sync");
    }

    #[test]
    fn test_doubled_consonants() {
        assert_eq!(verb("planned"), "plan");
        assert_eq!(verb("running"), "run");
        assert_eq!(verb("shipped"), "ship");
        assert_eq!(verb("committed"), "commit");
        assert_eq!(verb("added"), "add");
        assert_eq!(verb("processed"), "process");
        assert_eq!(verb("installed"), "install");
        assert_eq!(verb("controlled"), "control");
        assert_eq!(verb("travelled"), "travel");
        assert_eq!(verb("modelling"), "model");
        assert_eq!(verb("enrolled"), "enroll");
    }

    #[test]
    fn test_y_and_eed_forms() {
        assert_eq!(verb("applied"), "apply");
        assert_eq!(verb("applying"), "apply");
        assert_eq!(verb("agreed"), "agree");
        assert_eq!(verb("needed"), "need");
        assert_eq!(verb("exceed"), "exceed");
        assert_eq!(verb("dying"), "die");
        assert_eq!(verb("tied"), "tie");
    }

    #[test]
    fn test_plural_nouns() {
        assert_eq!(noun("engineers"), "engineer");
        assert_eq!(noun("technologies"), "technology");
        assert_eq!(noun("services"), "service");
        assert_eq!(noun("matches"), "match");
        assert_eq!(noun("boxes"), "box");
        assert_eq!(noun("classes"), "class");
        assert_eq!(noun("class"), "class");
        assert_eq!(noun("status"), "status");
        assert_eq!(noun("analysis"), "analysis");
        assert_eq!(noun("ties"), "tie");
        assert_eq!(noun("gas"), "gas");
    }

    #[test]
    fn test_irregular_and_protected() {
        assert_eq!(verb("led"), "lead");
        assert_eq!(verb("built"), "build");
        assert_eq!(verb("writing"), "write");
        assert_eq!(noun("children"), "child");
        assert_eq!(noun("analytics"), "analytics");
        assert_eq!(noun("kubernetes"), "kubernetes");
        assert_eq!(noun("morning"), "morning");
        assert_eq!(noun("marketing"), "marketing");
        assert_eq!(noun("trainings"), "training");
    }

    #[test]
    fn test_short_words_without_vowels_kept() {
        assert_eq!(verb("thing"), "thing");
        assert_eq!(verb("string"), "string");
        assert_eq!(verb("bed"), "bed");
    }

    #[test]
    fn test_other_tags_unchanged() {
        let lex = Lexicon::shared();
        assert_eq!(lemmatize("quickly", PosTag::Adverb, &lex), "quickly");
        assert_eq!(lemmatize("skilled", PosTag::Adjective, &lex), "skilled");
    }
}
