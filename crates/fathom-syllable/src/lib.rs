//! # fathom-syllable
//!
//! **Tier 1 (Heuristics)**
//!
//! Estimate the number of syllables in a single English word.
//!
//! ## Algorithm
//!
//! Every maximal vowel group (`a e i o u y`) counts as one syllable. The
//! count is then corrected by two fixed rule tables, each rule matched
//! anywhere in the normalized word:
//!
//! - subtractive rules (-1 per match) for digraphs and trigraphs the vowel
//!   groups over-count (`cial`, `tia`, `cious`, final `sia`, adverbial `-ely`),
//! - additive rules (+1 per match) for vowel pairs spoken as two syllables
//!   (`ia`, `io`, `riet`), final consonant + `le` clusters, three-vowel runs,
//!   leading `mc`, final `-ism` and similar.
//!
//! Before matching, the word is lowercased, apostrophes are removed and one
//! final `e` is dropped. A word with no syllable left after correction
//! still counts as one.
//!
//! ## Limitations
//!
//! This is a heuristic, off by one for roughly one word in ten:
//! - no dictionary lookup, so irregular words are guessed from spelling
//! - compounds whose first part ends in a silent `e` ("lifeboat") gain one
//! - digits and punctuation inside the word are treated as consonants
//! - contractions are only partly handled (`dnt` from "couldn't")

use std::sync::LazyLock;

use regex::Regex;

/// Whether a rule removes or adds a syllable when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Subtract,
    Add,
}

impl Adjustment {
    /// Signed contribution of one match.
    pub fn delta(self) -> isize {
        match self {
            Adjustment::Subtract => -1,
            Adjustment::Add => 1,
        }
    }
}

/// Any doubled non-vowel character followed by a final `l`: middle,
/// twiddle, battle, bottle, but also `a11l`.
///
/// The `regex` crate has no backreferences, so this rule is matched by
/// hand; its pattern is reported in backreference form.
const DOUBLED_BEFORE_FINAL_L: &str = r"([^aeiouy])\1l$";

#[derive(Debug)]
enum Matcher {
    Regex(Regex),
    DoubledBeforeFinalL,
}

/// One pattern/effect pair of a correction table.
#[derive(Debug)]
pub struct SyllableRule {
    pattern: &'static str,
    adjustment: Adjustment,
    matcher: Matcher,
}

impl SyllableRule {
    fn compile(pattern: &'static str, adjustment: Adjustment) -> Self {
        let matcher = if pattern == DOUBLED_BEFORE_FINAL_L {
            Matcher::DoubledBeforeFinalL
        } else {
            Matcher::Regex(Regex::new(pattern).expect("valid regex literal"))
        };
        Self {
            pattern,
            adjustment,
            matcher,
        }
    }

    /// The regex source of this rule.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// True when the rule fires on an already normalized word.
    pub fn matches(&self, normalized: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(regex) => regex.is_match(normalized),
            Matcher::DoubledBeforeFinalL => doubled_before_final_l(normalized),
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn doubled_before_final_l(word: &str) -> bool {
    let mut tail = word.chars().rev();
    matches!(
        (tail.next(), tail.next(), tail.next()),
        (Some('l'), Some(a), Some(b)) if a == b && !is_vowel(a)
    )
}

const SUBTRACTIVE_PATTERNS: &[&str] = &[
    "cial",
    "tia",
    "cius",
    "cious",
    "giu", // belgium
    "ion",
    "iou",
    "sia$",
    ".ely$", // absolutely, but not a bare "ely"
];

const ADDITIVE_PATTERNS: &[&str] = &[
    "ia",
    "riet",
    "dien",
    "iu",
    "io",
    "ii",
    "[aeiouym]bl$", // -Vble, plus -mble
    "[aeiou]{3}",   // agreeable
    "^mc",
    "ism$", // -isms
    DOUBLED_BEFORE_FINAL_L,
    "[^l]lien", // alien, salient, but not lien or ebullient
    "^coa[dglx].", // coadjutor coagulate coalesce coalition coaxial
    "[^gq]ua[^auieo]",
    "dnt$", // couldn't
];

static SUBTRACTIVE_RULES: LazyLock<Vec<SyllableRule>> = LazyLock::new(|| {
    SUBTRACTIVE_PATTERNS
        .iter()
        .map(|p| SyllableRule::compile(p, Adjustment::Subtract))
        .collect()
});

static ADDITIVE_RULES: LazyLock<Vec<SyllableRule>> = LazyLock::new(|| {
    ADDITIVE_PATTERNS
        .iter()
        .map(|p| SyllableRule::compile(p, Adjustment::Add))
        .collect()
});

static NON_VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^aeiouy]+").expect("valid regex literal"));

/// Rules that subtract one syllable, in table order.
pub fn subtractive_rules() -> &'static [SyllableRule] {
    &SUBTRACTIVE_RULES
}

/// Rules that add one syllable, in table order.
pub fn additive_rules() -> &'static [SyllableRule] {
    &ADDITIVE_RULES
}

/// Lowercase, drop every apostrophe, then drop one trailing `e`.
pub fn normalize(word: &str) -> String {
    let mut normalized: String = word.to_lowercase().chars().filter(|c| *c != '\'').collect();
    if normalized.ends_with('e') {
        normalized.pop();
    }
    normalized
}

/// Number of vowel groups in a normalized word.
///
/// Splitting on non-vowel runs leaves an empty leading token when the word
/// starts with a consonant and an empty trailing one when it ends with one;
/// neither is a vowel group.
pub fn vowel_groups(normalized: &str) -> usize {
    NON_VOWEL_RUN
        .split(normalized)
        .filter(|token| !token.is_empty())
        .count()
}

/// Breakdown of a single estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableEstimate {
    /// The word after lowercasing, apostrophe removal and final-`e` removal.
    pub normalized: String,
    /// Vowel groups before correction.
    pub vowel_groups: usize,
    /// Patterns of the subtractive rules that fired.
    pub subtracted: Vec<&'static str>,
    /// Patterns of the additive rules that fired.
    pub added: Vec<&'static str>,
    /// Final estimate.
    pub syllables: usize,
}

/// Estimate syllables and report which corrections were applied.
pub fn estimate_detailed(word: &str) -> SyllableEstimate {
    if word.is_empty() {
        return SyllableEstimate {
            normalized: String::new(),
            vowel_groups: 0,
            subtracted: Vec::new(),
            added: Vec::new(),
            syllables: 0,
        };
    }

    let normalized = normalize(word);

    if normalized.chars().count() == 1 {
        // "a", "i"
        return SyllableEstimate {
            vowel_groups: vowel_groups(&normalized),
            normalized,
            subtracted: Vec::new(),
            added: Vec::new(),
            syllables: 1,
        };
    }

    let groups = vowel_groups(&normalized);
    let fired = |rules: &'static [SyllableRule]| -> Vec<&'static str> {
        rules
            .iter()
            .filter(|rule| rule.matches(&normalized))
            .map(SyllableRule::pattern)
            .collect()
    };
    let subtracted = fired(subtractive_rules());
    let added = fired(additive_rules());

    let raw = groups as isize + added.len() as isize - subtracted.len() as isize;
    // got no vowels? ("the", "crwth")
    let syllables = if raw <= 0 { 1 } else { raw as usize };

    SyllableEstimate {
        normalized,
        vowel_groups: groups,
        subtracted,
        added,
        syllables,
    }
}

/// Estimate the syllable count of one word.
///
/// Returns 0 for an empty string and at least 1 for anything else.
///
/// ```
/// use fathom_syllable::estimate;
///
/// assert_eq!(estimate("the"), 1);
/// assert_eq!(estimate("hello"), 2);
/// assert_eq!(estimate("interesting"), 4);
/// ```
pub fn estimate(word: &str) -> usize {
    estimate_detailed(word).syllables
}
