/*! Linguistic primitives

Sentence segmentation, word tokenization, part-of-speech tagging and
lemmatization, behind the [Analyzer] trait so that a better-quality
implementation can be swapped in at the seam.

The crate-provided implementation is [UnicodeAnalyzer], exposed through
the process-wide [analyzer] handle: constructed lazily once, read-only,
shared across all documents.
!*/
use lazy_static::lazy_static;
use unic_ucd::GeneralCategory;

mod unicode;

pub use unicode::UnicodeAnalyzer;

lazy_static! {
    static ref ANALYZER: UnicodeAnalyzer = UnicodeAnalyzer::default();
}

/// Process-wide analyzer handle.
pub fn analyzer() -> &'static UnicodeAnalyzer {
    &ANALYZER
}

/// Parts of speech a lemmatizer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    /// Maps a tag to the lemmatization sense through its first letter:
    /// `N` nouns, `V` verbs, `J` adjectives, `R` adverbs, nouns otherwise.
    pub fn from_tag(tag: &str) -> Self {
        match tag.chars().next() {
            Some('V') => Pos::Verb,
            Some('J') => Pos::Adjective,
            Some('R') => Pos::Adverb,
            _ => Pos::Noun,
        }
    }
}

/// Linguistic capability consumed by the preprocessing stages.
pub trait Analyzer: Send + Sync {
    /// Segment a text into sentences, in order.
    fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Split a sentence into tokens, in order. Punctuation runs are
    /// tokens in their own right.
    fn tokenize<'t>(&self, sentence: &'t str) -> Vec<&'t str>;

    /// Tag a token sequence. Returns exactly one tag per token,
    /// in token order.
    fn tag(&self, tokens: &[&str]) -> Vec<String>;

    /// Reduce a token to its lemma for the given part of speech.
    fn lemmatize(&self, token: &str, pos: Pos) -> String;
}

/// `true` if every char of `token` belongs to a punctuation category.
pub fn is_punct(token: &str) -> bool {
    token
        .chars()
        .all(|c| GeneralCategory::of(c).is_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punct_tokens() {
        assert!(is_punct("."));
        assert!(is_punct("...!?"));
        assert!(is_punct("«»"));
    }

    #[test]
    fn nonpunct_tokens() {
        assert!(!is_punct("word"));
        assert!(!is_punct("can't"));
        // currency signs are symbols, not punctuation
        assert!(!is_punct("$"));
        assert!(!is_punct("3.14"));
    }

    #[test]
    fn pos_from_tag() {
        assert_eq!(Pos::from_tag("NN"), Pos::Noun);
        assert_eq!(Pos::from_tag("NNS"), Pos::Noun);
        assert_eq!(Pos::from_tag("VBG"), Pos::Verb);
        assert_eq!(Pos::from_tag("JJ"), Pos::Adjective);
        assert_eq!(Pos::from_tag("RB"), Pos::Adverb);
        // unknown tags fall back to noun
        assert_eq!(Pos::from_tag("DT"), Pos::Noun);
        assert_eq!(Pos::from_tag(""), Pos::Noun);
    }
}
