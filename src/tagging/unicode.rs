//! Default analyzer built on UAX #29 segmentation and suffix heuristics.
//!
//! Tagging and lemmatization are deterministic so that re-running a
//! transform over the same source produces byte-identical artifacts.
use unicode_segmentation::UnicodeSegmentation;

use super::{is_punct, Analyzer, Pos};

/// Rule-based analyzer. English-oriented tagging/lemmatization, language
/// independent segmentation.
#[derive(Debug, Default)]
pub struct UnicodeAnalyzer;

impl Analyzer for UnicodeAnalyzer {
    fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn tokenize<'t>(&self, sentence: &'t str) -> Vec<&'t str> {
        sentence
            .split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .collect()
    }

    fn tag(&self, tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| tag_token(token)).collect()
    }

    fn lemmatize(&self, token: &str, pos: Pos) -> String {
        match pos {
            Pos::Noun => lemma_noun(token),
            Pos::Verb => lemma_verb(token),
            Pos::Adjective => lemma_adjective(token),
            Pos::Adverb => token.to_string(),
        }
    }
}

/// Penn-style tag for one token.
fn tag_token(token: &str) -> String {
    if is_punct(token) {
        // punctuation is tagged as itself
        return token.to_string();
    }
    if token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
    {
        return "CD".to_string();
    }

    let lower = token.to_lowercase();
    match lower.as_str() {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" => return "DT".to_string(),
        "and" | "or" | "but" | "nor" => return "CC".to_string(),
        "in" | "on" | "at" | "of" | "to" | "with" | "from" | "by" | "for" | "over" | "under" => {
            return "IN".to_string()
        }
        "i" | "you" | "he" | "she" | "it" | "we" | "they" => return "PRP".to_string(),
        "is" | "has" | "does" => return "VBZ".to_string(),
        "are" | "am" | "do" | "have" => return "VBP".to_string(),
        "was" | "were" | "did" | "had" => return "VBD".to_string(),
        "be" | "been" | "being" => return "VB".to_string(),
        "not" | "never" | "always" | "very" | "too" => return "RB".to_string(),
        _ => (),
    }

    if token.chars().next().map_or(false, char::is_uppercase) {
        return "NNP".to_string();
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return "VBG".to_string();
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return "VBD".to_string();
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return "RB".to_string();
    }
    if ["ous", "ful", "ive", "able", "ible", "ish", "al"]
        .iter()
        .any(|suffix| lower.len() > suffix.len() + 2 && lower.ends_with(suffix))
    {
        return "JJ".to_string();
    }
    if lower.len() > 2 && lower.ends_with('s') && !lower.ends_with("ss") {
        return "NNS".to_string();
    }
    "NN".to_string()
}

fn lemma_noun(token: &str) -> String {
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        if let Some(stem) = token.strip_suffix("sses") {
            return format!("{}ss", stem);
        }
        if let Some(stem) = token.strip_suffix("xes") {
            return format!("{}x", stem);
        }
        if let Some(stem) = token.strip_suffix("ches") {
            return format!("{}ch", stem);
        }
        if let Some(stem) = token.strip_suffix("shes") {
            return format!("{}sh", stem);
        }
    }
    if token.len() > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

fn lemma_verb(token: &str) -> String {
    if token.len() > 5 {
        if let Some(stem) = token.strip_suffix("ing") {
            return undouble(stem);
        }
    }
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ied") {
            return format!("{}y", stem);
        }
        if let Some(stem) = token.strip_suffix("ed") {
            return undouble(stem);
        }
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{}y", stem);
        }
    }
    if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

fn lemma_adjective(token: &str) -> String {
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("iest") {
            return format!("{}y", stem);
        }
        if let Some(stem) = token.strip_suffix("est") {
            return undouble(stem);
        }
    }
    if token.len() > 3 {
        if let Some(stem) = token.strip_suffix("ier") {
            return format!("{}y", stem);
        }
        if let Some(stem) = token.strip_suffix("er") {
            return undouble(stem);
        }
    }
    token.to_string()
}

/// Drops the trailing consonant of a doubled pair left by suffix
/// stripping (stopp -> stop) without touching legitimate doubles (call).
fn undouble(stem: &str) -> String {
    let bytes = stem.as_bytes();
    if bytes.len() >= 2
        && bytes[bytes.len() - 1] == bytes[bytes.len() - 2]
        && matches!(
            bytes[bytes.len() - 1],
            b'b' | b'd' | b'g' | b'm' | b'n' | b'p' | b'r' | b't'
        )
    {
        return stem[..stem.len() - 1].to_string();
    }
    stem.to_string()
}
