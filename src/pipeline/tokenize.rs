//! Tokenizer/tagger and normalizer stages.
//!
//! Both stages take one raw paragraph. Callers never pass an empty
//! paragraph in; the corpus reader filters those out.
use crate::tagging::{is_punct, Analyzer, Pos};

use super::types::{LemmaParagraph, TaggedParagraph};

/// Segment a paragraph into sentences and tag every token, preserving
/// sentence and token order.
pub fn tag_paragraph<A: Analyzer + ?Sized>(analyzer: &A, paragraph: &str) -> TaggedParagraph {
    analyzer
        .sentences(paragraph)
        .into_iter()
        .map(|sent| {
            let tokens = analyzer.tokenize(sent);
            let tags = analyzer.tag(&tokens);
            tokens
                .into_iter()
                .zip(tags)
                .map(|(token, tag)| (token.to_string(), tag))
                .collect()
        })
        .collect()
}

/// Like [tag_paragraph], but drops punctuation-only tokens and reduces
/// the rest to lowercase lemmas. Tags are consumed to pick the
/// lemmatization sense and are not retained.
pub fn normalize_paragraph<A: Analyzer + ?Sized>(analyzer: &A, paragraph: &str) -> LemmaParagraph {
    analyzer
        .sentences(paragraph)
        .into_iter()
        .map(|sent| {
            let tokens = analyzer.tokenize(sent);
            let tags = analyzer.tag(&tokens);
            tokens
                .into_iter()
                .zip(tags)
                .filter(|(token, _)| !is_punct(token))
                .map(|(token, tag)| {
                    analyzer
                        .lemmatize(token, Pos::from_tag(&tag))
                        .to_lowercase()
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::tagging::analyzer;

    use super::*;

    #[test]
    fn tagged_paragraph_structure() {
        let para = tag_paragraph(analyzer(), "The fjords are deep. Norway has many.");
        assert_eq!(para.len(), 2);
        let first: Vec<&str> = para[0].iter().map(|(token, _)| token.as_str()).collect();
        assert_eq!(first, vec!["The", "fjords", "are", "deep", "."]);
        // every token carries a tag
        assert!(para.iter().flatten().all(|(_, tag)| !tag.is_empty()));
    }

    #[test]
    fn normalized_paragraph_drops_punctuation_and_lowercases() {
        let para = normalize_paragraph(analyzer(), "The fjords are deep. Norway has many.");
        assert_eq!(para.len(), 2);
        for sentence in &para {
            for lemma in sentence {
                assert!(!is_punct(lemma));
                assert_eq!(lemma, &lemma.to_lowercase());
            }
        }
        assert!(para[0].contains(&"fjord".to_string()));
        assert!(para[1].contains(&"norway".to_string()));
    }

    #[test]
    fn normalization_preserves_token_order() {
        let para = normalize_paragraph(analyzer(), "Brown travelled north.");
        assert_eq!(para.len(), 1);
        assert_eq!(para[0][0], "brown");
        assert_eq!(*para[0].last().unwrap(), "north");
    }
}
