//! Pipeline data model.
use serde::{Deserialize, Serialize};

/// A token with its part-of-speech tag.
pub type TaggedWord = (String, String);
/// Ordered (token, tag) pairs.
pub type TaggedSentence = Vec<TaggedWord>;
/// Ordered tagged sentences of one paragraph.
pub type TaggedParagraph = Vec<TaggedSentence>;

/// Lowercased lemmas of one sentence, punctuation tokens dropped.
pub type LemmaSentence = Vec<String>;
/// Ordered lemma sentences of one paragraph.
pub type LemmaParagraph = Vec<LemmaSentence>;

/// Unit of serialization: consecutive paragraphs of one document.
///
/// The variant records the mode the paragraphs went through, making
/// every artifact self-describing for the paired reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chunk {
    Tagged(Vec<TaggedParagraph>),
    Normalized(Vec<LemmaParagraph>),
}

impl Chunk {
    /// Number of paragraphs in the chunk.
    pub fn len(&self) -> usize {
        match self {
            Chunk::Tagged(paras) => paras.len(),
            Chunk::Normalized(paras) => paras.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Token count of a pipeline item, as seen by the chunk accumulator.
pub trait TokenCount {
    fn token_count(&self) -> usize;
}

impl TokenCount for TaggedParagraph {
    fn token_count(&self) -> usize {
        self.iter().map(Vec::len).sum()
    }
}

impl TokenCount for LemmaParagraph {
    fn token_count(&self) -> usize {
        self.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_token_counts() {
        let tagged: TaggedParagraph = vec![
            vec![
                ("The".to_string(), "DT".to_string()),
                ("fjords".to_string(), "NNS".to_string()),
            ],
            vec![("Deep".to_string(), "NNP".to_string())],
        ];
        assert_eq!(tagged.token_count(), 3);

        let lemmas: LemmaParagraph = vec![vec!["fjord".to_string(), "deep".to_string()]];
        assert_eq!(lemmas.token_count(), 2);
    }

    #[test]
    fn chunk_len_counts_paragraphs() {
        let chunk = Chunk::Normalized(vec![vec![vec!["fjord".to_string()]], vec![]]);
        assert_eq!(chunk.len(), 2);
        assert!(!chunk.is_empty());
        assert!(Chunk::Tagged(Vec::new()).is_empty());
    }
}
