//! Reader over a serialized chunk corpus.
//!
//! The counterpart of the preprocessing writer: document ids are the
//! `.chunk` files relative to the corpus root, and iteration walks
//! chunks -> paragraphs -> sentences -> tokens lazily, one artifact in
//! memory at a time.
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;

use crate::corpus::{Categorization, Resolve};
use crate::error::Error;
use crate::pipeline::{Chunk, LemmaSentence, TaggedSentence, TaggedWord};

const CHUNK_PATTERN: &str = "**/*.chunk";

/// Deserialize one chunk artifact.
pub fn read_chunk(path: &Path) -> Result<Chunk, Error> {
    let file = File::open(path)?;
    Ok(bincode::deserialize_from(BufReader::new(file))?)
}

/// One paragraph out of a decoded chunk, in either mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paragraph {
    Tagged(Vec<TaggedSentence>),
    Normalized(Vec<LemmaSentence>),
}

/// One sentence out of a decoded paragraph, in either mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentence {
    Tagged(TaggedSentence),
    Normalized(LemmaSentence),
}

pub struct ChunkCorpus {
    root: PathBuf,
    doc_ids: Vec<String>,
    category_map: HashMap<String, Vec<String>>,
}

impl ChunkCorpus {
    /// Discover the chunk corpus under `root` and derive its category
    /// map. Chunk sequence suffixes categorize like their source
    /// document.
    pub fn new(root: &Path, categorization: Categorization) -> Result<Self, Error> {
        let pattern = root.join(CHUNK_PATTERN);
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::InvalidArgument(format!("invalid corpus root {:?}", root)))?;

        let mut doc_ids = Vec::new();
        for entry in glob::glob(pattern)? {
            let path = entry?;
            let relative = path
                .strip_prefix(root)
                .map_err(|e| Error::Custom(e.to_string()))?;
            doc_ids.push(relative.to_string_lossy().into_owned());
        }
        doc_ids.sort();
        debug!("discovered {} chunk artifacts under {:?}", doc_ids.len(), root);

        let category_map = categorization.category_map(&doc_ids)?;
        Ok(Self {
            root: root.to_path_buf(),
            doc_ids,
            category_map,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn absolute_path(&self, doc_id: &str) -> PathBuf {
        self.root.join(doc_id)
    }

    /// Decoded chunks, loaded one at a time.
    pub fn docs<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<Chunk, Error>> + 'a {
        doc_ids
            .iter()
            .map(move |id| read_chunk(&self.absolute_path(id)))
    }

    /// Paragraphs across chunks, in artifact order.
    pub fn paras<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<Paragraph, Error>> + 'a {
        self.docs(doc_ids).flat_map(|doc| match doc {
            Ok(Chunk::Tagged(paras)) => paras
                .into_iter()
                .map(|p| Ok(Paragraph::Tagged(p)))
                .collect::<Vec<_>>()
                .into_iter(),
            Ok(Chunk::Normalized(paras)) => paras
                .into_iter()
                .map(|p| Ok(Paragraph::Normalized(p)))
                .collect::<Vec<_>>()
                .into_iter(),
            Err(e) => vec![Err(e)].into_iter(),
        })
    }

    /// Sentences across paragraphs.
    pub fn sents<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<Sentence, Error>> + 'a {
        self.paras(doc_ids).flat_map(|para| match para {
            Ok(Paragraph::Tagged(sents)) => sents
                .into_iter()
                .map(|s| Ok(Sentence::Tagged(s)))
                .collect::<Vec<_>>()
                .into_iter(),
            Ok(Paragraph::Normalized(sents)) => sents
                .into_iter()
                .map(|s| Ok(Sentence::Normalized(s)))
                .collect::<Vec<_>>()
                .into_iter(),
            Err(e) => vec![Err(e)].into_iter(),
        })
    }

    /// (token, tag) pairs. Normalized sentences carry no tags and yield
    /// nothing here; use [Self::words] for a mode-independent stream.
    pub fn tagged<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<TaggedWord, Error>> + 'a {
        self.sents(doc_ids).flat_map(|sent| match sent {
            Ok(Sentence::Tagged(tokens)) => {
                tokens.into_iter().map(Ok).collect::<Vec<_>>().into_iter()
            }
            Ok(Sentence::Normalized(_)) => Vec::new().into_iter(),
            Err(e) => vec![Err(e)].into_iter(),
        })
    }

    /// Bare tokens: the token of a (token, tag) pair, or the lemma in
    /// normalized mode.
    pub fn words<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<String, Error>> + 'a {
        self.sents(doc_ids).flat_map(|sent| match sent {
            Ok(Sentence::Tagged(tokens)) => tokens
                .into_iter()
                .map(|(token, _)| Ok(token))
                .collect::<Vec<_>>()
                .into_iter(),
            Ok(Sentence::Normalized(lemmas)) => {
                lemmas.into_iter().map(Ok).collect::<Vec<_>>().into_iter()
            }
            Err(e) => vec![Err(e)].into_iter(),
        })
    }
}

impl Resolve for ChunkCorpus {
    fn all_doc_ids(&self) -> &[String] {
        &self.doc_ids
    }

    fn category_map(&self) -> &HashMap<String, Vec<String>> {
        &self.category_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::write_chunk;

    use tempfile::tempdir;

    fn tagged_chunk() -> Chunk {
        Chunk::Tagged(vec![
            vec![vec![
                ("The".to_string(), "DT".to_string()),
                ("fjords".to_string(), "NNS".to_string()),
                (".".to_string(), ".".to_string()),
            ]],
            vec![vec![
                ("Deep".to_string(), "NNP".to_string()),
                ("water".to_string(), "NN".to_string()),
            ]],
        ])
    }

    fn norm_chunk() -> Chunk {
        Chunk::Normalized(vec![vec![vec!["fjord".to_string(), "deep".to_string()]]])
    }

    fn write_corpus(root: &Path) {
        write_chunk(&root.join("norway-brown-fjords-1990-m-00000.chunk"), &tagged_chunk())
            .unwrap();
        write_chunk(&root.join("norway-brown-fjords-1990-m-00001.chunk"), &norm_chunk()).unwrap();
    }

    #[test]
    fn discovery_and_categories() {
        let dir = tempdir().unwrap();
        write_corpus(dir.path());
        let corpus = ChunkCorpus::new(dir.path(), Categorization::FilenameDerived).unwrap();
        assert_eq!(corpus.all_doc_ids().len(), 2);
        assert_eq!(corpus.categories(), vec!["m", "norway", "norwaym"]);
    }

    #[test]
    fn paras_walk_artifacts_in_order() {
        let dir = tempdir().unwrap();
        write_corpus(dir.path());
        let corpus = ChunkCorpus::new(dir.path(), Categorization::FilenameDerived).unwrap();
        let ids = corpus.all_doc_ids().to_vec();
        let paras: Vec<Paragraph> = corpus.paras(&ids).collect::<Result<_, _>>().unwrap();
        assert_eq!(paras.len(), 3);
        assert!(matches!(paras[0], Paragraph::Tagged(_)));
        assert!(matches!(paras[2], Paragraph::Normalized(_)));
    }

    #[test]
    fn words_are_mode_independent() {
        let dir = tempdir().unwrap();
        write_corpus(dir.path());
        let corpus = ChunkCorpus::new(dir.path(), Categorization::FilenameDerived).unwrap();
        let ids = corpus.all_doc_ids().to_vec();
        let words: Vec<String> = corpus.words(&ids).collect::<Result<_, _>>().unwrap();
        assert_eq!(
            words,
            vec!["The", "fjords", ".", "Deep", "water", "fjord", "deep"]
        );
    }

    #[test]
    fn tagged_skips_normalized_content() {
        let dir = tempdir().unwrap();
        write_corpus(dir.path());
        let corpus = ChunkCorpus::new(dir.path(), Categorization::FilenameDerived).unwrap();
        let ids = corpus.all_doc_ids().to_vec();
        let tagged: Vec<TaggedWord> = corpus.tagged(&ids).collect::<Result<_, _>>().unwrap();
        assert_eq!(tagged.len(), 5);
        assert_eq!(tagged[1], ("fjords".to_string(), "NNS".to_string()));
    }
}
