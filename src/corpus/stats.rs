//! Single-pass descriptive statistics over a text corpus.
use std::collections::HashMap;
use std::time::Instant;

use itertools::Itertools;
use serde::Serialize;

use crate::error::Error;
use crate::tagging::{analyzer, Analyzer};

use super::{Resolve, TextCorpus};

/// Corpus-level counts and derived ratios.
#[derive(Debug, Serialize)]
pub struct CorpusStats {
    pub files: usize,
    pub categories: usize,
    pub paragraphs: u64,
    pub sentences: u64,
    pub words: u64,
    pub vocabulary_size: usize,
    pub lexical_diversity: f64,
    pub paras_per_doc: f64,
    pub words_per_doc: f64,
    pub sents_per_para: f64,
    pub secs: f64,
}

/// Walk the resolved documents once, segmenting and tokenizing every
/// paragraph with the shared analyzer.
pub fn describe(
    corpus: &TextCorpus,
    doc_ids: Option<&[String]>,
    categories: Option<&[String]>,
) -> Result<CorpusStats, Error> {
    let started = Instant::now();
    let ids = corpus.resolve(doc_ids, categories)?;

    let mut paragraphs = 0u64;
    let mut sentences = 0u64;
    let mut words = 0u64;
    let mut vocabulary: HashMap<String, u64> = HashMap::new();

    for para in corpus.paras(&ids) {
        let para = para?;
        paragraphs += 1;

        for sent in analyzer().sentences(&para) {
            sentences += 1;

            for word in analyzer().tokenize(sent) {
                words += 1;
                *vocabulary.entry(word.to_string()).or_insert(0) += 1;
            }
        }
    }

    let categories = ids
        .iter()
        .filter_map(|id| corpus.category_map().get(id))
        .flatten()
        .unique()
        .count();

    Ok(CorpusStats {
        files: ids.len(),
        categories,
        paragraphs,
        sentences,
        words,
        vocabulary_size: vocabulary.len(),
        lexical_diversity: ratio(words as f64, vocabulary.len() as f64),
        paras_per_doc: ratio(paragraphs as f64, ids.len() as f64),
        words_per_doc: ratio(words as f64, ids.len() as f64),
        sents_per_para: ratio(sentences as f64, paragraphs as f64),
        secs: started.elapsed().as_secs_f64(),
    })
}

fn ratio(num: f64, denom: f64) -> f64 {
    if denom == 0.0 {
        0.0
    } else {
        num / denom
    }
}
