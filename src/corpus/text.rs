//! Raw text corpus reader.
//!
//! Documents are `.txt` files under a root directory; a document id is
//! the file path relative to that root. Paragraphs are non-empty lines,
//! read lazily one document at a time.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;
use crate::tagging::{analyzer, Analyzer};

use super::{Categorization, Resolve};

const DOC_PATTERN: &str = "**/*.txt";

pub struct TextCorpus {
    root: PathBuf,
    doc_ids: Vec<String>,
    category_map: HashMap<String, Vec<String>>,
}

impl TextCorpus {
    /// Discover the corpus under `root` and derive its category map.
    pub fn new(root: &Path, categorization: Categorization) -> Result<Self, Error> {
        let pattern = root.join(DOC_PATTERN);
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
        debug!("discovered {} documents under {:?}", doc_ids.len(), root);

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

    /// Absolute path of a document.
    pub fn absolute_path(&self, doc_id: &str) -> PathBuf {
        self.root.join(doc_id)
    }

    /// Lazy stream of the non-empty lines of one document.
    pub fn paras_for(&self, doc_id: &str) -> Result<Paragraphs, Error> {
        let file = File::open(self.absolute_path(doc_id))?;
        Ok(Paragraphs {
            lines: BufReader::new(file).lines(),
        })
    }

    /// Whole documents, loaded one at a time.
    pub fn docs<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<String, Error>> + 'a {
        doc_ids
            .iter()
            .map(move |id| std::fs::read_to_string(self.absolute_path(id)).map_err(Error::from))
    }

    /// Paragraphs across documents, in document order.
    pub fn paras<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<String, Error>> + 'a {
        doc_ids.iter().flat_map(move |id| {
            match self.paras_for(id) {
                Ok(paras) => Box::new(paras) as Box<dyn Iterator<Item = Result<String, Error>>>,
                Err(e) => Box::new(std::iter::once(Err(e))),
            }
        })
    }

    /// Sentences across documents, segmented with the shared analyzer.
    pub fn sents<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<String, Error>> + 'a {
        self.paras(doc_ids).flat_map(|para| match para {
            Ok(text) => analyzer()
                .sentences(&text)
                .into_iter()
                .map(|s| Ok(s.to_string()))
                .collect::<Vec<_>>()
                .into_iter(),
            Err(e) => vec![Err(e)].into_iter(),
        })
    }

    /// Tokens across documents, tokenized with the shared analyzer.
    pub fn words<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<String, Error>> + 'a {
        self.sents(doc_ids).flat_map(|sent| match sent {
            Ok(text) => analyzer()
                .tokenize(&text)
                .into_iter()
                .map(|w| Ok(w.to_string()))
                .collect::<Vec<_>>()
                .into_iter(),
            Err(e) => vec![Err(e)].into_iter(),
        })
    }

    /// On-disk size of each document, for spotting oddly large files.
    pub fn sizes<'a>(
        &'a self,
        doc_ids: &'a [String],
    ) -> impl Iterator<Item = Result<u64, Error>> + 'a {
        doc_ids.iter().map(move |id| {
            std::fs::metadata(self.absolute_path(id))
                .map(|m| m.len())
                .map_err(Error::from)
        })
    }
}

impl Resolve for TextCorpus {
    fn all_doc_ids(&self) -> &[String] {
        &self.doc_ids
    }

    fn category_map(&self) -> &HashMap<String, Vec<String>> {
        &self.category_map
    }
}

/// Iterator over the non-empty lines of one document.
pub struct Paragraphs {
    lines: Lines<BufReader<File>>,
}

impl Iterator for Paragraphs {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    let line = line.trim_end_matches('\r');
                    if !line.is_empty() {
                        return Some(Ok(line.to_string()));
                    }
                }
                Err(e) => return Some(Err(Error::Io(e))),
            }
        }
        None
    }
}
