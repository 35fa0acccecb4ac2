/*! Corpus reading utilities

Two corpus variants share the same capability set (resolve, docs, paras,
sents, words): [TextCorpus] reads the raw source corpus, and
[crate::io::ChunkCorpus] reads the serialized chunk corpus a preprocess
run produced. Both implement [Resolve] and derive their category map
once, at construction, from a [Categorization] strategy.
!*/
use std::collections::HashMap;
use std::path::Path;

use itertools::Itertools;

use crate::error::Error;

mod stats;
mod text;

pub use stats::{describe, CorpusStats};
pub use text::{Paragraphs, TextCorpus};

/// How document categories are derived. Picked once at corpus
/// construction.
#[derive(Debug, Clone)]
pub enum Categorization {
    /// Parse `nation-author-title-year-gender` file stems; categories are
    /// `[nation, gender, nation+gender]`.
    FilenameDerived,
    /// The first directory component of the document id is its category.
    /// Documents at the corpus root carry no category.
    DirectoryDerived,
    /// Caller-supplied document id to categories map.
    ExplicitMap(HashMap<String, Vec<String>>),
}

impl Categorization {
    /// Build the document id -> categories map for the given ids.
    pub(crate) fn category_map(
        &self,
        doc_ids: &[String],
    ) -> Result<HashMap<String, Vec<String>>, Error> {
        let mut map = HashMap::with_capacity(doc_ids.len());
        for id in doc_ids {
            let categories = match self {
                Categorization::FilenameDerived => filename_categories(id)?,
                Categorization::DirectoryDerived => directory_categories(id),
                Categorization::ExplicitMap(m) => m.get(id).cloned().unwrap_or_default(),
            };
            map.insert(id.clone(), categories);
        }
        Ok(map)
    }
}

fn filename_categories(doc_id: &str) -> Result<Vec<String>, Error> {
    let stem = Path::new(doc_id)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidArgument(format!("document id {:?} has no stem", doc_id)))?;
    let stem = strip_chunk_seq(stem);

    let fields: Vec<&str> = stem.split('-').collect();
    if fields.len() < 5 {
        return Err(Error::InvalidArgument(format!(
            "document name {:?} does not follow nation-author-title-year-gender",
            doc_id
        )));
    }
    let nation = fields[0];
    let gender = fields[4];
    Ok(vec![
        nation.to_string(),
        gender.to_string(),
        format!("{}{}", nation, gender),
    ])
}

fn directory_categories(doc_id: &str) -> Vec<String> {
    let path = Path::new(doc_id);
    let mut components = path.components();
    let first = components.next();
    match (first, components.next()) {
        // only paths with a directory part get a category
        (Some(first), Some(_)) => vec![first.as_os_str().to_string_lossy().into_owned()],
        _ => Vec::new(),
    }
}

/// Strips the 5-digit chunk sequence suffix (`stem-00042`) so that
/// chunked artifacts categorize like their source document.
fn strip_chunk_seq(stem: &str) -> &str {
    match stem.rsplit_once('-') {
        Some((base, seq)) if seq.len() == 5 && seq.bytes().all(|b| b.is_ascii_digit()) => base,
        _ => stem,
    }
}

/// Shared document id resolution contract.
pub trait Resolve {
    /// Every document id of the corpus, in corpus order.
    fn all_doc_ids(&self) -> &[String];

    /// The document id -> categories map.
    fn category_map(&self) -> &HashMap<String, Vec<String>>;

    /// Distinct categories present in the corpus, sorted.
    fn categories(&self) -> Vec<String> {
        self.category_map()
            .values()
            .flatten()
            .unique()
            .sorted()
            .cloned()
            .collect()
    }

    /// Resolve a working set of document ids. `doc_ids` and `categories`
    /// are mutually exclusive; supplying both fails before any I/O.
    /// Neither resolves to every document of the corpus.
    fn resolve(
        &self,
        doc_ids: Option<&[String]>,
        categories: Option<&[String]>,
    ) -> Result<Vec<String>, Error> {
        match (doc_ids, categories) {
            (Some(_), Some(_)) => Err(Error::InvalidArgument(
                "specify document ids or categories, not both".to_string(),
            )),
            (Some(ids), None) => Ok(ids.to_vec()),
            (None, Some(cats)) => Ok(self
                .all_doc_ids()
                .iter()
                .filter(|id| {
                    self.category_map()
                        .get(*id)
                        .map_or(false, |own| own.iter().any(|c| cats.contains(c)))
                })
                .cloned()
                .collect()),
            (None, None) => Ok(self.all_doc_ids().to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        ids: Vec<String>,
        cats: HashMap<String, Vec<String>>,
    }

    impl Resolve for Fixture {
        fn all_doc_ids(&self) -> &[String] {
            &self.ids
        }
        fn category_map(&self) -> &HashMap<String, Vec<String>> {
            &self.cats
        }
    }

    fn fixture() -> Fixture {
        let ids = vec![
            "norway-brown-fjords-1990-m.txt".to_string(),
            "denmark-blixen-farm-1937-f.txt".to_string(),
        ];
        let cats = Categorization::FilenameDerived.category_map(&ids).unwrap();
        Fixture { ids, cats }
    }

    #[test]
    fn filename_derived_categories() {
        let cats = filename_categories("norway-brown-fjords-1990-m.txt").unwrap();
        assert_eq!(cats, vec!["norway", "m", "norwaym"]);
    }

    #[test]
    fn filename_derived_rejects_malformed_names() {
        assert!(filename_categories("notes.txt").is_err());
    }

    #[test]
    fn filename_derived_ignores_chunk_seq() {
        let cats = filename_categories("norway-brown-fjords-1990-m-00003.chunk").unwrap();
        assert_eq!(cats, vec!["norway", "m", "norwaym"]);
    }

    #[test]
    fn directory_derived_categories() {
        assert_eq!(directory_categories("news/article.txt"), vec!["news"]);
        assert_eq!(directory_categories("article.txt"), Vec::<String>::new());
    }

    #[test]
    fn resolve_rejects_both_filters() {
        let f = fixture();
        let ids = vec!["norway-brown-fjords-1990-m.txt".to_string()];
        let cats = vec!["norway".to_string()];
        assert!(matches!(
            f.resolve(Some(&ids), Some(&cats)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn resolve_by_category() {
        let f = fixture();
        let cats = vec!["f".to_string()];
        assert_eq!(
            f.resolve(None, Some(&cats)).unwrap(),
            vec!["denmark-blixen-farm-1937-f.txt"]
        );
    }

    #[test]
    fn resolve_defaults_to_all() {
        let f = fixture();
        assert_eq!(f.resolve(None, None).unwrap(), f.ids);
    }

    #[test]
    fn distinct_sorted_categories() {
        let f = fixture();
        assert_eq!(
            f.categories(),
            vec!["denmark", "denmarkf", "f", "m", "norway", "norwaym"]
        );
    }
}
