//! Pipeline driver and target path resolution.
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::corpus::{Resolve, TextCorpus};
use crate::error::Error;
use crate::io::write_chunk;
use crate::tagging::analyzer;

use super::chunk::Chunks;
use super::tokenize::{normalize_paragraph, tag_paragraph};
use super::types::{Chunk, TokenCount};

/// Extension of serialized chunk artifacts.
pub const CHUNK_EXT: &str = "chunk";

/// Drives per-document preprocessing: tokenizer/tagger (or normalizer)
/// stage, chunk accumulation, serialization. Artifacts mirror the source
/// directory layout under the target root.
pub struct Preprocessor {
    corpus: TextCorpus,
    target: PathBuf,
}

impl Preprocessor {
    pub fn new(corpus: TextCorpus, target: &Path) -> Self {
        Self {
            corpus,
            target: target.to_path_buf(),
        }
    }

    pub fn corpus(&self) -> &TextCorpus {
        &self.corpus
    }

    /// Target path of a document: relative directory preserved,
    /// extension rewritten to [CHUNK_EXT]. Chunked artifacts insert a
    /// sequence suffix before the extension, see [Self::chunk_target_path].
    pub fn target_path(&self, doc_id: &str) -> PathBuf {
        let mut path = self.target.join(doc_id);
        path.set_extension(CHUNK_EXT);
        path
    }

    /// `base` with a 5-digit zero-padded, 0-indexed sequence suffix.
    fn chunk_target_path(base: &Path, seq: usize) -> PathBuf {
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        base.with_file_name(format!("{}-{:05}.{}", stem, seq, CHUNK_EXT))
    }

    /// Preprocess one document and write its artifact(s).
    ///
    /// Returns the unchunked target path, which doubles as the name stem
    /// of the sequence-suffixed artifacts when `chunksize > 0`. Only the
    /// currently accumulating chunk is held in memory.
    pub fn process(
        &self,
        doc_id: &str,
        chunksize: usize,
        normalize: bool,
    ) -> Result<PathBuf, Error> {
        let target = self.target_path(doc_id);
        let parent = target
            .parent()
            .ok_or_else(|| Error::InvalidArgument(format!("target {:?} has no parent", target)))?;
        if parent.exists() && !parent.is_dir() {
            return Err(Error::InvalidArgument(format!(
                "target parent {:?} is not a directory",
                parent
            )));
        }
        fs::create_dir_all(parent)?;

        info!("[{}] preprocessing", doc_id);
        let paragraphs = self.corpus.paras_for(doc_id)?;
        if normalize {
            let stage =
                paragraphs.map(|para| para.map(|text| normalize_paragraph(analyzer(), &text)));
            Self::write_document(stage, &target, chunksize, Chunk::Normalized)?;
        } else {
            let stage = paragraphs.map(|para| para.map(|text| tag_paragraph(analyzer(), &text)));
            Self::write_document(stage, &target, chunksize, Chunk::Tagged)?;
        }

        Ok(target)
    }

    /// Serialize a staged paragraph stream: one artifact for the whole
    /// document when `chunksize == 0`, one per accumulated chunk
    /// otherwise.
    fn write_document<P, I>(
        paragraphs: I,
        target: &Path,
        chunksize: usize,
        wrap: fn(Vec<P>) -> Chunk,
    ) -> Result<(), Error>
    where
        I: Iterator<Item = Result<P, Error>>,
        P: TokenCount,
    {
        if chunksize == 0 {
            let document: Vec<P> = paragraphs.collect::<Result<_, _>>()?;
            write_chunk(target, &wrap(document))?;
        } else {
            for (seq, chunk) in Chunks::new(paragraphs, chunksize).enumerate() {
                write_chunk(&Self::chunk_target_path(target, seq), &wrap(chunk?))?;
            }
        }
        Ok(())
    }

    /// Preprocess the resolved working set sequentially, in resolved
    /// order, collecting the produced target paths.
    ///
    /// The working set is resolved before anything touches the disk, so
    /// an invalid filter combination fails without side effects. The
    /// first failing document aborts the batch; artifacts already
    /// written stay on disk.
    pub fn transform(
        &self,
        doc_ids: Option<&[String]>,
        categories: Option<&[String]>,
        chunksize: usize,
        normalize: bool,
    ) -> Result<Vec<PathBuf>, Error> {
        let ids = self.corpus.resolve(doc_ids, categories)?;
        fs::create_dir_all(&self.target)?;
        info!("preprocessing {} documents into {:?}", ids.len(), self.target);

        let mut produced = Vec::with_capacity(ids.len());
        for id in &ids {
            let path = self.process(id, chunksize, normalize).map_err(|e| {
                error!("[{}] processing failed", id);
                Error::Document(id.clone(), Box::new(e))
            })?;
            produced.push(path);
        }
        Ok(produced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Categorization;

    use std::fs;

    use tempfile::tempdir;

    fn preprocessor(src: &Path, dst: &Path) -> Preprocessor {
        let corpus = TextCorpus::new(src, Categorization::FilenameDerived).unwrap();
        Preprocessor::new(corpus, dst)
    }

    #[test]
    fn target_path_rewrites_extension_and_mirrors_layout() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let p = preprocessor(src.path(), dst.path());

        assert_eq!(
            p.target_path("norway-brown-fjords-1990-m.txt"),
            dst.path().join("norway-brown-fjords-1990-m.chunk")
        );
        assert_eq!(
            p.target_path("sub/denmark-blixen-farm-1937-f.txt"),
            dst.path().join("sub").join("denmark-blixen-farm-1937-f.chunk")
        );
    }

    #[test]
    fn chunk_target_path_is_zero_padded() {
        let base = Path::new("out/norway-brown-fjords-1990-m.chunk");
        assert_eq!(
            Preprocessor::chunk_target_path(base, 0),
            Path::new("out/norway-brown-fjords-1990-m-00000.chunk")
        );
        assert_eq!(
            Preprocessor::chunk_target_path(base, 42),
            Path::new("out/norway-brown-fjords-1990-m-00042.chunk")
        );
    }

    #[test]
    fn transform_rejects_both_filters_without_touching_disk() {
        let src = tempdir().unwrap();
        fs::write(
            src.path().join("norway-brown-fjords-1990-m.txt"),
            "The fjords are deep.\n",
        )
        .unwrap();
        let dst_root = tempdir().unwrap();
        let dst = dst_root.path().join("out");
        let p = preprocessor(src.path(), &dst);

        let ids = vec!["norway-brown-fjords-1990-m.txt".to_string()];
        let cats = vec!["norway".to_string()];
        let res = p.transform(Some(&ids), Some(&cats), 0, false);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
        // failed before any I/O: target root was never created
        assert!(!dst.exists());
    }

    #[test]
    fn failing_document_names_the_culprit() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let p = preprocessor(src.path(), dst.path());

        let ids = vec!["missing.txt".to_string()];
        match p.transform(Some(&ids), None, 0, false) {
            Err(Error::Document(id, cause)) => {
                assert_eq!(id, "missing.txt");
                assert!(matches!(*cause, Error::Io(_)));
            }
            other => panic!("expected document error, got {:?}", other),
        }
    }
}
