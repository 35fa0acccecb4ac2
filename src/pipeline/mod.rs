/*! Preprocessing pipeline

Per document: paragraphs are tagged (or normalized), accumulated into
token-count-bounded chunks, and serialized under the target root,
mirroring the source directory layout. [Preprocessor] drives the whole
corpus, one document at a time.
!*/
mod chunk;
mod preprocess;
mod tokenize;
mod types;

pub use chunk::Chunks;
pub use preprocess::{Preprocessor, CHUNK_EXT};
pub use tokenize::{normalize_paragraph, tag_paragraph};
pub use types::{
    Chunk, LemmaParagraph, LemmaSentence, TaggedParagraph, TaggedSentence, TaggedWord, TokenCount,
};
