/*!
# IO utilities

Serialized chunk saving and loading, and the reader over a generated
chunk corpus.
!*/
mod reader;
mod writer;

pub use reader::{read_chunk, ChunkCorpus, Paragraph, Sentence};
pub use writer::write_chunk;
