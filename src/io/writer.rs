//! Chunk serialization.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::pipeline::Chunk;

/// Serialize one chunk at `path`, overwriting any previous artifact.
pub fn write_chunk(path: &Path, chunk: &Chunk) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, chunk)?;
    writer.flush()?;
    Ok(())
}
