//! Greedy chunk accumulation.
use crate::error::Error;

use super::types::TokenCount;

/// Iterator adapter grouping a paragraph stream into token-count-bounded
/// chunks.
///
/// The running token count is checked *before* appending: a paragraph
/// arriving once the count has reached `chunksize` flushes the current
/// chunk and opens the next one with that paragraph. The threshold is a
/// soft floor, so a chunk may overshoot it by up to one paragraph, and a
/// paragraph is never split across chunks. Whatever has accumulated when
/// the stream ends is emitted as the final chunk, even when empty.
///
/// `chunksize` must be greater than zero; the unchunked case is handled
/// by the caller.
pub struct Chunks<I, P> {
    paragraphs: I,
    chunksize: usize,
    wc: usize,
    chunk: Vec<P>,
    done: bool,
}

impl<I, P> Chunks<I, P>
where
    I: Iterator<Item = Result<P, Error>>,
    P: TokenCount,
{
    pub fn new(paragraphs: I, chunksize: usize) -> Self {
        debug_assert!(chunksize > 0);
        Self {
            paragraphs,
            chunksize,
            wc: 0,
            chunk: Vec::new(),
            done: false,
        }
    }
}

impl<I, P> Iterator for Chunks<I, P>
where
    I: Iterator<Item = Result<P, Error>>,
    P: TokenCount,
{
    type Item = Result<Vec<P>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for paragraph in self.paragraphs.by_ref() {
            let paragraph = match paragraph {
                Ok(p) => p,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            if self.wc < self.chunksize {
                self.wc += paragraph.token_count();
                self.chunk.push(paragraph);
            } else {
                let full = std::mem::take(&mut self.chunk);
                self.wc = paragraph.token_count();
                self.chunk.push(paragraph);
                return Some(Ok(full));
            }
        }

        self.done = true;
        Some(Ok(std::mem::take(&mut self.chunk)))
    }
}
