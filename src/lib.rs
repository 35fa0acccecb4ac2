/*! # Textmill

Textmill turns a categorized collection of raw text documents into a
tagged (optionally lemmatized/normalized) intermediate representation,
serialized in token-count-bounded chunks that the paired
[ChunkCorpus](crate::io::ChunkCorpus) reader consumes.

This project can be used as a command line tool or as a lib to integrate
corpus preprocessing into other projects.

## Getting started

```sh
textmill 0.1.0
corpus preprocessing tool.

USAGE:
    textmill <SUBCOMMAND>

FLAGS:
    -h, --help       Prints help information
    -V, --version    Prints version information

SUBCOMMANDS:
    describe      Single-pass descriptive statistics of a text corpus
    help          Prints this message or the help of the given subcommand(s)
    preprocess    Tag, optionally normalize, chunk and serialize a text corpus
```
!*/
pub mod cli;
pub mod corpus;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod tagging;
