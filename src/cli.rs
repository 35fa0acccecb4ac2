//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "textmill", about = "corpus preprocessing tool.")]
/// Holds every command that is callable by the `textmill` command.
pub enum Textmill {
    #[structopt(about = "Tag, optionally normalize, chunk and serialize a text corpus")]
    Preprocess(Preprocess),
    #[structopt(about = "Single-pass descriptive statistics of a text corpus")]
    Describe(Describe),
}

#[derive(Debug, StructOpt)]
/// Preprocess command and parameters.
///
/// ```sh
/// textmill-preprocess 0.1.0
/// Tag, optionally normalize, chunk and serialize a text corpus
///
/// USAGE:
///     textmill preprocess [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -h, --help         Prints help information
///     -n, --normalize    lemmatize, lowercase and drop punctuation tokens
///         --by-dir       derive categories from directory names
///     -V, --version      Prints version information
///
/// OPTIONS:
///     -s, --chunksize <chunksize>         token count threshold per chunk [default: 0]
///         --files <files>...              restrict to the given document ids
///         --categories <categories>...    restrict to the given categories
///
/// ARGS:
///     <src>    source corpus root
///     <dst>    target root for serialized chunks
/// ```
pub struct Preprocess {
    #[structopt(parse(from_os_str), help = "source corpus root")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "target root for serialized chunks")]
    pub dst: PathBuf,
    #[structopt(
        short = "s",
        long = "chunksize",
        default_value = "0",
        help = "token count threshold per chunk (0 = whole document)"
    )]
    pub chunksize: usize,
    #[structopt(
        short = "n",
        long = "normalize",
        help = "lemmatize, lowercase and drop punctuation tokens"
    )]
    pub normalize: bool,
    #[structopt(
        long = "files",
        help = "restrict to the given document ids",
        conflicts_with = "categories"
    )]
    pub files: Vec<String>,
    #[structopt(long = "categories", help = "restrict to the given categories")]
    pub categories: Vec<String>,
    #[structopt(
        long = "by-dir",
        help = "derive categories from directory names instead of file names"
    )]
    pub by_dir: bool,
}

#[derive(Debug, StructOpt)]
/// Describe command and parameters.
pub struct Describe {
    #[structopt(parse(from_os_str), help = "source corpus root")]
    pub src: PathBuf,
    #[structopt(
        long = "files",
        help = "restrict to the given document ids",
        conflicts_with = "categories"
    )]
    pub files: Vec<String>,
    #[structopt(long = "categories", help = "restrict to the given categories")]
    pub categories: Vec<String>,
    #[structopt(
        long = "by-dir",
        help = "derive categories from directory names instead of file names"
    )]
    pub by_dir: bool,
}
