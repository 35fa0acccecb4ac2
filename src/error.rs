//! Error enum
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Invalid caller input: mutually exclusive filters supplied at once,
    /// a target parent that is not a directory, a malformed document name.
    InvalidArgument(String),
    /// Failure while processing one document. Carries the document id and
    /// the underlying cause.
    Document(String, Box<Error>),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Serialization(bincode::Error),
    Json(serde_json::Error),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Error {
        Error::Serialization(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
