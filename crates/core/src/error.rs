// crates/core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the reference corpus.
///
/// Everything past ingestion degrades silently (missing values, skipped
/// insights); a corpus that cannot be read at all is the one hard failure.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Reference corpus not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Permission denied reading corpus: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}: {message}")]
    MalformedCsv { path: PathBuf, message: String },

    #[error("Corpus {path} has no header row")]
    MissingHeader { path: PathBuf },

    #[error("Corpus {path} is missing the title column \"{column}\"")]
    MissingTitleColumn { path: PathBuf, column: &'static str },
}

impl CorpusError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_error_display() {
        let err = CorpusError::NotFound {
            path: PathBuf::from("/data/reference.csv"),
        };
        assert!(err.to_string().contains("/data/reference.csv"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_corpus_error_io_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CorpusError::io("/data/reference.csv", io_err);
        assert!(matches!(err, CorpusError::NotFound { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CorpusError::io("/data/reference.csv", io_err);
        assert!(matches!(err, CorpusError::PermissionDenied { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
        let err = CorpusError::io("/data/reference.csv", io_err);
        assert!(matches!(err, CorpusError::Io { .. }));
    }
}
