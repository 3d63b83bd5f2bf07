use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the file boundary. Conversion itself cannot fail.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path is not an existing regular file.
    #[error("Missing {}", .path.display())]
    MissingInput {
        /// Path as given by the caller.
        path: PathBuf,
    },
    /// IO error while reading the input or writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The input file is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl ConvertError {
    /// Create a missing-input error for `path`.
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_message_names_path() {
        let err = ConvertError::missing_input("README.md");
        assert_eq!(err.to_string(), "Missing README.md");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ConvertError = io.into();
        assert!(matches!(err, ConvertError::Io(_)));
        assert_eq!(err.to_string(), "IO error: denied");
    }
}
