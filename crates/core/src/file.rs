//! File-to-file conversion used by the command-line tool.

use std::path::Path;

use crate::{ConvertError, Converter};

/// Reads `input`, converts it, and writes the HTML to `output`.
///
/// `input` must be an existing regular file. `output` is created or
/// truncated and receives the converted text verbatim.
pub fn convert_file(
    input: &Path,
    output: &Path,
    converter: &Converter,
) -> Result<(), ConvertError> {
    if !input.is_file() {
        return Err(ConvertError::missing_input(input));
    }

    let source = String::from_utf8(std::fs::read(input)?)?;
    log::debug!("read {} bytes from {}", source.len(), input.display());

    let html = converter.convert(&source);
    std::fs::write(output, &html)?;
    log::debug!("wrote {} bytes to {}", html.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn converts_file_to_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("README.md");
        let output = dir.path().join("README.html");
        std::fs::write(&input, "# Title\n- a\n").unwrap();

        convert_file(&input, &output, &Converter::default()).unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>a</li>\n</ul>");
    }

    #[test]
    fn truncates_existing_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        std::fs::write(&input, "short").unwrap();
        std::fs::write(&output, "a much longer previous body that must disappear").unwrap();

        convert_file(&input, &output, &Converter::default()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "<p>\nshort\n</p>"
        );
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.md");
        let output = dir.path().join("out.html");

        let err = convert_file(&input, &output, &Converter::default()).unwrap_err();

        assert!(matches!(err, ConvertError::MissingInput { ref path } if path == &input));
        assert!(!output.exists());
    }

    #[test]
    fn directory_is_not_an_input() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.html");

        let err = convert_file(dir.path(), &output, &Converter::default()).unwrap_err();

        assert!(matches!(err, ConvertError::MissingInput { .. }));
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bad.md");
        let output = dir.path().join("out.html");
        std::fs::write(&input, [0xff, 0xfe, b'a']).unwrap();

        let err = convert_file(&input, &output, &Converter::default()).unwrap_err();

        assert!(matches!(err, ConvertError::Encoding(_)));
    }
}
