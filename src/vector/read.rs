//! Lenient array-literal reader.
//!
//! Only the text between the first `{` and the first `}` after it is
//! considered; everything else in the file is ignored.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No '{{' found")]
    MissingOpenBrace,
    #[error("No '}}' found after '{{'")]
    MissingCloseBrace,
    #[error("Invalid integer '{token}' at position {index}: {source}")]
    InvalidToken {
        index: usize,
        token: String,
        source: ParseIntError,
    },
}

/// Parse the first brace-delimited, comma-separated integer list in `text`
pub fn parse_c_vector(text: &str) -> Result<Vec<i32>, ReadError> {
    let start = text.find('{').ok_or(ReadError::MissingOpenBrace)? + 1;
    let len = text[start..]
        .find('}')
        .ok_or(ReadError::MissingCloseBrace)?;

    text[start..start + len]
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            token.parse::<i32>().map_err(|source| ReadError::InvalidToken {
                index,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Read a whole file and parse its array literal
pub fn read_samples_from_file(path: impl AsRef<Path>) -> Result<Vec<i32>, ReadError> {
    let content = fs::read_to_string(path)?;
    parse_c_vector(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SignalConfig;
    use crate::quantize::quantize_waves;
    use crate::signal::generate;
    use crate::vector::format_c_vector;
    use std::io::Write;

    #[test]
    fn test_parse_surrounding_text_ignored() {
        let text = "// header\nint x[] = { 12, 34,\n 200 }; trailing { 1 }";
        assert_eq!(parse_c_vector(text).unwrap(), vec![12, 34, 200]);
    }

    #[test]
    fn test_emitted_vector_parses_back() {
        let samples = vec![128, 161, 0, 255, 3, -4];
        let text = format_c_vector("wave_samples", &samples);
        assert_eq!(parse_c_vector(&text).unwrap(), samples);
    }

    #[test]
    fn test_generated_waveform_parses_back() {
        let config = SignalConfig::default();
        let wave = quantize_waves(&generate(&config), &config).unwrap();

        let text = format_c_vector(&config.array_name, &wave.samples);
        assert_eq!(parse_c_vector(&text).unwrap(), wave.samples);
    }

    #[test]
    fn test_missing_braces() {
        assert!(matches!(
            parse_c_vector("no braces here"),
            Err(ReadError::MissingOpenBrace)
        ));
        assert!(matches!(
            parse_c_vector("{ 1, 2, 3"),
            Err(ReadError::MissingCloseBrace)
        ));
    }

    #[test]
    fn test_close_brace_before_open_is_skipped() {
        assert_eq!(parse_c_vector("} { 5, 6 }").unwrap(), vec![5, 6]);
    }

    #[test]
    fn test_bad_tokens() {
        // Empty body splits into one empty token
        assert!(matches!(
            parse_c_vector("{}"),
            Err(ReadError::InvalidToken { index: 0, .. })
        ));

        match parse_c_vector("{1, two, 3}") {
            Err(ReadError::InvalidToken { index, token, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(token, "two");
            }
            other => panic!("expected invalid token, got {:?}", other),
        }

        assert!(matches!(
            parse_c_vector("{1, 2,}"),
            Err(ReadError::InvalidToken { index: 2, .. })
        ));
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "static int wave_samples[] = {{\n9, 8, 7\n}};\n").unwrap();

        assert_eq!(read_samples_from_file(file.path()).unwrap(), vec![9, 8, 7]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_samples_from_file(dir.path().join("postFFT.txt"));
        assert!(matches!(result, Err(ReadError::Io(_))));
    }
}
