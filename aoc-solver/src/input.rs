//! Input loading and normalization
//!
//! Every day reads its puzzle input exactly once, in one of two shapes:
//! - [`InputMode::Text`]: the whole file with leading and trailing whitespace removed
//! - [`InputMode::Lines`]: one string per line, line terminators removed, nothing else touched
//!
//! Line mode keeps spaces inside and at the ends of each line, and keeps empty
//! lines as empty strings. Splitting `"a\nb\n"` yields `["a", "b"]`.

use crate::error::{InputError, ParseError};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// How a day wants its input normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// One trimmed string
    Text,
    /// One string per line
    Lines,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Text => f.write_str("text"),
            InputMode::Lines => f.write_str("lines"),
        }
    }
}

/// Read the whole file and trim surrounding whitespace (including newlines)
pub fn load_string(path: impl AsRef<Path>) -> Result<String, InputError> {
    read_raw(path.as_ref()).map(|raw| raw.trim().to_string())
}

/// Read the file as a sequence of lines
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    read_raw(path.as_ref()).map(|raw| split_lines(&raw))
}

fn read_raw(path: &Path) -> Result<String, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "loaded input");
    Ok(raw)
}

fn split_lines(raw: &str) -> Vec<String> {
    raw.lines().map(str::to_string).collect()
}

/// Normalized puzzle input, owned for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleInput {
    Text(String),
    Lines(Vec<String>),
}

impl PuzzleInput {
    /// Load and normalize a file according to `mode`
    pub fn load(path: impl AsRef<Path>, mode: InputMode) -> Result<Self, InputError> {
        read_raw(path.as_ref()).map(|raw| Self::from_raw(&raw, mode))
    }

    /// Normalize an in-memory string the same way [`PuzzleInput::load`] would
    pub fn from_raw(raw: &str, mode: InputMode) -> Self {
        match mode {
            InputMode::Text => PuzzleInput::Text(raw.trim().to_string()),
            InputMode::Lines => PuzzleInput::Lines(split_lines(raw)),
        }
    }

    /// Build line-mode input from literal lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PuzzleInput::Lines(lines.into_iter().map(Into::into).collect())
    }

    pub fn mode(&self) -> InputMode {
        match self {
            PuzzleInput::Text(_) => InputMode::Text,
            PuzzleInput::Lines(_) => InputMode::Lines,
        }
    }

    /// The trimmed text, if this input was loaded in text mode
    pub fn text(&self) -> Result<&str, ParseError> {
        match self {
            PuzzleInput::Text(text) => Ok(text),
            PuzzleInput::Lines(_) => Err(self.mode_mismatch(InputMode::Text)),
        }
    }

    /// The lines, if this input was loaded in line mode
    pub fn lines(&self) -> Result<&[String], ParseError> {
        match self {
            PuzzleInput::Lines(lines) => Ok(lines),
            PuzzleInput::Text(_) => Err(self.mode_mismatch(InputMode::Lines)),
        }
    }

    fn mode_mismatch(&self, expected: InputMode) -> ParseError {
        ParseError::WrongInputMode {
            expected,
            actual: self.mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_string_trims_whole_blob() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "input.txt", "\n  11-22,95-115 \n\n");
        assert_eq!(load_string(&path).unwrap(), "11-22,95-115");
    }

    #[test]
    fn test_load_lines_keeps_inner_whitespace() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "input.txt", "123 328 \n  \n\n*   + \n");
        assert_eq!(
            load_lines(&path).unwrap(),
            vec!["123 328 ", "  ", "", "*   + "]
        );
    }

    #[test]
    fn test_load_lines_no_trailing_empty_element() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "input.txt", "a\nb\n");
        assert_eq!(load_lines(&path).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_load_lines_strips_crlf() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "input.txt", "L68\r\nR48\r\n");
        assert_eq!(load_lines(&path).unwrap(), vec!["L68", "R48"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");
        assert!(matches!(load_string(&path), Err(InputError::NotFound { .. })));
        assert!(matches!(load_lines(&path), Err(InputError::NotFound { .. })));
        assert!(matches!(
            PuzzleInput::load(&path, InputMode::Lines),
            Err(InputError::NotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(load_string(&path), Err(InputError::Io { .. })));
    }

    #[test]
    fn test_mode_accessors() {
        let text = PuzzleInput::from_raw(" abc \n", InputMode::Text);
        assert_eq!(text.text().unwrap(), "abc");
        assert_eq!(
            text.lines(),
            Err(ParseError::WrongInputMode {
                expected: InputMode::Lines,
                actual: InputMode::Text,
            })
        );

        let lines = PuzzleInput::from_lines(["x", ""]);
        assert_eq!(lines.mode(), InputMode::Lines);
        assert_eq!(lines.lines().unwrap(), ["x", ""]);
        assert!(lines.text().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Rejoining line mode with `\n` reproduces the file, and trimming that
        /// gives text mode.
        #[test]
        fn prop_line_split_round_trip(lines in prop::collection::vec("[ a-z0-9@.]{0,12}", 1..12)) {
            let temp = TempDir::new().unwrap();
            let content = format!("{}\n", lines.join("\n"));
            let path = write(&temp, "input.txt", &content);

            let loaded_lines = load_lines(&path).unwrap();
            let loaded_text = load_string(&path).unwrap();

            prop_assert_eq!(&loaded_lines, &lines);
            let joined = loaded_lines.join("\n");
            prop_assert_eq!(joined.trim(), loaded_text.as_str());
        }

        #[test]
        fn prop_load_is_repeatable(content in "[ a-z\n]{0,40}") {
            let temp = TempDir::new().unwrap();
            let path = write(&temp, "input.txt", &content);
            prop_assert_eq!(load_lines(&path).unwrap(), load_lines(&path).unwrap());
            prop_assert_eq!(
                PuzzleInput::load(&path, InputMode::Text).unwrap(),
                PuzzleInput::from_raw(&content, InputMode::Text)
            );
        }
    }
}
