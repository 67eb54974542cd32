//! Input file loading with encoding fallback.
//!
//! The catalog export predates any encoding discipline, so candidates are
//! tried in a fixed order and the first clean decode wins. A `chardet` guess
//! over the raw bytes is carried alongside for observability; it never drives
//! which decoder is used.

use std::path::Path;

use crate::error::{LoadError, LoadResult};

/// Candidate encodings in the order they are tried.
pub const CANDIDATE_ENCODINGS: &[&str] = &["utf-8", "iso-8859-15", "windows-1252"];

/// A successfully loaded input file.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    /// Decoded file contents.
    pub text: String,
    /// Candidate encoding that decoded without errors.
    pub encoding: &'static str,
    /// chardet's guess over the raw bytes (observability only).
    pub detected_charset: String,
}

impl LoadedFile {
    /// Iterate the decoded lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Read and decode the input catalog.
///
/// Tries each of [`CANDIDATE_ENCODINGS`] in order and returns the first
/// decode that reports no errors. A missing file and an undecodable file are
/// distinct failures; neither produces any output file.
pub fn load_file(path: &Path) -> LoadResult<LoadedFile> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let detected_charset = detect_charset(&bytes);

    if let Ok(text) = std::str::from_utf8(&bytes) {
        return Ok(LoadedFile {
            text: text.to_string(),
            encoding: "utf-8",
            detected_charset,
        });
    }

    // Single-byte fallbacks tried after strict UTF-8.
    let single_byte: [(&'static str, &encoding_rs::Encoding); 2] = [
        ("iso-8859-15", encoding_rs::ISO_8859_15),
        ("windows-1252", encoding_rs::WINDOWS_1252),
    ];
    for (name, encoding) in single_byte {
        let (text, _, had_errors) = encoding.decode(&bytes);
        if !had_errors {
            return Ok(LoadedFile {
                text: text.into_owned(),
                encoding: name,
                detected_charset,
            });
        }
    }

    Err(LoadError::DecodeExhausted {
        path: path.to_path_buf(),
        tried: CANDIDATE_ENCODINGS.to_vec(),
        detected: detected_charset,
    })
}

/// Detect the charset of raw bytes using chardet.
///
/// Charset names are normalized to the labels used by [`CANDIDATE_ENCODINGS`].
pub fn detect_charset(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-15".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_bytes(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bytes(&dir, "producto.txt", "Código\tAceite\n".as_bytes());

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.encoding, "utf-8");
        assert!(loaded.text.contains("Código"));
    }

    #[test]
    fn test_latin_fallback() {
        // "Eléctrico" with 0xE9 for the accented e is invalid UTF-8
        let dir = tempfile::tempdir().unwrap();
        let path = write_bytes(&dir, "producto.txt", b"El\xe9ctrico\tBateria\n");

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.encoding, "iso-8859-15");
        assert!(loaded.text.contains("Eléctrico"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file.txt");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert!(err.to_string().contains("no-such-file.txt"));
    }

    #[test]
    fn test_lines_iteration() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bytes(&dir, "producto.txt", b"one\ntwo\nthree\n");

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.lines().count(), 3);
    }
}
