use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The full text of a file at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub path: PathBuf,
    pub exists: bool,
    pub text: String,
    /// Bytes dropped while decoding because they were not valid UTF-8
    pub dropped_bytes: usize,
}

impl FileContent {
    /// Read `path` if it exists.
    ///
    /// A missing file is not an error: the result has `exists == false` and
    /// empty text. Invalid UTF-8 is dropped rather than rejected.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                exists: false,
                text: String::new(),
                dropped_bytes: 0,
            });
        }

        let bytes = std::fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let (text, dropped_bytes) = decode_lossy(&bytes);

        Ok(Self {
            path: path.to_path_buf(),
            exists: true,
            text,
            dropped_bytes,
        })
    }

    /// Replace the file's contents with `text` in one full-file write.
    pub fn overwrite(&self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text.as_bytes()).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Decode UTF-8, skipping invalid sequences.
///
/// Returns the decoded text and the number of bytes that were skipped.
pub fn decode_lossy(bytes: &[u8]) -> (String, usize) {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }

    (text, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        let (text, dropped) = decode_lossy("héllo wörld".as_bytes());
        assert_eq!(text, "héllo wörld");
        assert_eq!(dropped, 0);
    }

    #[test]
    fn test_decode_drops_invalid_bytes() {
        let bytes = b"abc\xff\xfedef\xc3";
        let (text, dropped) = decode_lossy(bytes);
        assert_eq!(text, "abcdef");
        assert_eq!(dropped, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.js");

        let content = FileContent::load(&path).unwrap();

        assert!(!content.exists);
        assert!(content.text.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.js");
        std::fs::write(&path, b"const a = 1;\xff\n").unwrap();

        let content = FileContent::load(&path).unwrap();
        assert!(content.exists);
        assert_eq!(content.text, "const a = 1;\n");
        assert_eq!(content.dropped_bytes, 1);

        content.overwrite("const a = 2;\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "const a = 2;\n");
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = FileContent::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
