//! Loaded memory images (ROM banks, NVRAM and SRAM snapshots).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// An immutable byte buffer loaded from a dump file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    label: String,
    bytes: Vec<u8>,
}

impl BinaryImage {
    /// Wrap an in-memory buffer.
    pub fn new(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            bytes,
        }
    }

    /// Read the whole file into memory.
    ///
    /// The label is the file name (or the full path when it has none).
    /// The file handle is closed before returning, on success and failure alike.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!(
            "Loaded {} ({} bytes, 0x{:X})",
            label,
            bytes.len(),
            bytes.len()
        );
        Ok(Self::new(label, bytes))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_reads_entire_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();

        let image = BinaryImage::load(file.path()).unwrap();
        assert_eq!(image.bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(image.len(), 4);
        assert!(!image.label().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let image = BinaryImage::load(file.path()).unwrap();
        assert!(image.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BinaryImage::load(dir.path().join("jv880_rom2.bin")).unwrap_err();
        assert!(err.is_not_found());
    }
}
