//! Brings a file fully into memory before any partitioning happens.

use memmap2::Mmap;
use std::{fs::File, ops::Deref, path::Path};

use crate::processor::StatsError;

/// How a file is brought into memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Memory-map the file (zero-copy)
    #[default]
    Mmap,
    /// Read the whole file into an owned buffer
    Read,
}

/// Immutable bytes shared read-only by all workers
#[derive(Debug)]
pub enum InputBuffer {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl InputBuffer {
    /// Loads `path` using `mode`
    ///
    /// # Errors
    /// Returns [`StatsError::Io`] if the file cannot be opened, stat'ed,
    /// read or mapped.
    pub fn load(path: &Path, mode: LoadMode) -> Result<Self, StatsError> {
        match mode {
            LoadMode::Read => Ok(InputBuffer::Owned(std::fs::read(path)?)),
            LoadMode::Mmap => {
                let file = File::open(path)?;
                // Mapping zero bytes fails on some platforms
                if file.metadata()?.len() == 0 {
                    return Ok(InputBuffer::Owned(Vec::new()));
                }
                let mmap = unsafe { Mmap::map(&file)? };
                Ok(InputBuffer::Mapped(mmap))
            }
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, InputBuffer::Mapped(_))
    }
}

impl Deref for InputBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputBuffer::Mapped(m) => &m[..],
            InputBuffer::Owned(v) => v.as_slice(),
        }
    }
}

impl From<Vec<u8>> for InputBuffer {
    fn from(v: Vec<u8>) -> Self {
        InputBuffer::Owned(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_mmap_and_read_agree() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "Hello, mapped world").unwrap();
        tmp.flush().unwrap();

        let mapped = InputBuffer::load(tmp.path(), LoadMode::Mmap).unwrap();
        let read = InputBuffer::load(tmp.path(), LoadMode::Read).unwrap();
        assert!(mapped.is_mapped());
        assert!(!read.is_mapped());
        assert_eq!(&mapped[..], b"Hello, mapped world");
        assert_eq!(&mapped[..], &read[..]);
    }

    #[test]
    fn test_empty_file_is_not_mapped() {
        let tmp = NamedTempFile::new().unwrap();
        let buf = InputBuffer::load(tmp.path(), LoadMode::Mmap).unwrap();
        assert!(buf.is_empty());
        assert!(!buf.is_mapped());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        for mode in [LoadMode::Mmap, LoadMode::Read] {
            assert!(matches!(
                InputBuffer::load(&missing, mode),
                Err(StatsError::Io(_))
            ));
        }
    }
}
