//! assembly/source.rs
//! Normalized input sources.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use bytes::Bytes;

/// Canonical input abstraction.
pub enum InputSource {
    File(PathBuf),
    Memory(Bytes),
    Reader(Box<dyn Read + Send>),
}

impl InputSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        InputSource::File(path.into())
    }

    pub fn memory(bytes: impl Into<Bytes>) -> Self {
        InputSource::Memory(bytes.into())
    }

    pub fn reader<R: Read + Send + 'static>(reader: R) -> Self {
        InputSource::Reader(Box::new(reader))
    }

    /// Human label used in errors and logs.
    pub fn origin(&self) -> String {
        match self {
            InputSource::File(p) => p.display().to_string(),
            InputSource::Memory(_) => "memory".to_string(),
            InputSource::Reader(_) => "reader".to_string(),
        }
    }

    /// Known length before reading, if any (used to pre-size the output).
    pub fn size_hint(&self) -> Option<usize> {
        match self {
            InputSource::File(p) => std::fs::metadata(p).ok().map(|m| m.len() as usize),
            InputSource::Memory(b) => Some(b.len()),
            InputSource::Reader(_) => None,
        }
    }
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(p) => f.debug_tuple("File").field(p).finish(),
            InputSource::Memory(b) => f.debug_tuple("Memory").field(&b.len()).finish(),
            InputSource::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl From<PathBuf> for InputSource {
    fn from(p: PathBuf) -> Self {
        InputSource::File(p)
    }
}

impl From<Vec<u8>> for InputSource {
    fn from(b: Vec<u8>) -> Self {
        InputSource::Memory(Bytes::from(b))
    }
}

impl From<Bytes> for InputSource {
    fn from(b: Bytes) -> Self {
        InputSource::Memory(b)
    }
}

impl From<&'static [u8]> for InputSource {
    fn from(b: &'static [u8]) -> Self {
        InputSource::Memory(Bytes::from_static(b))
    }
}

/// Normalize an input source into a boxed reader.
pub fn open_input(src: InputSource) -> std::io::Result<Box<dyn Read + Send>> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(std::fs::File::open(p)?),
        InputSource::Memory(b) => Box::new(std::io::Cursor::new(b)),
    };
    Ok(reader)
}
