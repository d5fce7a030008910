//! Archive indexing: read every file of a submission zip into memory, grouped
//! by file extension.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zip::ZipArchive;

/// Error type for archive indexing.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file could not be opened.
    #[error("Failed to open archive {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not a zip container, or a corrupt entry header.
    #[error("Invalid zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An entry's content could not be read.
    #[error("Failed to read archive entry {entry}: {source}")]
    Read {
        entry: String,
        #[source]
        source: std::io::Error,
    },

    /// `size` is the declared size, or the bytes actually read when the entry
    /// inflates past a smaller declared size.
    #[error("Archive entry {entry} is {size} bytes, over the {limit} byte limit")]
    EntryTooLarge { entry: String, size: u64, limit: u64 },
}

/// Read-size guard applied while indexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexLimits {
    /// Reject any single entry whose uncompressed size exceeds this many bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entry_bytes: Option<u64>,
}

/// One file read out of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Entry path as stored in the archive.
    pub name: String,
    pub content: Vec<u8>,
}

/// Files of one archive grouped by extension (`".html"`, `".css"`, `""`, ...).
///
/// Buckets keep archive order. Extensions are case-sensitive and stored exactly
/// as they appear in the entry name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    buckets: BTreeMap<String, Vec<SourceFile>>,
}

impl FileIndex {
    /// Index the zip archive at `path`.
    pub fn open(path: impl AsRef<Path>, limits: &IndexLimits) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| ArchiveError::Open { path: path.to_path_buf(), source })?;
        Self::from_reader(BufReader::new(file), limits)
    }

    /// Index an in-memory zip archive.
    pub fn from_bytes(bytes: &[u8], limits: &IndexLimits) -> Result<Self, ArchiveError> {
        Self::from_reader(Cursor::new(bytes), limits)
    }

    /// Index a zip archive from any seekable reader.
    pub fn from_reader<R: Read + Seek>(
        reader: R,
        limits: &IndexLimits,
    ) -> Result<Self, ArchiveError> {
        let mut archive = ZipArchive::new(reader)?;
        let mut index = FileIndex::default();

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            let mut content = Vec::new();
            let read = match limits.max_entry_bytes {
                Some(limit) => {
                    let size = entry.size();
                    if size > limit {
                        return Err(ArchiveError::EntryTooLarge { entry: name, size, limit });
                    }
                    // The header size is not trusted; stop one byte past the limit.
                    let read = (&mut entry).take(limit + 1).read_to_end(&mut content);
                    if content.len() as u64 > limit {
                        let size = content.len() as u64;
                        return Err(ArchiveError::EntryTooLarge { entry: name, size, limit });
                    }
                    read
                }
                None => entry.read_to_end(&mut content),
            };
            read.map_err(|source| ArchiveError::Read { entry: name.clone(), source })?;
            index.insert(SourceFile { name, content });
        }

        Ok(index)
    }

    /// Add a file to the bucket matching its extension.
    pub fn insert(&mut self, file: SourceFile) {
        let ext = file_extension(&file.name).to_string();
        self.buckets.entry(ext).or_default().push(file);
    }

    /// Files with the given extension (leading dot included); empty when none.
    pub fn bucket(&self, ext: &str) -> &[SourceFile] {
        self.buckets.get(ext).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Extensions present in the archive, sorted.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Number of files per extension.
    pub fn bucket_sizes(&self) -> BTreeMap<String, usize> {
        self.buckets.iter().map(|(ext, files)| (ext.clone(), files.len())).collect()
    }

    pub fn file_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Extension of the final `/`-separated component of `path`, leading dot included.
///
/// A dot that starts or ends the component does not count (`.bashrc` and
/// `notes.` both give `""`).
pub fn file_extension(path: &str) -> &str {
    let component = path.rsplit('/').next().unwrap_or(path);
    match component.rfind('.') {
        Some(idx) if idx > 0 && idx < component.len() - 1 => &component[idx..],
        _ => "",
    }
}
