use std::path::{Path, PathBuf};

use crate::extensions::JPEG_EXTENSION;
use crate::normalize::split_extension;

/// A regular file seen during the walk.
///
/// Lives only while the engine decides what to do with it. Conversion
/// produces a fresh entry for the `.jpg` that replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the file, rooted wherever the walk was rooted.
    pub path: PathBuf,

    /// The file's base name.
    pub name: String,

    /// Lowercased extension including the dot, or empty.
    pub extension: String,

    /// How deep below the root this file was found. Direct children = 1.
    pub depth: usize,
}

impl FileEntry {
    /// Build an entry for `path`. Returns `None` when the file name is not
    /// valid UTF-8, since such names cannot be normalized.
    pub fn new(path: impl Into<PathBuf>, depth: usize) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_str()?.to_owned();
        let (_, ext) = split_extension(&name);
        let extension = ext.to_lowercase();

        Some(Self { path, name, extension, depth })
    }

    /// Where this file goes when converted: same directory, same stem, `.jpg`.
    pub fn jpeg_destination(&self) -> PathBuf {
        self.converted().path
    }

    /// The entry for the `.jpg` that replaces this file after conversion.
    ///
    /// Infallible: the new name is built from this entry's UTF-8 name.
    pub fn converted(&self) -> FileEntry {
        let (stem, _) = split_extension(&self.name);
        let name = format!("{}{}", stem, JPEG_EXTENSION);

        FileEntry {
            path:      self.sibling(&name),
            name,
            extension: JPEG_EXTENSION.to_owned(),
            depth:     self.depth,
        }
    }

    /// A path in the same directory as this file.
    pub fn sibling(&self, name: &str) -> PathBuf {
        match self.path.parent() {
            Some(dir) => dir.join(name),
            None      => Path::new(name).to_path_buf(),
        }
    }
}
