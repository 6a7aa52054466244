use std::collections::BTreeSet;

/// Extensions eligible for normalization when no custom set is given.
pub const DEFAULT_SUPPORTED: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

/// Extensions converted to JPEG before normalization when no custom set is given.
pub const DEFAULT_CONVERT: &[&str] = &[".jfif", ".jiff", ".jpeg"];

/// Extension given to every converted file.
pub const JPEG_EXTENSION: &str = ".jpg";

// ---------------------------------------------------------------------------
// ExtensionSets
// ---------------------------------------------------------------------------

/// The two fixed extension lists that drive a run.
///
/// Built once and handed to the engine through
/// [`CleanupBuilder::extensions`](crate::CleanupBuilder::extensions).
/// Entries are stored lowercase with a leading dot, and lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSets {
    supported: BTreeSet<String>,
    convert:   BTreeSet<String>,
}

impl Default for ExtensionSets {
    fn default() -> Self {
        Self::new(DEFAULT_SUPPORTED.iter().copied(), DEFAULT_CONVERT.iter().copied())
    }
}

impl ExtensionSets {
    /// Build sets from arbitrary extensions. `"PNG"`, `".png"` and `".PNG"`
    /// all name the same extension.
    pub fn new<S, C>(supported: S, convert: C) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            supported: supported.into_iter().map(|e| canonical(e.as_ref())).collect(),
            convert:   convert.into_iter().map(|e| canonical(e.as_ref())).collect(),
        }
    }

    /// Whether files with `ext` are renamed to their normalized form.
    pub fn is_supported(&self, ext: &str) -> bool {
        !ext.is_empty() && self.supported.contains(&canonical(ext))
    }

    /// Whether files with `ext` are converted to JPEG first.
    pub fn is_convertible(&self, ext: &str) -> bool {
        !ext.is_empty() && self.convert.contains(&canonical(ext))
    }

    pub fn supported(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(String::as_str)
    }

    pub fn convert(&self) -> impl Iterator<Item = &str> {
        self.convert.iter().map(String::as_str)
    }
}

fn canonical(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
