use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9._-]+").expect("valid regex"));
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]{2,}").expect("valid regex"));
static EDGE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-_]+|[-_]+$").expect("valid regex"));

/// Split a filename into `(stem, extension)`.
///
/// The extension starts at the last `.` and keeps it (`".PNG"`), so `.hidden`
/// is all extension. A name without a `.` has an empty extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(dot) => filename.split_at(dot),
        None      => (filename, ""),
    }
}

/// Map a filename to its canonical slug form.
///
/// The stem is lowercased, every run of characters outside `[a-z0-9._-]`
/// becomes `_`, every run of two or more `-`/`_` becomes `-`, and separators
/// are trimmed from both ends. The extension is only lowercased.
///
/// Total over all inputs and idempotent: the normalized stem is a fixed point
/// of the stem rules, and the extension still starts at the last `.`.
///
/// ```rust
/// use imgnorm::normalize_filename;
///
/// assert_eq!(normalize_filename("Photo.PNG"), "photo.png");
/// assert_eq!(normalize_filename("--vacation--.jpg"), "vacation.jpg");
/// assert_eq!(normalize_filename("photo.png"), "photo.png");
/// ```
pub fn normalize_filename(filename: &str) -> String {
    let (stem, ext) = split_extension(filename);

    let stem = stem.to_lowercase();
    let stem = DISALLOWED.replace_all(&stem, "_");
    let stem = SEPARATOR_RUN.replace_all(&stem, "-");
    let stem = EDGE_SEPARATORS.replace_all(&stem, "");

    format!("{}{}", stem, ext.to_lowercase())
}
