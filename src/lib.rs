//! # imgnorm
//!
//! Bulk cleanup for image asset folders.
//!
//! imgnorm walks a directory tree, converts `.jfif`, `.jiff` and `.jpeg`
//! files to `.jpg`, and renames every supported image to a canonical slug:
//! lowercase, symbols collapsed, separators trimmed. Running it twice is a
//! no-op the second time.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let summary = imgnorm::cleanup()
//!     .root(".")
//!     .run()
//!     .unwrap();
//!
//! println!("{} converted, {} renamed", summary.converted, summary.renamed);
//! ```
//!
//! # The normalization rule
//!
//! [`normalize_filename`] is a pure function and can be used on its own:
//!
//! ```rust
//! use imgnorm::normalize_filename;
//!
//! assert_eq!(normalize_filename("My Photo!!--Trip.jpg"), "my_photo-trip.jpg");
//! assert_eq!(normalize_filename("img_01-final.jpg"), "img_01-final.jpg");
//! ```
//!
//! # Custom extension lists and codecs
//!
//! ```rust,no_run
//! use imgnorm::ExtensionSets;
//!
//! let summary = imgnorm::cleanup()
//!     .root("icons")
//!     .extensions(ExtensionSets::new([".png", ".ico"], [".jfif"]))
//!     .run()
//!     .unwrap();
//! ```

#![forbid(unsafe_code)]

mod builder;
mod convert;
mod engine;
mod entry;
mod error;
mod extensions;
mod normalize;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::CleanupBuilder;
pub use convert::{convert, ConvertResult, ImageCodec};
pub use entry::FileEntry;
pub use error::{ConvertError, ImgNormError};
pub use extensions::{ExtensionSets, DEFAULT_CONVERT, DEFAULT_SUPPORTED, JPEG_EXTENSION};
pub use normalize::{normalize_filename, split_extension};
pub use results::{ScanStats, Summary};
pub use traits::Codec;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`CleanupBuilder`] to configure and run a cleanup.
///
/// # Example
///
/// ```rust
/// let dir = std::env::temp_dir().join("imgnorm-doc-empty");
/// std::fs::create_dir_all(&dir).unwrap();
///
/// let summary = imgnorm::cleanup().root(&dir).run().unwrap();
/// assert_eq!(summary.renamed, 0);
/// ```
pub fn cleanup() -> CleanupBuilder {
    CleanupBuilder::default()
}
