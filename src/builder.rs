use std::path::PathBuf;

use crate::convert::ImageCodec;
use crate::engine::{run, EngineOptions};
use crate::error::ImgNormError;
use crate::extensions::ExtensionSets;
use crate::results::Summary;
use crate::traits::Codec;

// ---------------------------------------------------------------------------
// CleanupBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a cleanup run.
///
/// Created via [`imgnorm::cleanup()`](crate::cleanup). Configure with chained
/// builder methods, then call [`run()`](CleanupBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let summary = imgnorm::cleanup()
///     .root("assets/images")
///     .run()?;
/// ```
pub struct CleanupBuilder {
    root:       Option<PathBuf>,
    extensions: ExtensionSets,
    codec:      Option<Box<dyn Codec>>,
}

impl Default for CleanupBuilder {
    fn default() -> Self {
        Self {
            root:       None,
            extensions: ExtensionSets::default(),
            codec:      None,
        }
    }
}

impl CleanupBuilder {
    // ── Root ──────────────────────────────────────────────────────────────

    /// Directory to clean up. Must exist and be a directory.
    pub fn root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root = Some(dir.into());
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Replace the supported and convert-to-JPEG extension lists.
    ///
    /// Defaults to [`ExtensionSets::default()`].
    pub fn extensions(mut self, sets: ExtensionSets) -> Self {
        self.extensions = sets;
        self
    }

    /// Use a custom image codec for conversions.
    ///
    /// Defaults to [`ImageCodec`].
    pub fn codec(mut self, c: impl Codec + 'static) -> Self {
        self.codec = Some(Box::new(c));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the run and return what it did.
    ///
    /// # Errors
    ///
    /// Returns `Err` when no root was given, the root is not a directory, or a
    /// rename fails. A failed rename stops the run where it is: files already
    /// handled stay handled and the rest are left untouched. Conversion
    /// failures and unreadable entries are not errors; see [`Summary`].
    pub fn run(self) -> Result<Summary, ImgNormError> {
        let root = self.root.ok_or_else(|| {
            ImgNormError::InvalidRoot("no root provided".into())
        })?;

        if !root.is_dir() {
            return Err(ImgNormError::InvalidRoot(root));
        }

        let codec: Box<dyn Codec> = match self.codec {
            Some(c) => c,
            None    => Box::new(ImageCodec),
        };

        let opts = EngineOptions {
            root,
            extensions: self.extensions,
            codec,
        };

        run(opts)
    }
}
