use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::error::ConvertError;
use crate::traits::Codec;

// ---------------------------------------------------------------------------
// ConvertResult
// ---------------------------------------------------------------------------

/// Outcome of converting one file to JPEG.
#[derive(Debug)]
pub enum ConvertResult {
    /// `dst` was written and `src` removed.
    Converted { src: PathBuf, dst: PathBuf },

    /// Nothing was removed. `src` is still on disk; `dst` may exist if the
    /// failure happened after it was written.
    Failed { src: PathBuf, reason: ConvertError },
}

// ---------------------------------------------------------------------------
// ImageCodec
// ---------------------------------------------------------------------------

/// Default [`Codec`] backed by the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCodec;

impl Codec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ConvertError> {
        image::load_from_memory(bytes).map_err(|e| ConvertError::Decode(e.to_string()))
    }

    fn encode_jpeg(&self, image: &RgbImage) -> Result<Vec<u8>, ConvertError> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Jpeg)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

// ---------------------------------------------------------------------------
// convert()
// ---------------------------------------------------------------------------

/// Re-encode `src` as an RGB JPEG at `dst`, then delete `src`.
///
/// An existing file at `dst` is overwritten. `src` is only removed once `dst`
/// has been written in full.
pub fn convert(src: &Path, dst: &Path, codec: &dyn Codec) -> ConvertResult {
    match try_convert(src, dst, codec) {
        Ok(()) => ConvertResult::Converted {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        },
        Err(reason) => ConvertResult::Failed {
            src: src.to_path_buf(),
            reason,
        },
    }
}

fn try_convert(src: &Path, dst: &Path, codec: &dyn Codec) -> Result<(), ConvertError> {
    let bytes = fs::read(src).map_err(ConvertError::Read)?;
    let rgb = codec.decode(&bytes)?.to_rgb8();
    let jpeg = codec.encode_jpeg(&rgb)?;

    fs::write(dst, jpeg).map_err(ConvertError::Write)?;

    // Re-encoding in place: the source is now the destination.
    if src == dst {
        return Ok(());
    }
    fs::remove_file(src).map_err(ConvertError::RemoveSource)
}
