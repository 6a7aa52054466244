use image::{DynamicImage, RgbImage};

use crate::error::ConvertError;

/// The image codec used by the converter.
///
/// Implement this to swap out decoding or encoding, e.g. to exercise
/// conversion failures in tests without crafting corrupt files. The default
/// is [`ImageCodec`](crate::ImageCodec), backed by the `image` crate.
///
/// # Example
///
/// ```rust
/// use image::{DynamicImage, RgbImage};
/// use imgnorm::{Codec, ConvertError};
///
/// struct RejectEverything;
///
/// impl Codec for RejectEverything {
///     fn decode(&self, _bytes: &[u8]) -> Result<DynamicImage, ConvertError> {
///         Err(ConvertError::Decode("unsupported".into()))
///     }
///
///     fn encode_jpeg(&self, _image: &RgbImage) -> Result<Vec<u8>, ConvertError> {
///         Err(ConvertError::Encode("unsupported".into()))
///     }
/// }
/// ```
pub trait Codec {
    /// Decode raw file bytes into pixels.
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ConvertError>;

    /// Encode RGB pixels as a JPEG file body.
    fn encode_jpeg(&self, image: &RgbImage) -> Result<Vec<u8>, ConvertError>;
}
