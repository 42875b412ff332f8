//! Reading and writing the two inputs and the one output.
//!
//! Images are always converted to 8-bit RGB on the way in, whatever their
//! stored color model. Annotation bytes must be UTF-8.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::debug;

use crate::error::BoxviewError;

/// Decodes an in-memory image (JPEG, PNG or BMP) into RGB.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, BoxviewError> {
    decode_image_from(bytes, Path::new("<memory>"))
}

/// Reads and decodes an image file into RGB.
pub fn read_image(path: &Path) -> Result<RgbImage, BoxviewError> {
    let bytes = fs::read(path).map_err(BoxviewError::Io)?;
    decode_image_from(&bytes, path)
}

/// Encodes `image` to `path`, choosing the format from the file extension.
pub fn write_image(path: &Path, image: &RgbImage) -> Result<(), BoxviewError> {
    image
        .save(path)
        .map_err(|source| BoxviewError::ImageEncode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("wrote {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Turns uploaded annotation bytes into text.
pub fn decode_annotation_bytes(bytes: Vec<u8>) -> Result<String, BoxviewError> {
    decode_annotation_bytes_from(bytes, PathBuf::from("<memory>"))
}

/// Reads an annotation file as UTF-8 text.
pub fn read_annotation_file(path: &Path) -> Result<String, BoxviewError> {
    let bytes = fs::read(path).map_err(BoxviewError::Io)?;
    decode_annotation_bytes_from(bytes, path.to_path_buf())
}

fn decode_image_from(bytes: &[u8], path: &Path) -> Result<RgbImage, BoxviewError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| BoxviewError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "decoded {} as {}x{} {:?}",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.to_rgb8())
}

fn decode_annotation_bytes_from(bytes: Vec<u8>, path: PathBuf) -> Result<String, BoxviewError> {
    String::from_utf8(bytes).map_err(|source| BoxviewError::AnnotationNotUtf8 { path, source })
}
