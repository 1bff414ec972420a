//! Image decoding seam and the file-backed decoder.

use std::path::Path;

/// Errors produced while decoding an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("no image at {path}")]
    NotFound { path: String },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} has no pixels")]
    Empty { path: String },
}

/// Decoded pixels normalized to RGBA8, plus the source's own channel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// `width * height * 4` bytes, rows top to bottom.
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Channels in the source file (3 for RGB, 4 for RGBA, ...).
    pub channels: u8,
}

impl PixelBuffer {
    /// Wrap already-normalized RGBA8 pixels.
    pub fn new(rgba: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        Self { rgba, width, height, channels }
    }
}

/// Turns a file path into RGBA8 pixels.
pub trait ImageDecoder {
    /// Decode the image at `path`.
    fn decode(&self, path: &str) -> Result<PixelBuffer, ImageError>;
}

/// Decodes image files from disk with the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &str) -> Result<PixelBuffer, ImageError> {
        if !Path::new(path).is_file() {
            return Err(ImageError::NotFound { path: path.to_owned() });
        }
        let img = image::open(path).map_err(|source| ImageError::Decode {
            path: path.to_owned(),
            source,
        })?;
        let channels = img.color().channel_count();
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::Empty { path: path.to_owned() });
        }
        Ok(PixelBuffer::new(rgba.into_raw(), width, height, channels))
    }
}
