//! In-memory image decoder that counts how often each path is decoded.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::cache::{ImageDecoder, ImageError, PixelBuffer};

/// An [`ImageDecoder`] serving registered images from memory.
///
/// Unregistered paths fail with [`ImageError::NotFound`]. Every call, hit or
/// miss, is counted per path.
#[derive(Debug, Default)]
pub struct MemoryDecoder {
    images: HashMap<String, PixelBuffer>,
    calls: RefCell<HashMap<String, usize>>,
}

impl MemoryDecoder {
    /// A decoder with no images.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `width` x `height` image with `channels` source channels (builder).
    ///
    /// Pixels are filled with a deterministic gradient.
    pub fn with_image(mut self, path: &str, width: u32, height: u32, channels: u8) -> Self {
        let rgba = (0..width * height * 4).map(|i| (i % 251) as u8).collect();
        self.images
            .insert(path.to_owned(), PixelBuffer::new(rgba, width, height, channels));
        self
    }

    /// How many times `path` was decoded.
    pub fn decode_count(&self, path: &str) -> usize {
        self.calls.borrow().get(path).copied().unwrap_or(0)
    }

    /// Total decode calls across all paths.
    pub fn total_decodes(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl ImageDecoder for MemoryDecoder {
    fn decode(&self, path: &str) -> Result<PixelBuffer, ImageError> {
        *self.calls.borrow_mut().entry(path.to_owned()).or_insert(0) += 1;
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| ImageError::NotFound { path: path.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_registered_images() {
        let decoder = MemoryDecoder::new().with_image("x.png", 2, 2, 3);
        let buffer = decoder.decode("x.png").unwrap();
        assert_eq!((buffer.width, buffer.height, buffer.channels), (2, 2, 3));
        assert_eq!(buffer.rgba.len(), 16);
    }

    #[test]
    fn counts_hits_and_misses() {
        let decoder = MemoryDecoder::new().with_image("x.png", 1, 1, 4);
        decoder.decode("x.png").unwrap();
        assert!(decoder.decode("y.png").is_err());
        assert!(decoder.decode("y.png").is_err());
        assert_eq!(decoder.decode_count("x.png"), 1);
        assert_eq!(decoder.decode_count("y.png"), 2);
        assert_eq!(decoder.total_decodes(), 3);
    }
}
