//! Resource cache: image decoding and path-deduplicated GPU textures.

pub mod decoder;
pub mod texture;

pub use decoder::{FileDecoder, ImageDecoder, ImageError, PixelBuffer};
pub use texture::{RetentionPolicy, TextureCache, TextureInfo, TextureKey};
