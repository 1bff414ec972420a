//! Rendering seam: the GPU backend trait and its parameter types.

pub mod gpu;

pub use gpu::{Color, FilterMode, GpuBackend, TextureFormat, TextureHandle, WrapMode};
