//! Texture cache: decode and upload each image path at most once.
//!
//! Entries live in a slotmap so every cached texture gets a generational
//! [`TextureKey`]. Under the default [`RetentionPolicy::ProcessLifetime`]
//! nothing is ever evicted; [`RetentionPolicy::Explicit`] lets callers
//! [`release`](TextureCache::release) a path, after which its stale key no
//! longer resolves and the next load decodes again.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, warn};

use super::decoder::{ImageDecoder, PixelBuffer};
use crate::render::{FilterMode, GpuBackend, TextureFormat, TextureHandle, WrapMode};

new_key_type! {
    /// Generational handle to a cache entry.
    pub struct TextureKey;
}

/// What a load returns: the GPU handle and the image's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureInfo {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
    /// Channels of the source image, not of the GPU texture.
    pub channels: u8,
}

impl TextureInfo {
    /// Sentinel for a failed load.
    pub const INVALID: TextureInfo = TextureInfo {
        handle: TextureHandle::INVALID,
        width: 0,
        height: 0,
        channels: 0,
    };

    /// Whether the load succeeded.
    pub fn is_valid(&self) -> bool {
        self.handle.is_valid()
    }
}

/// Whether cached textures may ever be released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetentionPolicy {
    /// Entries stay until the cache is dropped; `release` is refused.
    #[default]
    ProcessLifetime,
    /// `release` removes the entry and deletes its GPU texture.
    Explicit,
}

#[derive(Debug)]
struct TextureEntry {
    path: String,
    info: TextureInfo,
}

/// Path-keyed cache of GPU textures.
#[derive(Debug, Default)]
pub struct TextureCache {
    entries: SlotMap<TextureKey, TextureEntry>,
    by_path: HashMap<String, TextureKey>,
    retention: RetentionPolicy,
}

impl TextureCache {
    /// An empty cache that never evicts.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cache with the given retention policy.
    pub fn with_retention(retention: RetentionPolicy) -> Self {
        Self { retention, ..Self::default() }
    }

    /// The cache's retention policy.
    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    /// Load `path` as a texture, decoding and uploading only on the first call.
    ///
    /// On a miss the image is decoded, uploaded with a full mip chain and given
    /// linear filtering (`generate_mips`) or nearest filtering, with repeat or
    /// clamp-to-edge wrapping on both axes. The CPU pixels are dropped right after
    /// upload. On a hit the cached info is returned without touching `decoder`
    /// or `gpu`, and `wrap` / `generate_mips` are ignored.
    ///
    /// A failed decode returns [`TextureInfo::INVALID`] and leaves the cache
    /// unchanged, so a later call retries.
    pub fn load(
        &mut self,
        path: &str,
        wrap: bool,
        generate_mips: bool,
        decoder: &dyn ImageDecoder,
        gpu: &mut dyn GpuBackend,
    ) -> TextureInfo {
        if let Some(&key) = self.by_path.get(path) {
            let info = self.entries[key].info;
            debug!(path, handle = info.handle.0, "texture cache hit");
            return info;
        }

        let buffer = match decoder.decode(path) {
            Ok(buffer) => buffer,
            Err(err) => {
                warn!(path, error = %err, "texture load failed");
                return TextureInfo::INVALID;
            }
        };

        let handle = gpu.create_texture();
        if !handle.is_valid() {
            warn!(path, "gpu refused to allocate a texture");
            return TextureInfo::INVALID;
        }
        gpu.upload_mipmapped(
            handle,
            TextureFormat::for_channels(buffer.channels),
            buffer.width,
            buffer.height,
            &buffer.rgba,
        );
        if generate_mips {
            gpu.set_filter(handle, FilterMode::LinearMipmapLinear, FilterMode::Linear);
        } else {
            gpu.set_filter(handle, FilterMode::Nearest, FilterMode::Nearest);
        }
        let wrap_mode = if wrap { WrapMode::Repeat } else { WrapMode::ClampToEdge };
        gpu.set_wrap(handle, wrap_mode, wrap_mode);

        let info = TextureInfo {
            handle,
            width: buffer.width,
            height: buffer.height,
            channels: buffer.channels,
        };
        drop(buffer);

        let key = self.entries.insert(TextureEntry { path: path.to_owned(), info });
        self.by_path.insert(path.to_owned(), key);
        debug!(path, handle = handle.0, width = info.width, height = info.height, "texture cached");
        info
    }

    /// Key of the entry cached for `path`.
    pub fn key(&self, path: &str) -> Option<TextureKey> {
        self.by_path.get(path).copied()
    }

    /// Info stored under `key`, or `None` if the key is stale.
    pub fn get(&self, key: TextureKey) -> Option<TextureInfo> {
        self.entries.get(key).map(|entry| entry.info)
    }

    /// Whether `path` is cached.
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Number of cached textures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove `path` and delete its GPU texture.
    ///
    /// Only honoured under [`RetentionPolicy::Explicit`]. Returns whether an
    /// entry was removed.
    pub fn release(&mut self, path: &str, gpu: &mut dyn GpuBackend) -> bool {
        if self.retention == RetentionPolicy::ProcessLifetime {
            warn!(path, "texture release refused: cache retains entries for its lifetime");
            return false;
        }
        let Some(key) = self.by_path.remove(path) else {
            return false;
        };
        if let Some(entry) = self.entries.remove(key) {
            gpu.delete_texture(entry.info.handle);
            debug!(path = %entry.path, handle = entry.info.handle.0, "texture released");
        }
        true
    }

    /// Decode `path` straight to CPU pixels, bypassing the cache and the GPU.
    ///
    /// Every call decodes again. Returns `None` if decoding fails.
    pub fn load_buffer(path: &str, decoder: &dyn ImageDecoder) -> Option<PixelBuffer> {
        match decoder.decode(path) {
            Ok(buffer) => Some(buffer),
            Err(err) => {
                warn!(path, error = %err, "image buffer load failed");
                None
            }
        }
    }

    /// Free a buffer obtained from [`load_buffer`](Self::load_buffer).
    ///
    /// Cached textures are unaffected.
    pub fn release_buffer(buffer: PixelBuffer) {
        drop(buffer);
    }
}
