//! Headless testing framework: recording GPU, in-memory decoder, Pilot.
//!
//! Use the [`Pilot`] to drive a [`Gui`](crate::app::Gui) without a window or
//! a GPU. [`RecordingGpu`] captures every draw and texture call as a
//! [`GpuCommand`] so tests can assert on draw order; [`MemoryDecoder`] serves
//! images from memory and counts decodes.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod decoder;
pub mod gpu;
pub mod pilot;

pub use decoder::MemoryDecoder;
pub use gpu::{GpuCommand, RecordingGpu};
pub use pilot::Pilot;

static GUI_LOCK: Mutex<()> = Mutex::new(());

/// Hold this while a test owns a [`Gui`](crate::app::Gui).
///
/// Only one `Gui` may be alive per process, and test threads run in
/// parallel. A [`Pilot`] takes the lock itself. A test that panicked while
/// holding it does not block the others.
pub fn gui_lock() -> MutexGuard<'static, ()> {
    GUI_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
