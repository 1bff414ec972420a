//! # ortho-ui
//!
//! A retained-mode 2-D widget layer for GPU-backed applications.
//!
//! ortho-ui owns a tree of controllers (widget nodes), routes raw host input
//! through a single-focus state machine, lays controllers out with edge
//! anchors, and keeps a deduplicating cache of GPU textures. The windowing
//! host keeps the main loop and calls into a [`Gui`](app::Gui) once per event.
//!
//! ## Core Systems
//!
//! - **[`controller`]**: slotmap-backed controller tree, anchors, hit testing
//! - **[`event`]**: raw input types, focus router, host callback slots
//! - **[`cache`]**: path-keyed texture cache and image decoder seam
//! - **[`render`]**: GPU backend seam
//! - **[`widget`]**: Widget trait and render context
//! - **[`widgets`]**: Panel, Label, Button, CheckBox, TextField, Slider, ProgressBar, Spinner, RadioGroup, DropDown, Console
//! - **[`app`]**: the `Gui` orchestrator and its configuration
//! - **[`theme`]**: per-widget-type visual parameters
//! - **[`clock`]**: frame delta timing
//! - **[`geometry`]**: Offset, Size, Region, Spacing primitives
//! - **[`testing`]**: recording GPU, in-memory decoder, headless Pilot

// Foundation
pub mod geometry;

// Core systems
pub mod cache;
pub mod controller;
pub mod event;
pub mod render;

// Widget system
pub mod theme;
pub mod widget;
pub mod widgets;

// Application
pub mod app;
pub mod clock;

// Headless test support
pub mod testing;

pub use app::{ConfigError, Gui, GuiConfig};
