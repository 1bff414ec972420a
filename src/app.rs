//! Gui: the orchestrator tying the controller tree, event router, texture
//! cache and host callbacks together.
//!
//! The host owns the main loop and calls one [`Gui`] entry point per raw
//! event. Internal handling always runs before the matching host callback.
//! Positional events reach both the tree and the host; keys reach exactly one
//! of them depending on focus.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;
use tracing::{debug, trace};

use crate::cache::{ImageDecoder, PixelBuffer, RetentionPolicy, TextureCache, TextureInfo};
use crate::clock::FrameClock;
use crate::controller::{Anchor, AnchorSpec, ControllerId, ControllerTree};
use crate::event::focus::{EventRouter, FocusState, KeyRoute};
use crate::event::host::HostCallbacks;
use crate::event::input::{ButtonState, InputEvent, Key, MouseButton, SpecialKey};
use crate::geometry::{Offset, Size, Spacing};
use crate::render::GpuBackend;
use crate::theme::Theme;
use crate::widget::{RenderContext, Widget};
use crate::widgets::{
    Button, CheckBox, Console, DropDown, Label, Panel, ProgressBar, RadioGroup, Slider, Spinner,
    TextField,
};

// ---------------------------------------------------------------------------
// GuiConfig
// ---------------------------------------------------------------------------

/// Errors raised while loading a [`GuiConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid gui config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a [`Gui`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Window title, for hosts that show one.
    pub title: String,
    /// Initial window width in pixels.
    pub width: i32,
    /// Initial window height in pixels.
    pub height: i32,
    /// Texture cache retention.
    pub retention: RetentionPolicy,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: String::from("ortho-ui"),
            width: 640,
            height: 480,
            retention: RetentionPolicy::default(),
        }
    }
}

impl GuiConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size (builder).
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the texture retention policy (builder).
    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    /// Parse a config from TOML. Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

// ---------------------------------------------------------------------------
// Gui
// ---------------------------------------------------------------------------

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// The orchestrator: owns the root of the controller tree, the texture
/// cache, the theme, the window size and the host wiring.
///
/// At most one `Gui` may be alive in the process.
pub struct Gui<G: GpuBackend, D: ImageDecoder> {
    config: GuiConfig,
    tree: ControllerTree,
    cache: TextureCache,
    theme: Theme,
    window: Size,
    router: EventRouter,
    host: HostCallbacks,
    clock: FrameClock,
    pointer: Offset,
    gpu: G,
    decoder: D,
}

impl<G: GpuBackend, D: ImageDecoder> Gui<G, D> {
    /// Create the orchestrator with the built-in theme and no host callbacks.
    ///
    /// # Panics
    ///
    /// Panics if another `Gui` is alive, on any thread.
    pub fn new(config: GuiConfig, gpu: G, decoder: D) -> Self {
        let taken = ACTIVE.swap(true, Ordering::SeqCst);
        assert!(!taken, "unable to allocate more than one instance");

        let mut tree = ControllerTree::new();
        tree.resize(config.width, config.height);
        debug!(title = %config.title, width = config.width, height = config.height, "gui created");
        Self {
            window: Size::new(config.width, config.height),
            cache: TextureCache::with_retention(config.retention),
            config,
            tree,
            theme: Theme::default(),
            router: EventRouter::new(),
            host: HostCallbacks::new(),
            clock: FrameClock::new(),
            pointer: Offset::new(0, 0),
            gpu,
            decoder,
        }
    }

    /// Replace the theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Install host callbacks (builder).
    pub fn with_host(mut self, host: HostCallbacks) -> Self {
        self.host = host;
        self
    }

    /// Replace the host callbacks.
    pub fn set_host(&mut self, host: HostCallbacks) {
        self.host = host;
    }

    /// Replace the theme. Existing controllers keep their regions.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // ── Host entry points ────────────────────────────────────────────

    /// Idle tick: advance every controller by the time since the last tick,
    /// then call the host's idle callback.
    pub fn idle(&mut self) {
        let dt = self.clock.lap();
        self.update(dt);
        self.host.idle();
    }

    /// The window changed size: relayout the whole tree, then notify the host.
    pub fn reshape(&mut self, width: i32, height: i32) {
        debug!(width, height, "reshape");
        self.window = Size::new(width, height);
        self.tree.resize(width, height);
        self.host.reshape(width, height);
    }

    /// A character key. Goes to the focused controller, or to the host when
    /// nothing is focused.
    pub fn keyboard(&mut self, key: char, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        if self.router.key_event(&mut self.tree, Key::Char(key)) == KeyRoute::Host {
            self.host.keyboard(key, x, y);
        }
    }

    /// A special key, routed like [`keyboard`](Self::keyboard).
    pub fn special(&mut self, key: SpecialKey, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        if self.router.key_event(&mut self.tree, Key::Special(key)) == KeyRoute::Host {
            self.host.special(key, x, y);
        }
    }

    /// A mouse button changed state. Every controller sees it, focus is
    /// updated on a press, then the host sees it.
    pub fn mouse(&mut self, button: MouseButton, state: ButtonState, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        self.router.mouse_click(&mut self.tree, button, state, x, y);
        self.host.mouse(button, state, x, y);
    }

    /// Passive pointer motion.
    pub fn hover(&mut self, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        self.tree.mouse_hover(x, y);
        self.host.hover(x, y);
    }

    /// Pointer motion with a button held.
    pub fn drag(&mut self, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        self.tree.mouse_drag(x, y);
        self.host.drag(x, y);
    }

    /// Route one [`InputEvent`] to the matching entry point.
    ///
    /// Key events carry no position, so they use the last known pointer.
    pub fn dispatch(&mut self, event: InputEvent) {
        let Offset { x, y } = self.pointer;
        match event {
            InputEvent::Idle => self.idle(),
            InputEvent::Reshape { width, height } => self.reshape(width, height),
            InputEvent::Keyboard(key) => self.keyboard(key, x, y),
            InputEvent::Special(key) => self.special(key, x, y),
            InputEvent::Mouse { button, state, x, y } => self.mouse(button, state, x, y),
            InputEvent::Hover { x, y } => self.hover(x, y),
            InputEvent::Drag { x, y } => self.drag(x, y),
        }
    }

    // ── Frame ────────────────────────────────────────────────────────

    /// Advance every controller by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        trace!(dt, "update");
        self.tree.update(dt);
    }

    /// Draw the tree inside a 2-D frame matching the window size.
    pub fn render(&mut self) {
        self.gpu.begin_2d(self.window.width, self.window.height);
        let mut ctx = RenderContext::new(&mut self.gpu, &self.theme);
        self.tree.render(&mut ctx);
        self.gpu.end_2d();
    }

    // ── Factories ────────────────────────────────────────────────────

    /// Add `widget` under `parent` and place it against the current window.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not in the tree.
    pub fn add_widget(
        &mut self,
        parent: ControllerId,
        widget: impl Widget + 'static,
        anchor: AnchorSpec,
    ) -> ControllerId {
        let id = self.tree.insert_child(parent, Box::new(widget), anchor);
        self.tree.resize_subtree(id);
        debug!(?id, ?parent, "controller created");
        id
    }

    /// Add `widget` at `(x, y)` inside `parent`, sized by its preferred size.
    fn add_at(
        &mut self,
        parent: ControllerId,
        x: i32,
        y: i32,
        widget: impl Widget + 'static,
    ) -> ControllerId {
        let size = widget.preferred_size(&self.theme);
        self.add_widget(parent, widget, AnchorSpec::at(x, y, size))
    }

    /// Add a container panel placed by `anchor`.
    pub fn add_panel(&mut self, parent: ControllerId, anchor: AnchorSpec) -> ControllerId {
        self.add_widget(parent, Panel::new(), anchor)
    }

    pub fn add_label(
        &mut self,
        parent: ControllerId,
        x: i32,
        y: i32,
        text: impl Into<String>,
    ) -> ControllerId {
        self.add_at(parent, x, y, Label::new(text))
    }

    /// Add a button whose `on_press` fires on each completed click.
    pub fn add_button(
        &mut self,
        parent: ControllerId,
        x: i32,
        y: i32,
        label: impl Into<String>,
        on_press: impl FnMut() + 'static,
    ) -> ControllerId {
        self.add_at(parent, x, y, Button::new(label).on_press(on_press))
    }

    pub fn add_checkbox(
        &mut self,
        parent: ControllerId,
        x: i32,
        y: i32,
        label: impl Into<String>,
    ) -> ControllerId {
        self.add_at(parent, x, y, CheckBox::new(label))
    }

    pub fn add_text_field(
        &mut self,
        parent: ControllerId,
        x: i32,
        y: i32,
        text: impl Into<String>,
    ) -> ControllerId {
        self.add_at(parent, x, y, TextField::new(text))
    }

    pub fn add_slider(&mut self, parent: ControllerId, x: i32, y: i32, value: f32) -> ControllerId {
        self.add_at(parent, x, y, Slider::new(value))
    }

    pub fn add_progress_bar(&mut self, parent: ControllerId, x: i32, y: i32) -> ControllerId {
        self.add_at(parent, x, y, ProgressBar::new())
    }

    /// Add a spinner built with [`Spinner::int`] or [`Spinner::float`].
    pub fn add_spinner(
        &mut self,
        parent: ControllerId,
        x: i32,
        y: i32,
        spinner: Spinner,
    ) -> ControllerId {
        self.add_at(parent, x, y, spinner)
    }

    pub fn add_radio_group<I, S>(
        &mut self,
        parent: ControllerId,
        x: i32,
        y: i32,
        options: I,
    ) -> ControllerId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_at(parent, x, y, RadioGroup::new(options))
    }

    /// Add a closed drop-down showing its first option.
    pub fn add_dropdown<I, S>(
        &mut self,
        parent: ControllerId,
        x: i32,
        y: i32,
        options: I,
    ) -> ControllerId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_at(parent, x, y, DropDown::new(options))
    }

    /// Add a console stretched across the top of `parent`, as tall as its
    /// theme entry.
    pub fn add_console(&mut self, parent: ControllerId) -> ControllerId {
        let console = Console::new();
        let height = console.preferred_size(&self.theme).height;
        let anchor = AnchorSpec::new(
            Anchor::LEFT | Anchor::RIGHT | Anchor::TOP,
            Spacing::ZERO,
            Size::new(0, height),
        );
        self.add_widget(parent, console, anchor)
    }

    // ── Images ───────────────────────────────────────────────────────

    /// Load `path` as a cached texture. Returns [`TextureInfo::INVALID`] on failure.
    pub fn load_image(&mut self, path: &str, wrap: bool, generate_mips: bool) -> TextureInfo {
        self.cache
            .load(path, wrap, generate_mips, &self.decoder, &mut self.gpu)
    }

    /// Decode `path` to CPU pixels without caching.
    pub fn load_image_buffer(&self, path: &str) -> Option<PixelBuffer> {
        TextureCache::load_buffer(path, &self.decoder)
    }

    /// Free a buffer from [`load_image_buffer`](Self::load_image_buffer).
    pub fn release_image_buffer(&self, buffer: PixelBuffer) {
        TextureCache::release_buffer(buffer);
    }

    /// Drop a cached texture. Only honoured under [`RetentionPolicy::Explicit`].
    pub fn release_image(&mut self, path: &str) -> bool {
        self.cache.release(path, &mut self.gpu)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The root controller.
    pub fn root(&self) -> ControllerId {
        self.tree.root()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current window size.
    pub fn window_size(&self) -> Size {
        self.window
    }

    pub fn focus(&self) -> FocusState {
        self.router.state()
    }

    /// Drop keyboard focus so keys go to the host again.
    pub fn clear_focus(&mut self) {
        self.router.clear();
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    pub fn tree(&self) -> &ControllerTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ControllerTree {
        &mut self.tree
    }

    pub fn cache(&self) -> &TextureCache {
        &self.cache
    }

    pub fn gpu(&self) -> &G {
        &self.gpu
    }

    pub fn gpu_mut(&mut self) -> &mut G {
        &mut self.gpu
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Downcast the widget of `id`.
    pub fn widget<W: Widget + 'static>(&self, id: ControllerId) -> Option<&W> {
        self.tree.widget::<W>(id)
    }

    pub fn widget_mut<W: Widget + 'static>(&mut self, id: ControllerId) -> Option<&mut W> {
        self.tree.widget_mut::<W>(id)
    }
}

impl<G: GpuBackend, D: ImageDecoder> Drop for Gui<G, D> {
    fn drop(&mut self) {
        ACTIVE.store(false, Ordering::SeqCst);
        debug!("gui dropped");
    }
}

// ===========================================================================
// Tests
// ===========================================================================
