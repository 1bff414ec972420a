//! Integration tests for ortho-ui.
//!
//! These tests drive the public API from outside the crate through the
//! headless `Pilot`, checking that the controller tree, focus routing, layout
//! and texture cache work together.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;

use ortho_ui::cache::{RetentionPolicy, TextureInfo};
use ortho_ui::controller::{Anchor, AnchorSpec, ControllerId};
use ortho_ui::event::{from_crossterm, FocusState, HostCallbacks, SpecialKey};
use ortho_ui::geometry::{Region, Size, Spacing};
use ortho_ui::testing::{GpuCommand, MemoryDecoder, Pilot};
use ortho_ui::widgets::*;
use ortho_ui::GuiConfig;

fn describe(command: &GpuCommand) -> String {
    match command {
        GpuCommand::Begin2d { width, height } => format!("begin {width}x{height}"),
        GpuCommand::End2d => "end".to_owned(),
        GpuCommand::Quad { region, .. } => {
            format!("quad {},{} {}x{}", region.x, region.y, region.width, region.height)
        }
        GpuCommand::TexturedQuad { region, texture } => {
            format!("image {} at {},{}", texture.0, region.x, region.y)
        }
        GpuCommand::Text { at, text, .. } => format!("text {},{} {text}", at.x, at.y),
        other => format!("{other:?}"),
    }
}

fn host_log() -> (HostCallbacks, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (keys, specials, mice) = (Rc::clone(&log), Rc::clone(&log), Rc::clone(&log));
    let host = HostCallbacks::new()
        .on_keyboard(move |c, _, _| keys.borrow_mut().push(format!("key {c}")))
        .on_special(move |k, _, _| specials.borrow_mut().push(format!("special {k:?}")))
        .on_mouse(move |b, s, x, y| mice.borrow_mut().push(format!("mouse {b:?} {s:?} {x},{y}")));
    (host, log)
}

/// Every non-root controller sits where its anchor puts it inside its parent.
fn assert_layout_consistent(pilot: &Pilot) {
    let tree = pilot.gui().tree();
    for id in tree.walk_depth_first(tree.root()).into_iter().skip(1) {
        let parent = tree.parent(id).and_then(|p| tree.region(p)).unwrap();
        let node = tree.get(id).unwrap();
        assert_eq!(node.region, node.anchor.resolve(parent), "controller {id:?}");
    }
}

// ---------------------------------------------------------------------------
// Hit testing
// ---------------------------------------------------------------------------

#[test]
fn coincident_siblings_newest_wins() {
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    let _a = pilot.gui_mut().add_button(root, 10, 10, "A", || {});
    let b = pilot.gui_mut().add_button(root, 10, 10, "B", || {});
    assert_eq!(pilot.gui().tree().hit_test(10, 10), b);
    pilot.press(10, 10);
    assert_eq!(pilot.focused(), Some(b));
}

#[test]
fn overlapping_sequence_picks_latest_containing() {
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    let ids: Vec<ControllerId> = (0..5)
        .map(|i| pilot.gui_mut().add_label(root, i * 10, 0, "wide label"))
        .collect();
    // Labels are 80 px wide: x = 35 is covered by labels 0..=3.
    assert_eq!(pilot.gui().tree().hit_test(35, 5), ids[3]);
    assert_eq!(pilot.gui().tree().hit_test(5, 5), ids[0]);
    assert_eq!(pilot.gui().tree().hit_test(500, 300), root);
}

#[test]
fn nested_controls_hit_deepest() {
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    let panel = pilot.gui_mut().add_panel(root, AnchorSpec::at(100, 100, Size::new(200, 200)));
    let field = pilot.gui_mut().add_text_field(panel, 10, 10, "");
    assert_eq!(pilot.gui().tree().hit_test(115, 115), field);
    assert_eq!(pilot.gui().tree().hit_test(250, 250), panel);
}

// ---------------------------------------------------------------------------
// Focus routing
// ---------------------------------------------------------------------------

#[test]
fn keyboard_routing_is_exclusive() {
    let (host, log) = host_log();
    let mut pilot = Pilot::new(640, 480);
    pilot.gui_mut().set_host(host);
    let root = pilot.gui().root();
    let field = pilot.gui_mut().add_text_field(root, 0, 0, "");

    pilot.press_key('a');
    pilot.click(5, 5);
    pilot.type_text("bc");
    pilot.press_special(SpecialKey::Left);
    pilot.click(600, 400);
    pilot.press_key('d');
    pilot.press_special(SpecialKey::F(2));

    assert_eq!(pilot.widget::<TextField>(field).map(TextField::text), Some("bc"));
    assert_eq!(
        *log.borrow(),
        vec![
            "key a",
            "mouse Left Down 5,5",
            "mouse Left Up 5,5",
            "mouse Left Down 600,400",
            "mouse Left Up 600,400",
            "key d",
            "special F(2)",
        ]
    );
}

#[test]
fn hover_drag_and_release_never_move_focus() {
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    let field = pilot.gui_mut().add_text_field(root, 0, 0, "");
    pilot.press(5, 5);
    pilot.hover(300, 300);
    pilot.drag(400, 400);
    pilot.release(500, 400);
    assert_eq!(pilot.gui().focus(), FocusState::Focused(field));
}

#[test]
fn focus_moves_between_controls() {
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    let first = pilot.gui_mut().add_text_field(root, 0, 0, "");
    let second = pilot.gui_mut().add_text_field(root, 0, 100, "");
    pilot.click(5, 5);
    pilot.type_text("one");
    pilot.click(5, 105);
    pilot.type_text("two");
    assert_eq!(pilot.widget::<TextField>(first).map(TextField::text), Some("one"));
    assert_eq!(pilot.widget::<TextField>(second).map(TextField::text), Some("two"));
}

#[test]
fn terminal_events_drive_the_gui() {
    let mut pilot = Pilot::new(80, 24);
    let root = pilot.gui().root();
    let field = pilot.gui_mut().add_text_field(root, 0, 0, "");
    let events = [
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(CtButton::Left),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }),
        Event::Key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)),
        Event::Key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE)),
        Event::Key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        Event::Resize(100, 30),
    ];
    for event in events {
        if let Some(input) = from_crossterm(event) {
            pilot.send(input);
        }
    }
    assert_eq!(pilot.widget::<TextField>(field).map(TextField::text), Some("h"));
    assert_eq!(pilot.gui().window_size(), Size::new(100, 30));
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn resize_places_nodes_created_before_and_after() {
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    let sidebar = pilot.gui_mut().add_panel(
        root,
        AnchorSpec::new(Anchor::TOP | Anchor::BOTTOM | Anchor::RIGHT, Spacing::all(8), Size::new(150, 0)),
    );
    pilot.gui_mut().add_button(sidebar, 10, 10, "Apply", || {});
    pilot.gui_mut().add_panel(
        root,
        AnchorSpec::new(Anchor::LEFT | Anchor::RIGHT | Anchor::BOTTOM, Spacing::new(0, 0, 0, 0), Size::new(0, 30)),
    );
    assert_layout_consistent(&pilot);

    pilot.resize(1024, 768);
    assert_layout_consistent(&pilot);
    assert_eq!(pilot.gui().tree().region(sidebar), Some(Region::new(866, 8, 150, 752)));

    let late = pilot.gui_mut().add_slider(sidebar, 10, 50, 0.5);
    assert_eq!(pilot.gui().tree().region(late), Some(Region::new(876, 58, 120, 12)));
    assert_layout_consistent(&pilot);

    pilot.resize(300, 200);
    assert_layout_consistent(&pilot);
}

#[test]
fn shrinking_past_margins_clamps_to_zero() {
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    let panel = pilot.gui_mut().add_panel(root, AnchorSpec::new(Anchor::all(), Spacing::all(50), Size::ZERO));
    pilot.resize(60, 60);
    assert_eq!(pilot.gui().tree().region(panel), Some(Region::new(50, 50, 0, 0)));
}

// ---------------------------------------------------------------------------
// Texture cache
// ---------------------------------------------------------------------------

fn image_pilot() -> Pilot {
    Pilot::with_config(
        GuiConfig::new(),
        MemoryDecoder::new()
            .with_image("ui/logo.png", 64, 32, 4)
            .with_image("ui/font.png", 128, 128, 3),
    )
}

#[test]
fn same_path_loads_once() {
    let mut pilot = image_pilot();
    let first = pilot.gui_mut().load_image("ui/logo.png", false, true);
    let second = pilot.gui_mut().load_image("ui/logo.png", false, true);
    assert!(first.is_valid());
    assert_eq!(first, second);
    assert_eq!((first.width, first.height, first.channels), (64, 32, 4));
    assert_eq!(pilot.gui().decoder().decode_count("ui/logo.png"), 1);
}

#[test]
fn distinct_paths_get_distinct_handles() {
    let mut pilot = image_pilot();
    let logo = pilot.gui_mut().load_image("ui/logo.png", false, false);
    let font = pilot.gui_mut().load_image("ui/font.png", true, false);
    assert_ne!(logo.handle, font.handle);
    assert_eq!(font.channels, 3);
    assert_eq!(pilot.gui().cache().len(), 2);
    assert_eq!(pilot.gui_mut().load_image("ui/font.png", true, false), font);
}

#[test]
fn failed_load_leaves_cache_usable() {
    let mut pilot = image_pilot();
    pilot.gui_mut().load_image("ui/logo.png", false, false);
    let missing = pilot.gui_mut().load_image("ui/nope.png", false, false);
    assert_eq!(missing, TextureInfo::INVALID);
    assert_eq!(pilot.gui().cache().len(), 1);
    let font = pilot.gui_mut().load_image("ui/font.png", false, false);
    assert!(font.is_valid());
    assert_eq!(pilot.gui().cache().len(), 2);
}

#[test]
fn explicit_release_then_reload_decodes_again() {
    let mut pilot = Pilot::with_config(
        GuiConfig::new().with_retention(RetentionPolicy::Explicit),
        MemoryDecoder::new().with_image("ui/logo.png", 8, 8, 4),
    );
    let first = pilot.gui_mut().load_image("ui/logo.png", false, false);
    assert!(pilot.gui_mut().release_image("ui/logo.png"));
    assert!(!pilot.gui_mut().release_image("ui/logo.png"));
    let second = pilot.gui_mut().load_image("ui/logo.png", false, false);
    assert!(second.is_valid());
    assert_ne!(first.handle, second.handle);
    assert_eq!(pilot.gui().decoder().decode_count("ui/logo.png"), 2);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn draw_order_is_preorder_and_skips_hidden() {
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    let panel = pilot
        .gui_mut()
        .add_panel(root, AnchorSpec::new(Anchor::all(), Spacing::all(10), Size::ZERO));
    pilot.gui_mut().add_label(panel, 5, 5, "title");
    pilot.gui_mut().add_button(panel, 5, 30, "OK", || {});
    let hidden = pilot.gui_mut().add_label(root, 0, 0, "hidden");
    pilot.gui_mut().tree_mut().set_visible(hidden, false);
    pilot.gui_mut().add_label(root, 600, 0, "top");

    let trace = pilot.render().iter().map(describe).collect::<Vec<_>>().join("\n");
    insta::assert_snapshot!(trace, @r"
    begin 640x480
    quad 10,10 620x460
    text 15,15 title
    quad 15,40 80x24
    text 47,46 OK
    text 600,0 top
    end
    ");
}

#[test]
fn widgets_respond_through_the_tree() {
    let presses = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&presses);
    let mut pilot = Pilot::new(640, 480);
    let root = pilot.gui().root();
    pilot.gui_mut().add_button(root, 0, 0, "Go", move || *counter.borrow_mut() += 1);
    let spinner = pilot.gui_mut().add_spinner(root, 0, 100, Spinner::int(3, 1));
    let radio = pilot.gui_mut().add_radio_group(root, 0, 200, ["low", "high"]);
    let progress = pilot.gui_mut().add_progress_bar(root, 0, 300);

    pilot.click(10, 10);
    pilot.click(5, 102);
    pilot.press_special(SpecialKey::Up);
    pilot.click(5, 215);
    if let Some(bar) = pilot.gui_mut().widget_mut::<ProgressBar>(progress) {
        bar.set_progress(0.5);
    }
    pilot.tick(0.016);

    assert_eq!(*presses.borrow(), 1);
    assert_eq!(pilot.widget::<Spinner>(spinner).map(Spinner::int_value), Some(5));
    assert_eq!(pilot.widget::<RadioGroup>(radio).and_then(RadioGroup::selected), Some(1));
    assert_eq!(pilot.widget::<ProgressBar>(progress).map(ProgressBar::progress), Some(0.5));
}

#[test]
fn console_and_dropdown_take_input() {
    let (host, log) = host_log();
    let mut pilot = Pilot::new(640, 480);
    pilot.gui_mut().set_host(host);
    let root = pilot.gui().root();
    let console = pilot.gui_mut().add_console(root);
    let dropdown = pilot.gui_mut().add_dropdown(root, 200, 300, ["x", "y", "z"]);

    pilot.click(5, 5);
    pilot.type_text("ping\r");
    assert!(log.borrow().iter().all(|entry| !entry.starts_with("key")));
    let command = pilot
        .gui_mut()
        .widget_mut::<Console>(console)
        .and_then(Console::take_command);
    assert_eq!(command.as_deref(), Some("ping"));

    pilot.click(205, 305);
    assert_eq!(pilot.widget::<DropDown>(dropdown).map(DropDown::is_expanded), Some(true));
    assert_eq!(pilot.render_text(), vec!["> ping", "> ", "x", "x", "y", "z"]);
    pilot.click(205, 365);
    assert_eq!(pilot.widget::<DropDown>(dropdown).and_then(DropDown::selected_option), Some("z"));
    assert_eq!(pilot.focused(), None);
}
