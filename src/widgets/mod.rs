//! Built-in widgets: Panel, Label, Button, CheckBox, TextField, Slider,
//! ProgressBar, Spinner, RadioGroup, DropDown, Console.

pub mod button;
pub mod checkbox;
pub mod console;
pub mod dropdown;
pub mod label;
pub mod panel;
pub mod progress_bar;
pub mod radio_group;
pub mod slider;
pub mod spinner;
pub mod text_field;

pub use button::Button;
pub use checkbox::CheckBox;
pub use console::Console;
pub use dropdown::DropDown;
pub use label::Label;
pub use panel::Panel;
pub use progress_bar::ProgressBar;
pub use radio_group::RadioGroup;
pub use slider::Slider;
pub use spinner::{Spinner, SpinnerKind};
pub use text_field::TextField;
