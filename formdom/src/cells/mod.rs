//! Presentation cells and the capability traits the host container queries.
//!
//! Cells are produced by the compiler, one per non-structural item, already
//! wired to their item. The host container talks to them through [`Cell`]:
//! `as_any` for concrete downcasting, and one `as_*` query per capability.
//! A query returning `None` means the cell does not participate in that
//! behavior and the container should fall back to its default.

mod button;
mod date_picker;
mod option_picker;
mod option_row;
mod push_screen;
mod slider;
mod static_text;
mod stepper;
mod switch;
mod text_field;
mod text_view;

pub use button::ButtonCell;
pub use date_picker::DatePickerCell;
pub use option_picker::OptionPickerCell;
pub use option_row::OptionRowCell;
pub use push_screen::PushScreenCell;
pub use slider::SliderCell;
pub use static_text::StaticTextCell;
pub use stepper::StepperCell;
pub use switch::SwitchCell;
pub use text_field::{TextFieldCell, TitleWidthMode};
pub use text_view::TextViewCell;

pub(crate) use option_picker::WeakOptionPickerCell;
pub(crate) use push_screen::WeakPushScreenCell;

use std::any::Any;

/// Position of one row inside compiled sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowPath {
    pub section: usize,
    pub row: usize,
}

impl RowPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Height a cell or section part requests from the host container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowHeight {
    /// Let the container measure the content.
    #[default]
    Automatic,
    /// Exactly this many terminal rows.
    Fixed(u16),
}

/// A compiled presentation endpoint for one form item.
pub trait Cell: Send + Sync {
    /// Downcasting hook for hosts that know the concrete cell type.
    fn as_any(&self) -> &dyn Any;

    /// The cell reacts to its row being selected.
    fn as_selectable(&self) -> Option<&dyn SelectableCell> {
        None
    }

    /// The cell dictates its own row height.
    fn as_height_provider(&self) -> Option<&dyn CellHeightProvider> {
        None
    }

    /// The cell wants a callback just before it becomes visible.
    fn as_will_display(&self) -> Option<&dyn WillDisplayCell> {
        None
    }

    /// The cell reacts to its accessory indicator being activated.
    fn as_accessory(&self) -> Option<&dyn AccessoryTappableCell> {
        None
    }

    /// The cell can hold the container's editing focus.
    fn as_editor(&self) -> Option<&dyn EditorCell> {
        None
    }
}

pub trait SelectableCell {
    fn did_select(&self, path: RowPath);
}

pub trait CellHeightProvider {
    fn cell_height(&self, path: RowPath) -> RowHeight;
}

pub trait WillDisplayCell {
    fn will_display(&self);
}

pub trait AccessoryTappableCell {
    fn accessory_button_tapped(&self, path: RowPath);
}

/// The editing-focus analog: at most one cell holds focus at a time, and the
/// container dismisses it when scrolling starts.
pub trait EditorCell {
    fn begin_editing(&self);
    fn end_editing(&self);
    fn is_editing(&self) -> bool;
}
