//! Declarative form construction
//!
//! Forms are described as a tree of items, compiled into sections of
//! renderable cells, and kept in sync with user edits through weak
//! two-way bindings.

pub mod cells;
pub mod dump;
pub mod items;
pub mod navigation;
pub mod populate;
pub mod rules;
pub mod sections;
pub mod title_width;
pub mod validate;
pub mod visitor;

pub use items::FormItem;
pub use populate::compile;

pub mod prelude {
    pub use crate::cells::{
        AccessoryTappableCell, Cell, CellHeightProvider, EditorCell, RowHeight, RowPath,
        SelectableCell, TitleWidthMode, WillDisplayCell,
    };
    pub use crate::cells::{
        ButtonCell, DatePickerCell, OptionPickerCell, OptionRowCell, PushScreenCell, SliderCell,
        StaticTextCell, StepperCell, SwitchCell, TextFieldCell, TextViewCell,
    };
    pub use crate::dump::{DumpRecord, dump, dump_records};
    pub use crate::items::{
        ButtonItem, CustomCellError, CustomItem, DatePickerItem, DatePickerMode, FormItem,
        Identity, MetaItem, OptionPickerItem, OptionRowItem, PickerOption, PushScreenItem,
    };
    pub use crate::items::{
        SectionFooterTitleItem, SectionFooterViewItem, SectionHeaderTitleItem,
        SectionHeaderViewItem, SectionItem,
    };
    pub use crate::items::{
        SliderItem, StaticTextItem, StepperItem, SwitchItem, TextFieldItem, TextViewItem,
    };
    pub use crate::navigation::{
        DismissCommand, FormScreen, OptionPickerScreen, PopContext, ScreenNavigator,
    };
    pub use crate::populate::{CompileConfig, ToolbarMode, compile};
    pub use crate::rules::TextRule;
    pub use crate::sections::{ListDataSource, ListSection, ListSectionArray, PartView, SectionPart};
    pub use crate::title_width::{AssignTitleWidth, ObtainTitleWidth, harmonize_title_widths};
    pub use crate::validate::{
        ReloadPersistentValidationStateVisitor, ValidateResult, ValidateVisitor, validate,
    };
    pub use crate::visitor::ItemVisitor;
}
