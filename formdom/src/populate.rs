//! The compiler pass: walks a sequence of items and produces sections of
//! cells, each cell wired to its item with weak closures in both directions.
//!
//! Cells accumulate in a buffer; section items close the buffer into a
//! [`ListSection`]. Header items stash a lazy header for the next close,
//! footer items close immediately with a lazy footer. Items after the last
//! closing marker never reach the output; callers terminate a form with an
//! explicit section or footer item.

use std::sync::{Arc, Weak};

use log::{debug, error, trace};

use crate::cells::{
    ButtonCell, Cell, DatePickerCell, OptionPickerCell, OptionRowCell, PushScreenCell, SliderCell,
    StaticTextCell, StepperCell, SwitchCell, TextFieldCell, TextViewCell, TitleWidthMode,
    WeakPushScreenCell,
};
use crate::items::{
    ButtonItem, CustomItem, DatePickerItem, FormItem, MetaItem, OptionPickerItem, OptionRowItem,
    PushScreenItem, SectionFooterTitleItem, SectionFooterViewItem, SectionHeaderTitleItem,
    SectionHeaderViewItem, SectionItem, SliderItem, StaticTextItem, StepperItem, SwitchItem,
    TextFieldItem, TextViewItem,
};
use crate::navigation::{DismissCommand, OptionPickerScreen, PopContext, ScreenNavigator};
use crate::sections::{ListSection, PartSource, SectionPart};
use crate::visitor::ItemVisitor;

/// Which input accessory editor cells ask the host to show while focused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolbarMode {
    /// No accessory toolbar.
    None,
    /// Previous/next/done accessory toolbar.
    #[default]
    Simple,
}

/// Everything [`compile`] needs besides the items.
#[derive(Clone, Default)]
pub struct CompileConfig {
    /// Screen stack for push-screen, option picker and option row cells.
    /// Without one those cells still compile but selecting them does nothing.
    pub navigator: Option<Arc<dyn ScreenNavigator>>,
    pub toolbar_mode: ToolbarMode,
}

/// Compile `items` into sections of cells wired to their items.
///
/// Each produced cell and its item reference each other only through weak
/// closures: dropping the sections frees the cells and turns programmatic
/// item writes into plain state updates, and dropping an item turns the
/// cell's edit notifications into no-ops. The caller keeps the items; the
/// returned sections are handed to the host container.
pub fn compile(items: &[FormItem], config: CompileConfig) -> Vec<ListSection> {
    let mut populate = PopulateListView::new(config);
    for item in items {
        item.accept(&mut populate);
    }
    populate.sections
}

struct PopulateListView {
    navigator: Option<Arc<dyn ScreenNavigator>>,
    toolbar_mode: ToolbarMode,
    cells: Vec<Box<dyn Cell>>,
    sections: Vec<ListSection>,
    /// Stashed by a header item, consumed by the next close
    header_source: Option<PartSource>,
}

impl PopulateListView {
    fn new(config: CompileConfig) -> Self {
        Self {
            navigator: config.navigator,
            toolbar_mode: config.toolbar_mode,
            cells: Vec::new(),
            sections: Vec::new(),
            header_source: None,
        }
    }

    fn close_section(&mut self, footer: PartSource) {
        let header = self
            .header_source
            .take()
            .unwrap_or_else(|| Box::new(|| SectionPart::None));
        let cells = std::mem::take(&mut self.cells);
        self.sections.push(ListSection::new(cells, header, footer));
    }
}

fn prepare_dismiss_command(
    item: &PushScreenItem,
    navigator: Weak<dyn ScreenNavigator>,
    cell: WeakPushScreenCell,
) -> DismissCommand {
    let item = item.clone();
    DismissCommand::new(move |child, returned| {
        debug!("pop");
        let Some(navigator) = navigator.upgrade() else {
            return;
        };
        let context = PopContext {
            navigator: &navigator,
            child: child.as_ref(),
            cell: cell.upgrade(),
            returned,
        };
        item.notify_will_pop(context);
        navigator.pop();
    })
}

impl ItemVisitor for PopulateListView {
    fn visit_meta(&mut self, _item: &MetaItem) {
        // not visual
    }

    fn visit_custom(&mut self, item: &CustomItem) {
        match item.create_cell() {
            Ok(cell) => self.cells.push(cell),
            Err(err) => {
                error!("could not create cell for custom item: {err}");
                self.cells
                    .push(Box::new(StaticTextCell::new("CustomFormItem", "Exception")));
            }
        }
    }

    fn visit_static_text(&mut self, item: &StaticTextItem) {
        let cell = StaticTextCell::new(item.title(), item.value());
        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |value| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_value_without_sync(value);
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_text_field(&mut self, item: &TextFieldItem) {
        let cell = TextFieldCell::new(
            item.title(),
            item.placeholder(),
            item.is_secure(),
            self.toolbar_mode,
        );
        let weak_item = item.downgrade();
        cell.set_value_did_change(Arc::new(move |value| {
            trace!("value {value}");
            if let Some(item) = weak_item.upgrade() {
                item.editor_did_change(value);
            }
        }));
        let weak_item = item.downgrade();
        cell.set_validation_source(Arc::new(move || {
            weak_item
                .upgrade()
                .map(|item| item.submit_validate())
                .unwrap_or_default()
        }));
        cell.set_value_without_sync(&item.value());

        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |value| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_value_without_sync(value);
            }
        }));
        let weak_cell = cell.downgrade();
        item.install_validation_reload(Arc::new(move || {
            if let Some(cell) = weak_cell.upgrade() {
                cell.reload_persistent_validation();
            }
        }));
        let weak_cell = cell.downgrade();
        item.install_title_width_probe(Arc::new(move || {
            weak_cell
                .upgrade()
                .map(|cell| cell.measured_title_width())
                .unwrap_or(0)
        }));
        let weak_cell = cell.downgrade();
        item.install_title_width_assign(Arc::new(move |width| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_title_width_mode(TitleWidthMode::Assigned(width));
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_text_view(&mut self, item: &TextViewItem) {
        let cell = TextViewCell::new(item.title(), item.placeholder(), self.toolbar_mode);
        let weak_item = item.downgrade();
        cell.set_value_did_change(Arc::new(move |value| {
            trace!("value {value}");
            if let Some(item) = weak_item.upgrade() {
                item.editor_did_change(value);
            }
        }));
        cell.set_value_without_sync(&item.value());

        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |value| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_value_without_sync(value);
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_push_screen(&mut self, item: &PushScreenItem) {
        let cell = PushScreenCell::new(item.title(), item.placeholder());
        if let Some(navigator) = &self.navigator {
            let weak_navigator = Arc::downgrade(navigator);
            let weak_cell = cell.downgrade();
            let item = item.clone();
            cell.set_on_select(Arc::new(move || {
                debug!("push");
                let Some(navigator) = weak_navigator.upgrade() else {
                    return;
                };
                let command =
                    prepare_dismiss_command(&item, Weak::clone(&weak_navigator), weak_cell.clone());
                if let Some(screen) = item.create_screen(command) {
                    navigator.push(screen);
                }
            }));
        }
        self.cells.push(Box::new(cell));
    }

    fn visit_option_picker(&mut self, item: &OptionPickerItem) {
        let cell = OptionPickerCell::new(item.title(), item.placeholder(), item.selected());
        let weak_item = item.downgrade();
        cell.set_value_did_change(Arc::new(move |option| {
            trace!(
                "propagate pick from cell to item: {:?}",
                option.map(|option| &option.title)
            );
            if let Some(item) = weak_item.upgrade() {
                item.editor_did_change(option.cloned());
            }
        }));
        if let Some(navigator) = &self.navigator {
            let weak_navigator = Arc::downgrade(navigator);
            let weak_cell = cell.downgrade();
            let item = item.clone();
            cell.set_on_select(Arc::new(move || {
                debug!("push option picker");
                let Some(navigator) = weak_navigator.upgrade() else {
                    return;
                };
                let screen = OptionPickerScreen::new(
                    item.title(),
                    item.options(),
                    item.selected(),
                    weak_cell.clone(),
                    Weak::clone(&weak_navigator),
                );
                navigator.push(Box::new(screen));
            }));
        }
        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |option| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_selected_without_sync(option.cloned());
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_option_row(&mut self, item: &OptionRowItem) {
        let cell = OptionRowCell::new(item.title(), item.is_selected());
        if let Some(navigator) = &self.navigator {
            let weak_navigator = Arc::downgrade(navigator);
            let item = item.clone();
            cell.set_on_select(Arc::new(move || {
                debug!("did select option");
                if let Some(navigator) = weak_navigator.upgrade() {
                    navigator.will_select_option(&item);
                }
            }));
        }
        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |selected| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_selected_without_sync(selected);
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_date_picker(&mut self, item: &DatePickerItem) {
        let cell = DatePickerCell::new(
            item.title(),
            item.mode(),
            item.locale(),
            item.minimum_date(),
            item.maximum_date(),
            self.toolbar_mode,
        );
        let weak_item = item.downgrade();
        cell.set_value_did_change(Arc::new(move |date| {
            trace!("value did change {date}");
            if let Some(item) = weak_item.upgrade() {
                item.editor_did_change(date);
            }
        }));
        cell.set_date_without_sync(item.value());

        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |date| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_date_without_sync(date);
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_button(&mut self, item: &ButtonItem) {
        let cell = ButtonCell::new(item.title(), item.action());
        self.cells.push(Box::new(cell));
    }

    fn visit_switch(&mut self, item: &SwitchItem) {
        let cell = SwitchCell::new(item.title());
        let weak_item = item.downgrade();
        cell.set_value_did_change(Arc::new(move |value| {
            trace!("value did change {value}");
            if let Some(item) = weak_item.upgrade() {
                item.editor_did_change(value);
            }
        }));
        cell.set_value_without_sync(item.value());

        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |value| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_value_without_sync(value);
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_stepper(&mut self, item: &StepperItem) {
        let cell = StepperCell::new(item.title(), item.value());
        let weak_item = item.downgrade();
        cell.set_value_did_change(Arc::new(move |value| {
            trace!("value {value}");
            if let Some(item) = weak_item.upgrade() {
                item.editor_did_change(value);
            }
        }));
        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |value| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_value_without_sync(value);
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_slider(&mut self, item: &SliderItem) {
        let cell = SliderCell::new(item.minimum_value(), item.maximum_value(), item.value());
        let weak_item = item.downgrade();
        cell.set_value_did_change(Arc::new(move |value| {
            trace!("value did change {value}");
            if let Some(item) = weak_item.upgrade() {
                item.editor_did_change(value);
            }
        }));
        let weak_cell = cell.downgrade();
        item.install_sync(Arc::new(move |value| {
            if let Some(cell) = weak_cell.upgrade() {
                cell.set_value_without_sync(value);
            }
        }));
        self.cells.push(Box::new(cell));
    }

    fn visit_section(&mut self, _item: &SectionItem) {
        self.close_section(Box::new(|| SectionPart::None));
    }

    fn visit_section_header_title(&mut self, item: &SectionHeaderTitleItem) {
        if !self.cells.is_empty() || self.header_source.is_some() {
            self.close_section(Box::new(|| SectionPart::None));
        }
        let item = item.clone();
        self.header_source = Some(Box::new(move || match item.title() {
            Some(title) => SectionPart::Title(title),
            None => SectionPart::None,
        }));
    }

    fn visit_section_header_view(&mut self, item: &SectionHeaderViewItem) {
        if !self.cells.is_empty() || self.header_source.is_some() {
            self.close_section(Box::new(|| SectionPart::None));
        }
        let item = item.clone();
        self.header_source = Some(Box::new(move || match item.make_view() {
            Some(view) => SectionPart::View(view),
            None => SectionPart::None,
        }));
    }

    fn visit_section_footer_title(&mut self, item: &SectionFooterTitleItem) {
        let item = item.clone();
        self.close_section(Box::new(move || match item.title() {
            Some(title) => SectionPart::Title(title),
            None => SectionPart::None,
        }));
    }

    fn visit_section_footer_view(&mut self, item: &SectionFooterViewItem) {
        let item = item.clone();
        self.close_section(Box::new(move || match item.make_view() {
            Some(view) => SectionPart::View(view),
            None => SectionPart::None,
        }));
    }
}
