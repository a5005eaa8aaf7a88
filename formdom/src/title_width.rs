//! Align the title columns of text fields across a form.
//!
//! Text fields in the same form look ragged when each sizes its title column
//! to its own label. [`harmonize_title_widths`] measures every bound text
//! field cell and assigns the widest measurement back to all of them.

use crate::items::{
    ButtonItem, CustomItem, DatePickerItem, FormItem, MetaItem, OptionPickerItem, OptionRowItem,
    PushScreenItem, SectionFooterTitleItem, SectionFooterViewItem, SectionHeaderTitleItem,
    SectionHeaderViewItem, SectionItem, SliderItem, StaticTextItem, StepperItem, SwitchItem,
    TextFieldItem, TextViewItem,
};
use crate::visitor::ItemVisitor;

/// Give every text field in `items` the same title column width: the widest
/// measured title among them.
///
/// Items without a bound cell measure 0 and ignore the assignment, so this
/// only has an effect after compilation.
pub fn harmonize_title_widths(items: &[FormItem]) {
    let mut widest: u16 = 0;
    for item in items {
        let mut obtain = ObtainTitleWidth::new();
        item.accept(&mut obtain);
        widest = widest.max(obtain.width());
    }
    let mut assign = AssignTitleWidth::new(widest);
    for item in items {
        item.accept(&mut assign);
    }
}

/// Reads the measured title width of a text field's bound cell.
pub struct ObtainTitleWidth {
    width: u16,
}

impl ObtainTitleWidth {
    pub fn new() -> Self {
        Self { width: 0 }
    }

    /// The width measured by the last visited text field, 0 otherwise.
    pub fn width(&self) -> u16 {
        self.width
    }
}

impl Default for ObtainTitleWidth {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemVisitor for ObtainTitleWidth {
    fn visit_meta(&mut self, _item: &MetaItem) {}
    fn visit_custom(&mut self, _item: &CustomItem) {}
    fn visit_static_text(&mut self, _item: &StaticTextItem) {}

    fn visit_text_field(&mut self, item: &TextFieldItem) {
        self.width = item.obtain_title_width();
    }

    fn visit_text_view(&mut self, _item: &TextViewItem) {}
    fn visit_push_screen(&mut self, _item: &PushScreenItem) {}
    fn visit_option_picker(&mut self, _item: &OptionPickerItem) {}
    fn visit_option_row(&mut self, _item: &OptionRowItem) {}
    fn visit_date_picker(&mut self, _item: &DatePickerItem) {}
    fn visit_button(&mut self, _item: &ButtonItem) {}
    fn visit_switch(&mut self, _item: &SwitchItem) {}
    fn visit_stepper(&mut self, _item: &StepperItem) {}
    fn visit_slider(&mut self, _item: &SliderItem) {}
    fn visit_section(&mut self, _item: &SectionItem) {}
    fn visit_section_header_title(&mut self, _item: &SectionHeaderTitleItem) {}
    fn visit_section_header_view(&mut self, _item: &SectionHeaderViewItem) {}
    fn visit_section_footer_title(&mut self, _item: &SectionFooterTitleItem) {}
    fn visit_section_footer_view(&mut self, _item: &SectionFooterViewItem) {}
}

/// Pushes a fixed title width into every text field's bound cell.
pub struct AssignTitleWidth {
    width: u16,
}

impl AssignTitleWidth {
    pub fn new(width: u16) -> Self {
        Self { width }
    }
}

impl ItemVisitor for AssignTitleWidth {
    fn visit_meta(&mut self, _item: &MetaItem) {}
    fn visit_custom(&mut self, _item: &CustomItem) {}
    fn visit_static_text(&mut self, _item: &StaticTextItem) {}

    fn visit_text_field(&mut self, item: &TextFieldItem) {
        item.assign_title_width(self.width);
    }

    fn visit_text_view(&mut self, _item: &TextViewItem) {}
    fn visit_push_screen(&mut self, _item: &PushScreenItem) {}
    fn visit_option_picker(&mut self, _item: &OptionPickerItem) {}
    fn visit_option_row(&mut self, _item: &OptionRowItem) {}
    fn visit_date_picker(&mut self, _item: &DatePickerItem) {}
    fn visit_button(&mut self, _item: &ButtonItem) {}
    fn visit_switch(&mut self, _item: &SwitchItem) {}
    fn visit_stepper(&mut self, _item: &StepperItem) {}
    fn visit_slider(&mut self, _item: &SliderItem) {}
    fn visit_section(&mut self, _item: &SectionItem) {}
    fn visit_section_header_title(&mut self, _item: &SectionHeaderTitleItem) {}
    fn visit_section_header_view(&mut self, _item: &SectionHeaderViewItem) {}
    fn visit_section_footer_title(&mut self, _item: &SectionFooterTitleItem) {}
    fn visit_section_footer_view(&mut self, _item: &SectionFooterViewItem) {}
}
