//! Double-dispatch contract over the closed set of form item variants.

use crate::items::{
    ButtonItem, CustomItem, DatePickerItem, MetaItem, OptionPickerItem, OptionRowItem,
    PushScreenItem, SectionFooterTitleItem, SectionFooterViewItem, SectionHeaderTitleItem,
    SectionHeaderViewItem, SectionItem, SliderItem, StaticTextItem, StepperItem, SwitchItem,
    TextFieldItem, TextViewItem,
};

/// An operation over form items, implemented once per variant.
///
/// Every method is required. Adding a variant to [`FormItem`] extends this
/// trait, so every visitor in the crate (and downstream) is forced to handle
/// or explicitly no-op the new variant before it compiles again. Visitors
/// dispatch through [`FormItem::accept`], never by inspecting the enum
/// themselves.
///
/// [`FormItem`]: crate::items::FormItem
/// [`FormItem::accept`]: crate::items::FormItem::accept
pub trait ItemVisitor {
    fn visit_meta(&mut self, item: &MetaItem);
    fn visit_custom(&mut self, item: &CustomItem);
    fn visit_static_text(&mut self, item: &StaticTextItem);
    fn visit_text_field(&mut self, item: &TextFieldItem);
    fn visit_text_view(&mut self, item: &TextViewItem);
    fn visit_push_screen(&mut self, item: &PushScreenItem);
    fn visit_option_picker(&mut self, item: &OptionPickerItem);
    fn visit_option_row(&mut self, item: &OptionRowItem);
    fn visit_date_picker(&mut self, item: &DatePickerItem);
    fn visit_button(&mut self, item: &ButtonItem);
    fn visit_switch(&mut self, item: &SwitchItem);
    fn visit_stepper(&mut self, item: &StepperItem);
    fn visit_slider(&mut self, item: &SliderItem);
    fn visit_section(&mut self, item: &SectionItem);
    fn visit_section_header_title(&mut self, item: &SectionHeaderTitleItem);
    fn visit_section_header_view(&mut self, item: &SectionHeaderViewItem);
    fn visit_section_footer_title(&mut self, item: &SectionFooterTitleItem);
    fn visit_section_footer_view(&mut self, item: &SectionFooterViewItem);
}
