//! Validation passes over form items.

use crate::items::{
    ButtonItem, CustomItem, DatePickerItem, FormItem, MetaItem, OptionPickerItem, OptionRowItem,
    PushScreenItem, SectionFooterTitleItem, SectionFooterViewItem, SectionHeaderTitleItem,
    SectionHeaderViewItem, SectionItem, SliderItem, StaticTextItem, StepperItem, SwitchItem,
    TextFieldItem, TextViewItem,
};
use crate::visitor::ItemVisitor;

/// Outcome of validating one form item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidateResult {
    /// The value passes every rule.
    #[default]
    Valid,
    /// The value fails a rule worth warning about, without blocking submission.
    SoftInvalid(String),
    /// The value fails a rule that blocks submission.
    HardInvalid(String),
}

impl ValidateResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidateResult::Valid)
    }
}

/// Validate one item as if the form were being submitted.
pub fn validate(item: &FormItem) -> ValidateResult {
    let mut visitor = ValidateVisitor::new();
    item.accept(&mut visitor);
    visitor.into_result()
}

/// Extracts the submit-time validation outcome of a single item.
///
/// Only text fields carry rules; every other variant leaves the result
/// untouched, so an untouched visitor reports [`ValidateResult::Valid`].
pub struct ValidateVisitor {
    result: ValidateResult,
}

impl ValidateVisitor {
    pub fn new() -> Self {
        Self {
            result: ValidateResult::Valid,
        }
    }

    pub fn result(&self) -> &ValidateResult {
        &self.result
    }

    pub fn into_result(self) -> ValidateResult {
        self.result
    }
}

impl Default for ValidateVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemVisitor for ValidateVisitor {
    fn visit_meta(&mut self, _item: &MetaItem) {}
    fn visit_custom(&mut self, _item: &CustomItem) {}
    fn visit_static_text(&mut self, _item: &StaticTextItem) {}

    fn visit_text_field(&mut self, item: &TextFieldItem) {
        self.result = item.submit_validate();
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

/// Recomputes validation for every text field and refreshes the persisted
/// validation display of the bound cells.
///
/// Items without a bound cell are left alone, so this is safe to run before
/// compilation and after the compiled sections are gone.
pub struct ReloadPersistentValidationStateVisitor;

impl ReloadPersistentValidationStateVisitor {
    /// Walk the items and refresh every bound text field cell.
    pub fn validate_and_update_ui(items: &[FormItem]) {
        let mut visitor = ReloadPersistentValidationStateVisitor;
        for item in items {
            item.accept(&mut visitor);
        }
    }
}

impl ItemVisitor for ReloadPersistentValidationStateVisitor {
    fn visit_meta(&mut self, _item: &MetaItem) {}
    fn visit_custom(&mut self, _item: &CustomItem) {}
    fn visit_static_text(&mut self, _item: &StaticTextItem) {}

    fn visit_text_field(&mut self, item: &TextFieldItem) {
        item.reload_persistent_validation();
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
