//! Typed form items: the declarative, presentation-free description of a form.
//!
//! Each item is a cheap-clone handle over shared interior state. The caller
//! builds items, keeps clones as the form's durable value store, and hands a
//! sequence of [`FormItem`]s to the compiler. Value-carrying items own a sync
//! channel the compiler installs; see the individual item types.

mod button;
mod custom;
mod date_picker;
mod meta;
mod option;
mod screen;
mod section;
mod slider;
mod static_text;
mod stepper;
mod switch;
mod text_field;
mod text_view;

pub use button::ButtonItem;
pub use custom::{CustomCellError, CustomItem};
pub use date_picker::{DatePickerItem, DatePickerMode};
pub use meta::MetaItem;
pub use option::{OptionPickerItem, OptionRowItem, PickerOption};
pub use screen::PushScreenItem;
pub use section::{
    SectionFooterTitleItem, SectionFooterViewItem, SectionHeaderTitleItem, SectionHeaderViewItem,
    SectionItem,
};
pub use slider::SliderItem;
pub use static_text::StaticTextItem;
pub use stepper::StepperItem;
pub use switch::SwitchItem;
pub use text_field::TextFieldItem;
pub use text_view::TextViewItem;

use crate::visitor::ItemVisitor;

/// Identity metadata shared by every item.
///
/// `element_identifier` keys the item in serialized output (e.g.
/// `"firstName"`); the style fields are presentation hints the core treats as
/// opaque strings.
#[derive(Debug, Clone, Default)]
pub struct Identity {
    pub element_identifier: Option<String>,
    pub style_identifier: Option<String>,
    pub style_class: Option<String>,
}

/// One element of a form: either a field the user interacts with or a
/// structural marker (section break, header, footer).
///
/// The variant set is closed. All traversal goes through [`FormItem::accept`];
/// the exhaustive match there is the only place the crate inspects the
/// variant, which keeps every operation an [`ItemVisitor`].
#[derive(Clone)]
pub enum FormItem {
    Meta(MetaItem),
    Custom(CustomItem),
    StaticText(StaticTextItem),
    TextField(TextFieldItem),
    TextView(TextViewItem),
    PushScreen(PushScreenItem),
    OptionPicker(OptionPickerItem),
    OptionRow(OptionRowItem),
    DatePicker(DatePickerItem),
    Button(ButtonItem),
    Switch(SwitchItem),
    Stepper(StepperItem),
    Slider(SliderItem),
    Section(SectionItem),
    SectionHeaderTitle(SectionHeaderTitleItem),
    SectionHeaderView(SectionHeaderViewItem),
    SectionFooterTitle(SectionFooterTitleItem),
    SectionFooterView(SectionFooterViewItem),
}

impl FormItem {
    /// Dispatch to the single visitor method matching this variant.
    pub fn accept(&self, visitor: &mut dyn ItemVisitor) {
        match self {
            FormItem::Meta(item) => visitor.visit_meta(item),
            FormItem::Custom(item) => visitor.visit_custom(item),
            FormItem::StaticText(item) => visitor.visit_static_text(item),
            FormItem::TextField(item) => visitor.visit_text_field(item),
            FormItem::TextView(item) => visitor.visit_text_view(item),
            FormItem::PushScreen(item) => visitor.visit_push_screen(item),
            FormItem::OptionPicker(item) => visitor.visit_option_picker(item),
            FormItem::OptionRow(item) => visitor.visit_option_row(item),
            FormItem::DatePicker(item) => visitor.visit_date_picker(item),
            FormItem::Button(item) => visitor.visit_button(item),
            FormItem::Switch(item) => visitor.visit_switch(item),
            FormItem::Stepper(item) => visitor.visit_stepper(item),
            FormItem::Slider(item) => visitor.visit_slider(item),
            FormItem::Section(item) => visitor.visit_section(item),
            FormItem::SectionHeaderTitle(item) => visitor.visit_section_header_title(item),
            FormItem::SectionHeaderView(item) => visitor.visit_section_header_view(item),
            FormItem::SectionFooterTitle(item) => visitor.visit_section_footer_title(item),
            FormItem::SectionFooterView(item) => visitor.visit_section_footer_view(item),
        }
    }
}

macro_rules! identity_accessors {
    ($handle:ty) => {
        impl $handle {
            /// Set the identifier used to key this item in serialized output, eg. "firstName".
            pub fn with_element_identifier(self, identifier: impl Into<String>) -> Self {
                if let Ok(mut guard) = self.inner.write() {
                    guard.identity.element_identifier = Some(identifier.into());
                }
                self
            }

            /// Set the style identifier, eg. "bottomRowInFirstSection".
            pub fn with_style_identifier(self, identifier: impl Into<String>) -> Self {
                if let Ok(mut guard) = self.inner.write() {
                    guard.identity.style_identifier = Some(identifier.into());
                }
                self
            }

            /// Set the style class, eg. "leftAlignedGroup0".
            pub fn with_style_class(self, class: impl Into<String>) -> Self {
                if let Ok(mut guard) = self.inner.write() {
                    guard.identity.style_class = Some(class.into());
                }
                self
            }

            /// Snapshot of the identity metadata.
            pub fn identity(&self) -> $crate::items::Identity {
                self.inner
                    .read()
                    .map(|guard| guard.identity.clone())
                    .unwrap_or_default()
            }
        }
    };
}

pub(crate) use identity_accessors;

macro_rules! impl_from_item {
    ($($variant:ident($item:ty)),+ $(,)?) => {
        $(
            impl From<$item> for FormItem {
                fn from(item: $item) -> Self {
                    FormItem::$variant(item)
                }
            }
        )+
    };
}

impl_from_item!(
    Meta(MetaItem),
    Custom(CustomItem),
    StaticText(StaticTextItem),
    TextField(TextFieldItem),
    TextView(TextViewItem),
    PushScreen(PushScreenItem),
    OptionPicker(OptionPickerItem),
    OptionRow(OptionRowItem),
    DatePicker(DatePickerItem),
    Button(ButtonItem),
    Switch(SwitchItem),
    Stepper(StepperItem),
    Slider(SliderItem),
    Section(SectionItem),
    SectionHeaderTitle(SectionHeaderTitleItem),
    SectionHeaderView(SectionHeaderViewItem),
    SectionFooterTitle(SectionFooterTitleItem),
    SectionFooterView(SectionFooterViewItem),
);
