//! Serialize a form to JSON for logging and debugging.
//!
//! One record per item, in item order. Each record carries the row number,
//! the item's validation outcome at dump time, its type tag and identity
//! metadata, and the fields of the concrete variant. Absent identity fields
//! are omitted; absent dates and locales serialize as JSON null.

use chrono::NaiveDateTime;
use log::error;
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::items::{
    ButtonItem, CustomItem, DatePickerItem, FormItem, Identity, MetaItem, OptionPickerItem,
    OptionRowItem, PushScreenItem, SectionFooterTitleItem, SectionFooterViewItem,
    SectionHeaderTitleItem, SectionHeaderViewItem, SectionItem, SliderItem, StaticTextItem,
    StepperItem, SwitchItem, TextFieldItem, TextViewItem,
};
use crate::validate::{ValidateResult, ValidateVisitor};
use crate::visitor::ItemVisitor;

/// One serialized row of [`dump`] output.
#[derive(Debug, Clone, Serialize)]
pub struct DumpRecord {
    pub row: usize,
    #[serde(rename = "validate-status")]
    pub validate_status: String,
    #[serde(rename = "validate-message", skip_serializing_if = "Option::is_none")]
    pub validate_message: Option<String>,
    pub class: String,
    #[serde(rename = "elementIdentifier", skip_serializing_if = "Option::is_none")]
    pub element_identifier: Option<String>,
    #[serde(rename = "styleIdentifier", skip_serializing_if = "Option::is_none")]
    pub style_identifier: Option<String>,
    #[serde(rename = "styleClass", skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
    /// Fields of the concrete item variant.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Serialize `items` to a JSON array, one record per item.
///
/// Never fails: a serialization error logs and yields an empty array.
pub fn dump(items: &[FormItem], pretty: bool) -> String {
    let records = dump_records(items);
    let result = if pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    };
    match result {
        Ok(json) => json,
        Err(err) => {
            error!("could not serialize dump: {err}");
            "[]".to_string()
        }
    }
}

/// The structured form of [`dump`], before JSON encoding.
pub fn dump_records(items: &[FormItem]) -> Vec<DumpRecord> {
    items
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let mut dump = DumpVisitor::new();
            item.accept(&mut dump);

            let mut validate = ValidateVisitor::new();
            item.accept(&mut validate);
            let (validate_status, validate_message) = match validate.into_result() {
                ValidateResult::Valid => ("ok", None),
                ValidateResult::SoftInvalid(message) => ("soft-invalid", Some(message)),
                ValidateResult::HardInvalid(message) => ("hard-invalid", Some(message)),
            };

            DumpRecord {
                row,
                validate_status: validate_status.to_string(),
                validate_message,
                class: dump.class.to_string(),
                element_identifier: dump.identity.element_identifier,
                style_identifier: dump.identity.style_identifier,
                style_class: dump.identity.style_class,
                fields: dump.fields,
            }
        })
        .collect()
}

fn date_to_json(date: Option<NaiveDateTime>) -> Value {
    match date {
        Some(date) => json!(date.format("%Y-%m-%d %H:%M:%S").to_string()),
        None => Value::Null,
    }
}

/// Collects the type tag, identity and variant fields of a single item.
struct DumpVisitor {
    class: &'static str,
    identity: Identity,
    fields: Map<String, Value>,
}

impl DumpVisitor {
    fn new() -> Self {
        Self {
            class: "",
            identity: Identity::default(),
            fields: Map::new(),
        }
    }
}

impl ItemVisitor for DumpVisitor {
    fn visit_meta(&mut self, item: &MetaItem) {
        self.class = "MetaItem";
        self.identity = item.identity();
        if let Some(value) = item.value() {
            self.fields.insert("value".to_string(), value);
        }
    }

    fn visit_custom(&mut self, item: &CustomItem) {
        self.class = "CustomItem";
        self.identity = item.identity();
    }

    fn visit_static_text(&mut self, item: &StaticTextItem) {
        self.class = "StaticTextItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
        self.fields.insert("value".to_string(), json!(item.value()));
    }

    fn visit_text_field(&mut self, item: &TextFieldItem) {
        self.class = "TextFieldItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
        self.fields.insert("value".to_string(), json!(item.value()));
        self.fields
            .insert("placeholder".to_string(), json!(item.placeholder()));
    }

    fn visit_text_view(&mut self, item: &TextViewItem) {
        self.class = "TextViewItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
        self.fields.insert("value".to_string(), json!(item.value()));
    }

    fn visit_push_screen(&mut self, item: &PushScreenItem) {
        self.class = "PushScreenItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
    }

    fn visit_option_picker(&mut self, item: &OptionPickerItem) {
        self.class = "OptionPickerItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
        self.fields
            .insert("placeholder".to_string(), json!(item.placeholder()));
        if let Some(selected) = item.selected() {
            self.fields
                .insert("value".to_string(), json!(selected.title));
        }
    }

    fn visit_option_row(&mut self, item: &OptionRowItem) {
        self.class = "OptionRowItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
        self.fields
            .insert("state".to_string(), json!(item.is_selected()));
    }

    fn visit_date_picker(&mut self, item: &DatePickerItem) {
        self.class = "DatePickerItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
        self.fields
            .insert("date".to_string(), date_to_json(item.value()));
        self.fields
            .insert("datePickerMode".to_string(), json!(item.mode().to_string()));
        self.fields.insert("locale".to_string(), json!(item.locale()));
        self.fields
            .insert("minimumDate".to_string(), date_to_json(item.minimum_date()));
        self.fields
            .insert("maximumDate".to_string(), date_to_json(item.maximum_date()));
    }

    fn visit_button(&mut self, item: &ButtonItem) {
        self.class = "ButtonItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
    }

    fn visit_switch(&mut self, item: &SwitchItem) {
        self.class = "SwitchItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
        self.fields.insert("value".to_string(), json!(item.value()));
    }

    fn visit_stepper(&mut self, item: &StepperItem) {
        self.class = "StepperItem";
        self.identity = item.identity();
        self.fields.insert("title".to_string(), json!(item.title()));
        self.fields.insert("value".to_string(), json!(item.value()));
    }

    fn visit_slider(&mut self, item: &SliderItem) {
        self.class = "SliderItem";
        self.identity = item.identity();
        self.fields.insert("value".to_string(), json!(item.value()));
        self.fields
            .insert("minimumValue".to_string(), json!(item.minimum_value()));
        self.fields
            .insert("maximumValue".to_string(), json!(item.maximum_value()));
    }

    fn visit_section(&mut self, item: &SectionItem) {
        self.class = "SectionItem";
        self.identity = item.identity();
    }

    fn visit_section_header_title(&mut self, item: &SectionHeaderTitleItem) {
        self.class = "SectionHeaderTitleItem";
        self.identity = item.identity();
        if let Some(title) = item.title() {
            self.fields.insert("title".to_string(), json!(title));
        }
    }

    fn visit_section_header_view(&mut self, item: &SectionHeaderViewItem) {
        self.class = "SectionHeaderViewItem";
        self.identity = item.identity();
    }

    fn visit_section_footer_title(&mut self, item: &SectionFooterTitleItem) {
        self.class = "SectionFooterTitleItem";
        self.identity = item.identity();
        if let Some(title) = item.title() {
            self.fields.insert("title".to_string(), json!(title));
        }
    }

    fn visit_section_footer_view(&mut self, item: &SectionFooterViewItem) {
        self.class = "SectionFooterViewItem";
        self.identity = item.identity();
    }
}
