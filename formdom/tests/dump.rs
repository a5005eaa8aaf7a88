//! Tests for the JSON dump of a form.

use chrono::NaiveDate;
use formdom::dump::{dump, dump_records};
use formdom::items::{
    DatePickerItem, DatePickerMode, FormItem, MetaItem, OptionPickerItem, OptionRowItem,
    SectionHeaderTitleItem, SectionItem, SliderItem, StaticTextItem, StepperItem, SwitchItem,
    TextFieldItem,
};
use formdom::rules::TextRule;
use serde_json::{Value, json};

fn parse(items: &[FormItem]) -> Vec<Value> {
    let value: Value = serde_json::from_str(&dump(items, false)).unwrap();
    value.as_array().unwrap().clone()
}

#[test]
fn test_empty_dump_is_an_empty_array() {
    assert_eq!(dump(&[], false), "[]");
}

#[test]
fn test_records_carry_row_and_class() {
    let items: Vec<FormItem> = vec![
        StaticTextItem::new().with_title("About").into(),
        SectionItem::new().into(),
    ];
    let records = parse(&items);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["row"], json!(0));
    assert_eq!(records[0]["class"], json!("StaticTextItem"));
    assert_eq!(records[1]["row"], json!(1));
    assert_eq!(records[1]["class"], json!("SectionItem"));
}

#[test]
fn test_validate_status_ok_omits_the_message() {
    let items: Vec<FormItem> = vec![TextFieldItem::new().with_value("fine").into()];
    let records = parse(&items);
    assert_eq!(records[0]["validate-status"], json!("ok"));
    assert!(records[0].get("validate-message").is_none());
}

#[test]
fn test_validate_status_hard_invalid() {
    let items: Vec<FormItem> = vec![TextFieldItem::new().with_required("Name is required").into()];
    let records = parse(&items);
    assert_eq!(records[0]["validate-status"], json!("hard-invalid"));
    assert_eq!(records[0]["validate-message"], json!("Name is required"));
}

#[test]
fn test_validate_status_soft_invalid() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new()
            .with_value("abc")
            .with_soft_rule(TextRule::min_length(8, "a bit short"))
            .into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["validate-status"], json!("soft-invalid"));
    assert_eq!(records[0]["validate-message"], json!("a bit short"));
}

#[test]
fn test_text_field_fields() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new()
            .with_title("Email")
            .with_placeholder("you@example.com")
            .with_value("ada@example.com")
            .into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["title"], json!("Email"));
    assert_eq!(records[0]["value"], json!("ada@example.com"));
    assert_eq!(records[0]["placeholder"], json!("you@example.com"));
}

#[test]
fn test_identity_fields_appear_only_when_set() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new()
            .with_title("First name")
            .with_element_identifier("firstName")
            .with_style_class("leftAlignedGroup0")
            .into(),
        TextFieldItem::new().with_title("Last name").into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["elementIdentifier"], json!("firstName"));
    assert_eq!(records[0]["styleClass"], json!("leftAlignedGroup0"));
    assert!(records[0].get("styleIdentifier").is_none());
    assert!(records[1].get("elementIdentifier").is_none());
}

#[test]
fn test_meta_value_appears_only_when_set() {
    let items: Vec<FormItem> = vec![
        MetaItem::new().with_value(json!({"build": 7})).into(),
        MetaItem::new().into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["class"], json!("MetaItem"));
    assert_eq!(records[0]["value"]["build"], json!(7));
    assert!(records[1].get("value").is_none());
}

#[test]
fn test_option_picker_value_tracks_the_selection() {
    let item = OptionPickerItem::new()
        .with_title("Size")
        .with_option("Small")
        .with_option("Medium");
    let items: Vec<FormItem> = vec![item.clone().into()];

    let records = parse(&items);
    assert!(records[0].get("value").is_none());

    item.select_identifier("Medium");
    let records = parse(&items);
    assert_eq!(records[0]["value"], json!("Medium"));
}

#[test]
fn test_option_row_state() {
    let items: Vec<FormItem> = vec![
        OptionRowItem::new().with_title("Large").with_selected(true).into(),
        OptionRowItem::new().with_title("Small").into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["state"], json!(true));
    assert_eq!(records[1]["state"], json!(false));
}

#[test]
fn test_date_picker_schema() {
    let min = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let max = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(23, 59, 0).unwrap();
    let items: Vec<FormItem> = vec![
        DatePickerItem::new()
            .with_title("Born")
            .with_mode(DatePickerMode::Date)
            .with_minimum_date(min)
            .with_maximum_date(max)
            .into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["title"], json!("Born"));
    assert_eq!(records[0]["date"], Value::Null);
    assert_eq!(records[0]["datePickerMode"], json!("Date"));
    assert_eq!(records[0]["locale"], Value::Null);
    assert_eq!(records[0]["minimumDate"], json!("2024-01-01 00:00:00"));
    assert_eq!(records[0]["maximumDate"], json!("2024-12-31 23:59:00"));
}

#[test]
fn test_date_picker_value_and_locale_when_set() {
    let born = NaiveDate::from_ymd_opt(1990, 6, 1).unwrap().and_hms_opt(12, 30, 0).unwrap();
    let items: Vec<FormItem> = vec![
        DatePickerItem::new()
            .with_locale("en_GB")
            .with_value(born)
            .into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["date"], json!("1990-06-01 12:30:00"));
    assert_eq!(records[0]["locale"], json!("en_GB"));
    assert_eq!(records[0]["datePickerMode"], json!("DateAndTime"));
}

#[test]
fn test_slider_has_a_range_but_no_title() {
    let items: Vec<FormItem> = vec![
        SliderItem::new()
            .with_minimum_value(0.0)
            .with_maximum_value(10.0)
            .with_value(2.5)
            .into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["value"], json!(2.5));
    assert_eq!(records[0]["minimumValue"], json!(0.0));
    assert_eq!(records[0]["maximumValue"], json!(10.0));
    assert!(records[0].get("title").is_none());
}

#[test]
fn test_switch_and_stepper_fields() {
    let items: Vec<FormItem> = vec![
        SwitchItem::new().with_title("Enabled").with_value(true).into(),
        StepperItem::new().with_title("Guests").with_value(3).into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["title"], json!("Enabled"));
    assert_eq!(records[0]["value"], json!(true));
    assert_eq!(records[1]["title"], json!("Guests"));
    assert_eq!(records[1]["value"], json!(3));
}

#[test]
fn test_section_markers_carry_no_payload() {
    let items: Vec<FormItem> = vec![SectionItem::new().into()];
    let records = parse(&items);
    let keys = records[0].as_object().unwrap();
    assert_eq!(keys.len(), 3);
    assert!(keys.contains_key("row"));
    assert!(keys.contains_key("validate-status"));
    assert!(keys.contains_key("class"));
}

#[test]
fn test_header_title_appears_only_when_set() {
    let items: Vec<FormItem> = vec![
        SectionHeaderTitleItem::new().with_title("Profile").into(),
        SectionHeaderTitleItem::new().into(),
    ];
    let records = parse(&items);
    assert_eq!(records[0]["title"], json!("Profile"));
    assert!(records[1].get("title").is_none());
}

#[test]
fn test_pretty_output_parses_to_the_same_value() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new().with_title("Name").with_value("Ada").into(),
        SectionItem::new().into(),
    ];
    let compact: Value = serde_json::from_str(&dump(&items, false)).unwrap();
    let pretty: Value = serde_json::from_str(&dump(&items, true)).unwrap();
    assert_eq!(compact, pretty);
}

#[test]
fn test_dump_records_expose_typed_rows() {
    let items: Vec<FormItem> = vec![TextFieldItem::new().with_title("Name").into()];
    let records = dump_records(&items);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].row, 0);
    assert_eq!(records[0].class, "TextFieldItem");
    assert_eq!(records[0].validate_status, "ok");
    assert!(records[0].validate_message.is_none());
}
