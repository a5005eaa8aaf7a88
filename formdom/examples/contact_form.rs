//! Contact Form Example
//!
//! Builds a small contact form, simulates a user filling it in through the
//! compiled cells, validates it and dumps it as JSON:
//! - Text fields with required markers and rules
//! - Section headers and footers
//! - Title width harmonization
//! - Submit-time validation

use std::fs::File;

use formdom::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn cell_as<'a, T: 'static>(list: &'a ListSectionArray, path: RowPath) -> Option<&'a T> {
    list.cell_at(path)?.as_any().downcast_ref::<T>()
}

fn main() {
    if let Ok(log_file) = File::create("contact_form.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let name = TextFieldItem::new()
        .with_title("Name")
        .with_element_identifier("name")
        .with_placeholder("Ada Lovelace")
        .with_required("Name is required");
    let email = TextFieldItem::new()
        .with_title("Email Address")
        .with_element_identifier("email")
        .with_placeholder("you@example.com")
        .with_required("Email is required")
        .with_hard_rule(TextRule::email("That does not look like an email address"))
        .with_on_change(|value| println!("email changed: {value}"));
    let notes = TextViewItem::new()
        .with_title("Notes")
        .with_element_identifier("notes")
        .with_placeholder("Anything else?");
    let newsletter = SwitchItem::new()
        .with_title("Newsletter")
        .with_element_identifier("newsletter");

    let items: Vec<FormItem> = vec![
        SectionHeaderTitleItem::new().with_title("Contact").into(),
        name.clone().into(),
        email.clone().into(),
        notes.into(),
        SectionFooterTitleItem::new()
            .with_title("We reply within two days")
            .into(),
        SectionHeaderTitleItem::new().with_title("Preferences").into(),
        newsletter.clone().into(),
        SectionItem::new().into(),
    ];

    let list = ListSectionArray::new(compile(&items, CompileConfig::default()));
    harmonize_title_widths(&items);
    println!("compiled {} sections", list.number_of_sections());
    if let Some(cell) = cell_as::<TextFieldCell>(&list, RowPath::new(0, 0)) {
        println!("title column width: {}", cell.title_width());
    }

    // A host would route key presses here; poke the cells directly instead.
    if let Some(cell) = cell_as::<TextFieldCell>(&list, RowPath::new(0, 0)) {
        cell.edit("Ada Lovelace");
    }
    if let Some(cell) = cell_as::<TextFieldCell>(&list, RowPath::new(0, 1)) {
        cell.edit("ada@invalid");
    }
    if let Some(cell) = cell_as::<SwitchCell>(&list, RowPath::new(1, 0)) {
        cell.toggle();
    }

    println!("first submit:");
    report(&items);

    // The email was mistyped; fix it from the item side and submit again.
    email.set_value("ada@example.com");
    println!("second submit:");
    report(&items);

    ReloadPersistentValidationStateVisitor::validate_and_update_ui(&items);
    println!("{}", dump(&items, true));
}

fn report(items: &[FormItem]) {
    let mut clean = true;
    for item in items {
        match validate(item) {
            ValidateResult::Valid => {}
            ValidateResult::SoftInvalid(message) => println!("  warning: {message}"),
            ValidateResult::HardInvalid(message) => {
                clean = false;
                println!("  error: {message}");
            }
        }
    }
    if clean {
        println!("  accepted");
    } else {
        println!("  blocked");
    }
}
