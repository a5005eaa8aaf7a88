//! Tests for harmonizing title widths across text fields.

use formdom::cells::{Cell, RowPath, TextFieldCell, TitleWidthMode};
use formdom::items::{FormItem, SectionItem, SwitchItem, TextFieldItem};
use formdom::populate::{CompileConfig, compile};
use formdom::sections::{ListDataSource, ListSection};
use formdom::title_width::{AssignTitleWidth, ObtainTitleWidth, harmonize_title_widths};

fn field_cell(section: &ListSection, row: usize) -> &TextFieldCell {
    section
        .cell_at(RowPath::new(0, row))
        .unwrap()
        .as_any()
        .downcast_ref::<TextFieldCell>()
        .unwrap()
}

#[test]
fn test_titles_measure_in_terminal_columns() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new().with_title("Name").into(),
        SectionItem::new().into(),
    ];
    let sections = compile(&items, CompileConfig::default());
    let cell = field_cell(&sections[0], 0);
    assert_eq!(cell.measured_title_width(), 4);
    assert_eq!(cell.title_width_mode(), TitleWidthMode::Auto);
    assert_eq!(cell.title_width(), 4);
}

#[test]
fn test_wide_characters_measure_double() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new().with_title("名前").into(),
        SectionItem::new().into(),
    ];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(field_cell(&sections[0], 0).measured_title_width(), 4);
}

#[test]
fn test_harmonize_assigns_the_widest_title_to_every_field() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new().with_title("Name").into(),
        TextFieldItem::new().with_title("Email Address").into(),
        SectionItem::new().into(),
    ];
    let sections = compile(&items, CompileConfig::default());

    harmonize_title_widths(&items);

    let narrow = field_cell(&sections[0], 0);
    let wide = field_cell(&sections[0], 1);
    assert_eq!(narrow.title_width_mode(), TitleWidthMode::Assigned(13));
    assert_eq!(wide.title_width_mode(), TitleWidthMode::Assigned(13));
    assert_eq!(narrow.title_width(), 13);
    assert_eq!(wide.title_width(), 13);
    // the measurement itself is untouched
    assert_eq!(narrow.measured_title_width(), 4);
}

#[test]
fn test_harmonize_skips_items_that_are_not_text_fields() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new().with_title("Name").into(),
        SwitchItem::new().with_title("A much longer switch title").into(),
        SectionItem::new().into(),
    ];
    let sections = compile(&items, CompileConfig::default());

    harmonize_title_widths(&items);

    // the switch title never participates in the measurement
    assert_eq!(field_cell(&sections[0], 0).title_width_mode(), TitleWidthMode::Assigned(4));
}

#[test]
fn test_unbound_fields_measure_zero() {
    let field = TextFieldItem::new().with_title("Name");
    let item = FormItem::from(field);

    let mut obtain = ObtainTitleWidth::new();
    item.accept(&mut obtain);
    assert_eq!(obtain.width(), 0);
}

#[test]
fn test_harmonize_before_compiling_is_a_no_op() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new().with_title("Name").into(),
        TextFieldItem::new().with_title("Email Address").into(),
    ];
    harmonize_title_widths(&items);
}

#[test]
fn test_assign_visitor_overrides_the_mode_directly() {
    let field = TextFieldItem::new().with_title("Name");
    let items: Vec<FormItem> = vec![field.clone().into(), SectionItem::new().into()];
    let sections = compile(&items, CompileConfig::default());

    let mut assign = AssignTitleWidth::new(40);
    items[0].accept(&mut assign);

    let cell = field_cell(&sections[0], 0);
    assert_eq!(cell.title_width_mode(), TitleWidthMode::Assigned(40));
    assert_eq!(cell.title_width(), 40);
}

#[test]
fn test_obtain_visitor_reads_the_bound_measurement() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new().with_title("Email Address").into(),
        SectionItem::new().into(),
    ];
    let _sections = compile(&items, CompileConfig::default());

    let mut obtain = ObtainTitleWidth::new();
    items[0].accept(&mut obtain);
    assert_eq!(obtain.width(), 13);
}
