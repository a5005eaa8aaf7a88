//! Tests for compiling items into sections.

use std::any::Any;
use std::sync::Arc;

use formdom::cells::{
    ButtonCell, Cell, DatePickerCell, OptionPickerCell, OptionRowCell, PushScreenCell, RowHeight,
    RowPath, SliderCell, StaticTextCell, StepperCell, SwitchCell, TextFieldCell, TextViewCell,
};
use formdom::items::{
    ButtonItem, CustomCellError, CustomItem, DatePickerItem, FormItem, MetaItem, OptionPickerItem,
    OptionRowItem, PushScreenItem, SectionFooterTitleItem, SectionFooterViewItem,
    SectionHeaderTitleItem, SectionHeaderViewItem, SectionItem, SliderItem, StaticTextItem,
    StepperItem, SwitchItem, TextFieldItem, TextViewItem,
};
use formdom::populate::{CompileConfig, compile};
use formdom::sections::{ListDataSource, PartView};
use serde_json::json;

fn field(title: &str) -> FormItem {
    TextFieldItem::new().with_title(title).into()
}

fn section_break() -> FormItem {
    SectionItem::new().into()
}

fn header(title: &str) -> FormItem {
    SectionHeaderTitleItem::new().with_title(title).into()
}

fn footer(title: &str) -> FormItem {
    SectionFooterTitleItem::new().with_title(title).into()
}

#[derive(Debug)]
struct Banner {
    height: u16,
}

impl PartView for Banner {
    fn height(&self) -> u16 {
        self.height
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Section accumulation
// =============================================================================

#[test]
fn test_no_items_no_sections() {
    let sections = compile(&[], CompileConfig::default());
    assert!(sections.is_empty());
}

#[test]
fn test_rows_without_a_closing_item_are_dropped() {
    let items = vec![field("a"), field("b")];
    let sections = compile(&items, CompileConfig::default());
    assert!(sections.is_empty());
}

#[test]
fn test_section_item_closes_buffered_rows() {
    let items = vec![field("a"), field("b"), section_break()];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].number_of_rows(0), 2);
    assert_eq!(sections[0].header_title(0), None);
    assert_eq!(sections[0].footer_title(0), None);
}

#[test]
fn test_rows_after_the_last_close_are_dropped() {
    let items = vec![field("kept"), section_break(), field("dropped")];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].number_of_rows(0), 1);
}

#[test]
fn test_section_items_allow_empty_sections() {
    let items = vec![section_break(), section_break()];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].number_of_rows(0), 0);
    assert_eq!(sections[1].number_of_rows(0), 0);
}

#[test]
fn test_header_title_opens_a_new_section() {
    let items = vec![header("Profile"), field("Name"), section_break()];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].header_title(0), Some("Profile".to_string()));
    assert_eq!(sections[0].number_of_rows(0), 1);
}

#[test]
fn test_second_header_closes_the_running_section() {
    let items = vec![
        header("First"),
        field("a"),
        header("Second"),
        field("b"),
        section_break(),
    ];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].header_title(0), Some("First".to_string()));
    assert_eq!(sections[0].number_of_rows(0), 1);
    assert_eq!(sections[1].header_title(0), Some("Second".to_string()));
    assert_eq!(sections[1].number_of_rows(0), 1);
}

#[test]
fn test_adjacent_headers_emit_an_empty_section() {
    let items = vec![header("First"), header("Second"), field("a"), section_break()];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].header_title(0), Some("First".to_string()));
    assert_eq!(sections[0].number_of_rows(0), 0);
    assert_eq!(sections[1].header_title(0), Some("Second".to_string()));
    assert_eq!(sections[1].number_of_rows(0), 1);
}

#[test]
fn test_header_after_a_close_does_not_emit_an_extra_section() {
    let items = vec![section_break(), header("Late"), field("a"), section_break()];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].header_title(0), None);
    assert_eq!(sections[0].number_of_rows(0), 0);
    assert_eq!(sections[1].header_title(0), Some("Late".to_string()));
}

#[test]
fn test_footer_title_closes_the_section() {
    let items = vec![field("a"), footer("Fine print")];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].number_of_rows(0), 1);
    assert_eq!(sections[0].footer_title(0), Some("Fine print".to_string()));
}

#[test]
fn test_lone_footer_closes_an_empty_section() {
    let items = vec![footer("Just a note")];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].number_of_rows(0), 0);
    assert_eq!(sections[0].footer_title(0), Some("Just a note".to_string()));
}

#[test]
fn test_header_and_footer_attach_to_the_same_section() {
    let items = vec![
        header("Account"),
        field("Email"),
        footer("Never shared"),
        field("stray"),
        section_break(),
    ];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].header_title(0), Some("Account".to_string()));
    assert_eq!(sections[0].footer_title(0), Some("Never shared".to_string()));
    assert_eq!(sections[0].number_of_rows(0), 1);
    assert_eq!(sections[1].header_title(0), None);
    assert_eq!(sections[1].number_of_rows(0), 1);
}

#[test]
fn test_meta_items_produce_no_rows() {
    let items = vec![
        MetaItem::new().with_value(json!({"schema": 2})).into(),
        field("a"),
        section_break(),
    ];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].number_of_rows(0), 1);
}

// =============================================================================
// Lazy header and footer parts
// =============================================================================

#[test]
fn test_header_title_resolves_lazily_and_only_once() {
    let title_item = SectionHeaderTitleItem::new().with_title("Draft");
    let items = vec![title_item.clone().into(), field("a"), section_break()];
    let sections = compile(&items, CompileConfig::default());

    // Not resolved yet: a write after compilation is still visible.
    title_item.set_title("Final");
    assert_eq!(sections[0].header_title(0), Some("Final".to_string()));

    // Resolved now: later writes are not.
    title_item.set_title("Too late");
    assert_eq!(sections[0].header_title(0), Some("Final".to_string()));
}

#[test]
fn test_footer_title_resolves_lazily_and_only_once() {
    let title_item = SectionFooterTitleItem::new().with_title("Draft");
    let items = vec![field("a"), title_item.clone().into()];
    let sections = compile(&items, CompileConfig::default());

    title_item.set_title("Final");
    assert_eq!(sections[0].footer_title(0), Some("Final".to_string()));
    title_item.set_title("Too late");
    assert_eq!(sections[0].footer_title(0), Some("Final".to_string()));
}

#[test]
fn test_header_view_supplies_a_fixed_height() {
    let view_item = SectionHeaderViewItem::new().with_view_factory(|| Arc::new(Banner { height: 3 }));
    let items = vec![view_item.into(), field("a"), section_break()];
    let sections = compile(&items, CompileConfig::default());
    let view = sections[0].header_view(0).unwrap();
    assert_eq!(view.height(), 3);
    assert_eq!(sections[0].header_height(0), RowHeight::Fixed(3));
    assert_eq!(sections[0].header_title(0), None);
}

#[test]
fn test_footer_view_supplies_a_fixed_height() {
    let view_item = SectionFooterViewItem::new().with_view_factory(|| Arc::new(Banner { height: 2 }));
    let items = vec![field("a"), view_item.into()];
    let sections = compile(&items, CompileConfig::default());
    assert!(sections[0].footer_view(0).is_some());
    assert_eq!(sections[0].footer_height(0), RowHeight::Fixed(2));
}

#[test]
fn test_view_items_without_a_factory_resolve_to_nothing() {
    let items = vec![
        FormItem::from(SectionHeaderViewItem::new()),
        field("a"),
        SectionFooterViewItem::new().into(),
    ];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 1);
    assert!(sections[0].header_view(0).is_none());
    assert!(sections[0].footer_view(0).is_none());
    assert_eq!(sections[0].header_height(0), RowHeight::Automatic);
    assert_eq!(sections[0].footer_height(0), RowHeight::Automatic);
}

#[test]
fn test_untitled_header_item_resolves_to_nothing() {
    let items = vec![
        FormItem::from(SectionHeaderTitleItem::new()),
        field("a"),
        section_break(),
    ];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections[0].header_title(0), None);
    assert_eq!(sections[0].header_height(0), RowHeight::Automatic);
}

// =============================================================================
// Cells
// =============================================================================

#[test]
fn test_custom_item_without_a_factory_gets_a_placeholder_cell() {
    let items = vec![CustomItem::new().into(), section_break()];
    let sections = compile(&items, CompileConfig::default());
    let cell = sections[0].cell_at(RowPath::new(0, 0)).unwrap();
    let cell = cell.as_any().downcast_ref::<StaticTextCell>().unwrap();
    assert_eq!(cell.title(), "CustomFormItem");
    assert_eq!(cell.value(), "Exception");
}

#[test]
fn test_custom_item_factory_failure_gets_a_placeholder_cell() {
    let custom = CustomItem::new()
        .with_cell_factory(|| Err(CustomCellError::Failed("no backing view".to_string())));
    let items = vec![custom.into(), section_break()];
    let sections = compile(&items, CompileConfig::default());
    let cell = sections[0].cell_at(RowPath::new(0, 0)).unwrap();
    let cell = cell.as_any().downcast_ref::<StaticTextCell>().unwrap();
    assert_eq!(cell.title(), "CustomFormItem");
    assert_eq!(cell.value(), "Exception");
}

#[test]
fn test_custom_item_factory_cell_is_used() {
    let custom = CustomItem::new()
        .with_cell_factory(|| Ok(Box::new(StaticTextCell::new("Build", "2026.08"))));
    let items = vec![custom.into(), section_break()];
    let sections = compile(&items, CompileConfig::default());
    let cell = sections[0].cell_at(RowPath::new(0, 0)).unwrap();
    let cell = cell.as_any().downcast_ref::<StaticTextCell>().unwrap();
    assert_eq!(cell.title(), "Build");
    assert_eq!(cell.value(), "2026.08");
}

#[test]
fn test_every_visual_item_compiles_to_its_cell_kind() {
    let items: Vec<FormItem> = vec![
        StaticTextItem::new().with_title("About").into(),
        TextFieldItem::new().with_title("Name").into(),
        TextViewItem::new().with_title("Notes").into(),
        PushScreenItem::new().with_title("More").into(),
        OptionPickerItem::new().with_title("Size").into(),
        OptionRowItem::new().with_title("Large").into(),
        DatePickerItem::new().with_title("Born").into(),
        ButtonItem::new().with_title("Submit").into(),
        SwitchItem::new().with_title("Enabled").into(),
        StepperItem::new().with_title("Count").into(),
        SliderItem::new().into(),
        section_break(),
    ];
    let sections = compile(&items, CompileConfig::default());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].number_of_rows(0), 11);

    let cell = |row: usize| sections[0].cell_at(RowPath::new(0, row)).unwrap().as_any();
    assert!(cell(0).downcast_ref::<StaticTextCell>().is_some());
    assert!(cell(1).downcast_ref::<TextFieldCell>().is_some());
    assert!(cell(2).downcast_ref::<TextViewCell>().is_some());
    assert!(cell(3).downcast_ref::<PushScreenCell>().is_some());
    assert!(cell(4).downcast_ref::<OptionPickerCell>().is_some());
    assert!(cell(5).downcast_ref::<OptionRowCell>().is_some());
    assert!(cell(6).downcast_ref::<DatePickerCell>().is_some());
    assert!(cell(7).downcast_ref::<ButtonCell>().is_some());
    assert!(cell(8).downcast_ref::<SwitchCell>().is_some());
    assert!(cell(9).downcast_ref::<StepperCell>().is_some());
    assert!(cell(10).downcast_ref::<SliderCell>().is_some());
}

#[test]
fn test_cells_carry_the_item_presentation() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new()
            .with_title("Email")
            .with_placeholder("you@example.com")
            .into(),
        PushScreenItem::new()
            .with_title("Password")
            .with_placeholder("Required")
            .into(),
        section_break(),
    ];
    let sections = compile(&items, CompileConfig::default());
    let cell = sections[0].cell_at(RowPath::new(0, 0)).unwrap();
    let cell = cell.as_any().downcast_ref::<TextFieldCell>().unwrap();
    assert_eq!(cell.title(), "Email");
    assert_eq!(cell.placeholder(), "you@example.com");

    let cell = sections[0].cell_at(RowPath::new(0, 1)).unwrap();
    let cell = cell.as_any().downcast_ref::<PushScreenCell>().unwrap();
    assert_eq!(cell.title(), "Password");
    assert_eq!(cell.placeholder(), "Required");
}
