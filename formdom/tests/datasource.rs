//! Tests for querying compiled sections through the data source interface.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formdom::cells::{Cell, EditorCell, RowHeight, RowPath, TextFieldCell};
use formdom::items::{
    DatePickerItem, FormItem, PushScreenItem, SectionHeaderTitleItem, SectionItem, StaticTextItem,
    TextFieldItem, TextViewItem,
};
use formdom::navigation::{FormScreen, ScreenNavigator};
use formdom::populate::{CompileConfig, ToolbarMode, compile};
use formdom::sections::{ListDataSource, ListSection, ListSectionArray};
use formdom::validate::ValidateResult;

fn field(title: &str) -> FormItem {
    TextFieldItem::new().with_title(title).into()
}

fn section_break() -> FormItem {
    SectionItem::new().into()
}

fn two_sections() -> Vec<ListSection> {
    let items = vec![
        SectionHeaderTitleItem::new().with_title("One").into(),
        field("a"),
        SectionHeaderTitleItem::new().with_title("Two").into(),
        field("b"),
        field("c"),
        section_break(),
    ];
    compile(&items, CompileConfig::default())
}

#[derive(Default)]
struct CountingNavigator {
    pushed: AtomicUsize,
}

impl ScreenNavigator for CountingNavigator {
    fn push(&self, _screen: Box<dyn FormScreen>) {
        self.pushed.fetch_add(1, Ordering::SeqCst);
    }

    fn pop(&self) {}
}

struct PlainScreen;

impl FormScreen for PlainScreen {
    fn title(&self) -> String {
        "Plain".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Single sections
// =============================================================================

#[test]
fn test_single_section_ignores_the_path_section_component() {
    let sections = compile(&[field("a"), section_break()], CompileConfig::default());
    let section = &sections[0];
    assert_eq!(section.number_of_sections(), 1);
    assert!(section.cell_at(RowPath::new(7, 0)).is_some());
    assert!(section.cell_at(RowPath::new(0, 0)).is_some());
}

#[test]
fn test_out_of_range_row_queries_are_safe() {
    let sections = compile(&[field("a"), section_break()], CompileConfig::default());
    let section = &sections[0];
    assert!(section.cell_at(RowPath::new(0, 9)).is_none());
    assert_eq!(section.row_height(RowPath::new(0, 9)), RowHeight::Automatic);
    section.did_select(RowPath::new(0, 9));
    section.will_display(RowPath::new(0, 9));
    section.accessory_button_tapped(RowPath::new(0, 9));
}

#[test]
fn test_text_view_rows_report_a_fixed_height() {
    let items = vec![
        TextViewItem::new().with_title("Notes").with_value("a\nb").into(),
        StaticTextItem::new().with_title("About").into(),
        section_break(),
    ];
    let sections = compile(&items, CompileConfig::default());
    // title line plus two content lines
    assert_eq!(sections[0].row_height(RowPath::new(0, 0)), RowHeight::Fixed(3));
    assert_eq!(sections[0].row_height(RowPath::new(0, 1)), RowHeight::Automatic);
}

#[test]
fn test_will_display_refreshes_the_validation_display() {
    let items = vec![
        TextFieldItem::new()
            .with_title("Name")
            .with_required("Name is required")
            .into(),
        section_break(),
    ];
    let sections = compile(&items, CompileConfig::default());
    let section = &sections[0];

    let validation = |section: &ListSection| {
        section
            .cell_at(RowPath::new(0, 0))
            .unwrap()
            .as_any()
            .downcast_ref::<TextFieldCell>()
            .unwrap()
            .persisted_validation()
    };
    assert_eq!(validation(section), ValidateResult::Valid);

    section.will_display(RowPath::new(0, 0));
    assert_eq!(
        validation(section),
        ValidateResult::HardInvalid("Name is required".to_string())
    );
}

#[test]
fn test_date_picker_select_toggles_its_editor() {
    let items = vec![DatePickerItem::new().with_title("Born").into(), section_break()];
    let sections = compile(&items, CompileConfig::default());
    let section = &sections[0];

    let editing = |section: &ListSection| {
        section
            .cell_at(RowPath::new(0, 0))
            .unwrap()
            .as_editor()
            .unwrap()
            .is_editing()
    };
    assert!(!editing(section));
    section.did_select(RowPath::new(0, 0));
    assert!(editing(section));
    section.did_select(RowPath::new(0, 0));
    assert!(!editing(section));
}

#[test]
fn test_accessory_tap_pushes_like_select() {
    let navigator = Arc::new(CountingNavigator::default());
    let items = vec![
        PushScreenItem::new()
            .with_title("More")
            .with_screen_factory(|_command| Box::new(PlainScreen))
            .into(),
        section_break(),
    ];
    let config = CompileConfig {
        navigator: Some(navigator.clone() as Arc<dyn ScreenNavigator>),
        toolbar_mode: ToolbarMode::Simple,
    };
    let sections = compile(&items, config);

    sections[0].accessory_button_tapped(RowPath::new(0, 0));
    sections[0].did_select(RowPath::new(0, 0));
    assert_eq!(navigator.pushed.load(Ordering::SeqCst), 2);
}

// =============================================================================
// Section arrays
// =============================================================================

#[test]
fn test_array_forwards_by_section_index() {
    let array = ListSectionArray::new(two_sections());
    assert_eq!(array.number_of_sections(), 2);
    assert_eq!(array.number_of_rows(0), 1);
    assert_eq!(array.number_of_rows(1), 2);
    assert_eq!(array.header_title(0), Some("One".to_string()));
    assert_eq!(array.header_title(1), Some("Two".to_string()));
    assert!(array.cell_at(RowPath::new(1, 1)).is_some());
    assert_eq!(array.row_height(RowPath::new(1, 0)), RowHeight::Automatic);
}

#[test]
fn test_array_out_of_range_queries_are_safe() {
    let array = ListSectionArray::new(two_sections());
    assert_eq!(array.number_of_rows(9), 0);
    assert!(array.cell_at(RowPath::new(9, 0)).is_none());
    assert_eq!(array.header_title(9), None);
    assert_eq!(array.footer_title(9), None);
    assert_eq!(array.header_height(9), RowHeight::Automatic);
    array.did_select(RowPath::new(9, 0));
    array.will_display(RowPath::new(9, 0));
}

#[test]
fn test_array_from_vec_exposes_its_sections() {
    let array: ListSectionArray = two_sections().into();
    assert_eq!(array.sections().len(), 2);
}

// =============================================================================
// Editing focus
// =============================================================================

#[test]
fn test_scroll_begin_dismisses_the_active_editor() {
    let array = ListSectionArray::new(compile(
        &[field("Name"), section_break()],
        CompileConfig::default(),
    ));
    let editor = |array: &ListSectionArray| {
        array
            .cell_at(RowPath::new(0, 0))
            .unwrap()
            .as_editor()
            .unwrap()
            .is_editing()
    };

    array
        .cell_at(RowPath::new(0, 0))
        .unwrap()
        .as_editor()
        .unwrap()
        .begin_editing();
    assert!(editor(&array));

    array.scroll_will_begin();
    assert!(!editor(&array));
}

#[test]
fn test_should_scroll_to_top_dismisses_and_confirms() {
    let array = ListSectionArray::new(compile(
        &[field("Name"), section_break()],
        CompileConfig::default(),
    ));
    array
        .cell_at(RowPath::new(0, 0))
        .unwrap()
        .as_editor()
        .unwrap()
        .begin_editing();

    assert!(array.should_scroll_to_top());
    assert!(
        !array
            .cell_at(RowPath::new(0, 0))
            .unwrap()
            .as_editor()
            .unwrap()
            .is_editing()
    );
}

#[test]
fn test_end_active_editing_on_a_single_section() {
    let sections = compile(&[field("Name"), section_break()], CompileConfig::default());
    let section = &sections[0];
    section
        .cell_at(RowPath::new(0, 0))
        .unwrap()
        .as_editor()
        .unwrap()
        .begin_editing();

    section.end_active_editing();
    assert!(
        !section
            .cell_at(RowPath::new(0, 0))
            .unwrap()
            .as_editor()
            .unwrap()
            .is_editing()
    );
}
