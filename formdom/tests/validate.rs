//! Tests for validation rules and the validation passes.

use formdom::cells::{Cell, RowPath, TextFieldCell};
use formdom::items::{FormItem, SectionItem, SwitchItem, TextFieldItem};
use formdom::populate::{CompileConfig, compile};
use formdom::rules::TextRule;
use formdom::sections::ListDataSource;
use formdom::validate::{
    ReloadPersistentValidationStateVisitor, ValidateResult, ValidateVisitor, validate,
};

// =============================================================================
// Rules
// =============================================================================

#[test]
fn test_min_length_rule() {
    let rule = TextRule::min_length(3, "too short");
    assert!(!rule.is_satisfied_by("ab"));
    assert!(rule.is_satisfied_by("abc"));
    assert_eq!(rule.message(), "too short");
}

#[test]
fn test_max_length_rule() {
    let rule = TextRule::max_length(3, "too long");
    assert!(rule.is_satisfied_by("abc"));
    assert!(!rule.is_satisfied_by("abcd"));
}

#[test]
fn test_length_rules_count_characters_not_bytes() {
    let rule = TextRule::max_length(3, "too long");
    assert!(rule.is_satisfied_by("äöü"));
}

#[test]
fn test_pattern_rule() {
    let rule = TextRule::pattern("^[0-9]+$", "digits only");
    assert!(rule.is_satisfied_by("123"));
    assert!(!rule.is_satisfied_by("12a"));
}

#[test]
fn test_email_rule() {
    let rule = TextRule::email("invalid email");
    assert!(rule.is_satisfied_by("user@example.com"));
    assert!(!rule.is_satisfied_by("not-an-email"));
}

#[test]
fn test_email_rule_accepts_empty() {
    let rule = TextRule::email("invalid email");
    assert!(rule.is_satisfied_by(""));
}

#[test]
fn test_custom_rule() {
    let rule = TextRule::custom(|value| value.starts_with("db-"), "missing prefix");
    assert!(rule.is_satisfied_by("db-users"));
    assert!(!rule.is_satisfied_by("users"));
}

// =============================================================================
// Submit validation
// =============================================================================

#[test]
fn test_required_empty_value_fails_hard() {
    let field = TextFieldItem::new()
        .with_title("Name")
        .with_required("Name is required");
    assert_eq!(
        field.submit_validate(),
        ValidateResult::HardInvalid("Name is required".to_string())
    );
}

#[test]
fn test_optional_empty_value_skips_the_rules() {
    let field = TextFieldItem::new()
        .with_title("Nickname")
        .with_hard_rule(TextRule::min_length(3, "too short"));
    assert_eq!(field.submit_validate(), ValidateResult::Valid);
}

#[test]
fn test_hard_rules_run_before_soft_rules() {
    let field = TextFieldItem::new()
        .with_value("x")
        .with_soft_rule(TextRule::min_length(8, "a bit short"))
        .with_hard_rule(TextRule::min_length(2, "way too short"));
    assert_eq!(
        field.submit_validate(),
        ValidateResult::HardInvalid("way too short".to_string())
    );
}

#[test]
fn test_first_failing_hard_rule_wins() {
    let field = TextFieldItem::new()
        .with_value("!!")
        .with_hard_rule(TextRule::pattern("^[a-z]+$", "letters only"))
        .with_hard_rule(TextRule::min_length(3, "too short"));
    assert_eq!(
        field.submit_validate(),
        ValidateResult::HardInvalid("letters only".to_string())
    );
}

#[test]
fn test_soft_failure_warns_without_blocking() {
    let field = TextFieldItem::new()
        .with_value("abc")
        .with_soft_rule(TextRule::min_length(8, "consider a longer one"));
    let result = field.submit_validate();
    assert_eq!(
        result,
        ValidateResult::SoftInvalid("consider a longer one".to_string())
    );
    assert!(!result.is_valid());
}

#[test]
fn test_passing_value_is_valid() {
    let field = TextFieldItem::new()
        .with_value("rust")
        .with_required("required")
        .with_hard_rule(TextRule::min_length(3, "too short"))
        .with_soft_rule(TextRule::max_length(32, "long"));
    assert!(field.submit_validate().is_valid());
}

// =============================================================================
// Visitors
// =============================================================================

#[test]
fn test_validate_free_function_matches_the_item() {
    let field = TextFieldItem::new().with_required("required");
    let item = FormItem::from(field.clone());
    assert_eq!(validate(&item), field.submit_validate());
}

#[test]
fn test_non_field_items_validate_clean() {
    let item: FormItem = SwitchItem::new().with_title("Enabled").into();
    assert_eq!(validate(&item), ValidateResult::Valid);
    let item: FormItem = SectionItem::new().into();
    assert_eq!(validate(&item), ValidateResult::Valid);
}

#[test]
fn test_untouched_visitor_reports_valid() {
    let visitor = ValidateVisitor::new();
    assert_eq!(*visitor.result(), ValidateResult::Valid);
    assert_eq!(ValidateVisitor::default().into_result(), ValidateResult::Valid);
}

#[test]
fn test_visitor_extracts_the_field_outcome() {
    let item: FormItem = TextFieldItem::new().with_required("required").into();
    let mut visitor = ValidateVisitor::new();
    item.accept(&mut visitor);
    assert_eq!(
        visitor.into_result(),
        ValidateResult::HardInvalid("required".to_string())
    );
}

#[test]
fn test_reload_updates_bound_cells() {
    let field = TextFieldItem::new()
        .with_title("Name")
        .with_required("Name is required");
    let items: Vec<FormItem> = vec![field.clone().into(), SectionItem::new().into()];
    let sections = compile(&items, CompileConfig::default());
    let persisted = || {
        sections[0]
            .cell_at(RowPath::new(0, 0))
            .unwrap()
            .as_any()
            .downcast_ref::<TextFieldCell>()
            .unwrap()
            .persisted_validation()
    };

    ReloadPersistentValidationStateVisitor::validate_and_update_ui(&items);
    assert_eq!(
        persisted(),
        ValidateResult::HardInvalid("Name is required".to_string())
    );

    field.set_value("Ada");
    ReloadPersistentValidationStateVisitor::validate_and_update_ui(&items);
    assert_eq!(persisted(), ValidateResult::Valid);
}

#[test]
fn test_reload_without_compiled_cells_is_safe() {
    let items: Vec<FormItem> = vec![
        TextFieldItem::new().with_required("required").into(),
        SwitchItem::new().into(),
    ];
    ReloadPersistentValidationStateVisitor::validate_and_update_ui(&items);
}
