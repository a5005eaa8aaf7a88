//! Editable single-line text cell.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use log::trace;
use unicode_width::UnicodeWidthStr;

use crate::populate::ToolbarMode;
use crate::validate::ValidateResult;

use super::{Cell, EditorCell, WillDisplayCell};

/// How the title column of a text field is sized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleWidthMode {
    /// Size to the title's own measured width.
    #[default]
    Auto,
    /// Use a width assigned from outside, for aligning several fields.
    Assigned(u16),
}

type TextHandler = Arc<dyn Fn(&str) + Send + Sync>;
type ValidationSource = Arc<dyn Fn() -> ValidateResult + Send + Sync>;

struct TextFieldCellInner {
    title: String,
    placeholder: String,
    secure: bool,
    toolbar_mode: ToolbarMode,
    value: String,
    editing: bool,
    title_width_mode: TitleWidthMode,
    /// Validation outcome shown beside the field until the next reload
    persisted_validation: ValidateResult,
    /// Recomputes the outcome from the item side; weak, absent once unbound
    validation_source: Option<ValidationSource>,
    /// Routes user edits back to the item
    value_did_change: Option<TextHandler>,
}

/// An editable one-line text cell with a title column and a persisted
/// validation indicator.
///
/// `edit` is the user-typing entry: it stores the text and notifies the
/// item. Programmatic item assignments arrive through
/// `set_value_without_sync`, which must never re-notify, or edits would echo
/// forever between the two sides.
pub struct TextFieldCell {
    inner: Arc<RwLock<TextFieldCellInner>>,
}

impl TextFieldCell {
    pub(crate) fn new(
        title: String,
        placeholder: String,
        secure: bool,
        toolbar_mode: ToolbarMode,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TextFieldCellInner {
                title,
                placeholder,
                secure,
                toolbar_mode,
                value: String::new(),
                editing: false,
                title_width_mode: TitleWidthMode::default(),
                persisted_validation: ValidateResult::Valid,
                validation_source: None,
                value_did_change: None,
            })),
        }
    }

    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    pub fn is_secure(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.secure)
            .unwrap_or(false)
    }

    pub fn toolbar_mode(&self) -> ToolbarMode {
        self.inner
            .read()
            .map(|guard| guard.toolbar_mode)
            .unwrap_or_default()
    }

    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// The text a renderer should draw: masked when secure, the placeholder
    /// when empty.
    pub fn display_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| {
                if guard.value.is_empty() {
                    guard.placeholder.clone()
                } else if guard.secure {
                    "\u{2022}".repeat(guard.value.chars().count())
                } else {
                    guard.value.clone()
                }
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Title width
    // -------------------------------------------------------------------------

    pub fn title_width_mode(&self) -> TitleWidthMode {
        self.inner
            .read()
            .map(|guard| guard.title_width_mode)
            .unwrap_or_default()
    }

    /// The title's own width in terminal columns, regardless of mode.
    pub fn measured_title_width(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.title.width() as u16)
            .unwrap_or(0)
    }

    /// The width the title column actually occupies.
    pub fn title_width(&self) -> u16 {
        match self.title_width_mode() {
            TitleWidthMode::Auto => self.measured_title_width(),
            TitleWidthMode::Assigned(width) => width,
        }
    }

    pub(crate) fn set_title_width_mode(&self, mode: TitleWidthMode) {
        if let Ok(mut guard) = self.inner.write() {
            guard.title_width_mode = mode;
        }
    }

    // -------------------------------------------------------------------------
    // Validation display
    // -------------------------------------------------------------------------

    /// The validation outcome currently shown beside the field.
    pub fn persisted_validation(&self) -> ValidateResult {
        self.inner
            .read()
            .map(|guard| guard.persisted_validation.clone())
            .unwrap_or_default()
    }

    /// Recompute the outcome from the item side and persist it for display.
    pub(crate) fn reload_persistent_validation(&self) {
        let source = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.validation_source.clone());
        let Some(source) = source else {
            return;
        };
        let result = source();
        if let Ok(mut guard) = self.inner.write() {
            guard.persisted_validation = result;
        }
    }

    // -------------------------------------------------------------------------
    // Binding
    // -------------------------------------------------------------------------

    /// User-typing entry: store the text and notify the item side.
    pub fn edit(&self, value: &str) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value.to_string();
            guard.value_did_change.clone()
        });
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn set_value_without_sync(&self, value: &str) {
        trace!("sync text value: {value}");
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.to_string();
        }
    }

    pub(crate) fn set_value_did_change(&self, handler: TextHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value_did_change = Some(handler);
        }
    }

    pub(crate) fn set_validation_source(&self, source: ValidationSource) {
        if let Ok(mut guard) = self.inner.write() {
            guard.validation_source = Some(source);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakTextFieldCell {
        WeakTextFieldCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for TextFieldCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for TextFieldCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_will_display(&self) -> Option<&dyn WillDisplayCell> {
        Some(self)
    }

    fn as_editor(&self) -> Option<&dyn EditorCell> {
        Some(self)
    }
}

impl WillDisplayCell for TextFieldCell {
    fn will_display(&self) {
        self.reload_persistent_validation();
    }
}

impl EditorCell for TextFieldCell {
    fn begin_editing(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.editing = true;
        }
    }

    fn end_editing(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.editing = false;
        }
    }

    fn is_editing(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.editing)
            .unwrap_or(false)
    }
}

pub(crate) struct WeakTextFieldCell {
    inner: Weak<RwLock<TextFieldCellInner>>,
}

impl WeakTextFieldCell {
    pub(crate) fn upgrade(&self) -> Option<TextFieldCell> {
        self.inner.upgrade().map(|inner| TextFieldCell { inner })
    }
}
