//! Single-line editable text item with tri-state validation.

use std::sync::{Arc, RwLock, Weak};

use crate::rules::TextRule;
use crate::validate::ValidateResult;

use super::{Identity, identity_accessors};

/// Handler invoked with the new value when one side of the binding changes.
type TextHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Internal state for a text field item.
#[derive(Default)]
struct TextFieldInner {
    /// Serialization and styling identity
    identity: Identity,
    /// Label shown beside the editable text
    title: String,
    /// Text shown while the value is empty
    placeholder: String,
    /// Mask the value during display (passwords)
    secure: bool,
    /// Current text value
    value: String,
    /// Message reported when the field is required but empty
    required_message: Option<String>,
    /// Rules whose failure blocks submission
    hard_rules: Vec<TextRule>,
    /// Rules whose failure only warns
    soft_rules: Vec<TextRule>,
    /// Caller notification fired on user edits
    on_change: Option<TextHandler>,
    /// Pushes programmatic values into the bound cell
    sync_to_cell: Option<TextHandler>,
    /// Refreshes the bound cell's persisted validation display
    validation_reload: Option<Arc<dyn Fn() + Send + Sync>>,
    /// Reads the bound cell's resolved title width
    title_width_probe: Option<Arc<dyn Fn() -> u16 + Send + Sync>>,
    /// Pushes an assigned title width into the bound cell
    title_width_assign: Option<Arc<dyn Fn(u16) + Send + Sync>>,
}

/// A single-line text field with a title, placeholder and validation rules.
///
/// The handle is cheap to clone; clones share state. Keep a clone around to
/// read the value back after the form has been compiled and edited.
/// `set_value` pushes into the bound cell without re-triggering `on_change`;
/// user edits arriving from the cell fire `on_change` without re-entering the
/// sync channel.
pub struct TextFieldItem {
    inner: Arc<RwLock<TextFieldInner>>,
}

impl TextFieldItem {
    /// Create an empty text field.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TextFieldInner::default())),
        }
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// Set the title shown beside the editable text.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Set the placeholder shown while the value is empty.
    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
        }
        self
    }

    /// Mask the displayed value, for passwords and similar secrets.
    pub fn with_secure(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.secure = true;
        }
        self
    }

    /// Set the initial value.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
        self
    }

    /// Reject an empty value at submit time with the given message.
    pub fn with_required(self, message: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.required_message = Some(message.into());
        }
        self
    }

    /// Append a rule whose failure makes the value hard-invalid.
    pub fn with_hard_rule(self, rule: TextRule) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.hard_rules.push(rule);
        }
        self
    }

    /// Append a rule whose failure makes the value soft-invalid.
    pub fn with_soft_rule(self, rule: TextRule) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.soft_rules.push(rule);
        }
        self
    }

    /// Register the notification fired when the user edits the bound cell.
    pub fn with_on_change(self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(handler));
        }
        self
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Get the title.
    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    /// Get the placeholder.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Check whether the displayed value is masked.
    pub fn is_secure(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.secure)
            .unwrap_or(false)
    }

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Assign a value programmatically and push it into the bound cell.
    ///
    /// Does not fire `on_change`. Without a bound cell this only updates the
    /// stored value.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        let sync = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value.clone();
            guard.sync_to_cell.clone()
        });
        if let Some(sync) = sync {
            sync(&value);
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate the current value as if the form were being submitted.
    ///
    /// An empty value fails hard when the field is required and passes
    /// otherwise, skipping the rules. A non-empty value is checked against
    /// the hard rules first, then the soft rules; the first failure wins.
    pub fn submit_validate(&self) -> ValidateResult {
        let (value, required_message, hard_rules, soft_rules) = {
            match self.inner.read() {
                Ok(guard) => (
                    guard.value.clone(),
                    guard.required_message.clone(),
                    guard.hard_rules.clone(),
                    guard.soft_rules.clone(),
                ),
                Err(_) => return ValidateResult::Valid,
            }
        };
        if value.is_empty() {
            if let Some(message) = required_message {
                return ValidateResult::HardInvalid(message);
            }
            return ValidateResult::Valid;
        }
        for rule in &hard_rules {
            if !rule.is_satisfied_by(&value) {
                return ValidateResult::HardInvalid(rule.message().to_string());
            }
        }
        for rule in &soft_rules {
            if !rule.is_satisfied_by(&value) {
                return ValidateResult::SoftInvalid(rule.message().to_string());
            }
        }
        ValidateResult::Valid
    }

    // -------------------------------------------------------------------------
    // Binding (installed by the compiler, invoked by the visitors)
    // -------------------------------------------------------------------------

    pub(crate) fn install_sync(&self, handler: TextHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sync_to_cell = Some(handler);
        }
    }

    pub(crate) fn install_validation_reload(&self, handler: Arc<dyn Fn() + Send + Sync>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.validation_reload = Some(handler);
        }
    }

    pub(crate) fn install_title_width_probe(&self, handler: Arc<dyn Fn() -> u16 + Send + Sync>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.title_width_probe = Some(handler);
        }
    }

    pub(crate) fn install_title_width_assign(&self, handler: Arc<dyn Fn(u16) + Send + Sync>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.title_width_assign = Some(handler);
        }
    }

    /// Record a user edit arriving from the bound cell and notify the caller.
    pub(crate) fn editor_did_change(&self, value: &str) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value.to_string();
            guard.on_change.clone()
        });
        if let Some(handler) = handler {
            handler(value);
        }
    }

    /// Ask the bound cell to refresh its persisted validation display.
    pub(crate) fn reload_persistent_validation(&self) {
        let handler = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.validation_reload.clone());
        if let Some(handler) = handler {
            handler();
        }
    }

    /// Read the bound cell's measured title width, 0 when unbound.
    pub(crate) fn obtain_title_width(&self) -> u16 {
        let handler = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.title_width_probe.clone());
        match handler {
            Some(handler) => handler(),
            None => 0,
        }
    }

    /// Push an assigned title width into the bound cell.
    pub(crate) fn assign_title_width(&self, width: u16) {
        let handler = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.title_width_assign.clone());
        if let Some(handler) = handler {
            handler(width);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakTextFieldItem {
        WeakTextFieldItem {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for TextFieldItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for TextFieldItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(TextFieldItem);

pub(crate) struct WeakTextFieldItem {
    inner: Weak<RwLock<TextFieldInner>>,
}

impl WeakTextFieldItem {
    pub(crate) fn upgrade(&self) -> Option<TextFieldItem> {
        self.inner.upgrade().map(|inner| TextFieldItem { inner })
    }
}
