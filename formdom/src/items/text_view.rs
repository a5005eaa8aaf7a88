//! Multi-line editable text item.

use std::sync::{Arc, RwLock, Weak};

use super::{Identity, identity_accessors};

type TextHandler = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct TextViewInner {
    identity: Identity,
    title: String,
    placeholder: String,
    value: String,
    on_change: Option<TextHandler>,
    sync_to_cell: Option<TextHandler>,
}

/// A multi-line text area with a title and placeholder.
///
/// Same binding discipline as [`TextFieldItem`](super::TextFieldItem):
/// `set_value` syncs into the cell, user edits fire `on_change`.
pub struct TextViewItem {
    inner: Arc<RwLock<TextViewInner>>,
}

impl TextViewItem {
    /// Create an empty text view.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TextViewInner::default())),
        }
    }

    /// Set the title shown above the editable text.
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

    /// Set the initial value.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
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

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Assign a value programmatically and push it into the bound cell.
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

    pub(crate) fn install_sync(&self, handler: TextHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sync_to_cell = Some(handler);
        }
    }

    pub(crate) fn editor_did_change(&self, value: &str) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value.to_string();
            guard.on_change.clone()
        });
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakTextViewItem {
        WeakTextViewItem {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for TextViewItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for TextViewItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(TextViewItem);

pub(crate) struct WeakTextViewItem {
    inner: Weak<RwLock<TextViewInner>>,
}

impl WeakTextViewItem {
    pub(crate) fn upgrade(&self) -> Option<TextViewItem> {
        self.inner.upgrade().map(|inner| TextViewItem { inner })
    }
}
