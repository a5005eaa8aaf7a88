//! Read-only title/value row.

use std::sync::{Arc, RwLock};

use super::{Identity, identity_accessors};

type TextHandler = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct StaticTextInner {
    identity: Identity,
    title: String,
    value: String,
    sync_to_cell: Option<TextHandler>,
}

/// A non-editable row showing a title on the left and a value on the right.
///
/// The value can still change programmatically; `set_value` pushes the new
/// text into the bound cell.
pub struct StaticTextItem {
    inner: Arc<RwLock<StaticTextInner>>,
}

impl StaticTextItem {
    /// Create an empty static text row.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StaticTextInner::default())),
        }
    }

    /// Set the title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Set the value.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
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

    /// Get the value.
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
}

impl Clone for StaticTextItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for StaticTextItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(StaticTextItem);
