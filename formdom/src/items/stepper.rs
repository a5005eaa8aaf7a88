//! Increment/decrement counter item.

use std::sync::{Arc, RwLock, Weak};

use super::{Identity, identity_accessors};

type ValueHandler = Arc<dyn Fn(u32) + Send + Sync>;

#[derive(Default)]
struct StepperInner {
    identity: Identity,
    title: String,
    value: u32,
    on_change: Option<ValueHandler>,
    sync_to_cell: Option<ValueHandler>,
}

/// A titled counter stepped up and down one at a time, never below zero.
pub struct StepperItem {
    inner: Arc<RwLock<StepperInner>>,
}

impl StepperItem {
    /// Create a stepper at zero.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StepperInner::default())),
        }
    }

    /// Set the row title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Set the initial count.
    pub fn with_value(self, value: u32) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
        }
        self
    }

    /// Register the notification fired when the user steps the counter.
    pub fn with_on_change(self, handler: impl Fn(u32) + Send + Sync + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(handler));
        }
        self
    }

    /// Get the row title.
    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    /// Get the current count.
    pub fn value(&self) -> u32 {
        self.inner.read().map(|guard| guard.value).unwrap_or(0)
    }

    /// Assign the count programmatically and push it into the bound cell.
    pub fn set_value(&self, value: u32) {
        let sync = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value;
            guard.sync_to_cell.clone()
        });
        if let Some(sync) = sync {
            sync(value);
        }
    }

    pub(crate) fn install_sync(&self, handler: ValueHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sync_to_cell = Some(handler);
        }
    }

    pub(crate) fn editor_did_change(&self, value: u32) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value;
            guard.on_change.clone()
        });
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakStepperItem {
        WeakStepperItem {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for StepperItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for StepperItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(StepperItem);

pub(crate) struct WeakStepperItem {
    inner: Weak<RwLock<StepperInner>>,
}

impl WeakStepperItem {
    pub(crate) fn upgrade(&self) -> Option<StepperItem> {
        self.inner.upgrade().map(|inner| StepperItem { inner })
    }
}
