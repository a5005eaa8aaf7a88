//! On/off toggle item.

use std::sync::{Arc, RwLock, Weak};

use super::{Identity, identity_accessors};

type BoolHandler = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Default)]
struct SwitchInner {
    identity: Identity,
    title: String,
    value: bool,
    on_change: Option<BoolHandler>,
    sync_to_cell: Option<BoolHandler>,
}

/// A titled on/off toggle.
pub struct SwitchItem {
    inner: Arc<RwLock<SwitchInner>>,
}

impl SwitchItem {
    /// Create a switch that is off.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SwitchInner::default())),
        }
    }

    /// Set the row title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Set the initial state.
    pub fn with_value(self, value: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
        }
        self
    }

    /// Register the notification fired when the user flips the toggle.
    pub fn with_on_change(self, handler: impl Fn(bool) + Send + Sync + 'static) -> Self {
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

    /// Get the current state.
    pub fn value(&self) -> bool {
        self.inner.read().map(|guard| guard.value).unwrap_or(false)
    }

    /// Assign the state programmatically and push it into the bound cell.
    pub fn set_value(&self, value: bool) {
        let sync = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value;
            guard.sync_to_cell.clone()
        });
        if let Some(sync) = sync {
            sync(value);
        }
    }

    pub(crate) fn install_sync(&self, handler: BoolHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sync_to_cell = Some(handler);
        }
    }

    pub(crate) fn editor_did_change(&self, value: bool) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value;
            guard.on_change.clone()
        });
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakSwitchItem {
        WeakSwitchItem {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for SwitchItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SwitchItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(SwitchItem);

pub(crate) struct WeakSwitchItem {
    inner: Weak<RwLock<SwitchInner>>,
}

impl WeakSwitchItem {
    pub(crate) fn upgrade(&self) -> Option<SwitchItem> {
        self.inner.upgrade().map(|inner| SwitchItem { inner })
    }
}
