//! Continuous value slider item.

use std::sync::{Arc, RwLock, Weak};

use super::{Identity, identity_accessors};

type ValueHandler = Arc<dyn Fn(f32) + Send + Sync>;

struct SliderInner {
    identity: Identity,
    minimum_value: f32,
    maximum_value: f32,
    value: f32,
    on_change: Option<ValueHandler>,
    sync_to_cell: Option<ValueHandler>,
}

impl Default for SliderInner {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            minimum_value: 0.0,
            maximum_value: 1.0,
            value: 0.0,
            on_change: None,
            sync_to_cell: None,
        }
    }
}

/// A slider over `[minimum_value, maximum_value]`, defaulting to `[0, 1]`.
pub struct SliderItem {
    inner: Arc<RwLock<SliderInner>>,
}

impl SliderItem {
    /// Create a slider over `[0, 1]` at 0.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SliderInner::default())),
        }
    }

    /// Set the lower bound.
    pub fn with_minimum_value(self, value: f32) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.minimum_value = value;
        }
        self
    }

    /// Set the upper bound.
    pub fn with_maximum_value(self, value: f32) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.maximum_value = value;
        }
        self
    }

    /// Set the initial value.
    pub fn with_value(self, value: f32) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
        }
        self
    }

    /// Register the notification fired when the user moves the slider.
    pub fn with_on_change(self, handler: impl Fn(f32) + Send + Sync + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(handler));
        }
        self
    }

    /// Get the lower bound.
    pub fn minimum_value(&self) -> f32 {
        self.inner
            .read()
            .map(|guard| guard.minimum_value)
            .unwrap_or(0.0)
    }

    /// Get the upper bound.
    pub fn maximum_value(&self) -> f32 {
        self.inner
            .read()
            .map(|guard| guard.maximum_value)
            .unwrap_or(1.0)
    }

    /// Get the current value.
    pub fn value(&self) -> f32 {
        self.inner.read().map(|guard| guard.value).unwrap_or(0.0)
    }

    /// Assign the value programmatically and push it into the bound cell.
    pub fn set_value(&self, value: f32) {
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

    pub(crate) fn editor_did_change(&self, value: f32) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value;
            guard.on_change.clone()
        });
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakSliderItem {
        WeakSliderItem {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for SliderItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SliderItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(SliderItem);

pub(crate) struct WeakSliderItem {
    inner: Weak<RwLock<SliderInner>>,
}

impl WeakSliderItem {
    pub(crate) fn upgrade(&self) -> Option<SliderItem> {
        self.inner.upgrade().map(|inner| SliderItem { inner })
    }
}
