//! Continuous value slider cell.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use log::trace;

use super::Cell;

type ValueHandler = Arc<dyn Fn(f32) + Send + Sync>;

struct SliderCellInner {
    minimum_value: f32,
    maximum_value: f32,
    value: f32,
    value_did_change: Option<ValueHandler>,
}

/// A slider cell. `slide_to` is the user entry; values are clamped into the
/// slider's range before the item side is notified.
pub struct SliderCell {
    inner: Arc<RwLock<SliderCellInner>>,
}

impl SliderCell {
    pub(crate) fn new(minimum_value: f32, maximum_value: f32, value: f32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SliderCellInner {
                minimum_value,
                maximum_value,
                value,
                value_did_change: None,
            })),
        }
    }

    pub fn minimum_value(&self) -> f32 {
        self.inner
            .read()
            .map(|guard| guard.minimum_value)
            .unwrap_or(0.0)
    }

    pub fn maximum_value(&self) -> f32 {
        self.inner
            .read()
            .map(|guard| guard.maximum_value)
            .unwrap_or(1.0)
    }

    pub fn value(&self) -> f32 {
        self.inner.read().map(|guard| guard.value).unwrap_or(0.0)
    }

    /// User entry: move the slider, clamped into its range, and notify the
    /// item side. An inverted range is ignored.
    pub fn slide_to(&self, value: f32) {
        let (value, handler) = match self.inner.write() {
            Ok(mut guard) => {
                let value = if guard.minimum_value <= guard.maximum_value {
                    value.clamp(guard.minimum_value, guard.maximum_value)
                } else {
                    value
                };
                guard.value = value;
                (value, guard.value_did_change.clone())
            }
            Err(_) => return,
        };
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn set_value_without_sync(&self, value: f32) {
        trace!("sync slider value: {value}");
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
        }
    }

    pub(crate) fn set_value_did_change(&self, handler: ValueHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value_did_change = Some(handler);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakSliderCell {
        WeakSliderCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for SliderCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for SliderCell {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) struct WeakSliderCell {
    inner: Weak<RwLock<SliderCellInner>>,
}

impl WeakSliderCell {
    pub(crate) fn upgrade(&self) -> Option<SliderCell> {
        self.inner.upgrade().map(|inner| SliderCell { inner })
    }
}
