//! Increment/decrement counter cell.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use log::trace;

use super::Cell;

type ValueHandler = Arc<dyn Fn(u32) + Send + Sync>;

struct StepperCellInner {
    title: String,
    value: u32,
    value_did_change: Option<ValueHandler>,
}

/// A titled counter. Decrementing at zero is a silent no-op; the item side
/// is only notified when the count actually changes.
pub struct StepperCell {
    inner: Arc<RwLock<StepperCellInner>>,
}

impl StepperCell {
    pub(crate) fn new(title: String, value: u32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StepperCellInner {
                title,
                value,
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

    pub fn value(&self) -> u32 {
        self.inner.read().map(|guard| guard.value).unwrap_or(0)
    }

    /// User entry: step the count up by one.
    pub fn increment(&self) {
        let (value, handler) = match self.inner.write() {
            Ok(mut guard) => {
                guard.value += 1;
                (guard.value, guard.value_did_change.clone())
            }
            Err(_) => return,
        };
        if let Some(handler) = handler {
            handler(value);
        }
    }

    /// User entry: step the count down by one, stopping at zero.
    pub fn decrement(&self) {
        let (value, handler) = match self.inner.write() {
            Ok(mut guard) => {
                if guard.value == 0 {
                    return;
                }
                guard.value -= 1;
                (guard.value, guard.value_did_change.clone())
            }
            Err(_) => return,
        };
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn set_value_without_sync(&self, value: u32) {
        trace!("sync stepper value: {value}");
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
        }
    }

    pub(crate) fn set_value_did_change(&self, handler: ValueHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value_did_change = Some(handler);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakStepperCell {
        WeakStepperCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for StepperCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for StepperCell {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) struct WeakStepperCell {
    inner: Weak<RwLock<StepperCellInner>>,
}

impl WeakStepperCell {
    pub(crate) fn upgrade(&self) -> Option<StepperCell> {
        self.inner.upgrade().map(|inner| StepperCell { inner })
    }
}
