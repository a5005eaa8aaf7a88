//! On/off toggle cell.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use log::trace;

use super::Cell;

type BoolHandler = Arc<dyn Fn(bool) + Send + Sync>;

struct SwitchCellInner {
    title: String,
    value: bool,
    value_did_change: Option<BoolHandler>,
}

/// A titled toggle. `toggle` is the user entry; it flips the state and
/// notifies the item side.
pub struct SwitchCell {
    inner: Arc<RwLock<SwitchCellInner>>,
}

impl SwitchCell {
    pub(crate) fn new(title: String) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SwitchCellInner {
                title,
                value: false,
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

    pub fn value(&self) -> bool {
        self.inner.read().map(|guard| guard.value).unwrap_or(false)
    }

    /// User entry: flip the state and notify the item side.
    pub fn toggle(&self) {
        let (value, handler) = match self.inner.write() {
            Ok(mut guard) => {
                guard.value = !guard.value;
                (guard.value, guard.value_did_change.clone())
            }
            Err(_) => return,
        };
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn set_value_without_sync(&self, value: bool) {
        trace!("sync switch value: {value}");
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
        }
    }

    pub(crate) fn set_value_did_change(&self, handler: BoolHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value_did_change = Some(handler);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakSwitchCell {
        WeakSwitchCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for SwitchCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for SwitchCell {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) struct WeakSwitchCell {
    inner: Weak<RwLock<SwitchCellInner>>,
}

impl WeakSwitchCell {
    pub(crate) fn upgrade(&self) -> Option<SwitchCell> {
        self.inner.upgrade().map(|inner| SwitchCell { inner })
    }
}
