//! Read-only title/value cell.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use super::Cell;

struct StaticTextCellInner {
    title: String,
    value: String,
}

/// Displays a title on the left and a value on the right, read-only.
///
/// Also serves as the placeholder substituted when a custom item fails to
/// produce its cell.
pub struct StaticTextCell {
    inner: Arc<RwLock<StaticTextCellInner>>,
}

impl StaticTextCell {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StaticTextCellInner {
                title: title.into(),
                value: value.into(),
            })),
        }
    }

    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    pub(crate) fn set_value_without_sync(&self, value: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.to_string();
        }
    }

    pub(crate) fn downgrade(&self) -> WeakStaticTextCell {
        WeakStaticTextCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for StaticTextCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for StaticTextCell {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) struct WeakStaticTextCell {
    inner: Weak<RwLock<StaticTextCellInner>>,
}

impl WeakStaticTextCell {
    pub(crate) fn upgrade(&self) -> Option<StaticTextCell> {
        self.inner.upgrade().map(|inner| StaticTextCell { inner })
    }
}
