//! Cell that pushes a child screen when selected.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use super::{AccessoryTappableCell, Cell, RowPath, SelectableCell};

type SelectAction = Arc<dyn Fn() + Send + Sync>;

struct PushScreenCellInner {
    title: String,
    placeholder: String,
    /// Installed by the compiler; builds and pushes the child screen
    on_select: Option<SelectAction>,
}

/// A disclosure row: selecting it, or activating its accessory indicator,
/// pushes the item's child screen onto the navigator.
pub struct PushScreenCell {
    inner: Arc<RwLock<PushScreenCellInner>>,
}

impl PushScreenCell {
    pub(crate) fn new(title: String, placeholder: String) -> Self {
        Self {
            inner: Arc::new(RwLock::new(PushScreenCellInner {
                title,
                placeholder,
                on_select: None,
            })),
        }
    }

    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    pub(crate) fn set_on_select(&self, action: SelectAction) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_select = Some(action);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakPushScreenCell {
        WeakPushScreenCell {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn run_on_select(&self) {
        let action = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.on_select.clone());
        if let Some(action) = action {
            action();
        }
    }
}

impl Clone for PushScreenCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for PushScreenCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_selectable(&self) -> Option<&dyn SelectableCell> {
        Some(self)
    }

    fn as_accessory(&self) -> Option<&dyn AccessoryTappableCell> {
        Some(self)
    }
}

impl SelectableCell for PushScreenCell {
    fn did_select(&self, _path: RowPath) {
        self.run_on_select();
    }
}

impl AccessoryTappableCell for PushScreenCell {
    fn accessory_button_tapped(&self, _path: RowPath) {
        self.run_on_select();
    }
}

pub(crate) struct WeakPushScreenCell {
    inner: Weak<RwLock<PushScreenCellInner>>,
}

impl WeakPushScreenCell {
    pub(crate) fn upgrade(&self) -> Option<PushScreenCell> {
        self.inner.upgrade().map(|inner| PushScreenCell { inner })
    }
}

impl Clone for WeakPushScreenCell {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}
