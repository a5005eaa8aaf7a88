//! Inline option row cell with a checkmark.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use log::trace;

use super::{Cell, RowPath, SelectableCell};

type SelectAction = Arc<dyn Fn() + Send + Sync>;

struct OptionRowCellInner {
    title: String,
    selected: bool,
    /// Installed by the compiler; routes selection to the navigator hook
    on_select: Option<SelectAction>,
}

/// A row with a checkmark. Selecting it does not flip the checkmark; it
/// hands the event to the navigator's `will_select_option` hook, which
/// updates the items it chooses to.
pub struct OptionRowCell {
    inner: Arc<RwLock<OptionRowCellInner>>,
}

impl OptionRowCell {
    pub(crate) fn new(title: String, selected: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(OptionRowCellInner {
                title,
                selected,
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

    pub fn is_selected(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected)
            .unwrap_or(false)
    }

    pub(crate) fn set_selected_without_sync(&self, selected: bool) {
        trace!("sync option row selected: {selected}");
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = selected;
        }
    }

    pub(crate) fn set_on_select(&self, action: SelectAction) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_select = Some(action);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakOptionRowCell {
        WeakOptionRowCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for OptionRowCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for OptionRowCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_selectable(&self) -> Option<&dyn SelectableCell> {
        Some(self)
    }
}

impl SelectableCell for OptionRowCell {
    fn did_select(&self, _path: RowPath) {
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

pub(crate) struct WeakOptionRowCell {
    inner: Weak<RwLock<OptionRowCellInner>>,
}

impl WeakOptionRowCell {
    pub(crate) fn upgrade(&self) -> Option<OptionRowCell> {
        self.inner.upgrade().map(|inner| OptionRowCell { inner })
    }
}
