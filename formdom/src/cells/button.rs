//! Action button cell.

use std::any::Any;
use std::sync::{Arc, RwLock};

use log::debug;

use super::{Cell, RowPath, SelectableCell};

type Action = Arc<dyn Fn() + Send + Sync>;

struct ButtonCellInner {
    title: String,
    action: Option<Action>,
}

/// A full-width button row; selecting it runs the item's action.
pub struct ButtonCell {
    inner: Arc<RwLock<ButtonCellInner>>,
}

impl ButtonCell {
    pub(crate) fn new(title: String, action: Option<Action>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ButtonCellInner { title, action })),
        }
    }

    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }
}

impl Clone for ButtonCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for ButtonCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_selectable(&self) -> Option<&dyn SelectableCell> {
        Some(self)
    }
}

impl SelectableCell for ButtonCell {
    fn did_select(&self, path: RowPath) {
        debug!("button selected at {path:?}");
        let action = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.action.clone());
        if let Some(action) = action {
            action();
        }
    }
}
