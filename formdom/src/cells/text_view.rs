//! Editable multi-line text cell.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use log::trace;

use crate::populate::ToolbarMode;

use super::{Cell, CellHeightProvider, EditorCell, RowHeight, RowPath};

type TextHandler = Arc<dyn Fn(&str) + Send + Sync>;

struct TextViewCellInner {
    title: String,
    placeholder: String,
    toolbar_mode: ToolbarMode,
    value: String,
    editing: bool,
    value_did_change: Option<TextHandler>,
}

/// An editable multi-line text cell: one title line on top of the content.
///
/// Provides its own row height so the container reserves one terminal row
/// per content line.
pub struct TextViewCell {
    inner: Arc<RwLock<TextViewCellInner>>,
}

impl TextViewCell {
    pub(crate) fn new(title: String, placeholder: String, toolbar_mode: ToolbarMode) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TextViewCellInner {
                title,
                placeholder,
                toolbar_mode,
                value: String::new(),
                editing: false,
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

    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    pub fn toolbar_mode(&self) -> ToolbarMode {
        self.inner
            .read()
            .map(|guard| guard.toolbar_mode)
            .unwrap_or_default()
    }

    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// User-typing entry: store the text and notify the item side.
    pub fn edit(&self, value: &str) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.value = value.to_string();
            guard.value_did_change.clone()
        });
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(crate) fn set_value_without_sync(&self, value: &str) {
        trace!("sync text value: {value}");
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.to_string();
        }
    }

    pub(crate) fn set_value_did_change(&self, handler: TextHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value_did_change = Some(handler);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakTextViewCell {
        WeakTextViewCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for TextViewCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for TextViewCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_height_provider(&self) -> Option<&dyn CellHeightProvider> {
        Some(self)
    }

    fn as_editor(&self) -> Option<&dyn EditorCell> {
        Some(self)
    }
}

impl CellHeightProvider for TextViewCell {
    fn cell_height(&self, _path: RowPath) -> RowHeight {
        // title line plus one terminal row per content line
        let lines = self
            .inner
            .read()
            .map(|guard| guard.value.lines().count().max(1))
            .unwrap_or(1);
        RowHeight::Fixed(1 + lines as u16)
    }
}

impl EditorCell for TextViewCell {
    fn begin_editing(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.editing = true;
        }
    }

    fn end_editing(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.editing = false;
        }
    }

    fn is_editing(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.editing)
            .unwrap_or(false)
    }
}

pub(crate) struct WeakTextViewCell {
    inner: Weak<RwLock<TextViewCellInner>>,
}

impl WeakTextViewCell {
    pub(crate) fn upgrade(&self) -> Option<TextViewCell> {
        self.inner.upgrade().map(|inner| TextViewCell { inner })
    }
}
