//! Cell that opens a picker screen listing the item's options.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use log::trace;

use crate::items::PickerOption;

use super::{Cell, RowPath, SelectableCell};

type SelectAction = Arc<dyn Fn() + Send + Sync>;
type PickHandler = Arc<dyn Fn(Option<&PickerOption>) + Send + Sync>;

struct OptionPickerCellInner {
    title: String,
    placeholder: String,
    selected: Option<PickerOption>,
    /// Installed by the compiler; pushes the picker screen
    on_select: Option<SelectAction>,
    /// Routes picks back to the item
    value_did_change: Option<PickHandler>,
}

/// A row showing the selected option (or a placeholder); selecting it opens
/// an [`OptionPickerScreen`](crate::navigation::OptionPickerScreen).
pub struct OptionPickerCell {
    inner: Arc<RwLock<OptionPickerCellInner>>,
}

impl OptionPickerCell {
    pub(crate) fn new(
        title: String,
        placeholder: String,
        selected: Option<PickerOption>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(OptionPickerCellInner {
                title,
                placeholder,
                selected,
                on_select: None,
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

    pub fn selected(&self) -> Option<PickerOption> {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or(None)
    }

    /// The text a renderer should draw: the selected option's title, or the
    /// placeholder while nothing is selected.
    pub fn display_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| match &guard.selected {
                Some(option) => option.title.clone(),
                None => guard.placeholder.clone(),
            })
            .unwrap_or_default()
    }

    /// Pick arriving from the picker screen: store it and notify the item
    /// side.
    pub(crate) fn user_picked(&self, option: Option<PickerOption>) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.selected = option.clone();
            guard.value_did_change.clone()
        });
        if let Some(handler) = handler {
            handler(option.as_ref());
        }
    }

    pub(crate) fn set_selected_without_sync(&self, option: Option<PickerOption>) {
        trace!("sync selected option: {:?}", option.as_ref().map(|o| &o.title));
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = option;
        }
    }

    pub(crate) fn set_on_select(&self, action: SelectAction) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_select = Some(action);
        }
    }

    pub(crate) fn set_value_did_change(&self, handler: PickHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value_did_change = Some(handler);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakOptionPickerCell {
        WeakOptionPickerCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for OptionPickerCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for OptionPickerCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_selectable(&self) -> Option<&dyn SelectableCell> {
        Some(self)
    }
}

impl SelectableCell for OptionPickerCell {
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

pub(crate) struct WeakOptionPickerCell {
    inner: Weak<RwLock<OptionPickerCellInner>>,
}

impl WeakOptionPickerCell {
    pub(crate) fn upgrade(&self) -> Option<OptionPickerCell> {
        self.inner.upgrade().map(|inner| OptionPickerCell { inner })
    }
}

impl Clone for WeakOptionPickerCell {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}
