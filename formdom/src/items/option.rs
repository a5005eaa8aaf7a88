//! Option picking: a row that opens a picker screen, and standalone option rows.

use std::sync::{Arc, RwLock, Weak};

use super::{Identity, identity_accessors};

/// One choosable option: a display title plus a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub title: String,
    pub identifier: String,
}

impl PickerOption {
    pub fn new(title: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            identifier: identifier.into(),
        }
    }
}

type SelectionHandler = Arc<dyn Fn(Option<&PickerOption>) + Send + Sync>;

#[derive(Default)]
struct OptionPickerInner {
    identity: Identity,
    title: String,
    /// Shown while nothing is selected
    placeholder: String,
    options: Vec<PickerOption>,
    selected: Option<PickerOption>,
    on_change: Option<SelectionHandler>,
    sync_to_cell: Option<SelectionHandler>,
}

/// A row that opens a picker screen listing its options.
///
/// Selecting the row pushes an
/// [`OptionPickerScreen`](crate::navigation::OptionPickerScreen); picking an
/// option updates the item, fires `on_change` and pops the screen again.
pub struct OptionPickerItem {
    inner: Arc<RwLock<OptionPickerInner>>,
}

impl OptionPickerItem {
    /// Create a picker with no options.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(OptionPickerInner::default())),
        }
    }

    /// Set the row title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Set the text shown while nothing is selected.
    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
        }
        self
    }

    /// Append one option; the identifier defaults to the title.
    pub fn with_option(self, title: impl Into<String>) -> Self {
        let title = title.into();
        let option = PickerOption::new(title.clone(), title);
        if let Ok(mut guard) = self.inner.write() {
            guard.options.push(option);
        }
        self
    }

    /// Replace the option list.
    pub fn with_options(self, options: impl IntoIterator<Item = PickerOption>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options.into_iter().collect();
        }
        self
    }

    /// Register the notification fired when the user picks an option.
    pub fn with_on_change(
        self,
        handler: impl Fn(Option<&PickerOption>) + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(handler));
        }
        self
    }

    /// Get the row title.
    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    /// Get the placeholder.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Get the option list.
    pub fn options(&self) -> Vec<PickerOption> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Get the selected option.
    pub fn selected(&self) -> Option<PickerOption> {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or(None)
    }

    /// Select the option with the given identifier, or clear with no match.
    pub fn select_identifier(&self, identifier: &str) {
        let option = self
            .inner
            .read()
            .ok()
            .and_then(|guard| {
                guard
                    .options
                    .iter()
                    .find(|option| option.identifier == identifier)
                    .cloned()
            });
        self.set_selected(option);
    }

    /// Assign the selection programmatically and push it into the bound cell.
    pub fn set_selected(&self, option: Option<PickerOption>) {
        let sync = self.inner.write().ok().and_then(|mut guard| {
            guard.selected = option.clone();
            guard.sync_to_cell.clone()
        });
        if let Some(sync) = sync {
            sync(option.as_ref());
        }
    }

    pub(crate) fn install_sync(&self, handler: SelectionHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sync_to_cell = Some(handler);
        }
    }

    /// Record a pick arriving from the cell side and notify the caller.
    pub(crate) fn editor_did_change(&self, option: Option<PickerOption>) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.selected = option.clone();
            guard.on_change.clone()
        });
        if let Some(handler) = handler {
            handler(option.as_ref());
        }
    }

    pub(crate) fn downgrade(&self) -> WeakOptionPickerItem {
        WeakOptionPickerItem {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for OptionPickerItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for OptionPickerItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(OptionPickerItem);

pub(crate) struct WeakOptionPickerItem {
    inner: Weak<RwLock<OptionPickerInner>>,
}

impl WeakOptionPickerItem {
    pub(crate) fn upgrade(&self) -> Option<OptionPickerItem> {
        self.inner.upgrade().map(|inner| OptionPickerItem { inner })
    }
}

type BoolHandler = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Default)]
struct OptionRowInner {
    identity: Identity,
    title: String,
    selected: bool,
    sync_to_cell: Option<BoolHandler>,
}

/// A single inline option row with a checkmark.
///
/// Selecting the row does not flip the state by itself; the navigator's
/// `will_select_option` hook decides what happens, so a host can implement
/// radio-group behavior across several rows.
pub struct OptionRowItem {
    inner: Arc<RwLock<OptionRowInner>>,
}

impl OptionRowItem {
    /// Create an unselected option row.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(OptionRowInner::default())),
        }
    }

    /// Set the row title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Set the initial selected state.
    pub fn with_selected(self, selected: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = selected;
        }
        self
    }

    /// Get the row title.
    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    /// Get the selected state.
    pub fn is_selected(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected)
            .unwrap_or(false)
    }

    /// Assign the selected state and push it into the bound cell.
    pub fn set_selected(&self, selected: bool) {
        let sync = self.inner.write().ok().and_then(|mut guard| {
            guard.selected = selected;
            guard.sync_to_cell.clone()
        });
        if let Some(sync) = sync {
            sync(selected);
        }
    }

    pub(crate) fn install_sync(&self, handler: BoolHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sync_to_cell = Some(handler);
        }
    }
}

impl Clone for OptionRowItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for OptionRowItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(OptionRowItem);
