//! Interface to the host's screen stack.
//!
//! The crate never drives navigation itself. Compiled closures hold the
//! navigator weakly and upgrade per use, so a form outliving its host
//! degrades to no-ops instead of keeping the host alive.

use std::any::Any;
use std::sync::{Arc, Weak};

use log::debug;

use crate::cells::{PushScreenCell, WeakOptionPickerCell};
use crate::items::{OptionRowItem, PickerOption};

/// An opaque child screen; the host decides what it looks like.
pub trait FormScreen: Send + Sync {
    /// Title shown in the host's navigation chrome.
    fn title(&self) -> String;

    /// Downcasting hook.
    fn as_any(&self) -> &dyn Any;
}

/// The host's screen stack.
pub trait ScreenNavigator: Send + Sync {
    /// Push a child screen on top of the form.
    fn push(&self, screen: Box<dyn FormScreen>);

    /// Pop the top screen.
    fn pop(&self);

    /// An inline option row was selected. The default does nothing; a host
    /// implementing radio groups updates the row items here.
    fn will_select_option(&self, _item: &OptionRowItem) {}
}

/// Everything a will-pop hook can see about the dismissal in flight.
pub struct PopContext<'a> {
    pub navigator: &'a Arc<dyn ScreenNavigator>,
    /// The child screen being dismissed.
    pub child: &'a dyn FormScreen,
    /// The originating cell, when it is still alive.
    pub cell: Option<PushScreenCell>,
    /// Whatever the child chose to hand back.
    pub returned: Option<Box<dyn Any + Send>>,
}

/// Hands a child screen the means to dismiss itself.
///
/// `execute` runs the originating item's will-pop hook with a [`PopContext`]
/// and then pops the navigator. Once the navigator is gone the command
/// degrades to a silent no-op, so a child screen may hold it indefinitely.
#[derive(Clone)]
pub struct DismissCommand {
    action: Arc<dyn Fn(Box<dyn FormScreen>, Option<Box<dyn Any + Send>>) + Send + Sync>,
}

impl DismissCommand {
    pub(crate) fn new(
        action: impl Fn(Box<dyn FormScreen>, Option<Box<dyn Any + Send>>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            action: Arc::new(action),
        }
    }

    /// Dismiss `child`, handing `returned` to the will-pop hook.
    pub fn execute(&self, child: Box<dyn FormScreen>, returned: Option<Box<dyn Any + Send>>) {
        (self.action)(child, returned);
    }
}

/// The picker screen pushed when an option picker row is selected.
///
/// Data-only: the host renders the options however it wants and reports the
/// user's choice through [`pick`](Self::pick).
pub struct OptionPickerScreen {
    title: String,
    options: Vec<PickerOption>,
    selected: Option<PickerOption>,
    cell: WeakOptionPickerCell,
    navigator: Weak<dyn ScreenNavigator>,
}

impl OptionPickerScreen {
    pub(crate) fn new(
        title: String,
        options: Vec<PickerOption>,
        selected: Option<PickerOption>,
        cell: WeakOptionPickerCell,
        navigator: Weak<dyn ScreenNavigator>,
    ) -> Self {
        Self {
            title,
            options,
            selected,
            cell,
            navigator,
        }
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    /// The option that was selected when the screen was pushed.
    pub fn selected(&self) -> Option<&PickerOption> {
        self.selected.as_ref()
    }

    /// Report the user's choice: routes it through the cell back to the
    /// item, then pops this screen. Out-of-range indexes do nothing.
    pub fn pick(&self, index: usize) {
        let Some(option) = self.options.get(index).cloned() else {
            return;
        };
        debug!("picked option: {}", option.title);
        if let Some(cell) = self.cell.upgrade() {
            cell.user_picked(Some(option));
        }
        if let Some(navigator) = self.navigator.upgrade() {
            navigator.pop();
        }
    }
}

impl FormScreen for OptionPickerScreen {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
