//! Action button item.

use std::sync::{Arc, RwLock};

use super::{Identity, identity_accessors};

type Action = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct ButtonInner {
    identity: Identity,
    title: String,
    action: Option<Action>,
}

/// A full-width button row that runs an action when selected.
pub struct ButtonItem {
    inner: Arc<RwLock<ButtonInner>>,
}

impl ButtonItem {
    /// Create a button with no action.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ButtonInner::default())),
        }
    }

    /// Set the button label.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Register the action run when the row is selected.
    pub fn with_action(self, action: impl Fn() + Send + Sync + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.action = Some(Arc::new(action));
        }
        self
    }

    /// Get the button label.
    pub fn title(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or_default()
    }

    /// Snapshot the action for the cell being compiled.
    pub(crate) fn action(&self) -> Option<Action> {
        self.inner
            .read()
            .map(|guard| guard.action.clone())
            .unwrap_or(None)
    }
}

impl Clone for ButtonItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for ButtonItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(ButtonItem);
