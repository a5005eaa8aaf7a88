//! Item that pushes a child screen when its row is selected.

use std::sync::{Arc, RwLock};

use crate::navigation::{DismissCommand, FormScreen, PopContext};

use super::{Identity, identity_accessors};

type ScreenFactory = Arc<dyn Fn(DismissCommand) -> Box<dyn FormScreen> + Send + Sync>;
type WillPopHandler = Arc<dyn Fn(PopContext<'_>) + Send + Sync>;

#[derive(Default)]
struct PushScreenInner {
    identity: Identity,
    title: String,
    placeholder: String,
    /// Builds the child screen; handed the command that dismisses it again
    screen_factory: Option<ScreenFactory>,
    /// Invoked just before the child screen is popped
    will_pop: Option<WillPopHandler>,
}

/// A row that pushes a caller-built child screen onto the navigator.
///
/// The factory receives a [`DismissCommand`] the child invokes when done;
/// dismissal runs `will_pop` with a [`PopContext`] and then pops. A child
/// that never completes simply leaves the parent form untouched.
pub struct PushScreenItem {
    inner: Arc<RwLock<PushScreenInner>>,
}

impl PushScreenItem {
    /// Create a push-screen row with no factory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(PushScreenInner::default())),
        }
    }

    /// Set the row title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Set the detail text shown beside the title.
    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
        }
        self
    }

    /// Register the child screen factory.
    pub fn with_screen_factory(
        self,
        factory: impl Fn(DismissCommand) -> Box<dyn FormScreen> + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.screen_factory = Some(Arc::new(factory));
        }
        self
    }

    /// Register the hook that runs just before the child screen is popped.
    pub fn with_will_pop(self, handler: impl Fn(PopContext<'_>) + Send + Sync + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.will_pop = Some(Arc::new(handler));
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

    /// Get the detail text.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Build the child screen, `None` when no factory is registered.
    pub(crate) fn create_screen(&self, command: DismissCommand) -> Option<Box<dyn FormScreen>> {
        let factory = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.screen_factory.clone());
        factory.map(|factory| factory(command))
    }

    pub(crate) fn notify_will_pop(&self, context: PopContext<'_>) {
        let handler = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.will_pop.clone());
        if let Some(handler) = handler {
            handler(context);
        }
    }
}

impl Clone for PushScreenItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for PushScreenItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(PushScreenItem);
