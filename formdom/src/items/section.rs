//! Structural items that split a form into sections.
//!
//! None of these produce a cell. A plain [`SectionItem`] is a bare divider;
//! the header/footer variants attach a title or a custom view to the section
//! boundary they create. Header and footer content is resolved lazily: the
//! compiled section reads the item again at first query, so a title assigned
//! after compilation still shows up.

use std::sync::{Arc, RwLock};

use crate::sections::PartView;

use super::{Identity, identity_accessors};

type ViewFactory = Arc<dyn Fn() -> Arc<dyn PartView> + Send + Sync>;

#[derive(Default)]
struct SectionInner {
    identity: Identity,
}

/// A bare section divider: closes the section being accumulated.
pub struct SectionItem {
    inner: Arc<RwLock<SectionInner>>,
}

impl SectionItem {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SectionInner::default())),
        }
    }
}

impl Clone for SectionItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SectionItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(SectionItem);

#[derive(Default)]
struct TitledPartInner {
    identity: Identity,
    title: Option<String>,
}

/// Starts a new section headed by a title.
///
/// Without a title the section still starts, with an absent header.
pub struct SectionHeaderTitleItem {
    inner: Arc<RwLock<TitledPartInner>>,
}

impl SectionHeaderTitleItem {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TitledPartInner::default())),
        }
    }

    /// Set the header title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = Some(title.into());
        }
        self
    }

    /// Get the header title.
    pub fn title(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or(None)
    }

    /// Replace the header title; visible until the compiled section resolves
    /// its header.
    pub fn set_title(&self, title: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = Some(title.into());
        }
    }
}

impl Clone for SectionHeaderTitleItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SectionHeaderTitleItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(SectionHeaderTitleItem);

#[derive(Default)]
struct ViewPartInner {
    identity: Identity,
    view_factory: Option<ViewFactory>,
}

/// Starts a new section headed by a caller-built view.
pub struct SectionHeaderViewItem {
    inner: Arc<RwLock<ViewPartInner>>,
}

impl SectionHeaderViewItem {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ViewPartInner::default())),
        }
    }

    /// Register the factory that builds the header view on demand.
    pub fn with_view_factory(
        self,
        factory: impl Fn() -> Arc<dyn PartView> + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.view_factory = Some(Arc::new(factory));
        }
        self
    }

    pub(crate) fn make_view(&self) -> Option<Arc<dyn PartView>> {
        let factory = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.view_factory.clone());
        factory.map(|factory| factory())
    }
}

impl Clone for SectionHeaderViewItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SectionHeaderViewItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(SectionHeaderViewItem);

/// Closes the current section with a footer title.
pub struct SectionFooterTitleItem {
    inner: Arc<RwLock<TitledPartInner>>,
}

impl SectionFooterTitleItem {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TitledPartInner::default())),
        }
    }

    /// Set the footer title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = Some(title.into());
        }
        self
    }

    /// Get the footer title.
    pub fn title(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.title.clone())
            .unwrap_or(None)
    }

    /// Replace the footer title; visible until the compiled section resolves
    /// its footer.
    pub fn set_title(&self, title: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = Some(title.into());
        }
    }
}

impl Clone for SectionFooterTitleItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SectionFooterTitleItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(SectionFooterTitleItem);

/// Closes the current section with a caller-built footer view.
pub struct SectionFooterViewItem {
    inner: Arc<RwLock<ViewPartInner>>,
}

impl SectionFooterViewItem {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ViewPartInner::default())),
        }
    }

    /// Register the factory that builds the footer view on demand.
    pub fn with_view_factory(
        self,
        factory: impl Fn() -> Arc<dyn PartView> + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.view_factory = Some(Arc::new(factory));
        }
        self
    }

    pub(crate) fn make_view(&self) -> Option<Arc<dyn PartView>> {
        let factory = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.view_factory.clone());
        factory.map(|factory| factory())
    }
}

impl Clone for SectionFooterViewItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SectionFooterViewItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(SectionFooterViewItem);
