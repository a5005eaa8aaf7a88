//! Caller-supplied cell escape hatch.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::cells::Cell;

use super::{Identity, identity_accessors};

/// Why a custom item could not produce its cell.
#[derive(Debug, Clone, Error)]
pub enum CustomCellError {
    /// No factory was registered on the item.
    #[error("no cell factory was provided")]
    MissingFactory,
    /// The registered factory returned an error.
    #[error("cell factory failed: {0}")]
    Failed(String),
}

type CellFactory = Arc<dyn Fn() -> Result<Box<dyn Cell>, CustomCellError> + Send + Sync>;

#[derive(Default)]
struct CustomInner {
    identity: Identity,
    factory: Option<CellFactory>,
}

/// An item whose cell is produced by a caller-supplied factory.
///
/// A missing or failing factory never aborts compilation; the compiler
/// substitutes a placeholder cell and keeps walking.
pub struct CustomItem {
    inner: Arc<RwLock<CustomInner>>,
}

impl CustomItem {
    /// Create a custom item with no factory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CustomInner::default())),
        }
    }

    /// Register the cell factory.
    pub fn with_cell_factory(
        self,
        factory: impl Fn() -> Result<Box<dyn Cell>, CustomCellError> + Send + Sync + 'static,
    ) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.factory = Some(Arc::new(factory));
        }
        self
    }

    /// Run the factory, if any.
    pub fn create_cell(&self) -> Result<Box<dyn Cell>, CustomCellError> {
        let factory = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.factory.clone());
        match factory {
            Some(factory) => factory(),
            None => Err(CustomCellError::MissingFactory),
        }
    }
}

impl Clone for CustomItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for CustomItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(CustomItem);
