//! Invisible data-only item.

use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::{Identity, identity_accessors};

#[derive(Default)]
struct MetaInner {
    identity: Identity,
    value: Option<Value>,
}

/// An invisible field carried along into serialized output.
///
/// Produces no cell; useful for submitting values the user never sees.
pub struct MetaItem {
    inner: Arc<RwLock<MetaInner>>,
}

impl MetaItem {
    /// Create an empty meta item.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetaInner::default())),
        }
    }

    /// Set the opaque payload.
    pub fn with_value(self, value: Value) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = Some(value);
        }
        self
    }

    /// Get the opaque payload.
    pub fn value(&self) -> Option<Value> {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or(None)
    }
}

impl Clone for MetaItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for MetaItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(MetaItem);
