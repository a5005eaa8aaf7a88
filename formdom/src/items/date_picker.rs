//! Inline date/time picking item.

use std::fmt;
use std::sync::{Arc, RwLock, Weak};

use chrono::NaiveDateTime;

use super::{Identity, identity_accessors};

/// Which components the picker edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatePickerMode {
    Time,
    Date,
    #[default]
    DateAndTime,
}

impl fmt::Display for DatePickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePickerMode::Time => write!(f, "Time"),
            DatePickerMode::Date => write!(f, "Date"),
            DatePickerMode::DateAndTime => write!(f, "DateAndTime"),
        }
    }
}

type SyncHandler = Arc<dyn Fn(Option<NaiveDateTime>) + Send + Sync>;
type ChangeHandler = Arc<dyn Fn(NaiveDateTime) + Send + Sync>;

#[derive(Default)]
struct DatePickerInner {
    identity: Identity,
    title: String,
    mode: DatePickerMode,
    /// Opaque formatting hint passed through to the cell
    locale: Option<String>,
    /// Lower bound for picked dates; ignored when greater than `maximum_date`
    minimum_date: Option<NaiveDateTime>,
    /// Upper bound for picked dates
    maximum_date: Option<NaiveDateTime>,
    value: Option<NaiveDateTime>,
    on_change: Option<ChangeHandler>,
    sync_to_cell: Option<SyncHandler>,
}

/// A row that picks a date, a time, or both.
///
/// The value stays `None` until assigned or picked. Picked dates are clamped
/// into `[minimum_date, maximum_date]` by the bound cell.
pub struct DatePickerItem {
    inner: Arc<RwLock<DatePickerInner>>,
}

impl DatePickerItem {
    /// Create a date picker with no value, in [`DatePickerMode::DateAndTime`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(DatePickerInner::default())),
        }
    }

    /// Set the row title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.title = title.into();
        }
        self
    }

    /// Set which components the picker edits.
    pub fn with_mode(self, mode: DatePickerMode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.mode = mode;
        }
        self
    }

    /// Set the opaque locale hint.
    pub fn with_locale(self, locale: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.locale = Some(locale.into());
        }
        self
    }

    /// Set the lower bound for picked dates.
    pub fn with_minimum_date(self, date: NaiveDateTime) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.minimum_date = Some(date);
        }
        self
    }

    /// Set the upper bound for picked dates.
    pub fn with_maximum_date(self, date: NaiveDateTime) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.maximum_date = Some(date);
        }
        self
    }

    /// Set the initial value.
    pub fn with_value(self, date: NaiveDateTime) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = Some(date);
        }
        self
    }

    /// Register the notification fired when the user picks a date.
    pub fn with_on_change(self, handler: impl Fn(NaiveDateTime) + Send + Sync + 'static) -> Self {
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

    /// Get the picker mode.
    pub fn mode(&self) -> DatePickerMode {
        self.inner
            .read()
            .map(|guard| guard.mode)
            .unwrap_or_default()
    }

    /// Get the locale hint.
    pub fn locale(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.locale.clone())
            .unwrap_or(None)
    }

    /// Get the lower bound.
    pub fn minimum_date(&self) -> Option<NaiveDateTime> {
        self.inner
            .read()
            .map(|guard| guard.minimum_date)
            .unwrap_or(None)
    }

    /// Get the upper bound.
    pub fn maximum_date(&self) -> Option<NaiveDateTime> {
        self.inner
            .read()
            .map(|guard| guard.maximum_date)
            .unwrap_or(None)
    }

    /// Get the current value.
    pub fn value(&self) -> Option<NaiveDateTime> {
        self.inner.read().map(|guard| guard.value).unwrap_or(None)
    }

    /// Assign a value programmatically and push it into the bound cell.
    pub fn set_value(&self, date: Option<NaiveDateTime>) {
        let sync = self.inner.write().ok().and_then(|mut guard| {
            guard.value = date;
            guard.sync_to_cell.clone()
        });
        if let Some(sync) = sync {
            sync(date);
        }
    }

    pub(crate) fn install_sync(&self, handler: SyncHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sync_to_cell = Some(handler);
        }
    }

    /// Record a pick arriving from the cell side and notify the caller.
    pub(crate) fn editor_did_change(&self, date: NaiveDateTime) {
        let handler = self.inner.write().ok().and_then(|mut guard| {
            guard.value = Some(date);
            guard.on_change.clone()
        });
        if let Some(handler) = handler {
            handler(date);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakDatePickerItem {
        WeakDatePickerItem {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Clone for DatePickerItem {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for DatePickerItem {
    fn default() -> Self {
        Self::new()
    }
}

identity_accessors!(DatePickerItem);

pub(crate) struct WeakDatePickerItem {
    inner: Weak<RwLock<DatePickerInner>>,
}

impl WeakDatePickerItem {
    pub(crate) fn upgrade(&self) -> Option<DatePickerItem> {
        self.inner.upgrade().map(|inner| DatePickerItem { inner })
    }
}
