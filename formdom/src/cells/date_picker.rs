//! Inline date/time picker cell.

use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use chrono::{Local, NaiveDateTime};
use log::trace;

use crate::items::DatePickerMode;
use crate::populate::ToolbarMode;

use super::{Cell, EditorCell, RowPath, SelectableCell};

type DateHandler = Arc<dyn Fn(NaiveDateTime) + Send + Sync>;

struct DatePickerCellInner {
    title: String,
    mode: DatePickerMode,
    /// Opaque formatting hint from the item, unused by the built-in formats
    locale: Option<String>,
    minimum_date: Option<NaiveDateTime>,
    maximum_date: Option<NaiveDateTime>,
    toolbar_mode: ToolbarMode,
    value: Option<NaiveDateTime>,
    editing: bool,
    value_did_change: Option<DateHandler>,
}

/// A date picker row. Selecting it toggles the inline picker open and
/// closed; picking a date clamps it into the configured range and notifies
/// the item side.
pub struct DatePickerCell {
    inner: Arc<RwLock<DatePickerCellInner>>,
}

impl DatePickerCell {
    pub(crate) fn new(
        title: String,
        mode: DatePickerMode,
        locale: Option<String>,
        minimum_date: Option<NaiveDateTime>,
        maximum_date: Option<NaiveDateTime>,
        toolbar_mode: ToolbarMode,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(DatePickerCellInner {
                title,
                mode,
                locale,
                minimum_date,
                maximum_date,
                toolbar_mode,
                value: None,
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

    pub fn mode(&self) -> DatePickerMode {
        self.inner
            .read()
            .map(|guard| guard.mode)
            .unwrap_or_default()
    }

    pub fn locale(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.locale.clone())
            .unwrap_or(None)
    }

    pub fn toolbar_mode(&self) -> ToolbarMode {
        self.inner
            .read()
            .map(|guard| guard.toolbar_mode)
            .unwrap_or_default()
    }

    pub fn value(&self) -> Option<NaiveDateTime> {
        self.inner.read().map(|guard| guard.value).unwrap_or(None)
    }

    /// The formatted value a renderer should draw, current time when no
    /// value has been assigned yet.
    pub fn human_readable_value(&self) -> String {
        let (mode, value) = self
            .inner
            .read()
            .map(|guard| (guard.mode, guard.value))
            .unwrap_or_default();
        let date = value.unwrap_or_else(|| Local::now().naive_local());
        let format = match mode {
            DatePickerMode::Time => "%H:%M",
            DatePickerMode::Date => "%Y-%m-%d",
            DatePickerMode::DateAndTime => "%Y-%m-%d %H:%M",
        };
        date.format(format).to_string()
    }

    /// User entry: pick a date, clamped into `[minimum, maximum]`, and
    /// notify the item side. An inverted range is ignored.
    pub fn pick(&self, date: NaiveDateTime) {
        let (date, handler) = match self.inner.write() {
            Ok(mut guard) => {
                let date = clamp_date(date, guard.minimum_date, guard.maximum_date);
                guard.value = Some(date);
                (date, guard.value_did_change.clone())
            }
            Err(_) => return,
        };
        if let Some(handler) = handler {
            handler(date);
        }
    }

    pub(crate) fn set_date_without_sync(&self, date: Option<NaiveDateTime>) {
        trace!("sync date: {date:?}");
        if let Ok(mut guard) = self.inner.write() {
            guard.value = date;
        }
    }

    pub(crate) fn set_value_did_change(&self, handler: DateHandler) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value_did_change = Some(handler);
        }
    }

    pub(crate) fn downgrade(&self) -> WeakDatePickerCell {
        WeakDatePickerCell {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

fn clamp_date(
    date: NaiveDateTime,
    minimum: Option<NaiveDateTime>,
    maximum: Option<NaiveDateTime>,
) -> NaiveDateTime {
    if let (Some(minimum), Some(maximum)) = (minimum, maximum)
        && minimum > maximum
    {
        return date;
    }
    let date = minimum.map_or(date, |minimum| date.max(minimum));
    maximum.map_or(date, |maximum| date.min(maximum))
}

impl Clone for DatePickerCell {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Cell for DatePickerCell {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_selectable(&self) -> Option<&dyn SelectableCell> {
        Some(self)
    }

    fn as_editor(&self) -> Option<&dyn EditorCell> {
        Some(self)
    }
}

impl SelectableCell for DatePickerCell {
    /// Close the picker if it is open, otherwise open it.
    fn did_select(&self, _path: RowPath) {
        if self.is_editing() {
            self.end_editing();
        } else {
            self.begin_editing();
        }
    }
}

impl EditorCell for DatePickerCell {
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

pub(crate) struct WeakDatePickerCell {
    inner: Weak<RwLock<DatePickerCellInner>>,
}

impl WeakDatePickerCell {
    pub(crate) fn upgrade(&self) -> Option<DatePickerCell> {
        self.inner.upgrade().map(|inner| DatePickerCell { inner })
    }
}
