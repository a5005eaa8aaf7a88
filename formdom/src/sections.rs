//! Compiled sections and the query surface the host container drives.
//!
//! [`ListSection`] is one section of cells with lazily resolved header and
//! footer. [`ListSectionArray`] composes sections and adds the scroll
//! hooks. Both implement [`ListDataSource`], the surface a host renders
//! from; a standalone section addresses itself as the only section.

use std::any::Any;
use std::fmt::Debug;
use std::sync::{Arc, OnceLock};

use log::debug;

use crate::cells::{Cell, RowHeight, RowPath};

/// A caller-built header or footer view.
///
/// The crate stores it opaquely; the host downcasts through `as_any` to
/// whatever view type it handed in.
pub trait PartView: Debug + Send + Sync {
    /// Height in terminal rows the host should reserve.
    fn height(&self) -> u16;

    /// Downcasting hook.
    fn as_any(&self) -> &dyn Any;
}

/// Resolved header or footer content of one section.
#[derive(Debug, Clone, Default)]
pub enum SectionPart {
    #[default]
    None,
    Title(String),
    View(Arc<dyn PartView>),
}

impl SectionPart {
    pub fn title(&self) -> Option<&str> {
        match self {
            SectionPart::Title(title) => Some(title),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&Arc<dyn PartView>> {
        match self {
            SectionPart::View(view) => Some(view),
            _ => None,
        }
    }

    /// The height to reserve: the view's own height, automatic otherwise.
    pub fn height(&self) -> RowHeight {
        match self {
            SectionPart::View(view) => RowHeight::Fixed(view.height()),
            _ => RowHeight::Automatic,
        }
    }
}

/// Deferred producer of a header or footer part.
pub(crate) type PartSource = Box<dyn Fn() -> SectionPart + Send + Sync>;

/// The query surface a host container renders compiled sections from.
///
/// Row-level dispatch is capability-checked: a cell that does not expose the
/// queried capability makes the call a no-op (or the automatic height).
/// Out-of-range paths are always safe no-ops.
pub trait ListDataSource: Send + Sync {
    fn number_of_sections(&self) -> usize;
    fn number_of_rows(&self, section: usize) -> usize;
    fn cell_at(&self, path: RowPath) -> Option<&dyn Cell>;
    fn header_title(&self, section: usize) -> Option<String>;
    fn footer_title(&self, section: usize) -> Option<String>;
    fn header_view(&self, section: usize) -> Option<Arc<dyn PartView>>;
    fn footer_view(&self, section: usize) -> Option<Arc<dyn PartView>>;
    fn header_height(&self, section: usize) -> RowHeight;
    fn footer_height(&self, section: usize) -> RowHeight;
    fn row_height(&self, path: RowPath) -> RowHeight;
    fn did_select(&self, path: RowPath);
    fn will_display(&self, path: RowPath);
    fn accessory_button_tapped(&self, path: RowPath);
}

/// One compiled section: cells plus header and footer.
///
/// Header and footer are resolved on first query and memoized, so content
/// assigned to the originating item after compilation but before the first
/// query still shows up, and repeated queries never re-run the resolver.
pub struct ListSection {
    cells: Vec<Box<dyn Cell>>,
    header_source: PartSource,
    footer_source: PartSource,
    header: OnceLock<SectionPart>,
    footer: OnceLock<SectionPart>,
}

impl ListSection {
    pub(crate) fn new(
        cells: Vec<Box<dyn Cell>>,
        header_source: PartSource,
        footer_source: PartSource,
    ) -> Self {
        Self {
            cells,
            header_source,
            footer_source,
            header: OnceLock::new(),
            footer: OnceLock::new(),
        }
    }

    fn header(&self) -> &SectionPart {
        self.header.get_or_init(|| (self.header_source)())
    }

    fn footer(&self) -> &SectionPart {
        self.footer.get_or_init(|| (self.footer_source)())
    }

    /// End editing on every cell that currently holds it.
    pub fn end_active_editing(&self) {
        for cell in &self.cells {
            if let Some(editor) = cell.as_editor()
                && editor.is_editing()
            {
                editor.end_editing();
            }
        }
    }
}

/// Single-section addressing: the section component of a [`RowPath`] is
/// ignored for lookup and passed through to the cell unchanged.
impl ListDataSource for ListSection {
    fn number_of_sections(&self) -> usize {
        1
    }

    fn number_of_rows(&self, _section: usize) -> usize {
        self.cells.len()
    }

    fn cell_at(&self, path: RowPath) -> Option<&dyn Cell> {
        self.cells.get(path.row).map(|cell| cell.as_ref())
    }

    fn header_title(&self, _section: usize) -> Option<String> {
        self.header().title().map(|title| title.to_string())
    }

    fn footer_title(&self, _section: usize) -> Option<String> {
        self.footer().title().map(|title| title.to_string())
    }

    fn header_view(&self, _section: usize) -> Option<Arc<dyn PartView>> {
        self.header().view().map(Arc::clone)
    }

    fn footer_view(&self, _section: usize) -> Option<Arc<dyn PartView>> {
        self.footer().view().map(Arc::clone)
    }

    fn header_height(&self, _section: usize) -> RowHeight {
        self.header().height()
    }

    fn footer_height(&self, _section: usize) -> RowHeight {
        self.footer().height()
    }

    fn row_height(&self, path: RowPath) -> RowHeight {
        match self.cells.get(path.row).and_then(|cell| cell.as_height_provider()) {
            Some(provider) => provider.cell_height(path),
            None => RowHeight::Automatic,
        }
    }

    fn did_select(&self, path: RowPath) {
        if let Some(cell) = self.cells.get(path.row)
            && let Some(selectable) = cell.as_selectable()
        {
            selectable.did_select(path);
        }
    }

    fn will_display(&self, path: RowPath) {
        if let Some(cell) = self.cells.get(path.row)
            && let Some(display) = cell.as_will_display()
        {
            display.will_display();
        }
    }

    fn accessory_button_tapped(&self, path: RowPath) {
        if let Some(cell) = self.cells.get(path.row)
            && let Some(accessory) = cell.as_accessory()
        {
            accessory.accessory_button_tapped(path);
        }
    }
}

/// Multiple sections behind one data source.
pub struct ListSectionArray {
    sections: Vec<ListSection>,
}

impl ListSectionArray {
    pub fn new(sections: Vec<ListSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[ListSection] {
        &self.sections
    }

    /// The user started scrolling; dismiss whichever cell holds editing
    /// focus so the input surface gets out of the way.
    pub fn scroll_will_begin(&self) {
        self.dismiss_active_editing();
    }

    /// The user asked to jump to the top; dismiss the active editor and
    /// allow the jump.
    pub fn should_scroll_to_top(&self) -> bool {
        self.dismiss_active_editing();
        true
    }

    fn dismiss_active_editing(&self) {
        debug!("dismiss active editing");
        for section in &self.sections {
            section.end_active_editing();
        }
    }
}

impl From<Vec<ListSection>> for ListSectionArray {
    fn from(sections: Vec<ListSection>) -> Self {
        Self::new(sections)
    }
}

impl ListDataSource for ListSectionArray {
    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.sections
            .get(section)
            .map(|s| s.number_of_rows(section))
            .unwrap_or(0)
    }

    fn cell_at(&self, path: RowPath) -> Option<&dyn Cell> {
        self.sections.get(path.section).and_then(|s| s.cell_at(path))
    }

    fn header_title(&self, section: usize) -> Option<String> {
        self.sections
            .get(section)
            .and_then(|s| s.header_title(section))
    }

    fn footer_title(&self, section: usize) -> Option<String> {
        self.sections
            .get(section)
            .and_then(|s| s.footer_title(section))
    }

    fn header_view(&self, section: usize) -> Option<Arc<dyn PartView>> {
        self.sections
            .get(section)
            .and_then(|s| s.header_view(section))
    }

    fn footer_view(&self, section: usize) -> Option<Arc<dyn PartView>> {
        self.sections
            .get(section)
            .and_then(|s| s.footer_view(section))
    }

    fn header_height(&self, section: usize) -> RowHeight {
        self.sections
            .get(section)
            .map(|s| s.header_height(section))
            .unwrap_or_default()
    }

    fn footer_height(&self, section: usize) -> RowHeight {
        self.sections
            .get(section)
            .map(|s| s.footer_height(section))
            .unwrap_or_default()
    }

    fn row_height(&self, path: RowPath) -> RowHeight {
        self.sections
            .get(path.section)
            .map(|s| s.row_height(path))
            .unwrap_or_default()
    }

    fn did_select(&self, path: RowPath) {
        if let Some(section) = self.sections.get(path.section) {
            section.did_select(path);
        }
    }

    fn will_display(&self, path: RowPath) {
        if let Some(section) = self.sections.get(path.section) {
            section.will_display(path);
        }
    }

    fn accessory_button_tapped(&self, path: RowPath) {
        if let Some(section) = self.sections.get(path.section) {
            section.accessory_button_tapped(path);
        }
    }
}
