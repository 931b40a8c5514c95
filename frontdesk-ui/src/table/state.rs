//! Table dataset state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::entry::{Entry, SortMode};
use super::selection::{Selection, SelectionMode};

/// A table row: one entry per column.
pub type Row = Vec<Entry>;

/// Message shown when the visible page is empty and the caller supplied
/// nothing better.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data has been received.";

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Unique identifier for a TableDataset instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetId(usize);

impl DatasetId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dataset_{}", self.0)
    }
}

/// Column definition.
#[derive(Debug, Clone)]
pub struct Column {
    /// Header caption.
    pub title: String,
    /// Whether header clicks sort this column.
    pub sortable: bool,
    /// Hidden columns still carry data (e.g. a record id) but are not
    /// rendered.
    pub visible: bool,
}

impl Column {
    /// Creates a visible, sortable column.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sortable: true,
            visible: true,
        }
    }

    /// Creates a hidden data column.
    pub fn hidden(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sortable: false,
            visible: false,
        }
    }

    /// Disables sorting on this column.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// An entry of the per-row action menu.
///
/// When actions are configured, the last column of every row carries the
/// menu; triggering an action invokes its handler with the row's position
/// in the filtered, sorted sequence.
#[derive(Clone)]
pub struct RowAction {
    label: String,
    handler: Arc<dyn Fn(usize) + Send + Sync>,
}

impl RowAction {
    /// Creates an action with the given menu caption and handler.
    pub fn new<F>(label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            handler: Arc::new(handler),
        }
    }

    /// The menu caption.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for RowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowAction").field("label", &self.label).finish()
    }
}

/// Internal state for the dataset.
#[derive(Debug)]
struct DatasetInner {
    /// Column definitions.
    columns: Vec<Column>,
    /// The full dataset, in current sort order.
    rows: Vec<Row>,
    /// Active search term; empty means no filtering.
    search_term: String,
    /// Current page, 1-based.
    page: usize,
    /// Rows per page.
    page_size: usize,
    /// Active sort (column index, ascending). At most one column.
    sort: Option<(usize, bool)>,
    /// Selection by position in the filtered, sorted sequence.
    selection: Selection<usize>,
    /// Per-row action menu entries.
    actions: Vec<RowAction>,
    /// Message the embedder shows for an empty visible page.
    empty_message: String,
}

impl DatasetInner {
    fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            search_term: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            selection: Selection::none(),
            actions: Vec::new(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

/// A paginated, searchable, sortable grid over rows of [`Entry`] cells.
///
/// The dataset owns the full unpaginated data; the visible page is always
/// derived from (rows, search term, sort state, page index, page size)
/// and never mutated independently. All operations are synchronous
/// in-memory transformations.
///
/// Cheap to clone; clones share state.
#[derive(Debug)]
pub struct TableDataset {
    id: DatasetId,
    inner: Arc<RwLock<DatasetInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl TableDataset {
    /// Creates a new dataset with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: DatasetId::new(),
            inner: Arc::new(RwLock::new(DatasetInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sets the selection mode.
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        self.set_selection_mode(mode);
        self
    }

    /// Sets the page size.
    pub fn with_page_size(self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Gets the unique ID.
    pub fn id(&self) -> DatasetId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Gets the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|inner| inner.columns.clone())
            .unwrap_or_default()
    }

    /// Replaces the column definitions.
    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.columns = columns;
            if !inner.actions.is_empty()
                && let Some(last) = inner.columns.last_mut()
            {
                last.sortable = false;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Number of rows in the full dataset.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.rows.len()).unwrap_or(0)
    }

    /// Checks if the full dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the full dataset.
    ///
    /// Search term and sort state are preserved; the active sort is
    /// re-applied to the new data so the visible page stays a pure
    /// function of the dataset state. The page index is re-clamped,
    /// selection is reset, and a lone row starts out selected.
    pub fn set_rows(&self, rows: Vec<Row>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.rows = rows;
            if let Some((column, ascending)) = inner.sort {
                Self::sort_rows(&mut inner.rows, column);
                if !ascending {
                    inner.rows.reverse();
                }
            }
            inner.selection.clear();
            Self::clamp_page(&mut inner);
            if inner.rows.len() == 1 && inner.selection.mode != SelectionMode::None {
                inner.selection.toggle(0);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clears the dataset.
    pub fn clear(&self) {
        self.set_rows(Vec::new());
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// The active search term.
    pub fn search_term(&self) -> String {
        self.inner
            .read()
            .map(|inner| inner.search_term.clone())
            .unwrap_or_default()
    }

    /// Sets the search term and jumps back to the first page.
    ///
    /// A non-empty term keeps only rows where any cell's display value
    /// contains it case-insensitively; the empty term clears filtering and
    /// restores the unfiltered ordering (still subject to sort and
    /// pagination).
    pub fn set_search_term(&self, term: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.search_term = term.into();
            inner.page = 1;
            inner.selection.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clears the search term.
    pub fn clear_search(&self) {
        self.set_search_term("");
    }

    /// Number of rows matching the active search.
    pub fn filtered_len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| Self::filtered_indices(&inner).len())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// The active sort as (column index, ascending).
    pub fn sort(&self) -> Option<(usize, bool)> {
        self.inner.read().ok().and_then(|inner| inner.sort)
    }

    /// Sorts by a column, toggling direction on repeat requests.
    ///
    /// A column becoming the active sort column is stable-sorted ascending
    /// by its entries' sort keys; a repeat request on a static or identity
    /// column merely reverses the current order. Dynamic columns recompute
    /// every row's key on every request, then reverse when descending was
    /// asked for. Only one column is active at a time; requests on
    /// unsortable columns are ignored.
    pub fn sort_by_column(&self, column: usize) {
        if let Ok(mut inner) = self.inner.write() {
            if !inner.columns.get(column).is_some_and(|c| c.sortable) {
                return;
            }
            let mode = inner
                .rows
                .first()
                .and_then(|row| row.get(column))
                .map(Entry::sort_mode);
            let Some(mode) = mode else {
                return;
            };

            let repeat = matches!(inner.sort, Some((active, _)) if active == column);
            let ascending = match inner.sort {
                Some((active, was_ascending)) if active == column => !was_ascending,
                _ => true,
            };

            match mode {
                SortMode::Dynamic => {
                    // keys may depend on state that changed since the rows
                    // were built
                    Self::sort_rows(&mut inner.rows, column);
                    if !ascending {
                        inner.rows.reverse();
                    }
                }
                _ if repeat => inner.rows.reverse(),
                _ => Self::sort_rows(&mut inner.rows, column),
            }

            inner.sort = Some((column, ascending));
            inner.selection.clear();
            Self::clamp_page(&mut inner);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clears the sort state; rows keep their current order until the
    /// next [`TableDataset::set_rows`] or sort request.
    pub fn clear_sort(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.sort = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// The current page, 1-based.
    pub fn page(&self) -> usize {
        self.inner.read().map(|inner| inner.page).unwrap_or(1)
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Sets the page size; zero is ignored.
    pub fn set_page_size(&self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.page_size = page_size;
            Self::clamp_page(&mut inner);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Moves to a page, clamped to `[1, page_count()]`.
    pub fn set_page(&self, page: usize) {
        if let Ok(mut inner) = self.inner.write() {
            inner.page = page;
            Self::clamp_page(&mut inner);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Number of pages over the filtered rows; at least 1.
    pub fn page_count(&self) -> usize {
        self.inner
            .read()
            .map(|inner| Self::page_count_inner(&inner))
            .unwrap_or(1)
    }

    /// The visible page: the current window over the filtered, sorted
    /// rows.
    ///
    /// Empty when the dataset is empty or the search matched nothing; the
    /// embedder then shows [`TableDataset::empty_message`].
    pub fn visible_rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|inner| {
                let indices = Self::filtered_indices(&inner);
                let start = (inner.page - 1) * inner.page_size;
                indices
                    .into_iter()
                    .skip(start)
                    .take(inner.page_size)
                    .map(|index| inner.rows[index].clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The row at a position in the filtered, sorted sequence (spanning
    /// all pages).
    pub fn row_at(&self, index: usize) -> Option<Row> {
        self.inner.read().ok().and_then(|inner| {
            let indices = Self::filtered_indices(&inner);
            indices.get(index).map(|&row| inner.rows[row].clone())
        })
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// The selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|inner| inner.selection.mode)
            .unwrap_or_default()
    }

    /// Sets the selection mode, clearing any selection when disabling.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        if let Ok(mut inner) = self.inner.write() {
            inner.selection.mode = mode;
            if mode == SelectionMode::None {
                inner.selection.clear();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggles selection of the row at a position in the filtered,
    /// sorted sequence. Returns `true` if the selection changed.
    pub fn select_row(&self, index: usize) -> bool {
        if let Ok(mut inner) = self.inner.write() {
            if index >= Self::filtered_indices(&inner).len() {
                return false;
            }
            if inner.selection.toggle(index) {
                self.dirty.store(true, Ordering::SeqCst);
                return true;
            }
        }
        false
    }

    /// Checks whether the row at a position is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.inner
            .read()
            .map(|inner| inner.selection.is_selected(&index))
            .unwrap_or(false)
    }

    /// Positions of all selected rows, ascending.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|inner| {
                let mut selected: Vec<usize> = inner.selection.selected.iter().copied().collect();
                selected.sort_unstable();
                selected
            })
            .unwrap_or_default()
    }

    /// Clears the selection.
    pub fn deselect_all(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.selection.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Row actions
    // -------------------------------------------------------------------------

    /// Configures the per-row action menu.
    ///
    /// The menu lives in the last column, which stops being sortable.
    pub fn set_row_actions(&self, actions: Vec<RowAction>) {
        if let Ok(mut inner) = self.inner.write() {
            if let Some(last) = inner.columns.last_mut() {
                last.sortable = false;
            }
            inner.actions = actions;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The configured action menu entries.
    pub fn row_actions(&self) -> Vec<RowAction> {
        self.inner
            .read()
            .map(|inner| inner.actions.clone())
            .unwrap_or_default()
    }

    /// Invokes an action for the row at a position in the filtered,
    /// sorted sequence. Returns `false` for unknown rows or actions.
    pub fn trigger_action(&self, row: usize, action: usize) -> bool {
        let handler = self.inner.read().ok().and_then(|inner| {
            if row >= Self::filtered_indices(&inner).len() {
                return None;
            }
            inner
                .actions
                .get(action)
                .map(|action| Arc::clone(&action.handler))
        });

        // invoke outside the lock so handlers may call back into the
        // dataset
        match handler {
            Some(handler) => {
                handler(row);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Empty message
    // -------------------------------------------------------------------------

    /// Message the embedder shows when the visible page is empty.
    pub fn empty_message(&self) -> String {
        self.inner
            .read()
            .map(|inner| inner.empty_message.clone())
            .unwrap_or_else(|_| DEFAULT_EMPTY_MESSAGE.to_string())
    }

    /// Overrides the empty-page message.
    pub fn set_empty_message(&self, message: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.empty_message = message.into();
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Checks if the dataset has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clears the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Derivation helpers
    // -------------------------------------------------------------------------

    /// Positions of the rows matching the active search, in current row
    /// order.
    fn filtered_indices(inner: &DatasetInner) -> Vec<usize> {
        if inner.search_term.is_empty() {
            return (0..inner.rows.len()).collect();
        }
        let needle = inner.search_term.to_lowercase();
        inner
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                row.iter()
                    .any(|entry| entry.value().to_lowercase().contains(&needle))
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Stable ascending sort by the column's resolved sort keys.
    fn sort_rows(rows: &mut [Row], column: usize) {
        rows.sort_by(|a, b| {
            let left = a.get(column).map(Entry::sort_value);
            let right = b.get(column).map(Entry::sort_value);
            left.cmp(&right)
        });
    }

    fn page_count_inner(inner: &DatasetInner) -> usize {
        Self::filtered_indices(inner)
            .len()
            .div_ceil(inner.page_size)
            .max(1)
    }

    fn clamp_page(inner: &mut DatasetInner) {
        let pages = Self::page_count_inner(inner);
        inner.page = inner.page.clamp(1, pages);
    }
}

impl Clone for TableDataset {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for TableDataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
