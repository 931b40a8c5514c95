//! Headless table engine
//!
//! A generic paginated, searchable, sortable grid driven by a declarative
//! data model: rows of [`Entry`] cells, each cell optionally carrying its
//! own sort key. [`TableDataset`] owns the full dataset and derives the
//! visible page from search term, sort state and page index on every
//! change; rendering is entirely the embedder's concern.

mod entry;
mod selection;
mod state;

pub use entry::{Entry, SortKey, SortMode, SortValue};
pub use selection::{Selection, SelectionMode};
pub use state::{Column, Row, RowAction, TableDataset};
