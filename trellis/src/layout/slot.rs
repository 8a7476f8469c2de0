//! Child entries with their attached grid position.
//!
//! The position a container assigns to a child lives next to the child in
//! the container's own list, never on the widget.

use serde::{Deserialize, Serialize};

use crate::widget::{BoxedWidget, Widget};

/// Attached position of a child inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
    pub column_span: usize,
    pub row_span: usize,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            column: 0,
            row: 0,
            column_span: 1,
            row_span: 1,
        }
    }
}

impl GridCell {
    /// Single cell at (`column`, `row`).
    #[inline]
    pub const fn at(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            column_span: 1,
            row_span: 1,
        }
    }

    /// Set the number of columns covered.
    pub fn column_span(mut self, span: usize) -> Self {
        self.column_span = span;
        self
    }

    /// Set the number of rows covered.
    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }

    /// Column span with 0 treated as 1.
    #[inline]
    pub fn columns_covered(&self) -> usize {
        self.column_span.max(1)
    }

    /// Row span with 0 treated as 1.
    #[inline]
    pub fn rows_covered(&self) -> usize {
        self.row_span.max(1)
    }

    /// One past the last column covered.
    #[inline]
    pub fn column_end(&self) -> usize {
        self.column + self.columns_covered()
    }

    /// One past the last row covered.
    #[inline]
    pub fn row_end(&self) -> usize {
        self.row + self.rows_covered()
    }

    /// Whether two cells cover at least one common grid cell.
    pub fn overlaps(&self, other: &GridCell) -> bool {
        self.column < other.column_end()
            && other.column < self.column_end()
            && self.row < other.row_end()
            && other.row < self.row_end()
    }
}

/// A child widget paired with its attached position.
pub struct Slot<W: ?Sized = dyn Widget> {
    pub cell: GridCell,
    pub widget: Box<W>,
}

impl Slot {
    /// Wrap a boxed widget at `cell`.
    pub fn new(widget: BoxedWidget, cell: GridCell) -> Self {
        Self { cell, widget }
    }
}

impl<W: Widget + ?Sized> Slot<W> {
    #[inline]
    pub(crate) fn is_visible(&self) -> bool {
        self.widget.is_visible()
    }
}

impl<W: ?Sized> std::fmt::Debug for Slot<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot").field("cell", &self.cell).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell() {
        let cell = GridCell::default();
        assert_eq!(cell, GridCell::at(0, 0));
        assert_eq!(cell.column_end(), 1);
        assert_eq!(cell.row_end(), 1);
    }

    #[test]
    fn test_zero_span_counts_as_one() {
        let cell = GridCell::at(2, 3).column_span(0).row_span(0);
        assert_eq!(cell.columns_covered(), 1);
        assert_eq!(cell.rows_covered(), 1);
        assert_eq!(cell.column_end(), 3);
        assert_eq!(cell.row_end(), 4);
    }

    #[test]
    fn test_overlaps() {
        let wide = GridCell::at(0, 0).column_span(3);
        assert!(wide.overlaps(&GridCell::at(2, 0)));
        assert!(!wide.overlaps(&GridCell::at(3, 0)));
        assert!(!wide.overlaps(&GridCell::at(1, 1)));
    }

    #[test]
    fn test_cell_from_partial_json() {
        let cell: GridCell = serde_json::from_str(r#"{"column": 2, "row_span": 2}"#).unwrap();
        assert_eq!(cell, GridCell::at(2, 0).row_span(2));
    }
}
