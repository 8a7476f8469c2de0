//! GridLayout - the two-dimensional track solver.
//!
//! Every compound container reduces to this. Children are placed by their
//! attached [`GridCell`]; each column and row is sized by its [`Proportion`].
//!
//! # Algorithm
//!
//! ```text
//! measure: size grid -> bucket children by origin cell -> accumulate
//!          auto/pixel track sizes -> equalize part tracks -> sum
//! arrange: measure(bounds) -> split leftover among part tracks ->
//!          first fill track takes the rest -> prefix sums -> place children
//! ```
//!
//! The resolved track sizes, cell origins and grid lines stay queryable
//! until the next arrange so renderers can draw dividers and tools can
//! inspect the result.

use crate::primitives::{Rect, Size};
use crate::widget::Widget;

use super::Layout;
use super::proportion::Proportion;
use super::slot::{GridCell, Slot};

/// Grid track solver with instance-owned scratch buffers.
#[derive(Debug, Clone)]
pub struct GridLayout {
    column_spacing: i32,
    row_spacing: i32,
    default_column_proportion: Proportion,
    default_row_proportion: Proportion,
    column_proportions: Vec<Proportion>,
    row_proportions: Vec<Proportion>,

    // Measure scratch
    measure_col_widths: Vec<i32>,
    measure_row_heights: Vec<i32>,
    /// Indices of visible children, in child order.
    visible: Vec<usize>,
    /// Child indices bucketed by origin cell, row-major.
    cells: Vec<Vec<usize>>,

    // Arrange results
    column_widths: Vec<i32>,
    row_heights: Vec<i32>,
    cell_locations_x: Vec<i32>,
    cell_locations_y: Vec<i32>,
    grid_lines_x: Vec<i32>,
    grid_lines_y: Vec<i32>,
    actual_size: Size,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GridLayout {
    /// Create an empty grid. Unlisted tracks use [`Proportion::GRID_DEFAULT`].
    pub fn new() -> Self {
        Self {
            column_spacing: 0,
            row_spacing: 0,
            default_column_proportion: Proportion::GRID_DEFAULT,
            default_row_proportion: Proportion::GRID_DEFAULT,
            column_proportions: Vec::new(),
            row_proportions: Vec::new(),
            measure_col_widths: Vec::new(),
            measure_row_heights: Vec::new(),
            visible: Vec::new(),
            cells: Vec::new(),
            column_widths: Vec::new(),
            row_heights: Vec::new(),
            cell_locations_x: Vec::new(),
            cell_locations_y: Vec::new(),
            grid_lines_x: Vec::new(),
            grid_lines_y: Vec::new(),
            actual_size: Size::ZERO,
        }
    }

    // =====================================================================
    // Configuration
    // =====================================================================

    /// Set spacing between columns.
    pub fn with_column_spacing(mut self, spacing: i32) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Set spacing between rows.
    pub fn with_row_spacing(mut self, spacing: i32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Set the column proportion list.
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Proportion>) -> Self {
        self.column_proportions = columns.into_iter().collect();
        self
    }

    /// Set the row proportion list.
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Proportion>) -> Self {
        self.row_proportions = rows.into_iter().collect();
        self
    }

    pub fn column_spacing(&self) -> i32 {
        self.column_spacing
    }

    pub fn set_column_spacing(&mut self, spacing: i32) {
        self.column_spacing = spacing;
    }

    pub fn row_spacing(&self) -> i32 {
        self.row_spacing
    }

    pub fn set_row_spacing(&mut self, spacing: i32) {
        self.row_spacing = spacing;
    }

    pub fn default_column_proportion(&self) -> Proportion {
        self.default_column_proportion
    }

    pub fn set_default_column_proportion(&mut self, proportion: Proportion) {
        self.default_column_proportion = proportion;
    }

    pub fn default_row_proportion(&self) -> Proportion {
        self.default_row_proportion
    }

    pub fn set_default_row_proportion(&mut self, proportion: Proportion) {
        self.default_row_proportion = proportion;
    }

    pub fn column_proportions(&self) -> &[Proportion] {
        &self.column_proportions
    }

    pub fn column_proportions_mut(&mut self) -> &mut Vec<Proportion> {
        &mut self.column_proportions
    }

    pub fn row_proportions(&self) -> &[Proportion] {
        &self.row_proportions
    }

    pub fn row_proportions_mut(&mut self) -> &mut Vec<Proportion> {
        &mut self.row_proportions
    }

    /// Proportion of column `col`, or the default when unlisted.
    pub fn column_proportion(&self, col: usize) -> Proportion {
        track_proportion(&self.column_proportions, self.default_column_proportion, col)
    }

    /// Proportion of row `row`, or the default when unlisted.
    pub fn row_proportion(&self, row: usize) -> Proportion {
        track_proportion(&self.row_proportions, self.default_row_proportion, row)
    }

    // =====================================================================
    // Query surface (valid until the next arrange)
    // =====================================================================

    /// Resolved column widths.
    pub fn column_widths(&self) -> &[i32] {
        &self.column_widths
    }

    /// Resolved row heights.
    pub fn row_heights(&self) -> &[i32] {
        &self.row_heights
    }

    /// Column origins relative to the arranged bounds.
    pub fn cell_locations_x(&self) -> &[i32] {
        &self.cell_locations_x
    }

    /// Row origins relative to the arranged bounds.
    pub fn cell_locations_y(&self) -> &[i32] {
        &self.cell_locations_y
    }

    /// Vertical divider positions, midway through each column gap.
    pub fn grid_lines_x(&self) -> &[i32] {
        &self.grid_lines_x
    }

    /// Horizontal divider positions, midway through each row gap.
    pub fn grid_lines_y(&self) -> &[i32] {
        &self.grid_lines_y
    }

    /// Sum of resolved track sizes, without spacing.
    pub fn actual_size(&self) -> Size {
        self.actual_size
    }

    pub fn column_width(&self, col: usize) -> i32 {
        self.column_widths.get(col).copied().unwrap_or(0)
    }

    pub fn row_height(&self, row: usize) -> i32 {
        self.row_heights.get(row).copied().unwrap_or(0)
    }

    pub fn cell_location_x(&self, col: usize) -> i32 {
        self.cell_locations_x.get(col).copied().unwrap_or(0)
    }

    pub fn cell_location_y(&self, row: usize) -> i32 {
        self.cell_locations_y.get(row).copied().unwrap_or(0)
    }

    /// Rectangle of a single cell relative to the arranged bounds.
    ///
    /// Returns `Rect::ZERO` for cells outside the resolved grid.
    pub fn cell_rect(&self, col: usize, row: usize) -> Rect {
        match (
            self.cell_locations_x.get(col),
            self.cell_locations_y.get(row),
        ) {
            (Some(&x), Some(&y)) => Rect::new(x, y, self.column_widths[col], self.row_heights[row]),
            _ => Rect::ZERO,
        }
    }

    /// Column under local coordinate `x`.
    ///
    /// Each column owns half of the gap on either side of it.
    pub fn column_at(&self, x: i32) -> Option<usize> {
        track_at(&self.cell_locations_x, &self.column_widths, self.column_spacing, x)
    }

    /// Row under local coordinate `y`.
    pub fn row_at(&self, y: i32) -> Option<usize> {
        track_at(&self.cell_locations_y, &self.row_heights, self.row_spacing, y)
    }

    // =====================================================================
    // Solver steps
    // =====================================================================

    /// Overwrite every part track with `max * weight`.
    fn equalize_parts(&mut self) {
        equalize_parts(
            &mut self.measure_col_widths,
            &self.column_proportions,
            self.default_column_proportion,
        );
        equalize_parts(
            &mut self.measure_row_heights,
            &self.row_proportions,
            self.default_row_proportion,
        );
    }

    /// Rectangle for a child at `cell`, clipped to `bounds`.
    fn child_rect(&self, cell: GridCell, bounds: Rect) -> Rect {
        let width = span_extent(
            &self.column_widths,
            cell.column,
            cell.columns_covered(),
            self.column_spacing,
        );
        let height = span_extent(
            &self.row_heights,
            cell.row,
            cell.rows_covered(),
            self.row_spacing,
        );

        let mut rect = Rect::new(
            bounds.x + self.cell_locations_x[cell.column],
            bounds.y + self.cell_locations_y[cell.row],
            width,
            height,
        );

        if rect.right() > bounds.right() {
            rect.width = bounds.right() - rect.x;
        }
        rect.width = rect.width.max(0);

        if rect.bottom() > bounds.bottom() {
            rect.height = bounds.bottom() - rect.y;
        }
        rect.height = rect.height.max(0);

        rect
    }
}

impl Layout for GridLayout {
    fn measure<W: Widget + ?Sized>(&mut self, children: &mut [Slot<W>], available: Size) -> Size {
        let mut columns = self.column_proportions.len();
        let mut rows = self.row_proportions.len();

        self.visible.clear();
        for (index, slot) in children.iter().enumerate() {
            if !slot.is_visible() {
                continue;
            }
            self.visible.push(index);
            columns = columns.max(slot.cell.column_end());
            rows = rows.max(slot.cell.row_end());
        }

        self.measure_col_widths.clear();
        self.measure_col_widths.resize(columns, 0);
        self.measure_row_heights.clear();
        self.measure_row_heights.resize(rows, 0);

        // Bucket by origin cell only; spanned cells stay empty
        let cell_count = rows * columns;
        if self.cells.len() < cell_count {
            self.cells.resize_with(cell_count, Vec::new);
        }
        for bucket in &mut self.cells {
            bucket.clear();
        }
        for &index in &self.visible {
            let cell = children[index].cell;
            self.cells[cell.row * columns + cell.column].push(index);
        }

        let available = Size::new(
            available.width - spacing_total(columns, self.column_spacing),
            available.height - spacing_total(rows, self.row_spacing),
        )
        .clamp_non_negative();

        for row in 0..rows {
            for col in 0..columns {
                let row_proportion = self.row_proportion(row);
                let col_proportion = self.column_proportion(col);

                if col_proportion.is_pixels() {
                    self.measure_col_widths[col] = col_proportion.pixel_size();
                }
                if row_proportion.is_pixels() {
                    self.measure_row_heights[row] = row_proportion.pixel_size();
                }

                for &index in &self.cells[row * columns + col] {
                    let slot = &mut children[index];

                    let mut measured = Size::ZERO;
                    if !(row_proportion.is_pixels() && col_proportion.is_pixels()) {
                        measured = slot.widget.measure(available);
                    }

                    // Spanning children never drive track sizes
                    if slot.cell.columns_covered() != 1 {
                        measured.width = 0;
                    }
                    if slot.cell.rows_covered() != 1 {
                        measured.height = 0;
                    }

                    if !col_proportion.is_pixels() && measured.width > self.measure_col_widths[col] {
                        self.measure_col_widths[col] = measured.width;
                    }
                    if !row_proportion.is_pixels() && measured.height > self.measure_row_heights[row] {
                        self.measure_row_heights[row] = measured.height;
                    }
                }
            }
        }

        self.equalize_parts();

        Size::new(
            self.measure_col_widths.iter().sum::<i32>() + spacing_total(columns, self.column_spacing),
            self.measure_row_heights.iter().sum::<i32>() + spacing_total(rows, self.row_spacing),
        )
    }

    fn arrange<W: Widget + ?Sized>(&mut self, children: &mut [Slot<W>], bounds: Rect) {
        // Always re-measure against the final size
        self.measure(children, bounds.size());

        self.column_widths.clone_from(&self.measure_col_widths);
        self.row_heights.clone_from(&self.measure_row_heights);

        distribute(
            &mut self.column_widths,
            &self.column_proportions,
            self.default_column_proportion,
            bounds.width,
            self.column_spacing,
        );
        distribute(
            &mut self.row_heights,
            &self.row_proportions,
            self.default_row_proportion,
            bounds.height,
            self.row_spacing,
        );

        accumulate_offsets(
            &self.column_widths,
            self.column_spacing,
            &mut self.cell_locations_x,
            &mut self.grid_lines_x,
        );
        accumulate_offsets(
            &self.row_heights,
            self.row_spacing,
            &mut self.cell_locations_y,
            &mut self.grid_lines_y,
        );

        self.actual_size = Size::new(
            self.column_widths.iter().sum(),
            self.row_heights.iter().sum(),
        );

        tracing::trace!(
            columns = ?self.column_widths,
            rows = ?self.row_heights,
            children = self.visible.len(),
            "grid arranged"
        );

        for &index in &self.visible {
            let rect = self.child_rect(children[index].cell, bounds);
            children[index].widget.arrange(rect);
        }
    }
}

// =========================================================================
// Helper Functions
// =========================================================================

#[inline]
fn track_proportion(list: &[Proportion], default: Proportion, index: usize) -> Proportion {
    list.get(index).copied().unwrap_or(default)
}

/// Total spacing between `count` tracks.
#[inline]
fn spacing_total(count: usize, spacing: i32) -> i32 {
    count.saturating_sub(1) as i32 * spacing
}

fn equalize_parts(sizes: &mut [i32], proportions: &[Proportion], default: Proportion) {
    let is_part = |index: usize| track_proportion(proportions, default, index).is_part();

    let max = (0..sizes.len())
        .filter(|&i| is_part(i))
        .map(|i| sizes[i])
        .max()
        .unwrap_or(0);

    for (index, size) in sizes.iter_mut().enumerate() {
        let proportion = track_proportion(proportions, default, index);
        if proportion.is_part() {
            *size = (max as f32 * proportion.value) as i32;
        }
    }
}

/// Split `extent` among tracks whose size is not fixed.
///
/// Part tracks take a weighted share of what the fixed tracks leave; the
/// first fill track takes what the part tracks leave.
fn distribute(
    sizes: &mut [i32],
    proportions: &[Proportion],
    default: Proportion,
    extent: i32,
    spacing: i32,
) {
    let mut remaining = (extent - spacing_total(sizes.len(), spacing)) as f32;

    let mut total_part = 0.0f32;
    for (index, &size) in sizes.iter().enumerate() {
        let proportion = track_proportion(proportions, default, index);
        if proportion.is_fixed() {
            remaining -= size as f32;
        } else {
            total_part += proportion.value;
        }
    }

    if total_part.abs() > f32::EPSILON {
        let mut took = 0.0f32;
        for (index, size) in sizes.iter_mut().enumerate() {
            let proportion = track_proportion(proportions, default, index);
            if proportion.is_part() {
                *size = ((proportion.value * remaining / total_part) as i32).max(0);
                took += *size as f32;
            }
        }
        remaining -= took;
    }

    let first_fill = (0..sizes.len()).find(|&i| track_proportion(proportions, default, i).is_fill());
    if let Some(index) = first_fill {
        sizes[index] = (remaining as i32).max(0);
    }
}

/// Prefix-sum track sizes into origins and divider positions.
fn accumulate_offsets(sizes: &[i32], spacing: i32, locations: &mut Vec<i32>, lines: &mut Vec<i32>) {
    locations.clear();
    lines.clear();

    let mut position = 0;
    for (index, &size) in sizes.iter().enumerate() {
        locations.push(position);
        position += size;

        if index + 1 < sizes.len() {
            lines.push(position + spacing / 2);
        }

        position += spacing;
    }
}

/// Extent of `span` consecutive tracks starting at `start`, gaps included.
#[inline]
fn span_extent(sizes: &[i32], start: usize, span: usize, spacing: i32) -> i32 {
    sizes[start..start + span].iter().sum::<i32>() + spacing_total(span, spacing)
}

fn track_at(locations: &[i32], sizes: &[i32], spacing: i32, position: i32) -> Option<usize> {
    let before = spacing / 2;
    let after = spacing - before;

    locations
        .iter()
        .zip(sizes)
        .position(|(&start, &size)| position >= start - before && position < start + size + after)
}

// =========================================================================
// Tests
// =========================================================================
