//! StackPanelLayout - children in a single row or column.
//!
//! A stack is a grid with one track per child along its axis and one fill
//! track across it. Child positions are reassigned from list order on every
//! pass, so insertions and removals never leave stale cells behind.

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};
use crate::widget::Widget;

use super::Layout;
use super::grid::GridLayout;
use super::proportion::Proportion;
use super::slot::{GridCell, Slot};

/// Stacking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Children flow left to right.
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
}

/// Grid configured as 1xN (horizontal) or Nx1 (vertical).
#[derive(Debug, Clone)]
pub struct StackPanelLayout {
    orientation: Orientation,
    spacing: i32,
    grid: GridLayout,
}

impl StackPanelLayout {
    pub fn new(orientation: Orientation) -> Self {
        let mut grid = GridLayout::new();
        match orientation {
            Orientation::Horizontal => {
                grid.set_default_column_proportion(Proportion::STACK_PANEL_DEFAULT);
                grid.row_proportions_mut().push(Proportion::FILL);
            }
            Orientation::Vertical => {
                grid.set_default_row_proportion(Proportion::STACK_PANEL_DEFAULT);
                grid.column_proportions_mut().push(Proportion::FILL);
            }
        }

        Self {
            orientation,
            spacing: 0,
            grid,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Set spacing between children.
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.set_spacing(spacing);
        self
    }

    /// Set the per-child proportion list.
    pub fn with_proportions(mut self, proportions: impl IntoIterator<Item = Proportion>) -> Self {
        *self.proportions_mut() = proportions.into_iter().collect();
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.spacing = spacing;
        match self.orientation {
            Orientation::Horizontal => self.grid.set_column_spacing(spacing),
            Orientation::Vertical => self.grid.set_row_spacing(spacing),
        }
    }

    /// Proportion for children past the end of the proportion list.
    pub fn default_proportion(&self) -> Proportion {
        match self.orientation {
            Orientation::Horizontal => self.grid.default_column_proportion(),
            Orientation::Vertical => self.grid.default_row_proportion(),
        }
    }

    pub fn set_default_proportion(&mut self, proportion: Proportion) {
        match self.orientation {
            Orientation::Horizontal => self.grid.set_default_column_proportion(proportion),
            Orientation::Vertical => self.grid.set_default_row_proportion(proportion),
        }
    }

    /// Proportions along the stack axis, one per child index.
    pub fn proportions(&self) -> &[Proportion] {
        match self.orientation {
            Orientation::Horizontal => self.grid.column_proportions(),
            Orientation::Vertical => self.grid.row_proportions(),
        }
    }

    pub fn proportions_mut(&mut self) -> &mut Vec<Proportion> {
        match self.orientation {
            Orientation::Horizontal => self.grid.column_proportions_mut(),
            Orientation::Vertical => self.grid.row_proportions_mut(),
        }
    }

    /// Resolved size of the `index`-th child's track along the axis.
    pub fn cell_size(&self, index: usize) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.grid.column_width(index),
            Orientation::Vertical => self.grid.row_height(index),
        }
    }

    /// Divider positions between children along the axis.
    pub fn grid_lines(&self) -> &[i32] {
        match self.orientation {
            Orientation::Horizontal => self.grid.grid_lines_x(),
            Orientation::Vertical => self.grid.grid_lines_y(),
        }
    }

    /// The underlying grid, for the full query surface.
    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    /// Assign each child its track from list order.
    fn assign_cells<W: Widget + ?Sized>(&self, children: &mut [Slot<W>]) {
        for (index, slot) in children.iter_mut().enumerate() {
            slot.cell = match self.orientation {
                Orientation::Horizontal => GridCell::at(index, 0),
                Orientation::Vertical => GridCell::at(0, index),
            };
        }
    }
}

impl Layout for StackPanelLayout {
    fn measure<W: Widget + ?Sized>(&mut self, children: &mut [Slot<W>], available: Size) -> Size {
        self.assign_cells(children);
        self.grid.measure(children, available)
    }

    fn arrange<W: Widget + ?Sized>(&mut self, children: &mut [Slot<W>], bounds: Rect) {
        self.assign_cells(children);
        self.grid.arrange(children, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::Block;

    fn stack_children(blocks: Vec<Block>) -> Vec<Slot<Block>> {
        blocks
            .into_iter()
            .map(|block| Slot {
                cell: GridCell::default(),
                widget: Box::new(block),
            })
            .collect()
    }

    #[test]
    fn test_horizontal_pixels_and_parts() {
        let mut stack = StackPanelLayout::horizontal()
            .with_spacing(10)
            .with_proportions([Proportion::pixels(100.0), Proportion::part(1.0), Proportion::part(3.0)]);
        let mut children = stack_children(vec![Block::new(10, 10), Block::new(10, 10), Block::new(10, 10)]);

        stack.arrange(&mut children, Rect::new(0, 0, 400, 50));

        assert_eq!(stack.grid().column_widths(), &[100, 70, 210]);
        assert_eq!(children[1].widget.bounds(), Rect::new(110, 0, 70, 50));
        assert_eq!(children[2].widget.bounds(), Rect::new(190, 0, 210, 50));
    }

    #[test]
    fn test_vertical_auto_default() {
        let mut stack = StackPanelLayout::vertical().with_spacing(2);
        let mut children = stack_children(vec![Block::new(30, 10), Block::new(50, 20)]);

        let desired = stack.measure(&mut children, Size::new(200, 200));
        assert_eq!(desired, Size::new(50, 32));

        stack.arrange(&mut children, Rect::new(0, 0, 200, 200));
        // Cross axis is a single fill track
        assert_eq!(children[0].widget.bounds(), Rect::new(0, 0, 200, 10));
        assert_eq!(children[1].widget.bounds(), Rect::new(0, 12, 200, 20));
        assert_eq!(stack.grid_lines(), &[11]);
    }

    #[test]
    fn test_positions_follow_list_order() {
        let mut stack = StackPanelLayout::horizontal();
        let mut children = stack_children(vec![Block::new(10, 10), Block::new(20, 10)]);
        children[0].cell = GridCell::at(5, 5).column_span(3);

        stack.measure(&mut children, Size::new(100, 100));
        assert_eq!(children[0].cell, GridCell::at(0, 0));
        assert_eq!(children[1].cell, GridCell::at(1, 0));

        children.swap(0, 1);
        stack.arrange(&mut children, Rect::new(0, 0, 100, 100));
        assert_eq!(children[0].widget.bounds(), Rect::new(0, 0, 20, 100));
        assert_eq!(children[1].widget.bounds(), Rect::new(20, 0, 10, 100));
    }

    #[test]
    fn test_invisible_child_keeps_its_track() {
        let mut stack = StackPanelLayout::horizontal().with_spacing(5);
        let mut children = stack_children(vec![Block::new(10, 10), Block::new(10, 10).hidden(), Block::new(10, 10)]);

        stack.arrange(&mut children, Rect::new(0, 0, 100, 10));
        assert_eq!(stack.cell_size(1), 0);
        assert_eq!(children[2].widget.bounds().x, 20);
    }

    #[test]
    fn test_spacing_forwarding() {
        let mut stack = StackPanelLayout::vertical();
        stack.set_spacing(7);
        assert_eq!(stack.grid().row_spacing(), 7);
        assert_eq!(stack.grid().column_spacing(), 0);

        let mut stack = StackPanelLayout::horizontal();
        stack.set_spacing(3);
        assert_eq!(stack.grid().column_spacing(), 3);
    }

    #[test]
    fn test_default_proportion() {
        let mut stack = StackPanelLayout::horizontal();
        assert_eq!(stack.default_proportion(), Proportion::STACK_PANEL_DEFAULT);

        stack.set_default_proportion(Proportion::part(1.0));
        let mut children = stack_children(vec![Block::new(10, 10), Block::new(10, 10)]);
        stack.arrange(&mut children, Rect::new(0, 0, 100, 10));
        assert_eq!(stack.cell_size(0), 50);
        assert_eq!(stack.cell_size(1), 50);
    }
}
