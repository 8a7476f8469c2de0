//! Containers - widgets that own a layout strategy and their children.
//!
//! A container is itself a [`Widget`], so trees nest: its measure pass runs
//! the strategy's measure, its arrange pass stores its bounds and runs the
//! strategy's arrange over the padded content area.
//!
//! The attached position of each child lives in its [`Slot`]. Proportions
//! and spacing live in the strategy. Both are owned here and may be mutated
//! freely between frames; the next pass recomputes everything.

use crate::primitives::{Point, Rect, Size};
use crate::widget::{BoxedWidget, Widget};

use super::Layout;
use super::grid::GridLayout;
use super::length::Padding;
use super::proportion::Proportion;
use super::single::SingleItemLayout;
use super::slot::{GridCell, Slot};
use super::stack::{Orientation, StackPanelLayout};

// =========================================================================
// Container
// =========================================================================

/// A widget that lays out its children with strategy `L`.
pub struct Container<L> {
    layout: L,
    children: Vec<Slot>,
    padding: Padding,
    visible: bool,
    bounds: Rect,
}

/// Two-dimensional container placing children by [`GridCell`].
pub type Grid = Container<GridLayout>;

/// Container stacking children along one axis.
pub type StackPanel = Container<StackPanelLayout>;

/// Container holding at most one child that fills it.
pub type SingleItemContainer = Container<SingleItemLayout>;

impl<L: Layout> Container<L> {
    /// Wrap a strategy with no children.
    pub fn with_layout(layout: L) -> Self {
        Self {
            layout,
            children: Vec::new(),
            padding: Padding::default(),
            visible: true,
            bounds: Rect::ZERO,
        }
    }

    /// Set uniform padding.
    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = Padding::all(padding);
        self
    }

    /// Set custom padding.
    pub fn padding_custom(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn children(&self) -> &[Slot] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child widget at `index`.
    pub fn child_at(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|slot| slot.widget.as_ref())
    }

    /// Mutable child widget at `index`.
    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut BoxedWidget> {
        self.children.get_mut(index).map(|slot| &mut slot.widget)
    }

    /// Area handed to the strategy: bounds minus padding.
    pub fn content_bounds(&self) -> Rect {
        deflate(self.bounds, &self.padding)
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }
}

impl<L: Layout> Widget for Container<L> {
    fn measure(&mut self, available: Size) -> Size {
        let inner = Size::new(
            available.width - self.padding.horizontal(),
            available.height - self.padding.vertical(),
        );
        let content = self.layout.measure(&mut self.children, inner);
        Size::new(
            content.width + self.padding.horizontal(),
            content.height + self.padding.vertical(),
        )
    }

    fn arrange(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let content = deflate(bounds, &self.padding);
        self.layout.arrange(&mut self.children, content);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

fn deflate(bounds: Rect, padding: &Padding) -> Rect {
    Rect::new(
        bounds.x + padding.left,
        bounds.y + padding.top,
        (bounds.width - padding.horizontal()).max(0),
        (bounds.height - padding.vertical()).max(0),
    )
}

// =========================================================================
// Grid
// =========================================================================

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::with_layout(GridLayout::new())
    }

    /// Set the column proportion list.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Proportion>) -> Self {
        *self.layout.column_proportions_mut() = columns.into_iter().collect();
        self
    }

    /// Set the row proportion list.
    pub fn rows(mut self, rows: impl IntoIterator<Item = Proportion>) -> Self {
        *self.layout.row_proportions_mut() = rows.into_iter().collect();
        self
    }

    /// Set spacing between columns.
    pub fn column_spacing(mut self, spacing: i32) -> Self {
        self.layout.set_column_spacing(spacing);
        self
    }

    /// Set spacing between rows.
    pub fn row_spacing(mut self, spacing: i32) -> Self {
        self.layout.set_row_spacing(spacing);
        self
    }

    /// Add a child at `cell`.
    pub fn push(mut self, widget: impl Widget + 'static, cell: GridCell) -> Self {
        self.add(widget, cell);
        self
    }

    /// Add a child at `cell`, returning its index.
    pub fn add(&mut self, widget: impl Widget + 'static, cell: GridCell) -> usize {
        self.add_boxed(Box::new(widget), cell)
    }

    /// Add an already boxed child at `cell`, returning its index.
    pub fn add_boxed(&mut self, widget: BoxedWidget, cell: GridCell) -> usize {
        self.children.push(Slot::new(widget, cell));
        self.children.len() - 1
    }

    /// Remove the child at `index`.
    pub fn remove(&mut self, index: usize) -> Option<BoxedWidget> {
        (index < self.children.len()).then(|| self.children.remove(index).widget)
    }

    pub fn cell(&self, index: usize) -> Option<GridCell> {
        self.children.get(index).map(|slot| slot.cell)
    }

    /// Attached position of the child at `index`, for in-place edits.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut GridCell> {
        self.children.get_mut(index).map(|slot| &mut slot.cell)
    }

    pub fn column_proportions_mut(&mut self) -> &mut Vec<Proportion> {
        self.layout.column_proportions_mut()
    }

    pub fn row_proportions_mut(&mut self) -> &mut Vec<Proportion> {
        self.layout.row_proportions_mut()
    }

    /// `(column, row)` under an absolute point.
    ///
    /// Points in the padding, or past the last track, hit nothing.
    pub fn cell_at(&self, point: Point) -> Option<(usize, usize)> {
        let content = self.content_bounds();
        if !content.contains(point) {
            return None;
        }

        let local = point - content.origin();
        Some((self.layout.column_at(local.x)?, self.layout.row_at(local.y)?))
    }
}

// =========================================================================
// StackPanel
// =========================================================================

impl StackPanel {
    pub fn new(orientation: Orientation) -> Self {
        Self::with_layout(StackPanelLayout::new(orientation))
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Set spacing between children.
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.layout.set_spacing(spacing);
        self
    }

    /// Set the per-child proportion list.
    pub fn proportions(mut self, proportions: impl IntoIterator<Item = Proportion>) -> Self {
        *self.layout.proportions_mut() = proportions.into_iter().collect();
        self
    }

    /// Append a child.
    pub fn push(mut self, widget: impl Widget + 'static) -> Self {
        self.add(widget);
        self
    }

    /// Append a child, returning its index.
    pub fn add(&mut self, widget: impl Widget + 'static) -> usize {
        self.add_boxed(Box::new(widget))
    }

    /// Append an already boxed child, returning its index.
    pub fn add_boxed(&mut self, widget: BoxedWidget) -> usize {
        self.children.push(Slot::new(widget, GridCell::default()));
        self.children.len() - 1
    }

    /// Insert a child at `index`, shifting later children along the axis.
    ///
    /// `index` is clamped to the current length.
    pub fn insert(&mut self, index: usize, widget: impl Widget + 'static) {
        let index = index.min(self.children.len());
        self.children
            .insert(index, Slot::new(Box::new(widget), GridCell::default()));
    }

    /// Remove the child at `index`.
    pub fn remove(&mut self, index: usize) -> Option<BoxedWidget> {
        (index < self.children.len()).then(|| self.children.remove(index).widget)
    }

    /// Reorder children; positions follow on the next pass.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.children.swap(a, b);
    }

    pub fn proportions_mut(&mut self) -> &mut Vec<Proportion> {
        self.layout.proportions_mut()
    }
}

// =========================================================================
// SingleItemContainer
// =========================================================================

impl Default for SingleItemContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleItemContainer {
    pub fn new() -> Self {
        Self::with_layout(SingleItemLayout::new())
    }

    /// Set the only child.
    pub fn with_child(mut self, widget: impl Widget + 'static) -> Self {
        self.set_child(widget);
        self
    }

    /// Replace the child. Any previous child is dropped first.
    pub fn set_child(&mut self, widget: impl Widget + 'static) {
        self.set_child_boxed(Box::new(widget));
    }

    pub fn set_child_boxed(&mut self, widget: BoxedWidget) {
        self.children.clear();
        self.children.push(Slot::new(widget, GridCell::default()));
    }

    /// Remove and return the child.
    pub fn take_child(&mut self) -> Option<BoxedWidget> {
        self.children.pop().map(|slot| slot.widget)
    }

    pub fn child(&self) -> Option<&dyn Widget> {
        self.child_at(0)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::Block;

    #[test]
    fn test_grid_form() {
        let mut grid = Grid::new()
            .columns([Proportion::AUTO, Proportion::FILL])
            .rows([Proportion::AUTO, Proportion::AUTO])
            .column_spacing(8)
            .row_spacing(4)
            .push(Block::new(60, 20), GridCell::at(0, 0))
            .push(Block::new(100, 24), GridCell::at(1, 0))
            .push(Block::new(45, 20), GridCell::at(0, 1))
            .push(Block::new(100, 24), GridCell::at(1, 1));

        let desired = grid.measure(Size::new(400, 300));
        assert_eq!(desired, Size::new(168, 52));

        grid.arrange(Rect::new(0, 0, 400, 300));
        assert_eq!(grid.layout().column_widths(), &[60, 332]);
        assert_eq!(grid.children()[3].widget.bounds(), Rect::new(68, 28, 332, 24));
    }

    #[test]
    fn test_padding_deflates_content() {
        let mut grid = Grid::new()
            .padding(10)
            .columns([Proportion::FILL])
            .rows([Proportion::FILL])
            .push(Block::new(5, 5), GridCell::default());

        assert_eq!(grid.measure(Size::new(100, 100)), Size::new(25, 25));

        grid.arrange(Rect::new(0, 0, 100, 50));
        assert_eq!(grid.bounds(), Rect::new(0, 0, 100, 50));
        assert_eq!(grid.content_bounds(), Rect::new(10, 10, 80, 30));
        assert_eq!(grid.children()[0].widget.bounds(), Rect::new(10, 10, 80, 30));
    }

    #[test]
    fn test_cell_mutation_applies_next_pass() {
        let mut grid = Grid::new()
            .columns([Proportion::pixels(50.0), Proportion::pixels(50.0)])
            .rows([Proportion::pixels(10.0)]);
        let index = grid.add(Block::new(1, 1), GridCell::at(0, 0));

        grid.arrange(Rect::new(0, 0, 100, 10));
        assert_eq!(grid.children()[index].widget.bounds().x, 0);

        if let Some(cell) = grid.cell_mut(index) {
            cell.column = 1;
        }
        grid.arrange(Rect::new(0, 0, 100, 10));
        assert_eq!(grid.cell(index), Some(GridCell::at(1, 0)));
        assert_eq!(grid.children()[index].widget.bounds().x, 50);
    }

    #[test]
    fn test_grid_remove() {
        let mut grid = Grid::new().push(Block::new(1, 1), GridCell::default());
        assert!(grid.remove(3).is_none());
        assert!(grid.remove(0).is_some());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_hit_testing_is_absolute() {
        let mut grid = Grid::new()
            .padding(5)
            .columns([Proportion::pixels(10.0), Proportion::pixels(10.0)])
            .rows([Proportion::pixels(10.0)]);
        grid.arrange(Rect::new(100, 100, 50, 50));

        assert_eq!(grid.cell_at(Point::new(106, 106)), Some((0, 0)));
        assert_eq!(grid.cell_at(Point::new(116, 114)), Some((1, 0)));
        // Padding
        assert_eq!(grid.cell_at(Point::new(106, 104)), None);
        // Inside the content but past the last column
        assert_eq!(grid.cell_at(Point::new(130, 106)), None);
    }

    #[test]
    fn test_stack_insert_reorders() {
        let mut stack = StackPanel::vertical()
            .spacing(2)
            .push(Block::new(10, 10))
            .push(Block::new(10, 30));
        stack.insert(0, Block::new(10, 20));

        stack.arrange(Rect::new(0, 0, 50, 200));
        let ys: Vec<i32> = stack.children().iter().map(|slot| slot.widget.bounds().y).collect();
        assert_eq!(ys, vec![0, 22, 34]);
    }

    #[test]
    fn test_stack_remove_leaves_no_gap() {
        let mut stack = StackPanel::horizontal()
            .push(Block::new(10, 10))
            .push(Block::new(20, 10))
            .push(Block::new(30, 10));
        assert!(stack.remove(1).is_some());

        stack.arrange(Rect::new(0, 0, 200, 10));
        assert_eq!(stack.children()[1].widget.bounds(), Rect::new(10, 0, 30, 10));
        assert_eq!(stack.layout().grid().column_widths(), &[10, 30]);
    }

    #[test]
    fn test_single_item_replaces_child() {
        let mut single = SingleItemContainer::new().with_child(Block::new(10, 10));
        single.set_child(Block::new(70, 30));
        assert_eq!(single.len(), 1);
        assert_eq!(single.measure(Size::new(500, 500)), Size::new(70, 30));

        single.arrange(Rect::new(3, 4, 200, 100));
        assert_eq!(single.child().map(|w| w.bounds()), Some(Rect::new(3, 4, 200, 100)));

        assert!(single.take_child().is_some());
        assert!(single.take_child().is_none());
        assert_eq!(single.measure(Size::new(500, 500)), Size::ZERO);
    }

    #[test]
    fn test_nested_containers() {
        let inner = StackPanel::horizontal()
            .spacing(4)
            .push(Block::new(20, 10))
            .push(Block::new(30, 12));
        let mut outer = Grid::new()
            .columns([Proportion::AUTO, Proportion::FILL])
            .rows([Proportion::AUTO])
            .push(inner, GridCell::at(0, 0))
            .push(Block::new(5, 5), GridCell::at(1, 0));

        assert_eq!(outer.measure(Size::new(300, 300)), Size::new(59, 12));

        outer.arrange(Rect::new(0, 0, 300, 300));
        assert_eq!(outer.layout().column_widths(), &[54, 246]);
        assert_eq!(outer.children()[0].widget.bounds(), Rect::new(0, 0, 54, 12));
    }

    #[test]
    fn test_invisible_container_skipped() {
        let mut hidden = StackPanel::vertical().push(Block::new(40, 40));
        hidden.set_visible(false);

        let mut outer = StackPanel::vertical()
            .push(hidden)
            .push(Block::new(10, 10));
        assert_eq!(outer.measure(Size::new(100, 100)), Size::new(10, 10));
    }
}
