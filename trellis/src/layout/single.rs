//! SingleItemLayout - the pass-through base case.
//!
//! The owning container guarantees at most one child; this strategy looks
//! only at the first slot and ignores its cell.

use crate::primitives::{Rect, Size};
use crate::widget::Widget;

use super::Layout;
use super::slot::Slot;

#[derive(Debug, Clone, Copy, Default)]
pub struct SingleItemLayout;

impl SingleItemLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for SingleItemLayout {
    fn measure<W: Widget + ?Sized>(&mut self, children: &mut [Slot<W>], available: Size) -> Size {
        match children.first_mut() {
            Some(slot) if slot.is_visible() => slot.widget.measure(available),
            _ => Size::ZERO,
        }
    }

    fn arrange<W: Widget + ?Sized>(&mut self, children: &mut [Slot<W>], bounds: Rect) {
        if let Some(slot) = children.first_mut().filter(|slot| slot.is_visible()) {
            slot.widget.arrange(bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::Block;
    use crate::layout::slot::GridCell;

    fn single(block: Block) -> Vec<Slot<Block>> {
        vec![Slot {
            cell: GridCell::at(4, 4),
            widget: Box::new(block),
        }]
    }

    #[test]
    fn test_no_child_measures_zero() {
        let mut layout = SingleItemLayout::new();
        let mut children: Vec<Slot<Block>> = Vec::new();
        assert_eq!(layout.measure(&mut children, Size::new(100, 100)), Size::ZERO);
        layout.arrange(&mut children, Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn test_measure_delegates() {
        let mut layout = SingleItemLayout::new();
        let mut children = single(Block::new(30, 40).padding(2));
        assert_eq!(layout.measure(&mut children, Size::new(10, 10)), Size::new(34, 44));
    }

    #[test]
    fn test_arrange_passes_bounds_unmodified() {
        let mut layout = SingleItemLayout::new();
        let mut children = single(Block::new(30, 40));
        let bounds = Rect::new(7, 9, 120, 80);
        layout.arrange(&mut children, bounds);
        assert_eq!(children[0].widget.bounds(), bounds);
    }

    #[test]
    fn test_invisible_child_skipped() {
        let mut layout = SingleItemLayout::new();
        let mut children = single(Block::new(30, 40).hidden());
        assert_eq!(layout.measure(&mut children, Size::new(10, 10)), Size::ZERO);
        layout.arrange(&mut children, Rect::new(0, 0, 50, 50));
        assert_eq!(children[0].widget.bounds(), Rect::ZERO);
    }
}
