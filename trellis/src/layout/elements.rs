//! Leaf layout element.
//!
//! `Block` is the atom of the layout system: it has a content size but no
//! children. Applications use it for placeholders and fixed-size content;
//! renderers read back the bounds it was arranged into.

use crate::primitives::{Rect, Size};
use crate::widget::Widget;

use super::align::{HorizontalAlignment, VerticalAlignment, align};
use super::length::Padding;

/// A leaf widget with an intrinsic content size.
#[derive(Debug, Clone)]
pub struct Block {
    /// Size of the content before padding.
    pub content: Size,
    /// Explicit width, overriding the content width.
    pub width: Option<i32>,
    /// Explicit height, overriding the content height.
    pub height: Option<i32>,
    pub padding: Padding,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub visible: bool,
    /// Bounds from the last arrange.
    bounds: Rect,
    /// Number of times `measure` ran. Useful to observe layout passes.
    measure_count: u32,
}

impl Block {
    /// Create a visible block with the given content size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            content: Size::new(width, height),
            width: None,
            height: None,
            padding: Padding::default(),
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            visible: true,
            bounds: Rect::ZERO,
            measure_count: 0,
        }
    }

    /// Set an explicit width.
    pub fn width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set an explicit height.
    pub fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
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

    /// Set alignment inside the arranged slot.
    pub fn align(mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    /// Hide the block; hidden blocks are skipped by layout.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn measure_count(&self) -> u32 {
        self.measure_count
    }

    fn stretches_both(&self) -> bool {
        self.horizontal_alignment == HorizontalAlignment::Stretch
            && self.vertical_alignment == VerticalAlignment::Stretch
    }
}

impl Widget for Block {
    fn measure(&mut self, _available: Size) -> Size {
        self.measure_count += 1;

        let mut size = self.content;
        if let Some(width) = self.width {
            size.width = width;
        }
        if let Some(height) = self.height {
            size.height = height;
        }

        Size::new(
            size.width + self.padding.horizontal(),
            size.height + self.padding.vertical(),
        )
    }

    fn arrange(&mut self, slot: Rect) {
        let mut size = if self.stretches_both() {
            slot.size()
        } else {
            self.measure(slot.size())
        };

        size.width = size.width.min(slot.width).max(0);
        size.height = size.height.min(slot.height).max(0);

        let local = align(
            slot.size(),
            size,
            self.horizontal_alignment,
            self.vertical_alignment,
        );
        self.bounds = local.translate(slot.origin());
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_adds_padding() {
        let mut block = Block::new(40, 20).padding(5);
        assert_eq!(block.measure(Size::new(1000, 1000)), Size::new(50, 30));
    }

    #[test]
    fn test_hints_override_content() {
        let mut block = Block::new(40, 20).width(100);
        assert_eq!(block.measure(Size::ZERO), Size::new(100, 20));

        let mut block = Block::new(40, 20).width(7).height(9).padding(1);
        assert_eq!(block.measure(Size::ZERO), Size::new(9, 11));
    }

    #[test]
    fn test_stretch_takes_slot() {
        let mut block = Block::new(10, 10);
        block.arrange(Rect::new(5, 5, 100, 60));
        assert_eq!(block.bounds(), Rect::new(5, 5, 100, 60));
        // Fully stretched blocks never need to measure
        assert_eq!(block.measure_count(), 0);
    }

    #[test]
    fn test_centered_in_slot() {
        let mut block = Block::new(20, 10).align(HorizontalAlignment::Center, VerticalAlignment::Center);
        block.arrange(Rect::new(100, 100, 60, 30));
        assert_eq!(block.bounds(), Rect::new(120, 110, 20, 10));
    }

    #[test]
    fn test_clamped_to_slot() {
        let mut block = Block::new(500, 500).align(HorizontalAlignment::Left, VerticalAlignment::Top);
        block.arrange(Rect::new(0, 0, 50, 40));
        assert_eq!(block.bounds(), Rect::new(0, 0, 50, 40));
    }

    #[test]
    fn test_hidden() {
        let block = Block::new(1, 1).hidden();
        assert!(!block.is_visible());
    }
}
