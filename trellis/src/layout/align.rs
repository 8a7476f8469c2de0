//! Placement of a widget inside the slot its parent granted.

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};

/// Horizontal placement inside a slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    /// Take the full slot width.
    #[default]
    Stretch,
}

/// Vertical placement inside a slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    /// Take the full slot height.
    #[default]
    Stretch,
}

/// Position `content` inside a container of size `container`.
///
/// The result is relative to the container's origin. Stretched axes take the
/// container extent; the others keep the content extent.
pub fn align(
    container: Size,
    content: Size,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> Rect {
    let mut result = Rect::new(0, 0, content.width, content.height);

    match horizontal {
        HorizontalAlignment::Left => {}
        HorizontalAlignment::Center => result.x = (container.width - content.width) / 2,
        HorizontalAlignment::Right => result.x = container.width - content.width,
        HorizontalAlignment::Stretch => result.width = container.width,
    }

    match vertical {
        VerticalAlignment::Top => {}
        VerticalAlignment::Center => result.y = (container.height - content.height) / 2,
        VerticalAlignment::Bottom => result.y = container.height - content.height,
        VerticalAlignment::Stretch => result.height = container.height,
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(100, 50);
    const CONTENT: Size = Size::new(20, 10);

    #[test]
    fn test_align_top_left() {
        let r = align(CONTAINER, CONTENT, HorizontalAlignment::Left, VerticalAlignment::Top);
        assert_eq!(r, Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn test_align_center() {
        let r = align(CONTAINER, CONTENT, HorizontalAlignment::Center, VerticalAlignment::Center);
        assert_eq!(r, Rect::new(40, 20, 20, 10));
    }

    #[test]
    fn test_align_bottom_right() {
        let r = align(CONTAINER, CONTENT, HorizontalAlignment::Right, VerticalAlignment::Bottom);
        assert_eq!(r, Rect::new(80, 40, 20, 10));
    }

    #[test]
    fn test_align_stretch() {
        let r = align(CONTAINER, CONTENT, HorizontalAlignment::Stretch, VerticalAlignment::Top);
        assert_eq!(r, Rect::new(0, 0, 100, 10));
    }
}
