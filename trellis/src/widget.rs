//! Widget contract consumed by the layout engine.
//!
//! # Two-Phase Layout
//!
//! 1. **Measure** (`measure`): report the size the widget would like given
//!    the space its parent can offer. Containers recurse into their own
//!    layout strategy here.
//!
//! 2. **Arrange** (`arrange`): accept the final rectangle granted by the
//!    parent and remember it. Containers partition it among their children.
//!
//! Invisible widgets are skipped by both passes.

use crate::primitives::{Rect, Size};

/// Anything the layout engine can size and place.
pub trait Widget {
    /// Desired size for the given available space.
    ///
    /// `available` may be negative or smaller than the content; widgets
    /// report what they want and the parent decides what they get.
    fn measure(&mut self, available: Size) -> Size;

    /// Commit the final bounds for this widget.
    fn arrange(&mut self, bounds: Rect);

    /// Bounds recorded by the last `arrange`.
    fn bounds(&self) -> Rect;

    /// Whether the widget takes part in layout.
    fn is_visible(&self) -> bool {
        true
    }
}

/// A boxed widget for dynamic dispatch.
pub type BoxedWidget = Box<dyn Widget>;

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn measure(&mut self, available: Size) -> Size {
        (**self).measure(available)
    }

    fn arrange(&mut self, bounds: Rect) {
        (**self).arrange(bounds)
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}
