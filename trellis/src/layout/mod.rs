//! Layout System for Trellis
//!
//! Two-phase layout: `measure` asks children how big they want to be,
//! `arrange` hands out final rectangles. Every compound container reduces
//! to a [`GridLayout`]: stacks are a one-row or one-column grid, single-item
//! wrappers are the trivial pass-through.
//!
//! # Architecture
//!
//! ```text
//! LayoutRoot::update -> container.measure -> Layout::measure -> child.measure ...
//!                    -> container.arrange -> Layout::arrange -> child.arrange ...
//! ```
//!
//! A pass always recomputes everything. Strategies keep their scratch
//! buffers between passes only to avoid reallocating every frame.

pub mod align;
pub mod elements;
pub mod grid;
pub mod length;
pub mod proportion;
pub mod single;
pub mod slot;
pub mod stack;

pub mod containers;

use crate::primitives::{Rect, Size};
use crate::widget::Widget;

// Re-export core types
pub use align::{HorizontalAlignment, VerticalAlignment, align};
pub use elements::Block;
pub use grid::GridLayout;
pub use length::Padding;
pub use proportion::{Proportion, ProportionKind};
pub use single::SingleItemLayout;
pub use slot::{GridCell, Slot};
pub use stack::{Orientation, StackPanelLayout};

// Re-export containers
pub use containers::{Container, Grid, SingleItemContainer, StackPanel};

/// A layout strategy: partitions a container's space among its children.
///
/// Strategies are created once per container and reused every frame.
/// Besides scratch buffers they hold no state a caller could observe other
/// than their query surface.
pub trait Layout {
    /// Desired size of `children` given `available` space.
    fn measure<W: Widget + ?Sized>(&mut self, children: &mut [Slot<W>], available: Size) -> Size;

    /// Place `children` inside `bounds`, calling `arrange` on each visible one.
    fn arrange<W: Widget + ?Sized>(&mut self, children: &mut [Slot<W>], bounds: Rect);
}
