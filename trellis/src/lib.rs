//! Trellis: layout engine for real-time UI
//!
//! Trellis sizes and places widget trees with a two-phase measure/arrange
//! protocol. Every compound container reduces to one grid track solver:
//! - `Grid` places children by an explicit `GridCell`
//! - `StackPanel` is a one-row or one-column grid
//! - `SingleItemContainer` passes its bounds straight through
//!
//! Rendering, input and text are left to the host. The host reads the
//! rectangles the engine produces and feeds it proportions and positions.
//!
//! # Usage
//!
//! ```
//! use trellis::{Block, Grid, GridCell, LayoutRoot, Proportion, Rect, Widget};
//!
//! let grid = Grid::new()
//!     .columns([Proportion::AUTO, Proportion::FILL])
//!     .rows([Proportion::AUTO])
//!     .column_spacing(8)
//!     .push(Block::new(60, 20), GridCell::at(0, 0))
//!     .push(Block::new(100, 20), GridCell::at(1, 0));
//!
//! let mut root = LayoutRoot::new(grid);
//! root.update(Rect::new(0, 0, 300, 200));
//!
//! assert_eq!(root.root().layout().column_widths(), &[60, 232]);
//! assert_eq!(root.root().children()[1].widget.bounds(), Rect::new(68, 0, 232, 20));
//! ```

// Core primitives
pub mod primitives;
pub mod error;

// Widget contract
pub mod widget;

// Layout strategies and containers
pub mod layout;

// Frame driver
pub mod root;

// Re-export core types
pub use error::LayoutError;
pub use layout::{
    Block, Container, Grid, GridCell, GridLayout, HorizontalAlignment, Layout, Orientation,
    Padding, Proportion, ProportionKind, SingleItemContainer, SingleItemLayout, Slot, StackPanel,
    StackPanelLayout, VerticalAlignment,
};
pub use primitives::{Point, Rect, Size};
pub use root::LayoutRoot;
pub use widget::{BoxedWidget, Widget};
