//! LayoutRoot - the per-frame "layout if dirty" driver.
//!
//! Hosts call [`LayoutRoot::update`] once per frame with the viewport. A
//! full measure + arrange runs only when the tree was touched through
//! [`LayoutRoot::root_mut`], explicitly invalidated, or the viewport moved.

use crate::primitives::Rect;
use crate::widget::Widget;

pub struct LayoutRoot<W> {
    root: W,
    bounds: Option<Rect>,
    dirty: bool,
    frames: u64,
}

impl<W: Widget> LayoutRoot<W> {
    pub fn new(root: W) -> Self {
        Self {
            root,
            bounds: None,
            dirty: true,
            frames: 0,
        }
    }

    /// Lay the tree out inside `bounds` if anything changed.
    ///
    /// Returns `true` when a pass ran.
    pub fn update(&mut self, bounds: Rect) -> bool {
        if !self.dirty && self.bounds == Some(bounds) {
            tracing::debug!(frame = self.frames, "layout clean, skipping pass");
            return false;
        }

        self.root.measure(bounds.size());
        self.root.arrange(bounds);

        self.bounds = Some(bounds);
        self.dirty = false;
        self.frames += 1;

        tracing::debug!(
            frame = self.frames,
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "layout pass"
        );
        true
    }

    pub fn root(&self) -> &W {
        &self.root
    }

    /// Mutable access to the tree. Marks the layout dirty.
    pub fn root_mut(&mut self) -> &mut W {
        self.dirty = true;
        &mut self.root
    }

    /// Force a pass on the next update.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Bounds of the last pass, if any ran.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Number of passes run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
