//! Dirty-window tracking
//!
//! Keeps the bounding rectangle of every pixel changed since the last flush,
//! in physical (unrotated) buffer coordinates. A flush only sends the pages
//! and columns inside this rectangle, so a single pixel costs one page write
//! instead of a whole frame.

/// Inclusive rectangle in physical pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    /// Leftmost column
    pub x1: u16,
    /// Top row
    pub y1: u16,
    /// Rightmost column (inclusive)
    pub x2: u16,
    /// Bottom row (inclusive)
    pub y2: u16,
}

impl Window {
    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.x2 - self.x1 + 1
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.y2 - self.y1 + 1
    }

    /// First and last page (inclusive) covered by the window
    pub fn pages(&self) -> (u8, u8) {
        ((self.y1 / 8) as u8, (self.y2 / 8) as u8)
    }
}

/// Running bounding box of modified pixels
///
/// Starts empty (`x1 = y1 = MAX`, `x2 = y2 = MIN`) so the first
/// [`expand`](Self::expand) establishes the rectangle by min/max folding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirtyWindow {
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
}

impl Default for DirtyWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl DirtyWindow {
    /// Create an empty tracker
    pub const fn new() -> Self {
        Self {
            x1: u16::MAX,
            y1: u16::MAX,
            x2: u16::MIN,
            y2: u16::MIN,
        }
    }

    /// Fold the inclusive rectangle `(x1, y1)..=(x2, y2)` into the window
    pub fn expand(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        debug_assert!(x1 <= x2 && y1 <= y2);
        self.x1 = self.x1.min(x1);
        self.y1 = self.y1.min(y1);
        self.x2 = self.x2.max(x2);
        self.y2 = self.y2.max(y2);
    }

    /// Forget everything; called after a successful flush
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether nothing changed since the last reset
    pub fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    /// The current rectangle, or `None` when empty
    pub fn bounds(&self) -> Option<Window> {
        if self.is_empty() {
            None
        } else {
            Some(Window {
                x1: self.x1,
                y1: self.y1,
                x2: self.x2,
                y2: self.y2,
            })
        }
    }
}
