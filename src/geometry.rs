//! Document-space rectangles and their projection onto the terminal.
//!
//! Frames are expressed in the document's own coordinate space: one unit per character cell,
//! with row 0 at the top of the reflowed document. The space is unbounded in practice (a long
//! article easily exceeds `u16::MAX` rows), so it uses `u32` and never clamps. Conversion to a
//! ratatui [`Rect`] happens only at draw and hit-test time, through a [`Viewport`].

use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Position and size in document coordinates.
pub struct DocRect {
    /// Column of the left edge.
    pub x: u32,
    /// Row of the top edge.
    pub y: u32,
    /// Width in columns.
    pub width: u32,
    /// Height in rows.
    pub height: u32,
}

impl DocRect {
    #[must_use]
    /// Builds a rectangle from its edges and extent, storing the values verbatim.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    /// One past the last column.
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    /// One past the last row.
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    #[must_use]
    /// Whether the point lies inside the rectangle (right and bottom edges exclusive).
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    #[must_use]
    /// Whether any row of the rectangle falls in `rows_start..rows_end`.
    pub const fn overlaps_rows(&self, rows_start: u32, rows_end: u32) -> bool {
        self.height > 0 && self.y < rows_end && self.bottom() > rows_start
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The visible window onto the document: a scroll offset and the screen area it fills.
pub struct Viewport {
    /// First document row shown at the top of `area`.
    pub scroll: u32,
    /// Screen cells the document occupies.
    pub area: Rect,
}

impl Viewport {
    #[must_use]
    /// Creates a viewport showing the document from row `scroll` inside `area`.
    pub const fn new(scroll: u32, area: Rect) -> Self {
        Self { scroll, area }
    }

    #[must_use]
    /// Number of document rows that fit on screen.
    pub fn rows(&self) -> u32 {
        u32::from(self.area.height)
    }

    #[must_use]
    /// One past the last visible document row.
    pub fn bottom(&self) -> u32 {
        self.scroll.saturating_add(self.rows())
    }

    #[must_use]
    /// Clips a document rectangle to the visible window and returns its screen cells.
    ///
    /// Returns `None` when no part of the rectangle is on screen.
    pub fn project(&self, rect: &DocRect) -> Option<Rect> {
        let top = rect.y.max(self.scroll);
        let bottom = rect.bottom().min(self.bottom());
        let right = rect.right().min(u32::from(self.area.width));
        if top >= bottom || rect.x >= right {
            return None;
        }

        let x = self.area.x.checked_add(u16::try_from(rect.x).ok()?)?;
        let y = self
            .area
            .y
            .checked_add(u16::try_from(top - self.scroll).ok()?)?;
        let width = u16::try_from(right - rect.x).ok()?;
        let height = u16::try_from(bottom - top).ok()?;

        Some(Rect::new(x, y, width, height))
    }

    #[must_use]
    /// Maps a screen cell back to document coordinates, if it lies inside the viewport.
    pub fn to_document(&self, column: u16, row: u16) -> Option<(u32, u32)> {
        let area = self.area;
        if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
            return None;
        }
        let x = u32::from(column - area.x);
        let y = self.scroll.saturating_add(u32::from(row - area.y));
        Some((x, y))
    }
}

#[cfg(test)]
#[path = "tests/geometry.rs"]
mod tests;
