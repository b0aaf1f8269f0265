//! Draws a section overlay into a ratatui buffer.
//!
//! The widget paints only the cells of the overlay's frame that the viewport shows. It fills
//! the strip with the overlay style, writes the title from the left and the edit label flush
//! right, letting the label win when the two collide.

use crate::geometry::Viewport;
use crate::overlay::SectionOverlay;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Renders one overlay through a viewport.
pub struct OverlayWidget<'a> {
    overlay: &'a SectionOverlay,
    viewport: &'a Viewport,
    label: &'a str,
    style: Style,
    label_style: Style,
}

impl<'a> OverlayWidget<'a> {
    #[must_use]
    /// Prepares `overlay` for drawing with `label` as its edit affordance.
    pub fn new(overlay: &'a SectionOverlay, viewport: &'a Viewport, label: &'a str) -> Self {
        Self {
            overlay,
            viewport,
            label,
            style: Style::default().add_modifier(Modifier::BOLD),
            label_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    #[must_use]
    /// Style for the strip and title.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    /// Style for the edit label.
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    #[must_use]
    /// Screen cells the overlay will occupy, if any of it is visible.
    pub fn screen_area(&self) -> Option<Rect> {
        self.viewport.project(&self.overlay.frame()?)
    }
}

impl Widget for OverlayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(title) = self.overlay.title() else {
            return;
        };
        let Some(target) = self.screen_area() else {
            return;
        };
        let target = target.intersection(area);
        if target.is_empty() {
            return;
        }

        buf.set_style(target, self.style);

        // The heading's first row may be scrolled off; keep the text on its top visible row.
        let row = target.y;
        let label_width = u16::try_from(self.label.chars().count()).unwrap_or(u16::MAX);
        let title_width = target.width.saturating_sub(label_width.saturating_add(1));
        if title_width > 0 {
            buf.set_stringn(
                target.x,
                row,
                title,
                usize::from(title_width),
                self.style,
            );
        }
        let label_x = target.right().saturating_sub(label_width).max(target.x);
        buf.set_stringn(
            label_x,
            row,
            self.label,
            usize::from(target.right() - label_x),
            self.label_style,
        );
    }
}

#[cfg(test)]
#[path = "tests/widget.rs"]
mod tests;
