use super::OverlayWidget;
use crate::geometry::{DocRect, Viewport};
use crate::overlay::SectionOverlay;
use crate::section::SectionId;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

fn row(buf: &Buffer, y: u16) -> String {
    (buf.area.x..buf.area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect()
}

#[test]
fn test_renders_title_and_label_inside_frame() {
    let area = Rect::new(0, 0, 20, 3);
    let viewport = Viewport::new(40, area);
    let mut overlay = SectionOverlay::with_section(SectionId(7), "History");
    overlay.layout(DocRect::new(0, 41, 20, 1));

    let mut buf = Buffer::empty(area);
    OverlayWidget::new(&overlay, &viewport, "edit").render(area, &mut buf);

    assert_eq!(row(&buf, 0), " ".repeat(20));
    assert_eq!(row(&buf, 1), "History         edit");
    assert_eq!(row(&buf, 2), " ".repeat(20));
}

#[test]
fn test_label_wins_on_narrow_frame() {
    let area = Rect::new(0, 0, 10, 1);
    let viewport = Viewport::new(0, area);
    let mut overlay = SectionOverlay::with_section(SectionId(1), "Demographics");
    overlay.layout(DocRect::new(0, 0, 10, 1));

    let mut buf = Buffer::empty(area);
    OverlayWidget::new(&overlay, &viewport, "edit").render(area, &mut buf);

    assert_eq!(row(&buf, 0), "Demog edit");
}

#[test]
fn test_offscreen_or_unconfigured_draws_nothing() {
    let area = Rect::new(0, 0, 10, 2);
    let viewport = Viewport::new(0, area);

    let mut offscreen = SectionOverlay::with_section(SectionId(1), "Lead");
    offscreen.layout(DocRect::new(0, 5, 10, 1));
    let mut unconfigured = SectionOverlay::new();
    unconfigured.layout(DocRect::new(0, 0, 10, 1));

    let mut buf = Buffer::empty(area);
    OverlayWidget::new(&offscreen, &viewport, "edit").render(area, &mut buf);
    OverlayWidget::new(&unconfigured, &viewport, "edit").render(area, &mut buf);

    assert_eq!(buf, Buffer::empty(area));
}
