//! The layout pass that owns overlays and pushes geometry into them.
//!
//! After every scroll or reflow the layer is handed the renderer's heading anchors and the
//! current viewport. Sections whose heading is on screen (or within the prefetch margin) get an
//! overlay; the rest give theirs back to a pool. Overlays are recycled by reconfiguring them for
//! their new section, never by editing the id of one that is still displayed.

use crate::geometry::{DocRect, Viewport};
use crate::listener::ListenerHandle;
use crate::overlay::SectionOverlay;
use crate::section::{SectionAnchor, SectionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Outcome of routing an activation through the layer.
pub enum Activation {
    /// No active overlay was at the activation point.
    Missed,
    /// An overlay was hit but had no section or no live listener.
    Absorbed,
    /// The overlay for this section delivered an edit request.
    Delivered(SectionId),
}

impl Activation {
    fn of(overlay: &SectionOverlay) -> Self {
        match overlay.section_id() {
            Some(id) if overlay.activate() => Self::Delivered(id),
            _ => Self::Absorbed,
        }
    }
}

#[derive(Debug, Default)]
/// Active overlays for the sections in scope, plus a pool of spare ones.
pub struct OverlayLayer {
    active: Vec<SectionOverlay>,
    pool: Vec<SectionOverlay>,
    prefetch_rows: u32,
    created: usize,
}

impl OverlayLayer {
    #[must_use]
    /// Creates an empty layer keeping overlays for sections up to `prefetch_rows` off screen.
    pub fn new(prefetch_rows: u32) -> Self {
        Self {
            prefetch_rows,
            ..Self::default()
        }
    }

    /// Brings the active overlays in line with the anchors visible in `viewport`.
    ///
    /// Every anchor in scope ends up with exactly one overlay whose frame covers its heading row
    /// across the full viewport width, carrying the anchor's current title and `listener`.
    pub fn sync(
        &mut self,
        anchors: &[SectionAnchor],
        viewport: &Viewport,
        listener: Option<&ListenerHandle>,
    ) {
        let rows_start = viewport.scroll.saturating_sub(self.prefetch_rows);
        let rows_end = viewport.bottom().saturating_add(self.prefetch_rows);
        let width = u32::from(viewport.area.width);

        let in_scope: Vec<&SectionAnchor> = anchors
            .iter()
            .filter(|anchor| anchor.heading.overlaps_rows(rows_start, rows_end))
            .collect();

        let mut previous = std::mem::take(&mut self.active);
        let retired: Vec<SectionOverlay> = previous
            .extract_if(.., |overlay| {
                !overlay
                    .section_id()
                    .is_some_and(|id| in_scope.iter().any(|anchor| anchor.id == id))
            })
            .collect();
        if !retired.is_empty() {
            tracing::trace!(count = retired.len(), "overlays returned to pool");
        }
        self.pool.extend(retired);

        for anchor in in_scope {
            let existing = previous
                .iter()
                .position(|overlay| overlay.section_id() == Some(anchor.id));
            let mut overlay = if let Some(index) = existing {
                let mut overlay = previous.swap_remove(index);
                overlay.set_title(anchor.title.as_str());
                overlay
            } else {
                let mut overlay = self.take_spare();
                overlay.configure(anchor.id, anchor.title.as_str());
                overlay
            };
            overlay.set_edit_listener(listener.cloned());
            overlay.layout(DocRect::new(
                anchor.heading.x,
                anchor.heading.y,
                width.saturating_sub(anchor.heading.x),
                anchor.heading.height,
            ));
            self.active.push(overlay);
        }
        self.pool.extend(previous);
    }

    fn take_spare(&mut self) -> SectionOverlay {
        self.pool.pop().unwrap_or_else(|| {
            self.created += 1;
            tracing::trace!(created = self.created, "overlay allocated");
            SectionOverlay::new()
        })
    }

    /// Replaces the listener on every overlay, active or pooled. `None` detaches them all.
    pub fn set_edit_listener(&mut self, listener: Option<&ListenerHandle>) {
        for overlay in self.active.iter_mut().chain(self.pool.iter_mut()) {
            overlay.set_edit_listener(listener.cloned());
        }
    }

    #[must_use]
    /// Active overlays, in document order.
    pub fn overlays(&self) -> &[SectionOverlay] {
        &self.active
    }

    /// Active overlays, for the renderer to clear their display flags.
    pub fn overlays_mut(&mut self) -> &mut [SectionOverlay] {
        &mut self.active
    }

    #[must_use]
    /// Active overlay for section `id`, if it is in scope.
    pub fn overlay(&self, id: SectionId) -> Option<&SectionOverlay> {
        self.active
            .iter()
            .find(|overlay| overlay.section_id() == Some(id))
    }

    #[must_use]
    /// Number of overlays ever allocated by this layer.
    pub fn created(&self) -> usize {
        self.created
    }

    #[must_use]
    /// Number of spare overlays waiting to be recycled.
    pub fn pooled(&self) -> usize {
        self.pool.len()
    }

    /// Activates the overlay under a screen cell.
    pub fn activate_at(&self, viewport: &Viewport, column: u16, row: u16) -> Activation {
        viewport
            .to_document(column, row)
            .and_then(|(x, y)| self.active.iter().find(|overlay| overlay.contains(x, y)))
            .map_or(Activation::Missed, Activation::of)
    }

    /// Activates the topmost overlay whose frame starts on screen.
    pub fn activate_first_visible(&self, viewport: &Viewport) -> Activation {
        self.active
            .iter()
            .find(|overlay| {
                overlay
                    .frame()
                    .is_some_and(|frame| frame.y >= viewport.scroll && frame.y < viewport.bottom())
            })
            .map_or(Activation::Missed, Activation::of)
    }
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
