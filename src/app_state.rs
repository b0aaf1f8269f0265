//! The application state bridging the rendered document, its overlays and the edit log.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user
//! scrolls, resizes and clicks. Every draw runs the layout pass: reflow if the width changed,
//! clamp the scroll offset, then push fresh frames into the overlays. Input handlers only ever
//! act on geometry produced by the most recent draw.

use crate::config::Config;
use crate::document::{Document, Rendition};
use crate::geometry::Viewport;
use crate::layout::{Activation, OverlayLayer};
use crate::listener::{self, EditRequestLog, ListenerHandle};
use crate::section::SectionId;
use ratatui::layout::Rect;
use serde::Serialize;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// An edit request resolved against the document, as reported on exit.
pub struct RequestedEdit {
    /// Section the user asked to edit.
    pub section_id: SectionId,
    /// Title of that section when the request was reported.
    pub title: String,
}

/// Session state for the document viewer.
pub struct AppState {
    /// Parsed source document.
    pub document: Document,
    /// Document reflowed to the current width.
    pub rendition: Rendition,
    /// Visible window from the latest layout pass.
    pub viewport: Viewport,
    /// Overlays for the sections in scope.
    pub layer: OverlayLayer,
    /// Edit collaborator receiving requests from overlays.
    pub edit_log: Rc<EditRequestLog>,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Maximum reflow width regardless of terminal size.
    pub wrap_width: u32,
    /// Label drawn on every overlay.
    pub edit_label: String,
    listener_attached: bool,
}

impl AppState {
    #[must_use]
    /// Initialises state for `document`; nothing is laid out until the first [`layout`](Self::layout).
    pub fn new(document: Document, cfg: &Config) -> Self {
        Self {
            document,
            rendition: Rendition::default(),
            viewport: Viewport::default(),
            layer: OverlayLayer::new(cfg.prefetch_rows),
            edit_log: Rc::new(EditRequestLog::new()),
            message: None,
            wrap_width: cfg.wrap_width.max(1),
            edit_label: cfg.edit_label.clone(),
            listener_attached: true,
        }
    }

    fn listener_handle(&self) -> Option<ListenerHandle> {
        self.listener_attached
            .then(|| listener::downgrade(&self.edit_log))
    }

    /// Runs the layout pass for a document area of the given screen size.
    ///
    /// Reflows when the usable width changed, keeps the scroll offset within the document and
    /// pushes the resulting heading geometry into the overlay layer.
    pub fn layout(&mut self, area: Rect) {
        let width = u32::from(area.width).min(self.wrap_width).max(1);
        if self.rendition.width != width {
            tracing::debug!(
                from = self.rendition.width,
                to = width,
                "reflowing document"
            );
            self.rendition = self.document.reflow(width);
        }

        self.viewport.area = area;
        self.viewport.scroll = self.viewport.scroll.min(self.max_scroll());

        let handle = self.listener_handle();
        self.layer
            .sync(&self.rendition.anchors, &self.viewport, handle.as_ref());
    }

    fn max_scroll(&self) -> u32 {
        self.rendition
            .height()
            .saturating_sub(self.viewport.rows())
    }

    /// Scrolls towards the start of the document.
    pub fn scroll_up(&mut self, rows: u32) {
        self.viewport.scroll = self.viewport.scroll.saturating_sub(rows);
    }

    /// Scrolls towards the end of the document.
    pub fn scroll_down(&mut self, rows: u32) {
        self.viewport.scroll = self
            .viewport
            .scroll
            .saturating_add(rows)
            .min(self.max_scroll());
    }

    /// Scrolls up by one screen.
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.rows().max(1));
    }

    /// Scrolls down by one screen.
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.rows().max(1));
    }

    /// Jumps to the start of the document.
    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll = 0;
    }

    /// Jumps to the end of the document.
    pub fn scroll_to_bottom(&mut self) {
        self.viewport.scroll = self.max_scroll();
    }

    /// Activates whichever overlay is under the pointer.
    ///
    /// Clicks that miss every overlay leave the status message alone.
    pub fn click(&mut self, column: u16, row: u16) {
        match self.layer.activate_at(&self.viewport, column, row) {
            Activation::Missed => {}
            outcome => self.report(outcome),
        }
    }

    /// Activates the topmost overlay on screen, as the keyboard shortcut does.
    pub fn activate_first_visible(&mut self) {
        let outcome = self.layer.activate_first_visible(&self.viewport);
        self.report(outcome);
    }

    fn report(&mut self, outcome: Activation) {
        self.message = Some(match outcome {
            Activation::Delivered(id) => {
                let title = self
                    .document
                    .heading(id)
                    .map_or("", |heading| heading.title.as_str());
                format!("Edit requested: {id} {title}")
            }
            Activation::Absorbed if !self.listener_attached => {
                "No edit listener attached".to_string()
            }
            Activation::Absorbed | Activation::Missed => "No section to edit".to_string(),
        });
    }

    #[must_use]
    /// Whether overlays currently forward activations to the edit log.
    pub fn listener_attached(&self) -> bool {
        self.listener_attached
    }

    /// Detaches the edit log from every overlay, or re-attaches it.
    pub fn toggle_listener(&mut self) {
        self.listener_attached = !self.listener_attached;
        let handle = self.listener_handle();
        self.layer.set_edit_listener(handle.as_ref());
        self.message = Some(if self.listener_attached {
            "Edit listener attached".to_string()
        } else {
            "Edit listener detached".to_string()
        });
    }

    #[must_use]
    /// Every request received so far, with section titles resolved.
    pub fn requested_edits(&self) -> Vec<RequestedEdit> {
        self.edit_log
            .requests()
            .into_iter()
            .map(|request| RequestedEdit {
                section_id: request.section_id,
                title: self
                    .document
                    .heading(request.section_id)
                    .map(|heading| heading.title.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
