//! The section overlay: identity, pushed geometry and edit delegation.
//!
//! An overlay is a tappable strip drawn over a section heading. It knows three things: which
//! section it stands for, what title to show, and whom to tell when it is activated. Where it
//! sits on screen is decided elsewhere and pushed in through [`SectionOverlay::layout`]; the
//! overlay never asks the document for geometry, so an asynchronous reflow cannot leave it
//! drawing against stale coordinates.
//!
//! Every "not ready" condition (no id yet, no listener, listener dropped, no frame) is plain
//! absence. Activation in those states does nothing and reports `false`.

use crate::geometry::DocRect;
use crate::listener::ListenerHandle;
use crate::section::SectionId;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Identity and label, always assigned together.
struct Identity {
    section_id: SectionId,
    title: String,
}

#[derive(Default)]
/// Tappable region bound to one document section.
pub struct SectionOverlay {
    identity: Option<Identity>,
    listener: Option<ListenerHandle>,
    frame: Option<DocRect>,
    needs_display: bool,
}

impl SectionOverlay {
    #[must_use]
    /// Creates an unconfigured overlay with no listener and no frame.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Creates an overlay already bound to a section.
    pub fn with_section(section_id: SectionId, title: impl Into<String>) -> Self {
        let mut overlay = Self::new();
        overlay.configure(section_id, title);
        overlay
    }

    /// Binds the overlay to a section, replacing id and title in one step.
    ///
    /// Used both right after creation and when the layout pass recycles an overlay for a
    /// different section.
    pub fn configure(&mut self, section_id: SectionId, title: impl Into<String>) {
        let identity = Identity {
            section_id,
            title: title.into(),
        };
        if self.identity.as_ref() != Some(&identity) {
            tracing::trace!(%section_id, title = %identity.title, "overlay configured");
            self.identity = Some(identity);
            self.needs_display = true;
        }
    }

    /// Replaces the displayed title without touching the section id.
    ///
    /// Ignored on an unconfigured overlay: a title is never shown without its section.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let Some(identity) = self.identity.as_mut() else {
            return;
        };
        let title = title.into();
        if identity.title != title {
            identity.title = title;
            self.needs_display = true;
        }
    }

    /// Replaces the listener reference. `None` detaches.
    pub fn set_edit_listener(&mut self, listener: Option<ListenerHandle>) {
        self.listener = listener;
    }

    /// Stores the frame supplied by the layout pass, exactly as given.
    pub fn layout(&mut self, frame: DocRect) {
        if self.frame != Some(frame) {
            self.frame = Some(frame);
            self.needs_display = true;
        }
    }

    #[must_use]
    /// Section this overlay stands for, once configured.
    pub fn section_id(&self) -> Option<SectionId> {
        self.identity.as_ref().map(|identity| identity.section_id)
    }

    #[must_use]
    /// Displayed title, once configured.
    pub fn title(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.title.as_str())
    }

    #[must_use]
    /// Last frame pushed by the layout pass.
    pub fn frame(&self) -> Option<DocRect> {
        self.frame
    }

    #[must_use]
    /// Whether a listener is attached and still alive.
    pub fn has_live_listener(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|listener| listener.strong_count() > 0)
    }

    #[must_use]
    /// Whether the document point falls inside the current frame.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.frame.is_some_and(|frame| frame.contains(x, y))
    }

    #[must_use]
    /// Whether displayed state changed since the last [`mark_displayed`](Self::mark_displayed).
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Records that the current state has been drawn.
    pub fn mark_displayed(&mut self) {
        self.needs_display = false;
    }

    /// Handles one discrete activation (tap, click, key press).
    ///
    /// Notifies the listener with the current section id exactly once and returns `true`, or
    /// returns `false` without notifying when the id or a live listener is missing.
    pub fn activate(&self) -> bool {
        let Some(section_id) = self.section_id() else {
            tracing::debug!("activation absorbed: overlay has no section");
            return false;
        };
        let Some(listener) = self.listener.as_ref().and_then(std::rc::Weak::upgrade) else {
            tracing::debug!(%section_id, "activation absorbed: no live edit listener");
            return false;
        };
        listener.edit_section(section_id);
        true
    }
}

impl std::fmt::Debug for SectionOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionOverlay")
            .field("section_id", &self.section_id())
            .field("title", &self.title())
            .field("frame", &self.frame)
            .field("listener", &self.has_live_listener())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/overlay.rs"]
mod tests;
