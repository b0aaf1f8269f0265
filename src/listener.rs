//! The edit-request capability and a collaborator that records requests.
//!
//! Overlays hold their listener weakly: whoever opens the editing surface owns the listener and
//! decides how long it lives. An overlay whose listener has gone away just stops notifying.

use crate::section::SectionId;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Receives a request to edit one section.
pub trait EditSectionListener {
    /// Called once per activation of an overlay showing `section_id`.
    fn edit_section(&self, section_id: SectionId);
}

impl<F> EditSectionListener for F
where
    F: Fn(SectionId),
{
    fn edit_section(&self, section_id: SectionId) {
        self(section_id);
    }
}

/// Non-owning handle to a listener, as stored by overlays.
pub type ListenerHandle = Weak<dyn EditSectionListener>;

#[must_use]
/// Downgrades a shared listener into the handle overlays accept.
pub fn downgrade<L>(listener: &Rc<L>) -> ListenerHandle
where
    L: EditSectionListener + 'static,
{
    // Name the concrete type first, otherwise inference asks for `&Rc<dyn _>`.
    #[allow(clippy::let_and_return)]
    let weak: Weak<L> = Rc::downgrade(listener);
    weak
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// The single event an overlay emits: which section the user asked to edit.
pub struct EditRequest {
    /// Section whose overlay was activated.
    pub section_id: SectionId,
}

#[derive(Debug, Default)]
/// Edit collaborator that keeps every request it receives, in arrival order.
pub struct EditRequestLog {
    requests: RefCell<Vec<EditRequest>>,
}

impl EditRequestLog {
    #[must_use]
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Copies out the requests received so far.
    pub fn requests(&self) -> Vec<EditRequest> {
        self.requests.borrow().clone()
    }

    #[must_use]
    /// Number of requests received so far.
    pub fn len(&self) -> usize {
        self.requests.borrow().len()
    }

    #[must_use]
    /// Whether no request has arrived yet.
    pub fn is_empty(&self) -> bool {
        self.requests.borrow().is_empty()
    }

    #[must_use]
    /// Most recent request, if any.
    pub fn last(&self) -> Option<EditRequest> {
        self.requests.borrow().last().copied()
    }
}

impl EditSectionListener for EditRequestLog {
    fn edit_section(&self, section_id: SectionId) {
        tracing::info!(%section_id, "edit requested");
        self.requests.borrow_mut().push(EditRequest { section_id });
    }
}

#[cfg(test)]
#[path = "tests/listener.rs"]
mod tests;
