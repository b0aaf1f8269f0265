//! Section identity and geometry as reported by the document renderer.
//!
//! A section is a heading-delimited division of a document. The renderer assigns each one a
//! stable numeric id and, after every reflow, reports where its heading landed in document
//! coordinates. Overlays only ever see these values pushed to them; they never look them up.

use crate::geometry::DocRect;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque identifier assigned by the document producer, unique within one document.
pub struct SectionId(pub u64);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "§{}", self.0)
    }
}

impl From<u64> for SectionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A section heading's identity plus its on-screen bounding box after the latest reflow.
pub struct SectionAnchor {
    /// Stable id of the section this heading opens.
    pub id: SectionId,
    /// Heading text without markup symbols.
    pub title: String,
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: usize,
    /// Bounding box of the rendered heading in document coordinates.
    pub heading: DocRect,
}
