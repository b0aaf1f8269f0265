//! obelus: section edit overlays for reflowable document views.
//!
//! A [`overlay::SectionOverlay`] marks one section heading of a rendered document, carries the
//! section's id and title, and turns a tap into an [`listener::EditRequest`] for whoever is
//! listening. The document renderer, layout pass and terminal front end around it live in the
//! remaining modules.

pub mod app_state;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod layout;
pub mod listener;
pub mod overlay;
pub mod section;
pub mod ui;
pub mod widget;
