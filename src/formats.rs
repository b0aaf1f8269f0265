//! Format trait and implementations for different document types.
//!
//! A format tells the renderer which tree-sitter grammar to parse with and how to find section
//! headings in the resulting tree. The heading query must capture the whole heading as
//! `@heading`, its level marker as `@marker` and its text as `@title`. The code block query
//! captures every verbatim block as `@code`, so reflow can leave those rows unwrapped.

pub mod markdown;

/// Tree-sitter grammar and heading query for one document format.
pub trait Format {
    /// Grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing `@heading`, `@marker` and `@title` for every section heading.
    fn heading_query(&self) -> &str;
    /// Query capturing `@code` for every code block whose rows must not be word-wrapped.
    fn code_block_query(&self) -> &str;
    /// Nesting depth encoded by a captured marker node kind, if it is one this format knows.
    fn heading_level(&self, marker_kind: &str) -> Option<usize>;
}
