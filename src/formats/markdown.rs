//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides the tree-sitter query for parsing markdown documents
//! and extracting section structure from ATX-style headings (# syntax)
//! along with the code blocks that reflow must leave verbatim.

use crate::formats::Format;

/// Tree-sitter query for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading [(atx_h1_marker) (atx_h2_marker) (atx_h3_marker) (atx_h4_marker) (atx_h5_marker) (atx_h6_marker)] @marker (inline) @title) @heading"
    }

    fn code_block_query(&self) -> &'static str {
        "[(fenced_code_block) (indented_code_block)] @code"
    }

    fn heading_level(&self, marker_kind: &str) -> Option<usize> {
        marker_kind
            .strip_prefix("atx_h")?
            .strip_suffix("_marker")?
            .parse()
            .ok()
    }
}
