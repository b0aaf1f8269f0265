//! The document renderer: markdown source in, reflowed rows and heading geometry out.
//!
//! Parsing happens once. Each heading gets a [`SectionId`] from its position in the document
//! (1 for the first heading), so ids survive any number of reflows. Reflowing re-wraps every
//! source line to a width and reports where each heading ended up as a [`SectionAnchor`]; that
//! report is what the layout pass pushes into overlays.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::geometry::DocRect;
use crate::section::{SectionAnchor, SectionId};
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Parser, Query, QueryCursor, Tree};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A section heading found in the source.
pub struct Heading {
    /// Id assigned in document order.
    pub id: SectionId,
    /// Heading text without markup symbols.
    pub title: String,
    /// Nesting depth (1 for `#`).
    pub level: usize,
    /// Zero-based source line holding the heading.
    pub source_line: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a rendered row belongs to.
pub enum LineKind {
    /// Part of a section heading.
    Heading {
        /// Section opened by the heading.
        id: SectionId,
        /// Heading depth, for styling.
        level: usize,
    },
    /// Inside a code block.
    Code,
    /// Any other text.
    Body,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One row of reflowed output.
pub struct RenderedLine {
    /// Text shown on the row, at most the reflow width in characters.
    pub text: String,
    /// Role of the row.
    pub kind: LineKind,
}

#[derive(Clone, Debug, Default)]
/// A document reflowed to one width.
pub struct Rendition {
    /// Width the rows were wrapped to.
    pub width: u32,
    /// Rows in document order.
    pub lines: Vec<RenderedLine>,
    /// Heading geometry for every section, in document order.
    pub anchors: Vec<SectionAnchor>,
}

impl Rendition {
    #[must_use]
    /// Total number of rows.
    pub fn height(&self) -> u32 {
        to_u32(self.lines.len())
    }
}

#[derive(Clone, Debug)]
/// A parsed markdown document.
pub struct Document {
    /// Where the source came from, for display and error messages.
    pub path: String,
    lines: Vec<String>,
    headings: Vec<Heading>,
    code_rows: Vec<(usize, usize)>,
}

impl Document {
    /// Reads and parses a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, format: &dyn Format) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&path.to_string_lossy(), &source, format)
    }

    /// Parses `source`, finding every section heading with the format's query.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar or query cannot be loaded, or parsing yields no tree.
    pub fn parse(path: &str, source: &str, format: &dyn Format) -> Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let tree = parser.parse(source, None).ok_or_else(|| Error::Parse {
            path: path.to_string(),
        })?;

        let query = Query::new(&language, format.heading_query())?;
        let capture_names = query.capture_names();
        let bytes = source.as_bytes();

        let mut found: Vec<(usize, usize, String)> = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), bytes);
        while let Some(m) = matches.next() {
            let mut line = None;
            let mut level = None;
            let mut title = String::new();
            for capture in m.captures {
                let name = usize::try_from(capture.index)
                    .ok()
                    .and_then(|index| capture_names.get(index));
                match name.copied() {
                    Some("heading") => line = Some(capture.node.start_position().row),
                    Some("marker") => level = format.heading_level(capture.node.kind()),
                    Some("title") => {
                        title = capture
                            .node
                            .utf8_text(bytes)
                            .unwrap_or_default()
                            .trim()
                            .to_string();
                    }
                    _ => {}
                }
            }
            if let (Some(line), Some(level)) = (line, level) {
                found.push((line, level, title));
            }
        }
        found.sort_by_key(|(line, _, _)| *line);
        found.dedup_by_key(|(line, _, _)| *line);

        let headings: Vec<Heading> = found
            .into_iter()
            .zip(1u64..)
            .map(|((source_line, level, title), id)| Heading {
                id: SectionId(id),
                title,
                level,
                source_line,
            })
            .collect();
        let code_rows = code_block_rows(&tree, &language, bytes, format)?;
        tracing::debug!(
            path,
            sections = headings.len(),
            code_blocks = code_rows.len(),
            "document parsed"
        );

        Ok(Self {
            path: path.to_string(),
            lines: source.lines().map(str::to_string).collect(),
            headings,
            code_rows,
        })
    }

    fn is_code_row(&self, row: usize) -> bool {
        self.code_rows
            .iter()
            .any(|&(first, last)| (first..=last).contains(&row))
    }

    #[must_use]
    /// Every section heading, in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    #[must_use]
    /// Looks up the heading that opens section `id`.
    pub fn heading(&self, id: SectionId) -> Option<&Heading> {
        self.headings.iter().find(|heading| heading.id == id)
    }

    #[must_use]
    /// Wraps the document to `width` columns and locates every heading in the result.
    ///
    /// A width of zero is treated as one column.
    pub fn reflow(&self, width: u32) -> Rendition {
        let width = width.max(1);
        let columns = usize::try_from(width).unwrap_or(usize::MAX);
        let mut lines = Vec::new();
        let mut anchors = Vec::new();
        let mut headings = self.headings.iter().peekable();

        for (index, source) in self.lines.iter().enumerate() {
            if let Some(heading) = headings.next_if(|heading| heading.source_line == index) {
                let top = lines.len();
                let rows = wrap_words(&heading.title, columns);
                let widest = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
                lines.extend(rows.into_iter().map(|text| RenderedLine {
                    text,
                    kind: LineKind::Heading {
                        id: heading.id,
                        level: heading.level,
                    },
                }));
                anchors.push(SectionAnchor {
                    id: heading.id,
                    title: heading.title.clone(),
                    level: heading.level,
                    heading: DocRect::new(
                        0,
                        to_u32(top),
                        to_u32(widest),
                        to_u32(lines.len() - top),
                    ),
                });
                continue;
            }

            if self.is_code_row(index) {
                lines.extend(split_chars(source, columns).into_iter().map(|text| {
                    RenderedLine {
                        text,
                        kind: LineKind::Code,
                    }
                }));
            } else {
                lines.extend(wrap_words(source, columns).into_iter().map(|text| {
                    RenderedLine {
                        text,
                        kind: LineKind::Body,
                    }
                }));
            }
        }

        tracing::trace!(width, rows = lines.len(), "document reflowed");
        Rendition {
            width,
            lines,
            anchors,
        }
    }
}

/// Inclusive source row ranges of every code block the format's query captures.
fn code_block_rows(
    tree: &Tree,
    language: &Language,
    bytes: &[u8],
    format: &dyn Format,
) -> Result<Vec<(usize, usize)>> {
    let query = Query::new(language, format.code_block_query())?;
    let mut rows = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let start = capture.node.start_position();
            let end = capture.node.end_position();
            // Blocks usually end at column 0 of the row after their last line.
            let last = if end.column == 0 && end.row > start.row {
                end.row - 1
            } else {
                end.row
            };
            rows.push((start.row, last));
        }
    }
    Ok(rows)
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Greedy word wrap. Words longer than `width` are split across rows.
/// Blank input yields a single empty row.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for mut word in text.split_whitespace() {
        loop {
            let word_len = word.chars().count();
            let needed = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(word);
                current_len += word_len;
                break;
            }
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }
            let split = word.char_indices().nth(width).map_or(word.len(), |(i, _)| i);
            rows.push(word[..split].to_string());
            word = &word[split..];
            if word.is_empty() {
                break;
            }
        }
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Splits text into rows of at most `width` characters, keeping whitespace intact.
fn split_chars(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
