use super::{split_chars, wrap_words, Document, LineKind};
use crate::error::Error;
use crate::formats::markdown::MarkdownFormat;
use crate::geometry::DocRect;
use crate::section::SectionId;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const ARTICLE: &str = "# Intro\n\nShort text here.\n\n## History\n\nThe town was founded long ago.\n\n## Geography\n";

fn article() -> Document {
    Document::parse("article.md", ARTICLE, &MarkdownFormat).unwrap()
}

#[test]
fn test_headings_numbered_in_document_order() {
    let doc = article();
    let headings: Vec<(u64, &str, usize, usize)> = doc
        .headings()
        .iter()
        .map(|h| (h.id.0, h.title.as_str(), h.level, h.source_line))
        .collect();

    assert_eq!(
        headings,
        vec![(1, "Intro", 1, 0), (2, "History", 2, 4), (3, "Geography", 2, 8)]
    );
    assert_eq!(doc.heading(SectionId(2)).map(|h| h.title.as_str()), Some("History"));
    assert!(doc.heading(SectionId(4)).is_none());
}

#[test]
fn test_reflow_wide_keeps_source_rows() {
    let rendition = article().reflow(80);

    assert_eq!(rendition.height(), 9);
    let boxes: Vec<(SectionId, DocRect)> = rendition
        .anchors
        .iter()
        .map(|a| (a.id, a.heading))
        .collect();
    assert_eq!(
        boxes,
        vec![
            (SectionId(1), DocRect::new(0, 0, 5, 1)),
            (SectionId(2), DocRect::new(0, 4, 7, 1)),
            (SectionId(3), DocRect::new(0, 8, 9, 1)),
        ]
    );
    assert_eq!(
        rendition.lines[4].kind,
        LineKind::Heading {
            id: SectionId(2),
            level: 2
        }
    );
}

#[test]
fn test_reflow_narrow_moves_headings_but_keeps_ids() {
    let doc = article();
    let wide = doc.reflow(80);
    let narrow = doc.reflow(10);

    assert_eq!(narrow.height(), 13);
    let rows: Vec<(SectionId, u32)> = narrow.anchors.iter().map(|a| (a.id, a.heading.y)).collect();
    assert_eq!(
        rows,
        vec![(SectionId(1), 0), (SectionId(2), 5), (SectionId(3), 12)]
    );

    let wide_ids: Vec<SectionId> = wide.anchors.iter().map(|a| a.id).collect();
    let narrow_ids: Vec<SectionId> = narrow.anchors.iter().map(|a| a.id).collect();
    assert_eq!(wide_ids, narrow_ids, "Reflow must not renumber sections");

    assert!(narrow.lines.iter().all(|l| l.text.chars().count() <= 10));
}

#[test]
fn test_long_heading_spans_rows() {
    let doc = Document::parse("h.md", "# A very long heading\n\nBody\n", &MarkdownFormat).unwrap();
    let rendition = doc.reflow(6);

    assert_eq!(rendition.anchors[0].heading, DocRect::new(0, 0, 6, 4));
    assert_eq!(rendition.lines[4].text, "");
    assert_eq!(rendition.lines[5].text, "Body");
}

#[test]
fn test_zero_width_treated_as_one_column() {
    let rendition = article().reflow(0);

    assert_eq!(rendition.width, 1);
    assert!(rendition.lines.iter().all(|l| l.text.chars().count() <= 1));
}

#[test]
fn test_fenced_code_is_not_a_section() {
    let source = "# Usage\n\n```sh\n# not a heading\n```\n\n## Notes\n";
    let doc = Document::parse("code.md", source, &MarkdownFormat).unwrap();
    let titles: Vec<&str> = doc.headings().iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Usage", "Notes"]);

    let rendition = doc.reflow(40);
    assert_eq!(rendition.lines[3].text, "# not a heading");
    assert_eq!(rendition.lines[3].kind, LineKind::Code);
    assert_eq!(rendition.anchors[1].heading.y, 6);
}

#[test]
fn test_mixed_fences_keep_every_section() {
    let source = "# Usage\n\n~~~\n```\n~~~\n\n## After\n\n````md\n```\n````\n\n## Later\n";
    let doc = Document::parse("fences.md", source, &MarkdownFormat).unwrap();
    let rendition = doc.reflow(40);

    let titles: Vec<&str> = rendition.anchors.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Usage", "After", "Later"]);
    assert_eq!(rendition.lines[3].text, "```");
    assert_eq!(rendition.lines[3].kind, LineKind::Code);
    assert_eq!(rendition.lines[9].kind, LineKind::Code);
    assert_eq!(rendition.anchors[1].heading.y, 6);
}

#[test]
fn test_inline_code_line_is_body_text() {
    let source = "# Intro\n\n```foo``` is inline code\n\n## Next\n";
    let doc = Document::parse("inline.md", source, &MarkdownFormat).unwrap();
    let rendition = doc.reflow(40);

    assert_eq!(rendition.lines[2].kind, LineKind::Body);
    assert_eq!(rendition.anchors.len(), 2);
}

#[test]
fn test_every_heading_gets_one_anchor() {
    let sources = [
        ARTICLE,
        "# Usage\n\n~~~\n```\n~~~\n\n## After\n\n````md\n```\n````\n\n## Later\n",
        "# Code\n\n    ```\n    indented\n\n## Tail\n\n```rust\nfn main() {}\n```\n\n### End\n",
        "# One\n## Two\n### Three\n",
    ];
    for source in sources {
        let doc = Document::parse("mixed.md", source, &MarkdownFormat).unwrap();
        let heading_ids: Vec<SectionId> = doc.headings().iter().map(|h| h.id).collect();
        for width in [1, 7, 40, 200] {
            let anchor_ids: Vec<SectionId> =
                doc.reflow(width).anchors.iter().map(|a| a.id).collect();
            assert_eq!(anchor_ids, heading_ids, "width {width}, source {source:?}");
        }
    }
}

#[test]
fn test_wrap_words_splits_long_words() {
    assert_eq!(wrap_words("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
    assert_eq!(wrap_words("   ", 5), vec![""]);
}

#[test]
fn test_split_chars_keeps_whitespace() {
    assert_eq!(split_chars("  let x = 1;", 5), vec!["  let", " x = ", "1;"]);
    assert_eq!(split_chars("", 5), vec![""]);
}

#[test]
fn test_load_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{ARTICLE}").unwrap();

    let doc = Document::load(file.path(), &MarkdownFormat).unwrap();
    assert_eq!(doc.headings().len(), 3);
    assert_eq!(doc.path, file.path().to_string_lossy());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = Document::load(Path::new("/nonexistent/obelus/article.md"), &MarkdownFormat);
    assert!(matches!(result, Err(Error::Io(_))));
}
