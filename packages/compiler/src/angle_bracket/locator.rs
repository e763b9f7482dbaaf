//! Source Locator
//!
//! Recovers the raw template text behind a node from its span. Some
//! parsers lower-case the first character of every tag name and do not
//! record whether an element was written `<Foo />`; both facts can be read
//! back from the original text when it was supplied.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chars;
use crate::parse_util::SourceSpan;
use crate::syntax::ast::ElementNode;

static LINE_BREAK_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?|\n").unwrap());

/// Original template text split into physical lines (terminators removed).
#[derive(Debug, Clone, Default)]
pub struct SourceLines {
    lines: Option<Vec<String>>,
}

impl SourceLines {
    /// `None` and empty contents both mean "no source available".
    pub fn new(contents: Option<&str>) -> Self {
        let lines = contents
            .filter(|text| !text.is_empty())
            .map(|text| LINE_BREAK_REGEXP.split(text).map(str::to_string).collect());
        SourceLines { lines }
    }

    pub fn unavailable() -> Self {
        SourceLines { lines: None }
    }

    pub fn is_available(&self) -> bool {
        self.lines.is_some()
    }

    /// Text covered by `span`, with line breaks between lines rendered as `\n`.
    ///
    /// Returns `None` when no source was supplied or the span belongs to a
    /// synthesized node. Line indexes past the end read as empty lines.
    pub fn source_for_span(&self, span: &SourceSpan) -> Option<String> {
        let lines = self.lines.as_ref()?;
        if span.is_synthetic() {
            return None;
        }

        let first_line = span.start.line.saturating_sub(1);
        let last_line = span.end.line.saturating_sub(1);
        if last_line < first_line {
            return Some(String::new());
        }

        let text = (first_line..=last_line)
            .map(|index| {
                let line = lines.get(index).map_or("", String::as_str);
                if index == first_line && first_line == last_line {
                    slice_columns(line, span.start.column, Some(span.end.column))
                } else if index == first_line {
                    slice_columns(line, span.start.column, None)
                } else if index == last_line {
                    slice_columns(line, 0, Some(span.end.column))
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        Some(text)
    }

    /// Whether the element was written self-closing.
    ///
    /// A flag recorded by the parser wins. Without one, and without source
    /// text, the element is taken as not self-closing. Otherwise the char
    /// before the first `>` of the element's text decides.
    pub fn self_closing(&self, element: &ElementNode) -> bool {
        if let Some(flag) = element.self_closing {
            return flag;
        }

        let Some(node_source) = self.source_for_span(&element.loc) else {
            return false;
        };

        let text: Vec<char> = node_source.chars().collect();
        match text.iter().position(|&ch| ch == chars::GT) {
            Some(index) if index > 0 => text[index - 1] == chars::SLASH,
            _ => false,
        }
    }

    /// The tag name exactly as written in the source.
    ///
    /// Scans past the opening `<` to the first ASCII letter or `@`, then
    /// takes everything up to `/`, `>` or whitespace. Falls back to the
    /// parser-recorded tag when there is no source, or nothing was found.
    pub fn tag_name<'a>(&self, element: &'a ElementNode) -> Cow<'a, str> {
        let Some(node_source) = self.source_for_span(&element.loc) else {
            return Cow::Borrowed(element.tag.as_str());
        };

        let tag_name: String = node_source
            .chars()
            .skip(1)
            .skip_while(|&ch| !chars::is_tag_name_start(ch))
            .take_while(|&ch| !chars::is_tag_name_end(ch))
            .collect();

        if tag_name.is_empty() {
            tracing::debug!(
                tag = %element.tag,
                loc = %element.loc,
                "no tag name in element source, using parsed tag"
            );
            Cow::Borrowed(element.tag.as_str())
        } else {
            Cow::Owned(tag_name)
        }
    }
}

/// Slice a line by char columns. Out-of-range columns clamp to the line.
fn slice_columns(line: &str, start: usize, end: Option<usize>) -> &str {
    let byte_offset = |column: usize| {
        line.char_indices()
            .nth(column)
            .map_or(line.len(), |(offset, _)| offset)
    };

    let start = byte_offset(start);
    let end = end.map_or(line.len(), byte_offset);
    if end <= start {
        ""
    } else {
        &line[start..end]
    }
}
