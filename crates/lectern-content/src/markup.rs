//! Inline markup inspection.
//!
//! Slide text uses three markdown conventions: `_emphasis_`, `**strong**`,
//! and `` `code` ``. Renderers decide how to draw them; this module turns a
//! string into styled [`Span`]s or strips the markers entirely.
//!
//! Only inline markup is interpreted. Line-leading block markers (list
//! bullets, `#`, `>`, setext underlines, fences) are escaped before parsing
//! so they stay in the text. Every input yields spans and nothing here fails.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;

/// Inline styles active on a span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Style {
    pub emphasis: bool,
    pub strong: bool,
    pub code: bool,
}

impl Style {
    /// No styling.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A run of text sharing one [`Style`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Split `text` into styled spans.
///
/// Adjacent runs with the same style are merged.
///
/// # Example
///
/// ```
/// use lectern_content::markup::parse_inline;
///
/// let spans = parse_inline("Use **strong** words");
/// assert_eq!(spans.len(), 3);
/// assert!(spans[1].style.strong);
/// assert_eq!(spans[1].text, "strong");
/// ```
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut emphasis = 0usize;
    let mut strong = 0usize;

    let style = |emphasis: usize, strong: usize, code: bool| Style {
        emphasis: emphasis > 0,
        strong: strong > 0,
        code,
    };

    let source = escape_block_markers(text);
    for event in Parser::new(&source) {
        match event {
            Event::Start(Tag::Emphasis) => emphasis += 1,
            Event::End(TagEnd::Emphasis) => emphasis = emphasis.saturating_sub(1),
            Event::Start(Tag::Strong) => strong += 1,
            Event::End(TagEnd::Strong) => strong = strong.saturating_sub(1),
            Event::Start(Tag::Paragraph) | Event::Start(Tag::Heading { .. }) => {
                if !spans.is_empty() {
                    push(&mut spans, "\n", Style::plain());
                }
            }
            Event::Text(t) | Event::Html(t) | Event::InlineHtml(t) => {
                push(&mut spans, &t, style(emphasis, strong, false));
            }
            Event::Code(t) => push(&mut spans, &t, style(emphasis, strong, true)),
            Event::SoftBreak | Event::HardBreak => {
                push(&mut spans, " ", style(emphasis, strong, false));
            }
            _ => {}
        }
    }

    spans
}

/// Backslash-escape anything at the start of a line that CommonMark would
/// read as block structure. Leading indentation is dropped so nothing
/// becomes an indented code block.
fn escape_block_markers(text: &str) -> String {
    let lines: Vec<String> = text.split('\n').map(escape_line).collect();
    lines.join("\n")
}

fn escape_line(line: &str) -> String {
    let line = line.trim_start();
    let bytes = line.as_bytes();
    let Some(&first) = bytes.first() else {
        return String::new();
    };
    let followed_by_space = |i: usize| bytes.get(i).is_none_or(|b| *b == b' ' || *b == b'\t');

    match first {
        b'#' | b'>' | b'-' | b'+' | b'=' | b'~' | b'<' => return format!("\\{line}"),
        b'`' if line.starts_with("```") => return format!("\\{line}"),
        b'*' | b'_' if followed_by_space(1) || is_thematic_break(line, first) => {
            return format!("\\{line}");
        }
        _ => {}
    }

    // Ordered list marker: 1-9 digits followed by `.` or `)` and a space.
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if (1..=9).contains(&digits)
        && matches!(bytes.get(digits), Some(b'.') | Some(b')'))
        && followed_by_space(digits + 1)
    {
        return format!("{}\\{}", &line[..digits], &line[digits..]);
    }

    line.to_string()
}

fn is_thematic_break(line: &str, marker: u8) -> bool {
    let count = line.bytes().filter(|b| *b == marker).count();
    count >= 3 && line.bytes().all(|b| b == marker || b == b' ' || b == b'\t')
}

fn push(spans: &mut Vec<Span>, text: &str, style: Style) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => spans.push(Span::new(text, style)),
    }
}

/// Strip markup markers, keeping only the readable text.
///
/// ```
/// use lectern_content::markup::to_plain_text;
///
/// assert_eq!(to_plain_text("Some _basic_ knowledge"), "Some basic knowledge");
/// ```
pub fn to_plain_text(text: &str) -> String {
    parse_inline(text).into_iter().map(|s| s.text).collect()
}

/// Whether `text` contains any styled span.
pub fn has_markup(text: &str) -> bool {
    parse_inline(text).iter().any(|s| !s.style.is_plain())
}
