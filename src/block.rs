use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{config::Config, inline::format_inline};

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s+(.+)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());
static BLOCK_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s+(.+)$").unwrap());
static LIST_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<li>.*?</li>(?:\s*<li>.*?</li>)*").unwrap());

/// Classification of one trimmed input line.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Line<'a> {
    /// Empty line, kept as a paragraph break.
    Blank,
    /// `#`-prefixed heading.
    Heading {
        /// Number of `#` markers, 1 through 6.
        level: usize,
        /// Text after the markers.
        text: &'a str,
    },
    /// `- item` or `1. item`. Ordered and unordered items render alike and
    /// are wrapped into a single list afterwards.
    ListItem(&'a str),
    /// `> quoted` line.
    BlockQuote(&'a str),
    /// Anything else.
    Paragraph(&'a str),
}

pub(crate) fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(caps) = HEADING.captures(line) {
        return Line::Heading {
            level: caps[1].len(),
            text: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    if let Some(caps) = UNORDERED_ITEM
        .captures(line)
        .or_else(|| ORDERED_ITEM.captures(line))
    {
        return Line::ListItem(caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = BLOCK_QUOTE.captures(line) {
        return Line::BlockQuote(caps.get(1).map_or("", |m| m.as_str()));
    }
    Line::Paragraph(line)
}

/// Walk the working text line by line and emit one HTML block per line.
///
/// Consecutive list items (separated only by whitespace) are wrapped in a
/// single `<ul>` afterwards. Lines are never merged otherwise: a
/// multi-line paragraph in the source becomes adjacent `<p>` tags.
pub(crate) fn render_blocks(input: &str, config: &Config) -> Result<String, std::fmt::Error> {
    let mut out = String::with_capacity(input.len() * 2);
    for (i, line) in input.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match classify(line.trim()) {
            Line::Blank => {}
            Line::Heading { level, text } => {
                let text = format_inline(text, config);
                write!(out, "<h{level}>{text}</h{level}>")?;
            }
            Line::ListItem(text) => write!(out, "<li>{}</li>", format_inline(text, config))?,
            Line::BlockQuote(text) => write!(
                out,
                "<blockquote><p>{}</p></blockquote>",
                format_inline(text, config)
            )?,
            Line::Paragraph(text) => write!(out, "<p>{}</p>", format_inline(text, config))?,
        }
    }

    let wrapped = LIST_RUN.replace_all(&out, "<ul>${0}</ul>");
    Ok(wrapped.replace("<p></p>", ""))
}
