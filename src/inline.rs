use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{config::Config, escape::escape_html};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Rewrite inline Markdown spans within a single line of text.
///
/// The four rules run in a fixed order: bold before italic so `**` is never
/// mis-split into two `*` matches, then inline code, then links. Each rule
/// scans the string once and never re-scans its own output, so nested spans
/// are not supported.
pub(crate) fn format_inline(text: &str, config: &Config) -> String {
    let text = BOLD.replace_all(text, |caps: &Captures| {
        format!("<strong>{}</strong>", span(&caps[1], config))
    });
    let text = ITALIC.replace_all(&text, |caps: &Captures| {
        format!("<em>{}</em>", span(&caps[1], config))
    });
    let text = CODE.replace_all(&text, |caps: &Captures| {
        format!("<code>{}</code>", span(&caps[1], config))
    });
    let text = LINK.replace_all(&text, |caps: &Captures| {
        format!(
            r#"<a href="{}">{}</a>"#,
            span(&caps[2], config),
            span(&caps[1], config)
        )
    });
    text.into_owned()
}

/// Span captures pass through verbatim unless the caller opted into
/// escaping.
fn span<'t>(text: &'t str, config: &Config) -> Cow<'t, str> {
    if config.escape_spans {
        Cow::Owned(escape_html(text))
    } else {
        Cow::Borrowed(text)
    }
}
