use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

// Break-insertion patterns. Each language family applies its separator
// pass first, then the open/close bracket passes, in that order; the
// close pass is what forces the break *before* a closer.
static STATEMENT_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([;{}])\s*").unwrap());
static CSS_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([{}:;])\s*").unwrap());
static JSON_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([,{}\[\]])\s*").unwrap());
static BASH_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([;&|])\s*").unwrap());
static BRACE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\{)\s*").unwrap());
static BRACE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\})\s*").unwrap());
static BRACKET_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([{\[])\s*").unwrap());
static BRACKET_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([}\]])\s*").unwrap());

/// Languages with dedicated line-break rules.
///
/// Resolved case-insensitively from a fence tag; anything unrecognized
/// falls back to [`Language::Generic`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Language {
    /// `javascript` or `js`.
    Javascript,
    /// `php`.
    Php,
    /// `css`. Also breaks after `:`, splitting properties from values.
    Css,
    /// `json`. Breaks after commas and around both bracket kinds.
    Json,
    /// `bash` or `sh`. Breaks after command separators only, with no brace
    /// awareness.
    Bash,
    /// Statement and brace boundaries, for everything else.
    Generic,
}

impl Language {
    /// Resolve a fence language tag.
    ///
    /// ```rust
    /// # use markdown_render::Language;
    /// assert_eq!(Language::from_tag("JS"), Language::Javascript);
    /// assert_eq!(Language::from_tag("rust"), Language::Generic);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Self::Javascript,
            "php" => Self::Php,
            "css" => Self::Css,
            "json" => Self::Json,
            "bash" | "sh" => Self::Bash,
            _ => Self::Generic,
        }
    }
}

/// Normalize a code sample into indented multi-line form.
///
/// The sample is collapsed to a single line, split back apart at the
/// separators that matter for `language`, and re-indented by bracket depth
/// with `indent` per level. This is a cosmetic re-indenter, not a parser:
/// brackets inside string literals or comments shift the depth like any
/// other bracket.
///
/// ```rust
/// # use markdown_render::{beautify, Language};
/// let code = beautify(r#"{"a":1,"b":2}"#, Language::Json, "  ");
/// assert_eq!(code, "{\n  \"a\":1,\n  \"b\":2\n}");
/// ```
pub fn beautify(code: &str, language: Language, indent: &str) -> String {
    if code.trim().is_empty() {
        return code.to_string();
    }
    let broken = force_multiline(code, language);
    reindent(&broken, indent)
}

/// Collapse all whitespace runs to single spaces, then reinsert strategic
/// line breaks.
fn force_multiline(code: &str, language: Language) -> String {
    let collapsed = code.split_whitespace().join(" ");
    match language {
        Language::Css => {
            let code = CSS_BREAKS.replace_all(&collapsed, "${1}\n");
            let code = BRACE_OPEN.replace_all(&code, "${1}\n");
            BRACE_CLOSE.replace_all(&code, "\n${1}\n").into_owned()
        }
        Language::Json => {
            let code = JSON_BREAKS.replace_all(&collapsed, "${1}\n");
            let code = BRACKET_OPEN.replace_all(&code, "${1}\n");
            BRACKET_CLOSE.replace_all(&code, "\n${1}\n").into_owned()
        }
        Language::Bash => BASH_BREAKS.replace_all(&collapsed, "${1}\n").into_owned(),
        Language::Javascript | Language::Php | Language::Generic => {
            let code = STATEMENT_BREAKS.replace_all(&collapsed, "${1}\n");
            let code = BRACE_OPEN.replace_all(&code, "${1}\n");
            BRACE_CLOSE.replace_all(&code, "\n${1}\n").into_owned()
        }
    }
}

/// Bracket-depth indentation pass.
///
/// A line starting with a closer outdents itself; a line ending with an
/// opener indents the lines after it. Depth is clamped at zero, and blank
/// lines pass through without touching it.
fn reindent(code: &str, indent: &str) -> String {
    let mut depth: usize = 0;
    code.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return String::new();
            }
            if trimmed.starts_with(['}', ')', ']']) {
                depth = depth.saturating_sub(1);
            }
            let indented = format!("{}{trimmed}", indent.repeat(depth));
            if trimmed.ends_with(['{', '(', '[']) {
                depth += 1;
            }
            indented
        })
        .join("\n")
        .trim()
        .to_string()
}
