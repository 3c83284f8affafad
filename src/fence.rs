use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    beautify::{beautify, Language},
    config::Config,
    escape::escape_html,
};

// The three fence tiers, in pass order. `copy` alone must be claimed
// before the language pass runs, or it would be mistaken for a language
// tag; the bare pattern catches whatever is left.
static COPY_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```\s*copy\s*\n(.*?)```").unwrap());
static TAGGED_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([a-zA-Z][a-zA-Z0-9+-]*)\s*(copy)?\s*\n(.*?)```").unwrap());
static PLAIN_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```\s*\n(.*?)```").unwrap());
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--CODEBLOCK_(\d+)-->").unwrap());

const PRE_STYLE: &str = "line-height:1.1!important;font-size:15px!important;";
const CODE_STYLE: &str =
    "line-height:1.1!important;background:none!important;font-size:15px!important;";
const COPY_BUTTON: &str =
    r#"<button class="code-copy-btn" onclick="copyCodeBlock(this)" title="Copy code">copy</button>"#;

/// Which fence pattern matched, in pass order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FenceTier {
    /// ```` ```copy ````: exact formatting preserved, copy button.
    CopyOnly,
    /// ```` ```lang ```` or ```` ```lang copy ````: body beautified for the
    /// tagged language.
    Tagged,
    /// Bare ```` ``` ````: preserved, no button.
    Plain,
}

/// One extracted fenced region. Lives for a single conversion call.
#[derive(Debug)]
pub(crate) struct FencedBlock {
    /// Exact original bytes between the fences.
    code: String,
    /// Lowercased language tag, when the tagged pattern matched.
    language: Option<String>,
    /// The fence asked for a copy button.
    copy_button: bool,
    tier: FenceTier,
}

impl FencedBlock {
    /// Render the block to a self-contained snippet.
    ///
    /// The inline `line-height`/`font-size` overrides keep monospace
    /// rendering stable no matter what the host theme does to `pre` and
    /// `code`. `data-code` carries the attribute-escaped code for the host
    /// clipboard script.
    fn to_html(&self, config: &Config) -> String {
        let display = match (self.tier, &self.language) {
            (FenceTier::Tagged, Some(language)) => {
                beautify(&self.code, Language::from_tag(language), &config.indent)
            }
            _ => self.code.clone(),
        };

        let mut wrapper_class = String::from("code-block-wrapper");
        let mut code_class = String::new();
        if let Some(language) = &self.language {
            wrapper_class.push_str(" language-");
            wrapper_class.push_str(language);
            code_class = format!(r#" class="language-{language}""#);
        }

        let with_button = self.copy_button && config.copy_buttons;
        if with_button {
            wrapper_class.push_str(" has-copy-button");
        }
        let button = if with_button { COPY_BUTTON } else { "" };

        format!(
            r#"<div class="{wrapper_class}" data-code="{data}">{button}<pre style="{PRE_STYLE}"><code{code_class} style="{CODE_STYLE}">{body}</code></pre></div>"#,
            data = escape_html(&display),
            body = escape_html(&display),
        )
    }
}

/// Snippets rendered during extraction, keyed by placeholder index.
/// Owned by one conversion call; never shared.
#[derive(Debug, Default)]
pub(crate) struct BlockStore {
    rendered: Vec<String>,
}

impl BlockStore {
    /// Number of blocks extracted so far.
    pub(crate) fn len(&self) -> usize {
        self.rendered.len()
    }

    /// Render and store `block`, returning the placeholder token that
    /// stands in for it until [`reassemble`](Self::reassemble).
    fn store(&mut self, block: FencedBlock, config: &Config) -> String {
        let index = self.rendered.len();
        self.rendered.push(block.to_html(config));
        format!("<!--CODEBLOCK_{index}-->")
    }

    /// Substitute every placeholder with its stored snippet.
    ///
    /// Runs strictly after block and inline rendering so extracted code is
    /// never reprocessed. A token without a stored block is left visible
    /// rather than dropped; a stored block that never surfaces again is an
    /// internal-consistency failure.
    pub(crate) fn reassemble(&self, rendered: &str) -> String {
        let mut used = vec![false; self.rendered.len()];
        let output = PLACEHOLDER
            .replace_all(rendered, |caps: &Captures| {
                let block = caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.rendered.get(index).map(|html| (index, html)));
                match block {
                    Some((index, html)) => {
                        if used[index] {
                            tracing::warn!(index, "placeholder substituted more than once");
                        }
                        used[index] = true;
                        html.clone()
                    }
                    None => {
                        tracing::warn!(token = &caps[0], "placeholder without a stored block");
                        caps[0].to_string()
                    }
                }
            })
            .into_owned();
        for (index, was_used) in used.iter().enumerate() {
            if !was_used {
                tracing::warn!(index, "stored code block was never substituted");
                debug_assert!(false, "stored code block {index} was never substituted");
            }
        }
        output
    }
}

/// Pull every fenced region out of `input`, replacing each with an opaque
/// placeholder token and rendering it into the returned store.
///
/// Three passes share one index counter and each scans the text the
/// previous pass produced; placeholders contain no backticks, so an
/// earlier pass's output is opaque to the later patterns.
pub(crate) fn extract(input: &str, config: &Config) -> (String, BlockStore) {
    let mut store = BlockStore::default();

    let pass = COPY_FENCE.replace_all(input, |caps: &Captures| {
        store.store(
            FencedBlock {
                code: caps[1].to_string(),
                language: None,
                copy_button: true,
                tier: FenceTier::CopyOnly,
            },
            config,
        )
    });
    let pass = TAGGED_FENCE.replace_all(&pass, |caps: &Captures| {
        store.store(
            FencedBlock {
                code: caps[3].to_string(),
                language: Some(caps[1].to_lowercase()),
                copy_button: caps.get(2).is_some(),
                tier: FenceTier::Tagged,
            },
            config,
        )
    });
    let pass = PLAIN_FENCE.replace_all(&pass, |caps: &Captures| {
        store.store(
            FencedBlock {
                code: caps[1].to_string(),
                language: None,
                copy_button: false,
                tier: FenceTier::Plain,
            },
            config,
        )
    });

    (pass.into_owned(), store)
}
