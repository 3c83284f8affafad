use pretty_assertions::assert_eq;

use super::*;

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(true)
        .try_init();
}

#[test]
fn render_is_deterministic() {
    init_tracing();
    let input = "# T\n\n- a\n- b\n\n```js copy\nf(1);g(2);\n```\n\n> done";
    let first = render_markdown(input).unwrap();
    let second = render_markdown(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_input_renders_empty() {
    init_tracing();
    assert_eq!(render_markdown("").unwrap(), "");
}

#[test]
fn headings_and_inline_spans() {
    init_tracing();
    let html = render_markdown("# Hello\n\nThis is **bold** and *italic*.").unwrap();
    assert_eq!(
        html,
        "<h1>Hello</h1>\n\n<p>This is <strong>bold</strong> and <em>italic</em>.</p>"
    );
}

#[test]
fn consecutive_list_items_share_one_wrapper() {
    init_tracing();
    let html = render_markdown("- a\n- b").unwrap();
    assert_eq!(html, "<ul><li>a</li>\n<li>b</li></ul>");
}

#[test]
fn copy_only_fence_preserves_exact_formatting() {
    init_tracing();
    let html = render_markdown("```copy\nfoo(   );\n```").unwrap();
    assert!(html.contains(r#"class="code-block-wrapper has-copy-button""#));
    assert!(html.contains("data-code=\"foo(   );\n\""), "{html}");
    assert!(html.contains(">foo(   );\n</code>"));
    assert!(!html.contains("language-"));
}

#[test]
fn tagged_fence_beautifies_and_keeps_copy() {
    init_tracing();
    let html = render_markdown("```json copy\n{\"a\":1,\"b\":2}\n```").unwrap();
    assert!(html.contains(r#"class="code-block-wrapper language-json has-copy-button""#));
    assert!(html.contains(r#"<code class="language-json""#));
    assert!(html.contains("{\n  &quot;a&quot;:1,\n  &quot;b&quot;:2\n}"), "{html}");
}

#[test]
fn copy_tag_is_never_treated_as_a_language() {
    init_tracing();
    let html = render_markdown("```copy\nlet x = 1;\n```").unwrap();
    assert!(!html.contains("language-copy"));
    // Unbeautified: the statement stays on one line.
    assert!(html.contains(">let x = 1;\n</code>"));
}

#[test]
fn no_placeholder_survives_reassembly() {
    init_tracing();
    let input = "\
intro

```copy
a(   );
```

```js
b();
```

```
c
```

outro";
    let html = render_markdown(input).unwrap();
    assert!(!html.contains("CODEBLOCK"), "{html}");
    assert_eq!(html.matches("code-block-wrapper").count(), 3);
}

#[test]
fn fences_reassemble_in_document_order() {
    init_tracing();
    // The copy-only pass runs first and grabs the later fence, so its
    // placeholder index is lower; reassembly must still restore document
    // order.
    let html = render_markdown("```js\na();\n```\n\n```copy\nraw\n```").unwrap();
    let js = html.find("language-js").unwrap();
    let copy = html.find("has-copy-button").unwrap();
    assert!(js < copy, "{html}");
}

#[test]
fn unterminated_fence_degrades_to_literal_text() {
    init_tracing();
    let html = render_markdown("```js\nfoo()").unwrap();
    assert_eq!(html, "<p>```js</p>\n<p>foo()</p>");
}

#[test]
fn code_bodies_are_escaped_exactly_once() {
    init_tracing();
    let html = render_markdown("```\na & b < c\n```").unwrap();
    assert!(html.contains("a &amp; b &lt; c"));
    assert!(!html.contains("&amp;amp;"));
}

#[test]
fn fenced_code_is_opaque_to_block_and_inline_rules() {
    init_tracing();
    let html = render_markdown("```copy\n# not a heading\n- not a list\n**not bold**\n```").unwrap();
    assert!(!html.contains("<h1>"));
    assert!(!html.contains("<li>"));
    assert!(!html.contains("<strong>"));
    assert!(html.contains("# not a heading"));
}

#[test]
fn multi_line_paragraphs_stay_separate() {
    init_tracing();
    let html = render_markdown("first line\nsecond line").unwrap();
    assert_eq!(html, "<p>first line</p>\n<p>second line</p>");
}

#[test]
fn copy_buttons_capability_flag_is_honored() {
    init_tracing();
    let mut renderer = MarkdownRenderer::default();
    renderer.copy_buttons(false);
    let html = renderer.render("```copy\nx\n```").unwrap();
    assert!(!html.contains("<button"));
    assert!(!html.contains("has-copy-button"));
}

#[test]
fn escape_spans_is_an_explicit_opt_in() {
    init_tracing();
    let trusted = render_markdown("*<b>*").unwrap();
    assert_eq!(trusted, "<p><em><b></em></p>");

    let config = Config {
        escape_spans: true,
        ..Default::default()
    };
    let escaped = render_markdown_with_config("*<b>*", config).unwrap();
    assert_eq!(escaped, "<p><em>&lt;b&gt;</em></p>");
}

#[test]
fn literal_placeholder_token_is_left_visible() {
    init_tracing();
    // A user-typed token with no stored block degrades to visible text
    // instead of crashing or vanishing.
    let html = render_markdown("<!--CODEBLOCK_7-->").unwrap();
    assert_eq!(html, "<p><!--CODEBLOCK_7--></p>");
}

#[test]
fn fenced_block_sits_inside_its_paragraph() {
    init_tracing();
    let html = render_markdown("```\nx\n```").unwrap();
    assert!(html.starts_with("<p><div class=\"code-block-wrapper\""), "{html}");
    assert!(html.ends_with("</div></p>"));
}

#[test]
fn mixed_document_end_to_end() {
    init_tracing();
    let input = "\
# Setup

Install the tool:

```bash copy
cd /srv; ./install | tee log
```

1. check the output
2. read the *notes*

> **Warning**: back up first.";
    let html = render_markdown(input).unwrap();
    assert!(html.contains("<h1>Setup</h1>"));
    assert!(html.contains("<p>Install the tool:</p>"));
    assert!(html.contains(r#"class="code-block-wrapper language-bash has-copy-button""#));
    assert!(html.contains("cd /srv;\n./install |\ntee log"));
    assert!(html.contains("<ul><li>check the output</li>\n<li>read the <em>notes</em></li></ul>"));
    assert!(html.contains("<blockquote><p><strong>Warning</strong>: back up first.</p></blockquote>"));
}
