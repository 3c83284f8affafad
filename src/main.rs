//! Command line front end: render a Markdown file (or standard input) to an
//! HTML fragment on standard output.

use std::{io::Read, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use markdown_render::{Config, MarkdownRenderer};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Markdown file to render; reads standard input when omitted.
    file: Option<PathBuf>,
    /// Suppress copy buttons on `copy`-tagged fences.
    #[arg(long)]
    no_copy_buttons: bool,
    /// HTML-escape inline span contents (bold, italic, code, links).
    #[arg(long)]
    escape_spans: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            buffer
        }
    };

    let renderer = MarkdownRenderer::with_config(Config {
        copy_buttons: !args.no_copy_buttons,
        escape_spans: args.escape_spans,
        ..Default::default()
    });
    let html = renderer.render(&input)?;
    println!("{html}");
    Ok(())
}
