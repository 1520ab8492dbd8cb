//! `archboard <document.json> [--normalize]`
//!
//! Loads a diagram through the editor's import path, prints a summary, and
//! with `--normalize` prints the sanitized export.

use anyhow::{Context, Result};
use archboard::Editor;
use archboard::catalog;
use archboard::settings::EditorSettings;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "archboard")]
#[command(about = "Inspect and normalize architecture diagram documents")]
#[command(version)]
struct Args {
    /// Diagram document exported by the editor
    path: PathBuf,

    /// Print the sanitized export after the summary
    #[arg(long)]
    normalize: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "archboard=info")]
    log_filter: String,
}

fn main() -> Result<()> {
    let Args {
        path,
        normalize,
        log_filter,
    } = Args::parse();
    archboard::logging::init_with_default(&log_filter);

    let mut editor = Editor::new(EditorSettings::load());
    let report = editor
        .load_from(&path)
        .with_context(|| format!("failed to import {}", path.display()))?;
    info!(path = %path.display(), clean = report.is_clean(), "Document loaded");

    let store = editor.store();
    let viewport = editor.viewport();
    println!(
        "{} nodes, {} edges, view ({}, {}) at {:.2}x",
        store.nodes().len(),
        store.edges().len(),
        viewport.x(),
        viewport.y(),
        viewport.k()
    );
    for node in store.nodes() {
        let kind = catalog::lookup(&node.kind).map(|c| c.label).unwrap_or(node.kind.as_str());
        println!("  {:<24} {:<20} ({}, {})", node.data.label, kind, node.x, node.y);
    }
    if !report.rejected.is_empty() {
        println!("skipped malformed sections: {}", report.rejected.join(", "));
    }
    if !report.sanitized.is_clean() {
        println!(
            "dropped {} duplicate nodes, {} dangling edges, {} duplicate edges",
            report.sanitized.duplicate_nodes,
            report.sanitized.dangling_edges,
            report.sanitized.duplicate_edges
        );
    }

    if normalize {
        println!("{}", editor.export_document()?);
    }
    Ok(())
}
