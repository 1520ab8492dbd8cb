//! Document serialization - the portable export format.
//!
//! ```json
//! { "nodes": [Node...], "edges": [Edge...], "transform": { "x": 0, "y": 0, "k": 1 } }
//! ```
//!
//! Import validates the top-level shape first. A document that is not JSON,
//! not an object, or has none of the three keys is rejected outright. Each
//! key that is present is then applied on its own if it is well-typed and
//! skipped (with a warning) if not.

use crate::input::Effect;
use crate::store::{DiagramStore, ReplaceReport};
use crate::types::{Edge, Node};
use crate::viewport::Viewport;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

const NODES_KEY: &str = "nodes";
const EDGES_KEY: &str = "edges";
const TRANSFORM_KEY: &str = "transform";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document is not a JSON object")]
    NotAnObject,

    #[error("Document has none of the keys \"nodes\", \"edges\" or \"transform\"")]
    MissingKeys,
}

pub type DocumentResult<T> = Result<T, DocumentError>;

/// A complete diagram snapshot as written by export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub transform: Viewport,
}

impl Document {
    pub fn capture(store: &DiagramStore, viewport: &Viewport) -> Self {
        Self {
            nodes: store.nodes().to_vec(),
            edges: store.edges().to_vec(),
            transform: *viewport,
        }
    }

    pub fn to_json(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> DocumentResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), nodes = self.nodes.len(), edges = self.edges.len(), "Document saved");
        Ok(())
    }
}

/// The well-typed sections of an imported document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentPatch {
    pub nodes: Option<Vec<Node>>,
    pub edges: Option<Vec<Edge>>,
    pub transform: Option<Viewport>,
    /// Sections that were present but malformed
    pub rejected: Vec<&'static str>,
}

impl DocumentPatch {
    /// Validate the top-level shape and decode each section independently.
    pub fn parse(json: &str) -> DocumentResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(mut map) = value else {
            return Err(DocumentError::NotAnObject);
        };
        if ![NODES_KEY, EDGES_KEY, TRANSFORM_KEY]
            .iter()
            .any(|key| map.contains_key(*key))
        {
            return Err(DocumentError::MissingKeys);
        }

        let mut rejected = Vec::new();
        let nodes = take_section(&mut map, NODES_KEY, &mut rejected);
        let edges = take_section(&mut map, EDGES_KEY, &mut rejected);
        let transform = take_section::<Viewport>(&mut map, TRANSFORM_KEY, &mut rejected);
        Ok(Self {
            nodes,
            edges,
            transform,
            rejected,
        })
    }

    pub fn read(path: &Path) -> DocumentResult<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Apply the decoded sections to the store and viewport.
    ///
    /// A missing or rejected `nodes` section keeps the current nodes (same for
    /// `edges`); the store then drops anything that would break its invariants.
    pub fn apply(self, store: &mut DiagramStore, viewport: &mut Viewport) -> ImportReport {
        let mut report = ImportReport {
            nodes_applied: self.nodes.is_some(),
            edges_applied: self.edges.is_some(),
            transform_applied: self.transform.is_some(),
            rejected: self.rejected,
            ..Default::default()
        };

        if self.nodes.is_some() || self.edges.is_some() {
            let nodes = self.nodes.unwrap_or_else(|| store.nodes().to_vec());
            let edges = self.edges.unwrap_or_else(|| store.edges().to_vec());
            report.sanitized = store.replace_all(nodes, edges);
        }
        if let Some(transform) = self.transform {
            *viewport = transform;
        }

        info!(
            nodes = store.nodes().len(),
            edges = store.edges().len(),
            rejected = ?report.rejected,
            "Document imported"
        );
        report
    }
}

/// Outcome of a successful import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub nodes_applied: bool,
    pub edges_applied: bool,
    pub transform_applied: bool,
    pub rejected: Vec<&'static str>,
    /// Entries the store dropped while sanitizing
    pub sanitized: ReplaceReport,
    /// Host effects of the import: pointer release for an interrupted
    /// gesture, then a redraw
    pub effects: Vec<Effect>,
}

impl ImportReport {
    /// True when every present section applied without drops
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.sanitized.is_clean()
    }
}

fn take_section<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    key: &'static str,
    rejected: &mut Vec<&'static str>,
) -> Option<T> {
    let value = map.remove(key)?;
    match serde_json::from_value(value) {
        Ok(section) => Some(section),
        Err(e) => {
            warn!(section = key, "Skipping malformed section: {}", e);
            rejected.push(key);
            None
        }
    }
}
