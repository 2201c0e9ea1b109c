//! Version records (input) and the node/edge shapes handed to a graph renderer (output).
//!
//! Field names serialize in camelCase so the JSON matches what the renderer expects:
//! `{id, position, data}` for nodes and `{id, source, target, ...style}` for edges.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub explicit_edges: Vec<ExplicitEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Opaque payload copied onto the laid-out node.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl VersionRecord {
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            explicit_edges: Vec::new(),
            label: None,
            data: Value::Null,
        }
    }

    pub fn child(id: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            ..Self::root(id)
        }
    }

    pub fn with_explicit_edge(mut self, edge: ExplicitEdge) -> Self {
        self.explicit_edges.push(edge);
        self
    }
}

/// Author-specified link, independent of the parent/child relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitEdge {
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl ExplicitEdge {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            label: None,
            animated: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: String,
    pub position: Point,
    pub depth: usize,
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    ParentChild,
    Sibling,
    Explicit,
}

impl EdgeKind {
    /// Prefix used when deriving the deterministic edge id.
    pub fn id_prefix(self) -> &'static str {
        match self {
            EdgeKind::ParentChild => "e",
            EdgeKind::Sibling => "sibling",
            EdgeKind::Explicit => "explicit",
        }
    }

    pub fn edge_id(self, source: &str, target: &str) -> String {
        format!("{}-{source}-{target}", self.id_prefix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    ArrowClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub dashed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<Anchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<Anchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_end: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub animated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub style: EdgeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionGraph {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<SyntheticEdge>,
}
