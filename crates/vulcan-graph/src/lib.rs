#![forbid(unsafe_code)]

//! Headless layout and edge synthesis for the Vulcan version graph.
//!
//! Both pipelines are pure functions over a snapshot of [`VersionRecord`]s: [`layout`] places
//! versions by generation, [`synthesize_edges`] derives the drawable edge set from the versions
//! and whatever node positions the caller currently holds.

pub mod edges;
pub mod error;
pub mod layout;
pub mod model;
pub mod options;

pub use edges::synthesize_edges;
pub use error::{Error, Result};
pub use layout::{layout, try_layout};
pub use model::{
    Anchor, EdgeKind, EdgeStyle, ExplicitEdge, LayoutNode, Marker, NodeData, Point,
    SyntheticEdge, VersionGraph, VersionRecord,
};
pub use options::LayoutOptions;

/// Parses a JSON array of version records.
pub fn parse_versions(json: &str) -> Result<Vec<VersionRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Lays out `versions` and derives edges from the fresh positions.
pub fn build_graph(versions: &[VersionRecord], options: &LayoutOptions) -> Result<VersionGraph> {
    let nodes = try_layout(versions, options)?;
    let edges = synthesize_edges(versions, &nodes);
    Ok(VersionGraph { nodes, edges })
}
