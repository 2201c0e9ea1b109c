//! Edge synthesis for a laid-out version tree.
//!
//! Edges are derived from the version list plus the node positions the caller currently holds,
//! so re-running after a drag keeps sibling links ordered left-to-right on screen.

use crate::model::{
    Anchor, EdgeKind, EdgeStyle, LayoutNode, Marker, SyntheticEdge, VersionRecord,
};
use rustc_hash::{FxHashMap, FxHashSet};

struct EdgeSink {
    seen: FxHashSet<String>,
    out: Vec<SyntheticEdge>,
}

impl EdgeSink {
    fn new() -> Self {
        Self {
            seen: FxHashSet::default(),
            out: Vec::new(),
        }
    }

    fn push(&mut self, edge: SyntheticEdge) {
        if self.seen.insert(edge.id.clone()) {
            self.out.push(edge);
        }
    }
}

fn parent_child_edge(parent: &str, child: &str) -> SyntheticEdge {
    SyntheticEdge {
        id: EdgeKind::ParentChild.edge_id(parent, child),
        source: parent.to_string(),
        target: child.to_string(),
        kind: EdgeKind::ParentChild,
        animated: true,
        label: None,
        style: EdgeStyle {
            dashed: false,
            source_handle: Some(Anchor::Bottom),
            target_handle: Some(Anchor::Top),
            marker_end: None,
        },
    }
}

fn sibling_edge(left: &str, right: &str) -> SyntheticEdge {
    SyntheticEdge {
        id: EdgeKind::Sibling.edge_id(left, right),
        source: left.to_string(),
        target: right.to_string(),
        kind: EdgeKind::Sibling,
        animated: false,
        label: None,
        style: EdgeStyle {
            dashed: true,
            source_handle: Some(Anchor::Right),
            target_handle: Some(Anchor::Left),
            marker_end: None,
        },
    }
}

fn explicit_edge(source: &str, target: &str, label: Option<&str>, animated: bool) -> SyntheticEdge {
    SyntheticEdge {
        id: EdgeKind::Explicit.edge_id(source, target),
        source: source.to_string(),
        target: target.to_string(),
        kind: EdgeKind::Explicit,
        animated,
        label: label.map(str::to_string),
        style: EdgeStyle {
            dashed: false,
            source_handle: None,
            target_handle: None,
            marker_end: Some(Marker::ArrowClosed),
        },
    }
}

/// Derives parent-child, sibling and explicit edges, in that order.
///
/// Edges touching a version with no entry in `nodes` are dropped. Ids are
/// `"{prefix}-{source}-{target}"` and the first edge with a given id wins.
pub fn synthesize_edges(versions: &[VersionRecord], nodes: &[LayoutNode]) -> Vec<SyntheticEdge> {
    let x_by_id: FxHashMap<&str, f64> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.position.x))
        .collect();
    let present = |id: &str| x_by_id.contains_key(id);

    let mut sink = EdgeSink::new();

    for v in versions {
        let Some(parent) = v.parent_id.as_deref() else {
            continue;
        };
        if parent == v.id {
            continue;
        }
        if present(parent) && present(&v.id) {
            sink.push(parent_child_edge(parent, &v.id));
        } else {
            tracing::debug!(id = %v.id, parent = %parent, "parent edge omitted; endpoint not laid out");
        }
    }

    // Cohorts keyed by raw parent id, in first-seen order.
    let mut cohort_index: FxHashMap<Option<&str>, usize> = FxHashMap::default();
    let mut cohorts: Vec<Vec<(&str, f64)>> = Vec::new();
    for v in versions {
        let Some(&x) = x_by_id.get(v.id.as_str()) else {
            continue;
        };
        let slot = *cohort_index
            .entry(v.parent_id.as_deref())
            .or_insert_with(|| {
                cohorts.push(Vec::new());
                cohorts.len() - 1
            });
        cohorts[slot].push((v.id.as_str(), x));
    }
    for cohort in &mut cohorts {
        if cohort.len() < 2 {
            continue;
        }
        cohort.sort_by(|a, b| a.1.total_cmp(&b.1));
        for pair in cohort.windows(2) {
            let (left, right) = (pair[0].0, pair[1].0);
            if left != right {
                sink.push(sibling_edge(left, right));
            }
        }
    }

    for v in versions {
        for e in &v.explicit_edges {
            if present(&v.id) && present(&e.target_id) {
                sink.push(explicit_edge(
                    &v.id,
                    &e.target_id,
                    e.label.as_deref(),
                    e.animated.unwrap_or(false),
                ));
            } else {
                tracing::debug!(source = %v.id, target = %e.target_id, "explicit edge omitted; endpoint not laid out");
            }
        }
    }

    sink.out
}
