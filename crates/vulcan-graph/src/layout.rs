//! Generational tree layout.
//!
//! Versions are grouped by their depth in the parent chain. Each generation is laid out on its
//! own row with a fixed slot spacing and centered on `x = 0`; rows do not influence each other.

use crate::error::{Error, Result};
use crate::model::{LayoutNode, NodeData, Point, VersionRecord};
use crate::options::LayoutOptions;
use rustc_hash::FxHashMap;

/// `id -> record` lookup. Duplicate ids resolve to the last record encountered.
pub(crate) struct VersionIndex<'a> {
    by_id: FxHashMap<&'a str, &'a VersionRecord>,
}

impl<'a> VersionIndex<'a> {
    pub(crate) fn new(versions: &'a [VersionRecord]) -> Self {
        let mut by_id: FxHashMap<&'a str, &'a VersionRecord> = FxHashMap::default();
        for v in versions {
            if by_id.insert(v.id.as_str(), v).is_some() {
                tracing::debug!(id = %v.id, "duplicate version id; last record wins");
            }
        }
        for v in versions {
            if let Some(p) = v.parent_id.as_deref() {
                if !by_id.contains_key(p) {
                    tracing::debug!(id = %v.id, parent = %p, "dangling parent reference; placing version as a root");
                }
            }
        }
        Self { by_id }
    }

    /// Parent id of `id`, only when it resolves within the input set.
    pub(crate) fn resolved_parent(&self, id: &str) -> Option<&'a str> {
        let record: &'a VersionRecord = self.by_id.get(id).copied()?;
        let parent = record.parent_id.as_deref()?;
        self.by_id.contains_key(parent).then_some(parent)
    }
}

#[derive(Debug, Default)]
struct Depths<'a> {
    by_id: FxHashMap<&'a str, usize>,
    /// Each entry lists the members of one cycle in parent-chain order.
    cycles: Vec<Vec<&'a str>>,
}

/// Walks every parent chain once. Chains are followed iteratively so arbitrarily deep or cyclic
/// input cannot exhaust the stack; cycle members get depth 0.
fn compute_depths<'a>(versions: &'a [VersionRecord], index: &VersionIndex<'a>) -> Depths<'a> {
    let mut out = Depths::default();
    let mut path: Vec<&'a str> = Vec::new();
    let mut on_path: FxHashMap<&'a str, usize> = FxHashMap::default();

    for v in versions {
        if out.by_id.contains_key(v.id.as_str()) {
            continue;
        }
        path.clear();
        on_path.clear();

        let mut cur: &'a str = v.id.as_str();
        let mut next_depth;
        loop {
            if let Some(&d) = out.by_id.get(cur) {
                next_depth = d + 1;
                break;
            }
            if let Some(&pos) = on_path.get(cur) {
                let members = path.split_off(pos);
                for &m in &members {
                    out.by_id.insert(m, 0);
                }
                tracing::warn!(members = ?members, "cyclic parent chain; placing members as roots");
                out.cycles.push(members);
                next_depth = 1;
                break;
            }
            on_path.insert(cur, path.len());
            path.push(cur);
            match index.resolved_parent(cur) {
                Some(parent) => cur = parent,
                None => {
                    path.pop();
                    out.by_id.insert(cur, 0);
                    next_depth = 1;
                    break;
                }
            }
        }

        // `path` runs from the starting record up towards its ancestors.
        for id in path.drain(..).rev() {
            out.by_id.insert(id, next_depth);
            next_depth += 1;
        }
    }

    out
}

fn place<'a>(
    versions: &'a [VersionRecord],
    depths: &Depths<'a>,
    options: &LayoutOptions,
) -> Vec<LayoutNode> {
    let mut generations: Vec<Vec<&VersionRecord>> = Vec::new();
    for v in versions {
        let depth = depths.by_id.get(v.id.as_str()).copied().unwrap_or(0);
        if generations.len() <= depth {
            generations.resize_with(depth + 1, Vec::new);
        }
        generations[depth].push(v);
    }

    let mut out = Vec::with_capacity(versions.len());
    for (depth, generation) in generations.iter().enumerate() {
        let offset = generation.len().saturating_sub(1) as f64 * options.node_spacing / 2.0;
        let y = depth as f64 * options.rank_spacing;
        for (slot, v) in generation.iter().enumerate() {
            out.push(LayoutNode {
                id: v.id.clone(),
                position: Point {
                    x: slot as f64 * options.node_spacing - offset,
                    y,
                },
                depth,
                data: NodeData {
                    label: v.label.clone(),
                    payload: v.data.clone(),
                },
            });
        }
    }
    out
}

/// Lays out every version; never fails. Cyclic chains are broken regardless of
/// `options.strict`.
pub fn layout(versions: &[VersionRecord], options: &LayoutOptions) -> Vec<LayoutNode> {
    let index = VersionIndex::new(versions);
    let depths = compute_depths(versions, &index);
    place(versions, &depths, options)
}

/// Like [`layout`], but in strict mode a cyclic parent chain is an error.
pub fn try_layout(versions: &[VersionRecord], options: &LayoutOptions) -> Result<Vec<LayoutNode>> {
    let index = VersionIndex::new(versions);
    let depths = compute_depths(versions, &index);
    if options.strict {
        if let Some(cycle) = depths.cycles.first() {
            return Err(Error::CyclicParent {
                ids: cycle.iter().map(|id| (*id).to_string()).collect(),
            });
        }
    }
    Ok(place(versions, &depths, options))
}
