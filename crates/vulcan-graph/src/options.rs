use serde::{Deserialize, Serialize};

pub const DEFAULT_NODE_SPACING: f64 = 250.0;
pub const DEFAULT_RANK_SPACING: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Horizontal distance between adjacent slots of one generation.
    pub node_spacing: f64,
    /// Vertical distance between generations.
    pub rank_spacing: f64,
    /// Reject cyclic parent chains instead of breaking them.
    pub strict: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::lenient()
    }
}

impl LayoutOptions {
    /// Cyclic parent chains are broken and their members placed as roots.
    pub fn lenient() -> Self {
        Self {
            node_spacing: DEFAULT_NODE_SPACING,
            rank_spacing: DEFAULT_RANK_SPACING,
            strict: false,
        }
    }

    /// Cyclic parent chains are reported as [`crate::Error::CyclicParent`].
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::lenient()
        }
    }
}
