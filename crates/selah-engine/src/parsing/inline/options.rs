use serde::{Deserialize, Serialize};

/// Default limit on how deeply inline tokens may nest.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables for inline rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineOptions {
    /// Nesting depth past which tokens are no longer recognized; the rest of
    /// that subtree is kept as literal text. Values below 1 act as 1.
    pub max_depth: usize,
}

impl InlineOptions {
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.max(1)
    }
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
