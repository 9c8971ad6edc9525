//! Configuration for a topology check run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Toggles for a topology check run.
///
/// These are the only externally tunable parameters. The defaults
/// match common quad-modeling practice: valence-5 poles are tolerated,
/// triangles are not, and the comparatively expensive non-manifold
/// edge search is off.
///
/// # Example
///
/// ```
/// use meshlint_types::CheckConfig;
///
/// let config = CheckConfig::default();
/// assert!(config.allow_five_poles);
/// assert!(!config.allow_triangles);
/// assert!(!config.search_non_manifold_edges);
///
/// // Or customize settings
/// let config = CheckConfig::default()
///     .with_allow_triangles(true)
///     .with_search_non_manifold_edges(true);
/// assert!(config.allow_triangles);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckConfig {
    /// Whether valence-5 vertices are acceptable.
    ///
    /// When `true`, the high-valence pole threshold is valence > 5;
    /// when `false`, valence > 4.
    pub allow_five_poles: bool,

    /// Whether 3-sided polygons are acceptable alongside quads.
    pub allow_triangles: bool,

    /// Whether to run the non-manifold edge search.
    ///
    /// This is the expensive pass; it is off by default.
    pub search_non_manifold_edges: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            allow_five_poles: true,
            allow_triangles: false,
            search_non_manifold_edges: false,
        }
    }
}

impl CheckConfig {
    /// Create a configuration with the default toggles.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictest configuration: no pole or triangle allowances, and
    /// the non-manifold edge search enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            allow_five_poles: false,
            allow_triangles: false,
            search_non_manifold_edges: true,
        }
    }

    /// Set whether valence-5 vertices are acceptable.
    #[must_use]
    pub fn with_allow_five_poles(mut self, allow: bool) -> Self {
        self.allow_five_poles = allow;
        self
    }

    /// Set whether triangles are acceptable alongside quads.
    #[must_use]
    pub fn with_allow_triangles(mut self, allow: bool) -> Self {
        self.allow_triangles = allow;
        self
    }

    /// Set whether to run the non-manifold edge search.
    #[must_use]
    pub fn with_search_non_manifold_edges(mut self, search: bool) -> Self {
        self.search_non_manifold_edges = search;
        self
    }
}
