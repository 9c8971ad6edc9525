//! Flagged-element selection sets.

use hashbrown::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The flagged vertex, edge, and polygon index sets produced by a
/// check run.
///
/// Membership is the only semantics: insertion order is irrelevant and
/// a vertex flagged by several rules appears once. Selections compose
/// by set union, which is commutative and associative, so independent
/// lint passes can each produce their own `Selection` and the results
/// can be merged in any order.
///
/// A selection is built fresh per run and never merged across runs.
///
/// # Example
///
/// ```
/// use meshlint_types::Selection;
///
/// let mut a = Selection::new();
/// a.vertices.insert(3);
/// a.polygons.insert(0);
///
/// let mut b = Selection::new();
/// b.vertices.insert(3);
/// b.edges.insert(7);
///
/// a.union(b);
/// assert_eq!(a.vertices.len(), 1);
/// assert_eq!(a.flagged_count(), 3);
/// assert!(a.has_issues());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    /// Flagged vertex indices.
    pub vertices: HashSet<u32>,

    /// Flagged edge indices.
    pub edges: HashSet<u32>,

    /// Flagged polygon indices.
    pub polygons: HashSet<u32>,
}

impl Selection {
    /// Create a new empty selection.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing is flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.polygons.is_empty()
    }

    /// Check if any element is flagged.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.is_empty()
    }

    /// Get the total number of flagged elements across all three sets.
    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.vertices.len() + self.edges.len() + self.polygons.len()
    }

    /// Merge another selection into this one by set union.
    pub fn union(&mut self, other: Self) {
        self.vertices.extend(other.vertices);
        self.edges.extend(other.edges);
        self.polygons.extend(other.polygons);
    }

    /// Get a one-line summary of the selection.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "No topology issues found".to_string();
        }

        let mut parts = Vec::new();
        if !self.vertices.is_empty() {
            parts.push(format!("{} vertex(es)", self.vertices.len()));
        }
        if !self.edges.is_empty() {
            parts.push(format!("{} edge(s)", self.edges.len()));
        }
        if !self.polygons.is_empty() {
            parts.push(format!("{} polygon(s)", self.polygons.len()));
        }

        format!("Topology issues: {}", parts.join(", "))
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Selection:")?;
        writeln!(f, "  Flagged vertices: {}", self.vertices.len())?;
        writeln!(f, "  Flagged edges: {}", self.edges.len())?;
        writeln!(f, "  Flagged polygons: {}", self.polygons.len())?;
        Ok(())
    }
}
