//! Owned mesh connectivity snapshot.

use crate::MeshConnectivity;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An owned, read-only snapshot of polygon-mesh connectivity.
///
/// This is the input to every topology lint pass. It stores vertices
/// by count only (vertex identity is the 0-based index), edges as
/// unordered vertex-index pairs, and polygons as ordered vertex-index
/// sequences of length 3 or more.
///
/// # Invariants
///
/// - Every edge endpoint and polygon vertex must be in
///   `[0, vertex_count)`. The analysis passes report violations as
///   errors rather than skipping the offending record.
/// - Duplicate edge records are permitted; each contributes
///   independently to valence and adjacency counts.
///
/// Because a snapshot is an owned value borrowed immutably for the
/// duration of one analysis call, the host scene cannot mutate it
/// mid-run.
///
/// # Example
///
/// ```
/// use meshlint_types::{MeshConnectivity, MeshSnapshot};
///
/// // Two quads sharing the edge (1, 2)
/// let snapshot = MeshSnapshot::from_parts(
///     6,
///     vec![[0, 1], [1, 2], [2, 3], [3, 0], [1, 4], [4, 5], [5, 2]],
///     vec![vec![0, 1, 2, 3], vec![1, 4, 5, 2]],
/// );
///
/// assert_eq!(snapshot.vertex_count(), 6);
/// assert_eq!(snapshot.edge_count(), 7);
/// assert_eq!(snapshot.polygon_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshSnapshot {
    /// Number of vertices. Vertex identity is the 0-based index.
    pub vertex_count: usize,

    /// Edges as unordered vertex-index pairs.
    pub edges: Vec<[u32; 2]>,

    /// Polygons as ordered vertex-index sequences (3+ entries each).
    pub polygons: Vec<Vec<u32>>,
}

impl MeshSnapshot {
    /// Create a new empty snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use meshlint_types::{MeshConnectivity, MeshSnapshot};
    ///
    /// let snapshot = MeshSnapshot::new();
    /// assert!(snapshot.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertex_count: 0,
            edges: Vec::new(),
            polygons: Vec::new(),
        }
    }

    /// Create a snapshot with pre-allocated edge and polygon capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, edge_count: usize, polygon_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(edge_count),
            polygons: Vec::with_capacity(polygon_count),
        }
    }

    /// Create a snapshot from its parts.
    ///
    /// # Example
    ///
    /// ```
    /// use meshlint_types::{MeshConnectivity, MeshSnapshot};
    ///
    /// let snapshot = MeshSnapshot::from_parts(
    ///     3,
    ///     vec![[0, 1], [1, 2], [2, 0]],
    ///     vec![vec![0, 1, 2]],
    /// );
    /// assert_eq!(snapshot.polygon_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(
        vertex_count: usize,
        edges: Vec<[u32; 2]>,
        polygons: Vec<Vec<u32>>,
    ) -> Self {
        Self {
            vertex_count,
            edges,
            polygons,
        }
    }

    /// Copy any [`MeshConnectivity`] implementation into an owned
    /// snapshot.
    ///
    /// Hosts whose live scene types implement [`MeshConnectivity`] use
    /// this to hand the analysis an immutable copy, so the scene may
    /// change freely once the call returns.
    #[must_use]
    pub fn from_connectivity(source: &impl MeshConnectivity) -> Self {
        Self {
            vertex_count: source.vertex_count(),
            edges: source.edges().collect(),
            polygons: source.polygons().map(<[u32]>::to_vec).collect(),
        }
    }
}

impl MeshConnectivity for MeshSnapshot {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    fn edge(&self, index: usize) -> Option<[u32; 2]> {
        self.edges.get(index).copied()
    }

    fn polygon(&self, index: usize) -> Option<&[u32]> {
        self.polygons.get(index).map(Vec::as_slice)
    }

    fn edges(&self) -> impl Iterator<Item = [u32; 2]> {
        self.edges.iter().copied()
    }

    fn polygons(&self) -> impl Iterator<Item = &[u32]> {
        self.polygons.iter().map(Vec::as_slice)
    }
}

/// Helper function to create a quad cube snapshot.
///
/// The cube is the canonical clean mesh for this checker: 8 vertices
/// of valence 3, 12 edges each bordered by exactly 2 polygons, and 6
/// quad polygons.
///
/// # Example
///
/// ```
/// use meshlint_types::{MeshConnectivity, unit_cube};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.edge_count(), 12);
/// assert_eq!(cube.polygon_count(), 6);
/// ```
#[must_use]
pub fn unit_cube() -> MeshSnapshot {
    let edges = vec![
        // bottom ring
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        // top ring
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        // verticals
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ];

    let polygons = vec![
        vec![0, 1, 2, 3], // bottom
        vec![4, 5, 6, 7], // top
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];

    MeshSnapshot::from_parts(8, edges, polygons)
}

/// Helper function to create a single-quad snapshot.
///
/// Note that a lone quad is not issue-free: its corners have valence 2
/// and are reported as under-connected. Use [`unit_cube`] for a clean
/// fixture.
#[must_use]
pub fn unit_quad() -> MeshSnapshot {
    MeshSnapshot::from_parts(
        4,
        vec![[0, 1], [1, 2], [2, 3], [3, 0]],
        vec![vec![0, 1, 2, 3]],
    )
}
