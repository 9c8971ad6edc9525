//! Vertex-pair polygon-incidence index.

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Index from a vertex pair to the number of polygons whose vertex set
/// contains both vertices.
///
/// This is the precomputed replacement for the naive non-manifold scan
/// (for each edge, test every polygon for membership of both
/// endpoints). Counting is by *membership*, not boundary adjacency: a
/// quad contributes to the pair formed by its diagonal as well as to
/// its four boundary pairs. Each polygon counts at most once per pair,
/// even if it repeats a vertex index.
///
/// Build cost is one pass over the polygons, quadratic in the side
/// count of each polygon; queries are O(1).
///
/// # Example
///
/// ```
/// use meshlint_check::PairIncidence;
///
/// // Three quads sharing the edge (0, 1)
/// let polygons = vec![
///     vec![0, 1, 2, 3],
///     vec![0, 1, 4, 5],
///     vec![0, 1, 6, 7],
/// ];
/// let incidence = PairIncidence::build(&polygons);
///
/// assert_eq!(incidence.polygons_containing(0, 1), 3);
/// assert_eq!(incidence.polygons_containing(1, 2), 1);
/// assert_eq!(incidence.polygons_containing(2, 4), 0);
/// ```
#[derive(Debug, Clone)]
pub struct PairIncidence {
    /// Maps vertex pair (v0, v1) to its polygon count. v0 < v1.
    pair_counts: HashMap<(u32, u32), u32>,
}

impl PairIncidence {
    /// Build the index from a list of polygons.
    #[must_use]
    pub fn build(polygons: &[Vec<u32>]) -> Self {
        let mut pair_counts: HashMap<(u32, u32), u32> = HashMap::new();

        // Scratch buffer for the deduplicated membership set of one
        // polygon; inline for anything up to an octagon.
        let mut members: SmallVec<[u32; 8]> = SmallVec::new();

        for polygon in polygons {
            members.clear();
            members.extend(polygon.iter().copied());
            members.sort_unstable();
            members.dedup();

            for (i, &v0) in members.iter().enumerate() {
                for &v1 in &members[i + 1..] {
                    *pair_counts.entry((v0, v1)).or_insert(0) += 1;
                }
            }
        }

        Self { pair_counts }
    }

    /// Get the number of polygons whose vertex set contains both `v0`
    /// and `v1`.
    ///
    /// The pair is unordered; both argument orders return the same
    /// count.
    #[must_use]
    pub fn polygons_containing(&self, v0: u32, v1: u32) -> u32 {
        let pair = normalize_pair(v0, v1);
        self.pair_counts.get(&pair).copied().unwrap_or(0)
    }

    /// Get the number of distinct vertex pairs in the index.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_counts.len()
    }
}

/// Normalize pair direction so v0 < v1.
#[inline]
fn normalize_pair(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
