//! Per-vertex edge valence.

use crate::error::{CheckError, CheckResult};

/// Compute the edge valence (incident edge count) of every vertex.
///
/// Returns one counter per vertex. Each edge record contributes +1 to
/// both of its endpoints; duplicate edge records are not deduplicated
/// and count independently. Runs in time linear in the edge count.
///
/// # Errors
///
/// Returns [`CheckError::EdgeOutOfBounds`] if an endpoint is outside
/// `[0, vertex_count)`.
///
/// # Example
///
/// ```
/// use meshlint_check::vertex_valence;
///
/// // A triangle: every vertex has valence 2
/// let valence = vertex_valence(3, &[[0, 1], [1, 2], [2, 0]]).unwrap();
/// assert_eq!(valence, vec![2, 2, 2]);
/// ```
pub fn vertex_valence(vertex_count: usize, edges: &[[u32; 2]]) -> CheckResult<Vec<u32>> {
    let mut valence = vec![0u32; vertex_count];

    for (edge, &endpoints) in edges.iter().enumerate() {
        for vertex in endpoints {
            let slot = valence
                .get_mut(vertex as usize)
                .ok_or(CheckError::EdgeOutOfBounds {
                    edge,
                    vertex,
                    vertex_count,
                })?;
            *slot += 1;
        }
    }

    Ok(valence)
}
