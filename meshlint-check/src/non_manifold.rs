//! Non-manifold edge detection.

use std::sync::atomic::{AtomicBool, Ordering};

use meshlint_types::{MeshSnapshot, Selection};
use tracing::debug;

use crate::adjacency::PairIncidence;
use crate::error::{CheckError, CheckResult};

/// Find edges shared by more than two polygons.
///
/// For each edge `(u, v)`, counts the polygons whose vertex set
/// contains both `u` and `v` (membership, not boundary adjacency). A
/// count above 2 violates the two-polygons-per-edge rule of a manifold
/// surface; the edge and both endpoint vertices are flagged. Edges
/// bordered by one or two polygons are never flagged.
///
/// The count comes from a [`PairIncidence`] index built once per call,
/// so the pass is linear in the edge count after the build instead of
/// scanning every polygon per edge. Results are identical to the naive
/// scan.
///
/// `cancel` is checked between edge iterations so a host UI can abort
/// a long-running scan; pass `None` when cancellation is not needed.
///
/// # Errors
///
/// Returns [`CheckError::EdgeOutOfBounds`] or
/// [`CheckError::PolygonOutOfBounds`] on an invalid vertex index, and
/// [`CheckError::Cancelled`] if `cancel` was raised.
#[allow(clippy::cast_possible_truncation)]
// Truncation: mesh indices are u32, so element counts > 4B are unsupported by design
pub fn detect_non_manifold_edges(
    snapshot: &MeshSnapshot,
    cancel: Option<&AtomicBool>,
) -> CheckResult<Selection> {
    for (polygon, indices) in snapshot.polygons.iter().enumerate() {
        for &vertex in indices {
            if vertex as usize >= snapshot.vertex_count {
                return Err(CheckError::PolygonOutOfBounds {
                    polygon,
                    vertex,
                    vertex_count: snapshot.vertex_count,
                });
            }
        }
    }

    let incidence = PairIncidence::build(&snapshot.polygons);

    let mut selection = Selection::new();
    for (edge, &[v0, v1]) in snapshot.edges.iter().enumerate() {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(CheckError::Cancelled);
        }

        for vertex in [v0, v1] {
            if vertex as usize >= snapshot.vertex_count {
                return Err(CheckError::EdgeOutOfBounds {
                    edge,
                    vertex,
                    vertex_count: snapshot.vertex_count,
                });
            }
        }

        if incidence.polygons_containing(v0, v1) > 2 {
            selection.edges.insert(edge as u32);
            selection.vertices.insert(v0);
            selection.vertices.insert(v1);
        }
    }

    debug!("found {} non-manifold edges", selection.edges.len());

    Ok(selection)
}
