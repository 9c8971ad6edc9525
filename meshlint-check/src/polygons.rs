//! Polygon side-count classification.

use meshlint_types::{MeshSnapshot, Selection};

use crate::error::{CheckError, CheckResult};

/// Classify every polygon by side count.
///
/// A polygon is flagged when its side count is not 4, unless
/// `allow_triangles` is true and the side count is 3. Degenerate
/// records (fewer than 3 vertices) fall under the same rule and are
/// always flagged. Every vertex referenced by a flagged polygon is
/// added to the flagged vertex set.
///
/// # Errors
///
/// Returns [`CheckError::PolygonOutOfBounds`] if any polygon (flagged
/// or not) references a vertex index outside the snapshot.
#[allow(clippy::cast_possible_truncation)]
// Truncation: mesh indices are u32, so element counts > 4B are unsupported by design
pub fn classify_polygons(snapshot: &MeshSnapshot, allow_triangles: bool) -> CheckResult<Selection> {
    let mut selection = Selection::new();

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

        let sides = indices.len();
        let acceptable = sides == 4 || (allow_triangles && sides == 3);
        if !acceptable {
            selection.polygons.insert(polygon as u32);
            selection.vertices.extend(indices.iter().copied());
        }
    }

    Ok(selection)
}
