//! Pole and under-connected vertex classification.

use meshlint_types::Selection;

/// Classify every vertex by its edge valence.
///
/// A vertex with valence `v` is flagged when:
///
/// - it is a high-valence pole: `v > 5` with `allow_five_poles`, else
///   `v > 4`; or
/// - it is under-connected: `v < 3` (isolated and degree-1/2 vertices
///   cannot form a valid closed surface patch).
///
/// The under-connection rule is independent of every toggle. A vertex
/// matching both rules is flagged once (set semantics).
///
/// Operates on a valence table produced by
/// [`vertex_valence`](crate::vertex_valence), so it has no error
/// conditions of its own.
#[allow(clippy::cast_possible_truncation)]
// Truncation: mesh indices are u32, so element counts > 4B are unsupported by design
#[must_use]
pub fn classify_poles(valence: &[u32], allow_five_poles: bool) -> Selection {
    let pole_threshold = if allow_five_poles { 5 } else { 4 };

    let mut selection = Selection::new();
    for (vertex, &v) in valence.iter().enumerate() {
        if v > pole_threshold || v < 3 {
            selection.vertices.insert(vertex as u32);
        }
    }

    selection
}

/// Flag every vertex with valence exactly 5, ignoring configuration.
///
/// The classifier behind the "show 5-poles" entry point. It shares the
/// valence computation with [`classify_poles`] but not its policy.
#[allow(clippy::cast_possible_truncation)]
// Truncation: mesh indices are u32, so element counts > 4B are unsupported by design
#[must_use]
pub fn five_valence_poles(valence: &[u32]) -> Selection {
    let mut selection = Selection::new();
    for (vertex, &v) in valence.iter().enumerate() {
        if v == 5 {
            selection.vertices.insert(vertex as u32);
        }
    }

    selection
}
