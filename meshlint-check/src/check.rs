//! Check entry points.

use std::sync::atomic::AtomicBool;

use meshlint_types::{CheckConfig, MeshSnapshot, Selection, SelectionSink};
use tracing::{debug, info};

use crate::error::CheckResult;
use crate::non_manifold::detect_non_manifold_edges;
use crate::poles::{classify_poles, five_valence_poles};
use crate::polygons::classify_polygons;
use crate::valence::vertex_valence;

/// Check a snapshot for topology issues.
///
/// Runs the polygon side-count pass, the valence/pole pass, and (when
/// `config.search_non_manifold_edges` is set) the non-manifold edge
/// pass, then unions the flagged sets. Pure composition over the
/// snapshot and configuration: the same inputs always produce the same
/// selection.
///
/// An empty snapshot (zero vertices, no edges or polygons) yields an
/// empty selection; "no issues found" is a valid outcome of analyzing
/// nothing.
///
/// # Errors
///
/// Returns [`CheckError`](crate::CheckError) if the snapshot
/// references a vertex index out of bounds. No partial selection is
/// returned on error.
///
/// # Example
///
/// ```
/// use meshlint_check::check_topology_issues;
/// use meshlint_types::{CheckConfig, unit_cube};
///
/// let selection = check_topology_issues(&unit_cube(), &CheckConfig::default()).unwrap();
/// assert!(!selection.has_issues());
/// ```
pub fn check_topology_issues(
    snapshot: &MeshSnapshot,
    config: &CheckConfig,
) -> CheckResult<Selection> {
    check_topology_issues_cancellable(snapshot, config, None)
}

/// [`check_topology_issues`] with a cooperative cancellation flag.
///
/// The flag is checked between edge iterations of the non-manifold
/// pass (the asymptotically expensive path), so a host UI can abort a
/// long-running scan on a very large mesh.
///
/// # Errors
///
/// As [`check_topology_issues`], plus
/// [`CheckError::Cancelled`](crate::CheckError::Cancelled) if `cancel`
/// was raised.
pub fn check_topology_issues_cancellable(
    snapshot: &MeshSnapshot,
    config: &CheckConfig,
    cancel: Option<&AtomicBool>,
) -> CheckResult<Selection> {
    debug!(
        "checking topology of {} vertices, {} edges, {} polygons",
        snapshot.vertex_count,
        snapshot.edges.len(),
        snapshot.polygons.len()
    );

    let mut selection = classify_polygons(snapshot, config.allow_triangles)?;

    let valence = vertex_valence(snapshot.vertex_count, &snapshot.edges)?;
    selection.union(classify_poles(&valence, config.allow_five_poles));

    if config.search_non_manifold_edges {
        selection.union(detect_non_manifold_edges(snapshot, cancel)?);
    }

    info!(
        "flagged {} vertices, {} edges, {} polygons",
        selection.vertices.len(),
        selection.edges.len(),
        selection.polygons.len()
    );

    Ok(selection)
}

/// Flag every vertex with valence exactly 5.
///
/// The secondary entry point. It ignores the configuration toggles
/// entirely: a valence-5 vertex is flagged here even when
/// `allow_five_poles` would accept it in
/// [`check_topology_issues`].
///
/// # Errors
///
/// Returns [`CheckError`](crate::CheckError) if an edge references a
/// vertex index out of bounds.
pub fn show_five_poles(snapshot: &MeshSnapshot) -> CheckResult<Selection> {
    let valence = vertex_valence(snapshot.vertex_count, &snapshot.edges)?;
    let selection = five_valence_poles(&valence);

    info!("flagged {} five-valence poles", selection.vertices.len());

    Ok(selection)
}

/// Run a full check and push the result into a host selection sink.
///
/// Clears the sink's prior selection, analyzes the snapshot, and
/// applies the flagged sets - the same flow as the original modeling
/// tool (deselect everything, then select the offenders). On error the
/// sink stays cleared and receives no partial selection.
///
/// # Errors
///
/// As [`check_topology_issues`].
pub fn run_check(
    snapshot: &MeshSnapshot,
    config: &CheckConfig,
    sink: &mut impl SelectionSink,
) -> CheckResult<()> {
    sink.clear_selection();

    let selection = check_topology_issues(snapshot, config)?;
    sink.apply_selection(&selection);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use meshlint_types::{unit_cube, unit_quad};

    /// Vertex 0 surrounded by a 6-triangle fan: valence 6, every other
    /// vertex on the rim has valence 3.
    fn six_pole() -> MeshSnapshot {
        let mut edges = Vec::new();
        let mut polygons = Vec::new();
        for i in 0..6u32 {
            let rim = 1 + i;
            let next_rim = 1 + (i + 1) % 6;
            edges.push([0, rim]);
            edges.push([rim, next_rim]);
            polygons.push(vec![0, rim, next_rim]);
        }
        MeshSnapshot::from_parts(7, edges, polygons)
    }

    #[test]
    fn cube_is_clean_under_defaults_and_strict() {
        let cube = unit_cube();

        let selection = check_topology_issues(&cube, &CheckConfig::default()).unwrap();
        assert!(selection.is_empty());

        let selection = check_topology_issues(&cube, &CheckConfig::strict()).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn empty_snapshot_yields_empty_selection() {
        let snapshot = MeshSnapshot::new();

        let selection = check_topology_issues(&snapshot, &CheckConfig::default()).unwrap();
        assert!(selection.is_empty());

        let selection = show_five_poles(&snapshot).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn lone_quad_corners_under_connected() {
        // Each corner of a floating quad has valence 2, below the
        // closed-surface minimum of 3.
        let selection = check_topology_issues(&unit_quad(), &CheckConfig::default()).unwrap();

        assert_eq!(selection.vertices, [0, 1, 2, 3].into_iter().collect());
        assert!(selection.edges.is_empty());
        assert!(selection.polygons.is_empty());
    }

    #[test]
    fn lone_triangle_polygon_flag_follows_toggle() {
        let snapshot = MeshSnapshot::from_parts(
            3,
            vec![[0, 1], [1, 2], [2, 0]],
            vec![vec![0, 1, 2]],
        );

        let selection = check_topology_issues(&snapshot, &CheckConfig::default()).unwrap();
        assert_eq!(selection.polygons, [0].into_iter().collect());

        let config = CheckConfig::default().with_allow_triangles(true);
        let selection = check_topology_issues(&snapshot, &config).unwrap();
        assert!(selection.polygons.is_empty());
        // The corners are still under-connected either way.
        assert_eq!(selection.vertices.len(), 3);
    }

    #[test]
    fn six_pole_flagged_under_both_toggles() {
        let snapshot = six_pole();

        for allow_five_poles in [false, true] {
            let config = CheckConfig::default()
                .with_allow_five_poles(allow_five_poles)
                .with_allow_triangles(true);
            let selection = check_topology_issues(&snapshot, &config).unwrap();
            assert!(selection.vertices.contains(&0));
        }
    }

    #[test]
    fn non_manifold_search_gated_by_toggle() {
        // Three quads sharing the edge (0, 1); rim vertices are
        // under-connected, which must not mask the edge flags.
        let snapshot = MeshSnapshot::from_parts(
            8,
            vec![
                [0, 1],
                [1, 2],
                [2, 3],
                [3, 0],
                [1, 4],
                [4, 5],
                [5, 0],
                [1, 6],
                [6, 7],
                [7, 0],
            ],
            vec![vec![0, 1, 2, 3], vec![0, 1, 4, 5], vec![0, 1, 6, 7]],
        );

        let selection = check_topology_issues(&snapshot, &CheckConfig::default()).unwrap();
        assert!(selection.edges.is_empty());

        let config = CheckConfig::default().with_search_non_manifold_edges(true);
        let selection = check_topology_issues(&snapshot, &config).unwrap();
        assert_eq!(selection.edges, [0].into_iter().collect());
        assert!(selection.vertices.contains(&0));
        assert!(selection.vertices.contains(&1));
    }

    #[test]
    fn check_is_idempotent() {
        let snapshot = six_pole();
        let config = CheckConfig::strict();

        let first = check_topology_issues(&snapshot, &config).unwrap();
        let second = check_topology_issues(&snapshot, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn show_five_poles_ignores_configuration() {
        // Vertex 0 with exactly 5 incident edges.
        let edges = vec![[0, 1], [0, 2], [0, 3], [0, 4], [0, 5]];
        let snapshot = MeshSnapshot::from_parts(6, edges, Vec::new());

        let selection = show_five_poles(&snapshot).unwrap();
        assert_eq!(selection.vertices, [0].into_iter().collect());

        // The full check with allow_five_poles accepts the same vertex.
        let selection = check_topology_issues(&snapshot, &CheckConfig::default()).unwrap();
        assert!(!selection.vertices.contains(&0));
    }

    #[test]
    fn malformed_snapshot_never_yields_partial_selection() {
        // The pentagon would be flagged, but the out-of-bounds edge
        // must abort the whole call instead.
        let snapshot = MeshSnapshot::from_parts(
            5,
            vec![[0, 9]],
            vec![vec![0, 1, 2, 3, 4]],
        );

        let result = check_topology_issues(&snapshot, &CheckConfig::default());
        assert_eq!(
            result,
            Err(CheckError::EdgeOutOfBounds {
                edge: 0,
                vertex: 9,
                vertex_count: 5,
            })
        );
    }

    #[test]
    fn run_check_clears_then_applies() {
        #[derive(Default)]
        struct RecordingSink {
            cleared: usize,
            applied: Vec<Selection>,
        }

        impl SelectionSink for RecordingSink {
            fn clear_selection(&mut self) {
                self.cleared += 1;
            }

            fn apply_selection(&mut self, selection: &Selection) {
                self.applied.push(selection.clone());
            }
        }

        let mut sink = RecordingSink::default();
        run_check(&unit_quad(), &CheckConfig::default(), &mut sink).unwrap();

        assert_eq!(sink.cleared, 1);
        assert_eq!(sink.applied.len(), 1);
        assert_eq!(sink.applied[0].vertices.len(), 4);

        // A failed run clears the sink but applies nothing.
        let mut sink = RecordingSink::default();
        let bad = MeshSnapshot::from_parts(1, vec![[0, 7]], Vec::new());
        assert!(run_check(&bad, &CheckConfig::default(), &mut sink).is_err());

        assert_eq!(sink.cleared, 1);
        assert!(sink.applied.is_empty());
    }
}
