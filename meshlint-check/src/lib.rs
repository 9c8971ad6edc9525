//! Topology lint passes for polygon meshes.
//!
//! This crate analyzes a mesh-connectivity snapshot for topology
//! defects commonly undesirable in quad-modeling and animation
//! pipelines:
//!
//! - **Non-quad polygons**: anything but 4 sides, with an optional
//!   triangle allowance
//! - **Poles**: vertices whose edge valence exceeds the configured
//!   threshold
//! - **Under-connected vertices**: isolated and degree-1/2 vertices
//! - **Non-manifold edges**: edges shared by more than two polygons
//!
//! The analysis is a pure, single-threaded pass over an immutable
//! [`MeshSnapshot`](meshlint_types::MeshSnapshot): no mesh editing, no
//! repair, no retained state between runs. Host-application concerns
//! (live scene access, selection state) sit behind the traits in
//! [`meshlint_types`].
//!
//! # Example
//!
//! ```
//! use meshlint_check::check_topology_issues;
//! use meshlint_types::{CheckConfig, MeshSnapshot};
//!
//! // A lone triangle
//! let snapshot = MeshSnapshot::from_parts(
//!     3,
//!     vec![[0, 1], [1, 2], [2, 0]],
//!     vec![vec![0, 1, 2]],
//! );
//!
//! // Triangles are rejected by default...
//! let config = CheckConfig::default();
//! let selection = check_topology_issues(&snapshot, &config).unwrap();
//! assert!(selection.polygons.contains(&0));
//!
//! // ...and accepted with the allowance enabled.
//! let config = config.with_allow_triangles(true);
//! let selection = check_topology_issues(&snapshot, &config).unwrap();
//! assert!(selection.polygons.is_empty());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod check;
mod error;
mod non_manifold;
mod poles;
mod polygons;
mod valence;

pub use adjacency::PairIncidence;
pub use check::{
    check_topology_issues, check_topology_issues_cancellable, run_check, show_five_poles,
};
pub use error::{CheckError, CheckResult};
pub use non_manifold::detect_non_manifold_edges;
pub use poles::{classify_poles, five_valence_poles};
pub use polygons::classify_polygons;
pub use valence::vertex_valence;
