//! Core types for polygon-mesh topology linting.
//!
//! This crate provides the foundational types shared by the meshlint
//! workspace:
//!
//! - [`MeshSnapshot`] - An owned, read-only mesh connectivity snapshot
//! - [`MeshConnectivity`] - Trait for mesh-data providers
//! - [`SelectionSink`] - Trait for host selection state
//! - [`CheckConfig`] - Toggles for a topology check run
//! - [`Selection`] - Flagged vertex/edge/polygon index sets
//!
//! # Layer 0 Crate
//!
//! This crate has **zero engine dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - DCC plugin hosts
//! - Servers
//!
//! # Connectivity Only
//!
//! Topology linting is a pure function of mesh connectivity, so a
//! snapshot stores no vertex positions or attributes - only a vertex
//! count, edges as vertex-index pairs, and polygons as vertex-index
//! sequences. Hosts with richer mesh types implement
//! [`MeshConnectivity`] and copy into an owned snapshot with
//! [`MeshSnapshot::from_connectivity`].
//!
//! # Example
//!
//! ```
//! use meshlint_types::{CheckConfig, MeshConnectivity, MeshSnapshot};
//!
//! // A single quad: 4 vertices, 4 edges, 1 polygon
//! let snapshot = MeshSnapshot::from_parts(
//!     4,
//!     vec![[0, 1], [1, 2], [2, 3], [3, 0]],
//!     vec![vec![0, 1, 2, 3]],
//! );
//!
//! assert_eq!(snapshot.vertex_count(), 4);
//! assert_eq!(snapshot.polygon_count(), 1);
//!
//! let config = CheckConfig::default();
//! assert!(config.allow_five_poles);
//! assert!(!config.search_non_manifold_edges);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod selection;
mod snapshot;
mod traits;

// Re-export core types
pub use config::CheckConfig;
pub use selection::Selection;
pub use snapshot::{MeshSnapshot, unit_cube, unit_quad};
pub use traits::{MeshConnectivity, SelectionSink};
