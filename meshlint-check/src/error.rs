//! Error types for topology checking.

use thiserror::Error;

/// Result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors that can occur during a topology check.
///
/// Index errors are fatal to the current call: a partially analyzed
/// mesh would produce a misleading selection, so no partial result is
/// ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    /// An edge references a vertex index outside the snapshot.
    #[error("edge {edge} references invalid vertex index {vertex} (snapshot has {vertex_count} vertices)")]
    EdgeOutOfBounds {
        /// The offending edge index.
        edge: usize,
        /// The invalid vertex index.
        vertex: u32,
        /// Total number of vertices in the snapshot.
        vertex_count: usize,
    },

    /// A polygon references a vertex index outside the snapshot.
    #[error("polygon {polygon} references invalid vertex index {vertex} (snapshot has {vertex_count} vertices)")]
    PolygonOutOfBounds {
        /// The offending polygon index.
        polygon: usize,
        /// The invalid vertex index.
        vertex: u32,
        /// Total number of vertices in the snapshot.
        vertex_count: usize,
    },

    /// Check cancelled by the host.
    #[error("check cancelled")]
    Cancelled,
}
