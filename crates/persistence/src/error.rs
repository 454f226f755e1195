// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A write carried a version that is not strictly greater than the
    /// version already stored for the same tournament.
    VersionConflict {
        /// The tournament id the write targeted.
        torneo_id: String,
        /// The version currently stored.
        version_almacenada: u64,
        /// The version the rejected write carried.
        version_propuesta: u64,
    },
    /// The requested record was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VersionConflict {
                torneo_id,
                version_almacenada,
                version_propuesta,
            } => {
                write!(
                    f,
                    "Version conflict for tournament {torneo_id}: stored version \
                     {version_almacenada}, proposed version {version_propuesta}"
                )
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
