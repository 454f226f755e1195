// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use torneos_domain::ErrorDominio;
use torneos_persistence::PersistenceError;

use crate::validation::ValidationError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// The HTTP layer maps each variant onto a status code: domain rule
/// violations are 400, malformed input is 422, missing resources are
/// 404, version conflicts are 409, and anything unexpected is 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated. The message is the domain's own
    /// user-facing Spanish text.
    DomainRuleViolation {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The request shape was malformed before any domain rule ran.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A write lost an optimistic concurrency race.
    Conflict {
        /// A description of the conflicting write.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { message } => write!(f, "{message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound { resource, message } => {
                write!(f, "{resource} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ErrorDominio> for ApiError {
    fn from(err: ErrorDominio) -> Self {
        Self::DomainRuleViolation {
            message: String::from(err.mensaje()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let field = String::from(err.campo());
        Self::InvalidInput {
            field,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::VersionConflict { .. } => Self::Conflict {
                message: err.to_string(),
            },
            PersistenceError::NotFound(_) => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
