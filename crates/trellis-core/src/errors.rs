//! Error types for the trellis engine.

use crate::device::Device;
use crate::element::ElementType;
use thiserror::Error;

/// Errors while collapsing a responsive configuration into one device's
/// effective configuration.
///
/// These are schema-contract violations: the surrounding system hands the
/// engine type-validated input, so any of them indicates a bug upstream and
/// none is retried.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{device} override changes element type from {expected} to {found:?}")]
    TypeTagChanged {
        device: Device,
        expected: ElementType,
        found: String,
    },

    #[error("merged {device} configuration no longer matches the {expected} schema: {source}")]
    SchemaMismatch {
        device: Device,
        expected: ElementType,
        #[source]
        source: serde_json::Error,
    },

    #[error("baseline configuration failed to serialize: {0}")]
    Baseline(#[from] serde_json::Error),

    #[error("no responsive configuration for element {id:?}")]
    MissingConfig { id: String },
}
