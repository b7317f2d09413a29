//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← adds the slot name as context             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionError ← union with CoreError at the session API                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: block the action or show a message                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed slot file is NOT an error: it is treated as absent and the
//! aggregate falls back to its default (see [`crate::slot`]).

use simplepay_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Slot persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The data directory could not be created or entered.
    #[error("failed to open data directory {}: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A slot value could not be encoded as JSON.
    #[error("failed to encode slot '{slot}': {source}")]
    EncodeFailed {
        slot: String,
        source: serde_json::Error,
    },

    /// Writing or renaming a slot file failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Permissions on the data directory changed underneath us
    #[error("failed to write slot '{slot}': {source}")]
    WriteFailed {
        slot: String,
        source: std::io::Error,
    },
}

/// Errors surfaced by the [`crate::Session`] API: a domain failure from
/// the register or a persistence failure from the slot store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with StorageError.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_wraps_core_error_transparently() {
        let err: SessionError = CoreError::ProductNotFound("p-1".to_string()).into();
        assert_eq!(err.to_string(), "Product not found: p-1");
    }

    #[test]
    fn test_storage_error_includes_slot_context() {
        let err = StorageError::WriteFailed {
            slot: "products".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(err.to_string().contains("products"));
    }
}
