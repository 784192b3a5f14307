//! Error types for shelfsim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in shelfsim.
///
/// A single crate-wide error type keeps error handling consistent across
/// the simulator core and the snapshot store. Every failing operation
/// rejects its input before mutating any state, so an `Err` never leaves
/// the simulator half-updated (the one documented exception is
/// [`Error::InvalidSnapshot`], where the simulator falls back to the fresh
/// empty state).
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from snapshot file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested item is not part of the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// A catalog was constructed with the same label twice.
    #[error("duplicate catalog label: {0:?}")]
    DuplicateLabel(String),

    /// A manual arrangement is not a permutation of the current shelf.
    #[error("invalid arrangement: {0}")]
    InvalidArrangement(String),

    /// A snapshot is corrupt, malformed, or inconsistent with the catalog.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// A request was issued while a previous fault is still being resolved.
    #[error("fault in flight for {0:?}")]
    FaultInFlight(String),

    /// `complete_fault` was called with no fault in flight.
    #[error("no fault in flight")]
    NoPendingFault,

    /// A simulator was constructed with a zero shelf capacity.
    #[error("shelf capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownItem("Quantum Computing".to_string());
        assert_eq!(format!("{}", err), "unknown item: Quantum Computing");

        let err = Error::NoPendingFault;
        assert_eq!(format!("{}", err), "no fault in flight");

        let err = Error::InvalidCapacity(0);
        assert_eq!(format!("{}", err), "shelf capacity must be at least 1, got 0");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
