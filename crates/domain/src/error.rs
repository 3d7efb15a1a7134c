//! Error types for the snapshot boundary
//!
//! Malformed upstream data is rejected when the snapshot is parsed, so that the
//! panels only ever see well-shaped values.

use thiserror::Error;

/// Errors raised while turning upstream JSON into a [`crate::GameSnapshot`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The JSON was malformed or a section had the wrong shape
    #[error("Invalid snapshot: {0}")]
    Json(String),

    /// The top-level value was not a JSON object
    #[error("Snapshot must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

impl SnapshotError {
    /// Create a shape/parse error from any displayable source
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// Create a not-an-object error naming the JSON type that was found
    pub fn not_an_object(found: &'static str) -> Self {
        Self::NotAnObject { found }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_message() {
        let err = SnapshotError::json("expected a map");
        assert_eq!(err.to_string(), "Invalid snapshot: expected a map");
    }

    #[test]
    fn test_not_an_object_error_message() {
        let err = SnapshotError::not_an_object("array");
        assert!(matches!(err, SnapshotError::NotAnObject { found: "array" }));
        assert_eq!(err.to_string(), "Snapshot must be a JSON object, got array");
    }

    #[test]
    fn test_from_serde_json_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SnapshotError = serde_err.into();
        assert!(matches!(err, SnapshotError::Json(_)));
    }
}
