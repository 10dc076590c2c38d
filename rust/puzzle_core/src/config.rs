//! Partition configuration parsing.
//!
//! Layouts are JSON objects with any of the four partition keys; missing
//! keys keep the printed-puzzle calibration.

use crate::error::Result;
use crate::types::PartitionSpec;

/// Parse and validate a partition spec from a JSON string.
pub fn parse_partition_spec(json: &str) -> Result<PartitionSpec> {
    let spec: PartitionSpec = serde_json::from_str(json)?;
    spec.validated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuzzleError;

    #[test]
    fn parse_full_layout() {
        let json = r#"{"x_offset":5,"x_step":5,"y_offset":1,"y_step":1}"#;
        let spec = parse_partition_spec(json).unwrap();
        assert_eq!(spec, PartitionSpec::new(5.0, 5.0, 1.0, 1.0).unwrap());
    }

    #[test]
    fn missing_keys_use_calibration() {
        let spec = parse_partition_spec(r#"{"x_step":10.5}"#).unwrap();
        assert_eq!(spec.x_step, 10.5);
        assert_eq!(spec.x_offset, 9.33);
        assert_eq!(spec.y_offset, 5.0);
        assert_eq!(spec.y_step, 6.0);
    }

    #[test]
    fn invalid_step_rejected() {
        let err = parse_partition_spec(r#"{"y_step":0}"#).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::InvalidPartition {
                field: "y_step",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = parse_partition_spec(r#"{"x_step":"#).unwrap_err();
        assert!(matches!(err, PuzzleError::Config(_)));
        let err = parse_partition_spec(r#"{"x_step":"wide"}"#).unwrap_err();
        assert!(matches!(err, PuzzleError::Config(_)));
    }
}
