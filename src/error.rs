//! Error types.

use std::path::PathBuf;

use crate::sheet::Axis;

/// A sheet definition that cannot be built.
///
/// Raised synchronously while a sheet is constructed. Nothing is retried:
/// the definition has to be fixed by whoever wrote it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The axis name is not one of the four recognized values.
    #[error("axis must equal {valid}, got \"{axis}\"", valid = Axis::NAMES.join(" or "))]
    InvalidAxis { axis: String },

    /// A breakpoint key is not an integer or integer pixel value.
    #[error("breakpoint \"{key}\" is not an integer threshold")]
    InvalidThreshold { key: String },

    /// Two breakpoint keys resolve to the same numeric threshold.
    #[error("breakpoint \"{key}\" duplicates threshold {threshold}")]
    DuplicateThreshold { key: String, threshold: i32 },
}

/// Failure to load a sheet definition from text or disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read sheet definition \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON sheet definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML sheet definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not `.json`, `.yaml` or `.yml`.
    #[error("unsupported sheet definition format: \"{}\"", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_axis_names_valid_set() {
        let err = ConfigurationError::InvalidAxis {
            axis: "min-depth".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("min-depth"));
        assert!(msg.contains("min-width or max-width or min-height or max-height"));
    }

    #[test]
    fn test_invalid_threshold_display() {
        let err = ConfigurationError::InvalidThreshold {
            key: "wide".to_string(),
        };
        assert!(err.to_string().contains("\"wide\""));
    }

    #[test]
    fn test_duplicate_threshold_display() {
        let err = ConfigurationError::DuplicateThreshold {
            key: "10px".to_string(),
            threshold: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("10px"));
        assert!(msg.contains("threshold 10"));
    }

    #[test]
    fn test_load_error_wraps_configuration() {
        let err: LoadError = ConfigurationError::InvalidAxis {
            axis: "sideways".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            LoadError::Configuration(ConfigurationError::InvalidAxis { .. })
        ));
        assert!(err.to_string().contains("sideways"));
    }
}
