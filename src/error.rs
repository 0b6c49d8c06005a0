//! Error types for the acceptance-test toolkit.

use thiserror::Error;

/// Errors produced by the model layer, the configuration generator, and
/// state lookups.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more enum-typed fields hold a value outside the documented
    /// enum. All violations are collected before the error is returned, so
    /// a caller sees every bad field at once rather than just the first.
    #[error("invalid enum value(s):\n{}", .violations.join("\n"))]
    EnumValidation {
        /// One message per violating field.
        violations: Vec<String>,
    },

    /// A serialization/deserialization error from the wire layer.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error while saving or loading fixtures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The named resource address is not present in the state.
    #[error("resource '{0}' not found in state")]
    ResourceNotFound(String),

    /// The resource exists in the state but the attribute does not.
    #[error("attribute '{attribute}' not found for resource '{address}' in state")]
    AttributeNotFound {
        /// The resource address that was looked up.
        address: String,
        /// The missing attribute key.
        attribute: String,
    },
}

impl Error {
    /// Build an [`Error::EnumValidation`] from collected violation messages.
    ///
    /// Returns `Ok(())` when the list is empty.
    pub fn from_enum_violations(violations: Vec<String>) -> Result<(), Error> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::EnumValidation { violations })
        }
    }
}

/// Errors surfaced by an acceptance harness while applying, destroying, or
/// importing resources.
///
/// The toolkit adds no retry or recovery on top of these; they propagate
/// unchanged to the failing test.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Applying a configuration failed.
    #[error("apply failed: {0}")]
    Apply(String),

    /// Destroying the remaining resources failed.
    #[error("destroy failed: {0}")]
    Destroy(String),

    /// Importing a resource by identifier failed.
    #[error("import of '{address}' failed: {message}")]
    Import {
        /// The resource address being imported.
        address: String,
        /// Harness-provided failure detail.
        message: String,
    },

    /// A replayed scenario has no recorded step left for this interaction.
    #[error("scenario '{scenario}' exhausted: no recorded interaction for step {step}")]
    ScenarioExhausted {
        /// The scenario name.
        scenario: String,
        /// The zero-based step index that had no recording.
        step: usize,
    },

    /// The applied configuration does not match the recorded one.
    #[error("scenario '{scenario}' step {step}: applied configuration does not match the recording")]
    ConfigMismatch {
        /// The scenario name.
        scenario: String,
        /// The zero-based step index that mismatched.
        step: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_validation_aggregates_all_violations() {
        let err = Error::EnumValidation {
            violations: vec![
                "lifecycleState holds an unrecognized value".to_string(),
                "osFamily holds an unrecognized value".to_string(),
            ],
        };
        let msg = format!("{}", err);
        assert!(msg.contains("lifecycleState"));
        assert!(msg.contains("osFamily"));
    }

    #[test]
    fn test_from_enum_violations_empty_is_ok() {
        assert!(Error::from_enum_violations(Vec::new()).is_ok());
    }

    #[test]
    fn test_state_lookup_errors_display() {
        let err = Error::ResourceNotFound("solstice_core_dedicated_vm_host.test".to_string());
        assert_eq!(
            format!("{}", err),
            "resource 'solstice_core_dedicated_vm_host.test' not found in state"
        );

        let err = Error::AttributeNotFound {
            address: "solstice_core_dedicated_vm_host.test".to_string(),
            attribute: "id".to_string(),
        };
        assert!(format!("{}", err).contains("attribute 'id'"));
    }

    #[test]
    fn test_harness_error_display() {
        let err = HarnessError::ConfigMismatch {
            scenario: "TestCoreDedicatedVmHostResource_basic".to_string(),
            step: 2,
        };
        assert!(format!("{}", err).contains("step 2"));

        let err = HarnessError::ScenarioExhausted {
            scenario: "s".to_string(),
            step: 5,
        };
        assert!(format!("{}", err).contains("no recorded interaction"));
    }
}
