//! Dedicated VM host models for the core compute service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle states of a dedicated VM host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    #[allow(missing_docs)]
    Creating,
    #[allow(missing_docs)]
    Active,
    #[allow(missing_docs)]
    Updating,
    #[allow(missing_docs)]
    Deleting,
    #[allow(missing_docs)]
    Deleted,
    #[allow(missing_docs)]
    Failed,
    /// A wire value outside the documented enum. Deserialization never
    /// fails on new states; validation reports them before submission.
    #[serde(other)]
    UnknownValue,
}

/// A dedicated virtual machine host, running only a single tenant's VMs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DedicatedVmHost {
    /// Identifier of the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The availability domain the host runs in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// Compartment containing the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    /// The shape of the host, e.g. `DVH.Standard.E4.128`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_vm_host_shape: Option<String>,
    /// User-friendly name, changeable, not unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The fault domain the host runs in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault_domain: Option<String>,
    /// Simple key/value tags without a namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<BTreeMap<String, String>>,
    /// Namespaced tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<BTreeMap<String, BTreeMap<String, String>>>,
    /// Current lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifecycleState>,
    /// RFC 3339 creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    /// OCPUs still available for launches on the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_ocpus: Option<f32>,
    /// Total OCPUs of the host shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ocpus: Option<f32>,
    /// Memory still available for launches, in GBs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_memory_in_gbs: Option<f32>,
    /// Total memory of the host shape, in GBs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_memory_in_gbs: Option<f32>,
}

impl DedicatedVmHost {
    /// Check every enum-typed field against its documented values,
    /// collecting all violations into one [`Error::EnumValidation`].
    ///
    /// Advisory: meant to be called explicitly before request submission,
    /// never during (de)serialization.
    pub fn validate_enum_values(&self) -> Result<(), Error> {
        let mut violations = Vec::new();
        if self.lifecycle_state == Some(LifecycleState::UnknownValue) {
            violations.push(
                "lifecycleState holds a value unsupported by DedicatedVmHost".to_string(),
            );
        }
        Error::from_enum_violations(violations)
    }
}

/// A page of dedicated VM host summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DedicatedVmHostCollection {
    /// The array of hosts.
    pub items: Vec<DedicatedVmHost>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_host() -> DedicatedVmHost {
        DedicatedVmHost {
            id: Some("ocid1.dedicatedvmhost.sol1..aaaa".to_string()),
            availability_domain: Some("Uocm:US-MERIDIAN-1-AD-1".to_string()),
            compartment_id: Some("ocid1.compartment.sol1..aaaa".to_string()),
            dedicated_vm_host_shape: Some("DVH.Standard.E4.128".to_string()),
            display_name: Some("displayName".to_string()),
            fault_domain: Some("FAULT-DOMAIN-3".to_string()),
            freeform_tags: Some(BTreeMap::from([(
                "Department".to_string(),
                "Finance".to_string(),
            )])),
            lifecycle_state: Some(LifecycleState::Active),
            time_created: Some("2021-06-04T18:01:12.000Z".to_string()),
            remaining_ocpus: Some(126.0),
            total_ocpus: Some(128.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let value: Value = serde_json::to_value(sample_host()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("dedicatedVmHostShape"));
        assert!(obj.contains_key("lifecycleState"));
        assert_eq!(value["lifecycleState"], "ACTIVE");
        assert!(!obj.contains_key("definedTags"));
    }

    #[test]
    fn test_round_trip() {
        let host = sample_host();
        let text = serde_json::to_string(&host).unwrap();
        let back: DedicatedVmHost = serde_json::from_str(&text).unwrap();
        assert_eq!(back, host);
    }

    #[test]
    fn test_unknown_lifecycle_state_parses() {
        let wire = json!({
            "id": "ocid1.dedicatedvmhost.sol1..aaaa",
            "lifecycleState": "HIBERNATING"
        });
        let host: DedicatedVmHost = serde_json::from_value(wire).unwrap();
        assert_eq!(host.lifecycle_state, Some(LifecycleState::UnknownValue));
    }

    #[test]
    fn test_validate_enum_values() {
        assert!(sample_host().validate_enum_values().is_ok());

        let mut host = sample_host();
        host.lifecycle_state = Some(LifecycleState::UnknownValue);
        let err = host.validate_enum_values().unwrap_err();
        assert!(format!("{}", err).contains("lifecycleState"));
    }

    #[test]
    fn test_collection_items() {
        let collection = DedicatedVmHostCollection {
            items: vec![sample_host()],
        };
        let value: Value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
    }
}
