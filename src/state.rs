//! Flattened Terraform instance state.
//!
//! The harness reports applied state as one flat string-keyed attribute map
//! per resource address, the same shape Terraform's test framework exposes:
//! list attributes appear as `tags.#`/`tags.0`, map attributes as
//! `freeform_tags.%`/`freeform_tags.Department`, and every value is a
//! string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Attribute map for a single resource instance.
pub type InstanceAttributes = BTreeMap<String, String>;

/// State for all resources produced by one apply.
///
/// Keys are full resource addresses such as
/// `solstice_core_dedicated_vm_host.test_dedicated_vm_host` or
/// `data.solstice_core_dedicated_vm_hosts.test_dedicated_vm_hosts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerraformState {
    resources: BTreeMap<String, InstanceAttributes>,
}

impl TerraformState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource instance with its attributes.
    pub fn with_resource<'a>(
        mut self,
        address: impl Into<String>,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.resources.insert(
            address.into(),
            attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// Set a single attribute on a resource instance, creating the instance
    /// if needed.
    pub fn set_attr(
        &mut self,
        address: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.resources
            .entry(address.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Attributes of a resource instance, if present.
    pub fn resource(&self, address: &str) -> Option<&InstanceAttributes> {
        self.resources.get(address)
    }

    /// A single attribute value, if present.
    pub fn attr(&self, address: &str, key: &str) -> Option<&str> {
        self.resources
            .get(address)
            .and_then(|attrs| attrs.get(key))
            .map(String::as_str)
    }

    /// Iterate resource addresses in sorted order.
    pub fn addresses(&self) -> impl Iterator<Item = &String> {
        self.resources.keys()
    }
}

/// Look up an attribute of a resource instance, failing with a descriptive
/// error when the resource or attribute is absent.
///
/// The common use is capturing the `id` attribute after a create step so a
/// later update step can verify the resource was updated in place.
pub fn from_instance_state(
    state: &TerraformState,
    address: &str,
    key: &str,
) -> Result<String, Error> {
    let attrs = state
        .resource(address)
        .ok_or_else(|| Error::ResourceNotFound(address.to_string()))?;
    attrs
        .get(key)
        .cloned()
        .ok_or_else(|| Error::AttributeNotFound {
            address: address.to_string(),
            attribute: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "solstice_core_dedicated_vm_host.test_dedicated_vm_host";

    fn sample_state() -> TerraformState {
        TerraformState::new().with_resource(
            ADDRESS,
            [
                ("id", "ocid1.dedicatedvmhost.sol1..aaaa"),
                ("display_name", "displayName"),
                ("freeform_tags.%", "1"),
                ("freeform_tags.Department", "Finance"),
            ],
        )
    }

    #[test]
    fn test_from_instance_state_returns_attribute() {
        let id = from_instance_state(&sample_state(), ADDRESS, "id").unwrap();
        assert_eq!(id, "ocid1.dedicatedvmhost.sol1..aaaa");
    }

    #[test]
    fn test_from_instance_state_missing_resource() {
        let err = from_instance_state(&sample_state(), "solstice_core_vcn.test_vcn", "id")
            .unwrap_err();
        assert!(matches!(err, Error::ResourceNotFound(_)));
    }

    #[test]
    fn test_from_instance_state_missing_attribute() {
        let err = from_instance_state(&sample_state(), ADDRESS, "fault_domain").unwrap_err();
        assert!(matches!(err, Error::AttributeNotFound { .. }));
    }

    #[test]
    fn test_set_attr_creates_instance() {
        let mut state = TerraformState::new();
        state.set_attr(ADDRESS, "id", "ocid1.dedicatedvmhost.sol1..bbbb");
        assert_eq!(state.attr(ADDRESS, "id"), Some("ocid1.dedicatedvmhost.sol1..bbbb"));
    }

    #[test]
    fn test_flatmap_style_attributes() {
        let state = sample_state();
        assert_eq!(state.attr(ADDRESS, "freeform_tags.%"), Some("1"));
        assert_eq!(state.attr(ADDRESS, "freeform_tags.Department"), Some("Finance"));
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = sample_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: TerraformState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
