//! Managed instance models for the OS-management service.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Operating system families a managed instance can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OsFamily {
    #[allow(missing_docs)]
    Linux,
    #[allow(missing_docs)]
    Windows,
    #[allow(missing_docs)]
    All,
    /// A wire value outside the documented enum.
    #[serde(other)]
    UnknownValue,
}

/// Agent status values a managed instance can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusValue {
    #[allow(missing_docs)]
    Normal,
    #[allow(missing_docs)]
    Unreachable,
    #[allow(missing_docs)]
    Error,
    #[allow(missing_docs)]
    Warning,
    /// A wire value outside the documented enum.
    #[serde(other)]
    UnknownValue,
}

/// Detail of an instance managed by the OS-management service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedInstance {
    /// Identifier of the managed instance; matches the compute instance id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User-friendly name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Information specified by the user about the managed instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Time of last checkin, RFC 3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checkin: Option<String>,
    /// Time of last boot, RFC 3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_boot: Option<String>,
    /// Number of updates available for installation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates_available: Option<i32>,
    /// Operating system name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_name: Option<String>,
    /// Operating system version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    /// Operating system kernel version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_kernel_version: Option<String>,
    /// Compartment containing the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    /// Agent status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusValue>,
    /// The operating system family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_family: Option<OsFamily>,
    /// Whether a reboot is required to finish applying updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reboot_required: Option<bool>,
    /// Topic used for notifications about this instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_topic_id: Option<String>,
    /// Effective kernel version reported by live patching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ksplice_effective_kernel_version: Option<String>,
    /// Whether the user authorized data collection for this instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_data_collection_authorized: Option<bool>,
}

impl ManagedInstance {
    /// Check every enum-typed field against its documented values,
    /// collecting all violations into one [`Error::EnumValidation`].
    pub fn validate_enum_values(&self) -> Result<(), Error> {
        let mut violations = Vec::new();
        if self.status == Some(StatusValue::UnknownValue) {
            violations.push("status holds a value unsupported by ManagedInstance".to_string());
        }
        if self.os_family == Some(OsFamily::UnknownValue) {
            violations.push("osFamily holds a value unsupported by ManagedInstance".to_string());
        }
        Error::from_enum_violations(violations)
    }
}

/// A page of managed instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedInstanceCollection {
    /// The array of managed instances.
    pub items: Vec<ManagedInstance>,
}
