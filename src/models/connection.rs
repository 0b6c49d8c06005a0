//! Data-integration connection summaries.
//!
//! A polymorphic family discriminated by the `modelType` wire field. Each
//! variant carries the family's common object fields plus its own
//! connection-specific ones; [`ConnectionDetails`] exposes the common
//! fields uniformly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reference to a connection's parent object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentReference {
    /// Key of the parent object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// A single name/value property on a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProperty {
    /// Free-form property name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Property value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Common accessors for every connection summary variant.
pub trait ConnectionDetails {
    /// Generated key identifying the connection in API calls.
    fn key(&self) -> Option<&str>;
    /// Model version of the object.
    fn model_version(&self) -> Option<&str>;
    /// Reference to the parent object.
    fn parent_ref(&self) -> Option<&ParentReference>;
    /// Free-form display name.
    fn name(&self) -> Option<&str>;
    /// User-defined description.
    fn description(&self) -> Option<&str>;
    /// Version used to track changes to the object instance.
    fn object_version(&self) -> Option<i64>;
    /// Object status flag.
    fn object_status(&self) -> Option<i32>;
    /// Upper-case identifier, modifiable.
    fn identifier(&self) -> Option<&str>;
}

/// The connection details for a generic JDBC data asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdbcConnectionSummary {
    /// Generated key that can be used in API calls to identify the
    /// connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The model version of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub parent_ref: Option<ParentReference>,
    /// Free-form name, editable, restricted to 1000 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// User-defined description for the connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The version of the object instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_version: Option<i64>,
    /// Status flag; value 1 marks shallow references across objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_status: Option<i32>,
    /// Upper-case identifier beginning with a letter or underscore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The properties for the connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_properties: Option<Vec<ConnectionProperty>>,
    /// Whether this is the default connection of its data asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Mapping from user-provided keys to generated keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_map: Option<BTreeMap<String, String>>,
    /// The user name for the connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// The connection details for an object-storage data asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStorageConnectionSummary {
    /// Generated key that can be used in API calls to identify the
    /// connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The model version of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub parent_ref: Option<ParentReference>,
    /// Free-form name, editable, restricted to 1000 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// User-defined description for the connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The version of the object instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_version: Option<i64>,
    /// Status flag; value 1 marks shallow references across objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_status: Option<i32>,
    /// Upper-case identifier beginning with a letter or underscore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The properties for the connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_properties: Option<Vec<ConnectionProperty>>,
    /// Whether this is the default connection of its data asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// The storage namespace the connection targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// The bucket the connection targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
}

/// A connection summary, discriminated on the wire by `modelType`.
///
/// Serialization injects the discriminator value for the variant exactly
/// once; it is not a field of the variant structs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "modelType")]
pub enum ConnectionSummary {
    /// `modelType: GENERIC_JDBC_CONNECTION`
    #[serde(rename = "GENERIC_JDBC_CONNECTION")]
    GenericJdbc(JdbcConnectionSummary),
    /// `modelType: OBJECT_STORAGE_CONNECTION`
    #[serde(rename = "OBJECT_STORAGE_CONNECTION")]
    ObjectStorage(ObjectStorageConnectionSummary),
}

impl ConnectionDetails for ConnectionSummary {
    fn key(&self) -> Option<&str> {
        match self {
            ConnectionSummary::GenericJdbc(c) => c.key.as_deref(),
            ConnectionSummary::ObjectStorage(c) => c.key.as_deref(),
        }
    }

    fn model_version(&self) -> Option<&str> {
        match self {
            ConnectionSummary::GenericJdbc(c) => c.model_version.as_deref(),
            ConnectionSummary::ObjectStorage(c) => c.model_version.as_deref(),
        }
    }

    fn parent_ref(&self) -> Option<&ParentReference> {
        match self {
            ConnectionSummary::GenericJdbc(c) => c.parent_ref.as_ref(),
            ConnectionSummary::ObjectStorage(c) => c.parent_ref.as_ref(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            ConnectionSummary::GenericJdbc(c) => c.name.as_deref(),
            ConnectionSummary::ObjectStorage(c) => c.name.as_deref(),
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            ConnectionSummary::GenericJdbc(c) => c.description.as_deref(),
            ConnectionSummary::ObjectStorage(c) => c.description.as_deref(),
        }
    }

    fn object_version(&self) -> Option<i64> {
        match self {
            ConnectionSummary::GenericJdbc(c) => c.object_version,
            ConnectionSummary::ObjectStorage(c) => c.object_version,
        }
    }

    fn object_status(&self) -> Option<i32> {
        match self {
            ConnectionSummary::GenericJdbc(c) => c.object_status,
            ConnectionSummary::ObjectStorage(c) => c.object_status,
        }
    }

    fn identifier(&self) -> Option<&str> {
        match self {
            ConnectionSummary::GenericJdbc(c) => c.identifier.as_deref(),
            ConnectionSummary::ObjectStorage(c) => c.identifier.as_deref(),
        }
    }
}

/// A page of connection summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSummaryCollection {
    /// The array of connection summaries.
    pub items: Vec<ConnectionSummary>,
}
