//! Stack configuration sources for the resource-manager service.
//!
//! A polymorphic family discriminated by the `configSourceType` wire field.
//! The shared capability is the optional working directory; everything else
//! is variant-specific.

use serde::{Deserialize, Serialize};

/// Common accessor for every configuration source variant.
pub trait ConfigSourceDetails {
    /// File path to the directory to use for running Terraform. If not
    /// specified, the root directory is used.
    fn working_directory(&self) -> Option<&str>;
}

/// A template to use as the source of the stack configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateConfigSourceDetails {
    /// Identifier of the template.
    pub template_id: String,
    /// Directory to run from inside the configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

/// An uploaded zip archive to use as the source of the stack configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZipUploadConfigSourceDetails {
    /// The zip archive, base64-encoded.
    pub zip_file_base64_encoded: String,
    /// Directory to run from inside the archive. Required when the archive
    /// contains folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

/// An existing compartment to generate the stack configuration from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompartmentConfigSourceDetails {
    /// Identifier of the compartment to discover resources in.
    pub compartment_id: String,
    /// Region the compartment's resources live in.
    pub region: String,
    /// Ignored for this source type; accepted for API symmetry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

/// The source of a stack's configuration, discriminated on the wire by
/// `configSourceType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "configSourceType")]
pub enum CreateConfigSourceDetails {
    /// `configSourceType: TEMPLATE_CONFIG_SOURCE`
    #[serde(rename = "TEMPLATE_CONFIG_SOURCE")]
    Template(CreateTemplateConfigSourceDetails),
    /// `configSourceType: ZIP_UPLOAD`
    #[serde(rename = "ZIP_UPLOAD")]
    ZipUpload(CreateZipUploadConfigSourceDetails),
    /// `configSourceType: COMPARTMENT_CONFIG_SOURCE`
    #[serde(rename = "COMPARTMENT_CONFIG_SOURCE")]
    Compartment(CreateCompartmentConfigSourceDetails),
}

impl ConfigSourceDetails for CreateConfigSourceDetails {
    fn working_directory(&self) -> Option<&str> {
        match self {
            CreateConfigSourceDetails::Template(s) => s.working_directory.as_deref(),
            CreateConfigSourceDetails::ZipUpload(s) => s.working_directory.as_deref(),
            CreateConfigSourceDetails::Compartment(s) => s.working_directory.as_deref(),
        }
    }
}
