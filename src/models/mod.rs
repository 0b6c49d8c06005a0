//! API transfer models for the Solstice Cloud wire format.
//!
//! Every model mirrors a JSON shape with camelCase keys. Polymorphic
//! families are closed enums whose serde tag is the family's discriminator
//! field (`modelType`, `configSourceType`); the discriminator is injected
//! exactly once at serialization time and never stored on the structs.
//! Shared base capabilities are one trait per family, implemented by the
//! enum via match dispatch.
//!
//! Enum-typed fields deserialize unknown wire values into an
//! `UnknownValue` variant so a response never fails to parse; call the
//! model's `validate_enum_values` before submitting a request to get an
//! aggregated report of every out-of-range field.
//!
//! The real generated surface of the provider has thousands of these types;
//! this module carries one representative family per pattern.

pub mod config_source;
pub mod connection;
pub mod host;
pub mod managed_instance;

pub use config_source::{ConfigSourceDetails, CreateConfigSourceDetails};
pub use connection::{ConnectionDetails, ConnectionSummary, ConnectionSummaryCollection};
pub use host::{DedicatedVmHost, DedicatedVmHostCollection, LifecycleState};
pub use managed_instance::{ManagedInstance, ManagedInstanceCollection, OsFamily, StatusValue};
