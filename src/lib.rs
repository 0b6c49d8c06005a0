//! Solstice Provider Acceptance-Test Toolkit
//!
//! This crate provides the building blocks for acceptance-testing the
//! Solstice Cloud Terraform provider: wire models for the service APIs,
//! a representation-driven configuration generator, a step runner with
//! attribute checks, and recorded-interaction replay so suites run
//! without live infrastructure.
//!
//! # Overview
//!
//! The toolkit provides:
//!
//! - **Service models**: Wire types for Solstice service APIs, including
//!   polymorphic families discriminated by fields like `modelType` and
//!   `configSourceType`
//! - **Representations**: Declarative property maps carrying per-property
//!   create/update values and required/optional classification
//! - **Config generation**: Terraform configuration text rendered from a
//!   representation for a chosen generation mode and value phase
//! - **Step runner**: Ordered acceptance-test steps with aggregated
//!   attribute checks, id capture, and import verification
//! - **Replay**: Record interactions against a live harness once, answer
//!   later runs from the recording
//! - **Environment settings**: `TF_VAR_`-aware lookup of test inputs
//! - **Logging**: Integration with `tracing` for structured logging
//!
//! # Quick Start
//!
//! ```ignore
//! use solstice_provider_acctest::{
//!     generate_resource, run_steps, variable_str,
//!     replay::{ReplayHarness, Scenario},
//!     representation::{GenerationMode, RepMap, RepValue, Representation, ValuePhase},
//!     testing::{check_attr, IdCapture, TestStep},
//! };
//!
//! let rep = RepMap::new()
//!     .with_field("availability_domain", Representation::required(
//!         RepValue::interp("${var.availability_domain}")))
//!     .with_field("display_name", Representation::optional(
//!         RepValue::lit("displayName"))
//!         .with_update(RepValue::lit("displayName2")));
//!
//! let create = generate_resource(
//!     "solstice_core_dedicated_vm_host", "test_dedicated_vm_host",
//!     GenerationMode::WithOptionals, ValuePhase::Create, &rep);
//! let update = generate_resource(
//!     "solstice_core_dedicated_vm_host", "test_dedicated_vm_host",
//!     GenerationMode::WithOptionals, ValuePhase::Update, &rep);
//!
//! let address = "solstice_core_dedicated_vm_host.test_dedicated_vm_host";
//! let id = IdCapture::new();
//! let mut harness = ReplayHarness::new(Scenario::load("testdata/basic.json")?);
//!
//! run_steps(&mut harness, vec![
//!     TestStep::config(create)
//!         .with_check(check_attr(address, "display_name", "displayName"))
//!         .with_check(id.capture(address)),
//!     TestStep::config(update)
//!         .with_check(check_attr(address, "display_name", "displayName2"))
//!         .with_check(id.assert_unchanged(address)),
//! ]).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod models;
pub mod replay;
pub mod representation;
pub mod state;
pub mod testing;

// Re-export main types at crate root
pub use config::{
    generate_data_source, generate_resource, save_config_content, variable_str,
    CONFIG_OUTPUT_DIR_SETTING,
};
pub use env::{
    get_bool_env_setting, get_env_setting_with_blank_default, get_env_setting_with_default,
};
pub use error::{Error, HarnessError};
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use replay::{RecordingHarness, ReplayHarness, Scenario};
pub use representation::{
    GenerationMode, RepEntry, RepMap, RepType, RepValue, Representation, ValuePhase,
};
pub use state::{from_instance_state, InstanceAttributes, TerraformState};
pub use testing::{
    check_attr, check_attr_set, run_steps, AcceptanceHarness, CheckFn, IdCapture, TestError,
    TestStep,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

// Re-export commonly used external types
pub use serde_json;
pub use tracing;
