//! Acceptance-test lifecycle support.
//!
//! A test declares an ordered list of [`TestStep`]s, each carrying generated
//! configuration text and a set of attribute checks, and runs them through
//! an [`AcceptanceHarness`]. The harness owns apply/destroy/diff; in CI
//! that is the real provisioning engine or a [`crate::replay::ReplayHarness`]
//! over recorded interactions, and this module never reimplements it.
//!
//! Steps run strictly in order because each one depends on the cloud-side
//! state the previous one produced. All checks of a step run even when an
//! early one fails, and their failures are reported together.
//!
//! # Example
//!
//! ```ignore
//! use solstice_provider_acctest::testing::{check_attr, run_steps, IdCapture, TestStep};
//!
//! let id = IdCapture::new();
//! run_steps(&mut harness, vec![
//!     TestStep::config(create_config)
//!         .with_check(check_attr(address, "display_name", "displayName"))
//!         .with_check(id.capture(address)),
//!     TestStep::config(update_config)
//!         .with_check(check_attr(address, "display_name", "displayName2"))
//!         .with_check(id.assert_unchanged(address)),
//! ]).await?;
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use crate::error::{Error, HarnessError};
use crate::state::{from_instance_state, TerraformState};

/// The error message reported when an update step produced a new resource
/// identifier instead of updating in place.
pub const RECREATED_MSG: &str = "resource recreated when it was supposed to be updated";

/// The seam to the external provisioning harness.
///
/// Implementations apply configuration text against a live or replayed
/// backend and report the resulting instance state. The toolkit adds no
/// retry or recovery around these calls.
#[async_trait]
pub trait AcceptanceHarness: Send {
    /// Apply a configuration and return the resulting state.
    async fn apply(&mut self, config: &str) -> Result<TerraformState, HarnessError>;

    /// Destroy everything the harness still manages. Called once after the
    /// last step.
    async fn destroy(&mut self) -> Result<(), HarnessError>;

    /// Import an existing resource by identifier and return its state.
    async fn import(&mut self, address: &str, id: &str) -> Result<TerraformState, HarnessError>;
}

/// A single attribute check over applied state.
///
/// Returns `Err` with a human-readable message on failure; messages from
/// all checks of a step are aggregated.
pub type CheckFn = Box<dyn Fn(&TerraformState) -> Result<(), String> + Send + Sync>;

/// Errors from running acceptance-test steps.
#[derive(Debug, Error)]
pub enum TestError {
    /// One or more checks of a step failed; every failure is listed.
    #[error("step {step} failed {} check(s):\n{}", .failures.len(), .failures.join("\n"))]
    CheckFailures {
        /// Zero-based index of the failing step.
        step: usize,
        /// One message per failed check.
        failures: Vec<String>,
    },

    /// Imported attributes differ from the prior state.
    #[error("step {step} import verification failed:\n{}", .mismatches.join("\n"))]
    ImportVerify {
        /// Zero-based index of the import step.
        step: usize,
        /// One message per differing attribute.
        mismatches: Vec<String>,
    },

    /// An import step ran before any configuration was applied.
    #[error("step {0} is an import step but no state has been applied yet")]
    ImportWithoutPriorState(usize),

    /// A harness failure, propagated unchanged.
    #[error(transparent)]
    Harness(#[from] HarnessError),

    /// A state lookup failure, propagated unchanged.
    #[error(transparent)]
    State(#[from] Error),
}

enum StepAction {
    Apply(String),
    ImportVerify { address: String, ignore: Vec<String> },
}

/// One step of an acceptance test: an action plus its checks.
pub struct TestStep {
    action: StepAction,
    checks: Vec<CheckFn>,
}

impl TestStep {
    /// A step that applies the given configuration text.
    pub fn config(config: impl Into<String>) -> Self {
        Self {
            action: StepAction::Apply(config.into()),
            checks: Vec::new(),
        }
    }

    /// A step that imports the addressed resource using the `id` captured
    /// from the previous step's state, then verifies the imported
    /// attributes match that state.
    pub fn import_verify(address: impl Into<String>) -> Self {
        Self {
            action: StepAction::ImportVerify {
                address: address.into(),
                ignore: Vec::new(),
            },
            checks: Vec::new(),
        }
    }

    /// Attributes to skip during import verification, for fields the API
    /// does not echo back on import.
    pub fn with_ignored_attributes<'a>(
        mut self,
        attributes: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        if let StepAction::ImportVerify { ignore, .. } = &mut self.action {
            ignore.extend(attributes.into_iter().map(str::to_string));
        }
        self
    }

    /// Add a check to this step.
    pub fn with_check(mut self, check: CheckFn) -> Self {
        self.checks.push(check);
        self
    }
}

/// Check that a resource attribute equals an expected value.
pub fn check_attr(
    address: impl Into<String>,
    key: impl Into<String>,
    expected: impl Into<String>,
) -> CheckFn {
    let address = address.into();
    let key = key.into();
    let expected = expected.into();
    Box::new(move |state| match state.attr(&address, &key) {
        Some(got) if got == expected => Ok(()),
        Some(got) => Err(format!(
            "{}: attribute '{}' expected \"{}\", got \"{}\"",
            address, key, expected, got
        )),
        None => Err(format!("{}: attribute '{}' not found", address, key)),
    })
}

/// Check that a resource attribute is present and non-empty.
pub fn check_attr_set(address: impl Into<String>, key: impl Into<String>) -> CheckFn {
    let address = address.into();
    let key = key.into();
    Box::new(move |state| match state.attr(&address, &key) {
        Some(got) if !got.is_empty() => Ok(()),
        _ => Err(format!("{}: attribute '{}' is not set", address, key)),
    })
}

/// Captures a resource identifier in one step and asserts it is unchanged
/// in a later one.
///
/// Cloning shares the captured value, so a test declares one capture and
/// hands clones to its closures.
#[derive(Debug, Clone, Default)]
pub struct IdCapture {
    slot: Arc<Mutex<Option<String>>>,
}

impl IdCapture {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// A check that records the addressed resource's `id`.
    pub fn capture(&self, address: impl Into<String>) -> CheckFn {
        let slot = Arc::clone(&self.slot);
        let address = address.into();
        Box::new(move |state| {
            let id = from_instance_state(state, &address, "id").map_err(|e| e.to_string())?;
            let mut guard = slot
                .lock()
                .map_err(|_| "resource id capture is poisoned".to_string())?;
            *guard = Some(id);
            Ok(())
        })
    }

    /// A check that fails with [`RECREATED_MSG`] when the addressed
    /// resource's `id` differs from the captured one.
    pub fn assert_unchanged(&self, address: impl Into<String>) -> CheckFn {
        let slot = Arc::clone(&self.slot);
        let address = address.into();
        Box::new(move |state| {
            let current = from_instance_state(state, &address, "id").map_err(|e| e.to_string())?;
            let guard = slot
                .lock()
                .map_err(|_| "resource id capture is poisoned".to_string())?;
            match guard.as_deref() {
                Some(captured) if captured == current => Ok(()),
                Some(_) => Err(RECREATED_MSG.to_string()),
                None => Err(format!("no id captured for {} before this step", address)),
            }
        })
    }

    /// The captured identifier, if any step has recorded one.
    pub fn get(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|guard| guard.clone())
    }
}

/// Run acceptance-test steps in order against a harness, destroying at the
/// end.
///
/// Each step's checks all run; their failures are aggregated into a single
/// [`TestError::CheckFailures`]. Harness errors stop the run immediately
/// and propagate unchanged.
pub async fn run_steps<H: AcceptanceHarness + ?Sized>(
    harness: &mut H,
    steps: Vec<TestStep>,
) -> Result<(), TestError> {
    let mut prior: Option<TerraformState> = None;

    for (index, step) in steps.into_iter().enumerate() {
        let state = match &step.action {
            StepAction::Apply(config) => {
                tracing::info!(step = index, "applying configuration");
                tracing::debug!(step = index, %config, "step configuration");
                harness.apply(config).await?
            }
            StepAction::ImportVerify { address, ignore } => {
                tracing::info!(step = index, %address, "verifying import");
                let prior_state = prior
                    .as_ref()
                    .ok_or(TestError::ImportWithoutPriorState(index))?;
                let id = from_instance_state(prior_state, address, "id")?;
                let imported = harness.import(address, &id).await?;
                verify_import(index, prior_state, &imported, address, ignore)?;
                prior_state.clone()
            }
        };

        let failures: Vec<String> = step
            .checks
            .iter()
            .filter_map(|check| check(&state).err())
            .collect();
        if !failures.is_empty() {
            return Err(TestError::CheckFailures {
                step: index,
                failures,
            });
        }

        prior = Some(state);
    }

    harness.destroy().await?;
    Ok(())
}

fn verify_import(
    step: usize,
    prior: &TerraformState,
    imported: &TerraformState,
    address: &str,
    ignore: &[String],
) -> Result<(), TestError> {
    let expected = prior
        .resource(address)
        .ok_or_else(|| Error::ResourceNotFound(address.to_string()))?;
    let got = imported
        .resource(address)
        .ok_or_else(|| Error::ResourceNotFound(address.to_string()))?;

    let mut mismatches = Vec::new();
    for (key, value) in expected {
        if ignore.iter().any(|ignored| ignored == key) {
            continue;
        }
        match got.get(key) {
            Some(imported_value) if imported_value == value => {}
            Some(imported_value) => mismatches.push(format!(
                "attribute '{}' expected \"{}\" after import, got \"{}\"",
                key, value, imported_value
            )),
            None => mismatches.push(format!("attribute '{}' missing after import", key)),
        }
    }
    // Both directions: an attribute the import introduced is as much of a
    // divergence as one it dropped.
    for key in got.keys() {
        if ignore.iter().any(|ignored| ignored == key) {
            continue;
        }
        if !expected.contains_key(key) {
            mismatches.push(format!(
                "attribute '{}' appeared after import but was not in the applied state",
                key
            ));
        }
    }

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(TestError::ImportVerify { step, mismatches })
    }
}
