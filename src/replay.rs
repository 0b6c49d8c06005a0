//! Recorded-interaction replay.
//!
//! An acceptance run against a live backend is expensive and depends on
//! real infrastructure. Recording mode wraps the live harness and writes
//! every configuration/state interaction to a named scenario file; replay
//! mode answers later runs from that file, verifying each applied
//! configuration matches what was recorded.
//!
//! Scenario files are plain JSON, committed next to the tests that use
//! them.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, HarnessError};
use crate::state::TerraformState;
use crate::testing::AcceptanceHarness;

/// One recorded apply: the configuration that was sent and the state that
/// came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedStep {
    /// The configuration text that was applied.
    pub config: String,
    /// The state the harness reported after the apply.
    pub state: TerraformState,
}

/// A named sequence of recorded interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name, conventionally the test name that recorded it.
    pub name: String,
    /// Recorded applies, in order.
    pub steps: Vec<RecordedStep>,
}

impl Scenario {
    /// Create an empty scenario.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Append a recorded step.
    pub fn with_step(mut self, config: impl Into<String>, state: TerraformState) -> Self {
        self.steps.push(RecordedStep {
            config: config.into(),
            state,
        });
        self
    }

    /// Load a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save the scenario as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// A harness that answers every interaction from a recorded scenario.
///
/// Each apply must match the recorded configuration for its position in
/// the scenario, byte for byte. Imports are answered from the most
/// recently replayed state, so an import-verify step sees exactly what the
/// recording saw.
#[derive(Debug)]
pub struct ReplayHarness {
    scenario: Scenario,
    cursor: usize,
    last_state: Option<TerraformState>,
}

impl ReplayHarness {
    /// Replay the given scenario from its first step.
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            cursor: 0,
            last_state: None,
        }
    }

    /// Whether every recorded step has been replayed. A finished test
    /// should have consumed the whole recording.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.scenario.steps.len()
    }
}

#[async_trait]
impl AcceptanceHarness for ReplayHarness {
    async fn apply(&mut self, config: &str) -> Result<TerraformState, HarnessError> {
        let step = self.cursor;
        let recorded =
            self.scenario
                .steps
                .get(step)
                .ok_or_else(|| HarnessError::ScenarioExhausted {
                    scenario: self.scenario.name.clone(),
                    step,
                })?;
        if recorded.config != config {
            tracing::debug!(
                scenario = %self.scenario.name,
                step,
                recorded = %recorded.config,
                applied = %config,
                "configuration mismatch during replay"
            );
            return Err(HarnessError::ConfigMismatch {
                scenario: self.scenario.name.clone(),
                step,
            });
        }
        self.cursor += 1;
        self.last_state = Some(recorded.state.clone());
        Ok(recorded.state.clone())
    }

    async fn destroy(&mut self) -> Result<(), HarnessError> {
        self.last_state = None;
        Ok(())
    }

    async fn import(&mut self, address: &str, id: &str) -> Result<TerraformState, HarnessError> {
        let last = self.last_state.as_ref().ok_or_else(|| HarnessError::Import {
            address: address.to_string(),
            message: "nothing applied yet in this replay".to_string(),
        })?;
        let attrs = last.resource(address).ok_or_else(|| HarnessError::Import {
            address: address.to_string(),
            message: format!(
                "no recorded resource at this address in scenario '{}'",
                self.scenario.name
            ),
        })?;
        if attrs.get("id").map(String::as_str) != Some(id) {
            return Err(HarnessError::Import {
                address: address.to_string(),
                message: format!("recorded resource does not have id '{}'", id),
            });
        }
        let mut imported = TerraformState::new();
        for (key, value) in attrs {
            imported.set_attr(address, key.clone(), value.clone());
        }
        Ok(imported)
    }
}

/// A harness that forwards to a live harness and records every apply.
///
/// After the run, [`RecordingHarness::into_scenario`] yields the recording
/// for saving.
pub struct RecordingHarness<H> {
    inner: H,
    scenario: Scenario,
}

impl<H> RecordingHarness<H> {
    /// Record interactions with `inner` under the given scenario name.
    pub fn new(name: impl Into<String>, inner: H) -> Self {
        Self {
            inner,
            scenario: Scenario::new(name),
        }
    }

    /// The recording accumulated so far.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Consume the wrapper and return the recording.
    pub fn into_scenario(self) -> Scenario {
        self.scenario
    }
}

#[async_trait]
impl<H: AcceptanceHarness> AcceptanceHarness for RecordingHarness<H> {
    async fn apply(&mut self, config: &str) -> Result<TerraformState, HarnessError> {
        let state = self.inner.apply(config).await?;
        self.scenario.steps.push(RecordedStep {
            config: config.to_string(),
            state: state.clone(),
        });
        Ok(state)
    }

    async fn destroy(&mut self) -> Result<(), HarnessError> {
        self.inner.destroy().await
    }

    async fn import(&mut self, address: &str, id: &str) -> Result<TerraformState, HarnessError> {
        self.inner.import(address, id).await
    }
}
