//! Environment-provided test fixtures.
//!
//! Acceptance tests read fixture values (compartment identifiers, feature
//! toggles, override values for the update phase) from environment variables.
//! A `TF_VAR_`-prefixed variable always takes precedence over the bare name,
//! so values passed to Terraform itself are reused by the tests, and an
//! empty value is treated the same as an unset one.

use std::env;

const TF_VAR_PREFIX: &str = "TF_VAR_";

/// Look up an environment setting, falling back to an empty string.
///
/// Commonly used for the compartment OCID:
///
/// ```
/// use solstice_provider_acctest::env::get_env_setting_with_blank_default;
///
/// let compartment_id = get_env_setting_with_blank_default("compartment_ocid");
/// ```
pub fn get_env_setting_with_blank_default(name: &str) -> String {
    get_env_setting_with_default(name, "")
}

/// Look up an environment setting, falling back to the given default.
///
/// Checks `TF_VAR_<name>` first, then `<name>`. An unset or empty variable
/// falls through to the next candidate.
pub fn get_env_setting_with_default(name: &str, default: &str) -> String {
    get_env_setting(name).unwrap_or_else(|| default.to_string())
}

/// Look up a boolean environment setting.
///
/// Values that fail to parse as a boolean fall back to the default. Used for
/// toggles such as `enable_export_compartment`.
pub fn get_bool_env_setting(name: &str, default: bool) -> bool {
    match get_env_setting(name) {
        Some(value) => value.parse().unwrap_or(default),
        None => default,
    }
}

fn get_env_setting(name: &str) -> Option<String> {
    let prefixed = format!("{}{}", TF_VAR_PREFIX, name);
    env::var(prefixed)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| env::var(name).ok().filter(|v| !v.is_empty()))
}
