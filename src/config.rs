//! Configuration-text generation from representation maps.
//!
//! These are pure functions from a [`RepMap`] plus a [`GenerationMode`] and
//! [`ValuePhase`] to Terraform configuration text. Attribute names and
//! nesting must exactly match the provider's resource schema; the external
//! harness validates the generated text when it applies it.
//!
//! Generated text is assembled per test step and discarded after the step;
//! nothing here persists except through [`save_config_content`], which
//! exports the create-with-optionals configuration of a test for later
//! reuse.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use crate::env::get_env_setting_with_blank_default;
use crate::error::Error;
use crate::representation::{GenerationMode, RepEntry, RepMap, RepValue, ValuePhase};

/// Environment variable naming the directory [`save_config_content`] writes
/// under. When unset, saving is a no-op.
pub const CONFIG_OUTPUT_DIR_SETTING: &str = "acctest_config_output_dir";

/// Generate a `resource` block for the given representation map.
///
/// Under [`GenerationMode::RequiredOnly`] only required entries appear;
/// under [`GenerationMode::WithOptionals`] optional entries appear as well.
/// The phase selects each entry's create or update value, with update
/// falling back to create for immutable fields.
pub fn generate_resource(
    resource_type: &str,
    resource_name: &str,
    mode: GenerationMode,
    phase: ValuePhase,
    rep: &RepMap,
) -> String {
    generate_block("resource", resource_type, resource_name, mode, phase, rep)
}

/// Generate a `data` block for the given representation map.
pub fn generate_data_source(
    data_source_type: &str,
    data_source_name: &str,
    mode: GenerationMode,
    phase: ValuePhase,
    rep: &RepMap,
) -> String {
    generate_block("data", data_source_type, data_source_name, mode, phase, rep)
}

/// Generate a `variable` stanza with a default value, e.g.
/// `variable "compartment_id" { default = "ocid1..." }`.
pub fn variable_str(name: &str, default: &str) -> String {
    format!("variable \"{}\" {{ default = \"{}\" }}\n", name, default)
}

fn generate_block(
    kind: &str,
    block_type: &str,
    block_name: &str,
    mode: GenerationMode,
    phase: ValuePhase,
    rep: &RepMap,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} \"{}\" \"{}\" {{", kind, block_type, block_name);
    emit_entries(&mut out, rep, mode, phase, 1);
    out.push_str("}\n");
    tracing::debug!(kind, block_type, block_name, "generated configuration block");
    out
}

fn emit_entries(out: &mut String, rep: &RepMap, mode: GenerationMode, phase: ValuePhase, depth: usize) {
    let indent = "\t".repeat(depth);
    for (name, entry) in rep.iter() {
        if !mode.emits(entry.rep_type()) {
            continue;
        }
        match entry {
            RepEntry::Field(field) => {
                let _ = writeln!(out, "{}{} = {}", indent, name, render_value(field.value_for(phase)));
            }
            RepEntry::Group { map, .. } => {
                let _ = writeln!(out, "{}{} {{", indent, name);
                emit_entries(out, map, mode, phase, depth + 1);
                let _ = writeln!(out, "{}}}", indent);
            }
        }
    }
}

fn render_value(value: &RepValue) -> String {
    match value {
        RepValue::Literal(s) => format!("\"{}\"", escape_literal(s)),
        // Interpolation expressions go out verbatim; escaping them would
        // corrupt the `${...}` syntax.
        RepValue::Interpolation(expr) => format!("\"{}\"", expr),
        RepValue::Bool(b) => b.to_string(),
        RepValue::Int(i) => i.to_string(),
        RepValue::Float(f) => {
            if !f.is_finite() {
                // No bare-literal syntax exists for these; a quoted sentinel
                // keeps the generated block parseable.
                format!("\"{}\"", f)
            } else if f.fract() == 0.0 {
                format!("{:.1}", f)
            } else {
                format!("{}", f)
            }
        }
        RepValue::List(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        RepValue::Map(entries) => {
            if entries.is_empty() {
                return "{}".to_string();
            }
            let rendered: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("\"{}\" = {}", k, render_value(v)))
                .collect();
            format!("{{ {} }}", rendered.join(", "))
        }
    }
}

fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Persist generated configuration content for a test, mirroring the
/// provider's config-export flow.
///
/// The content is written to
/// `<acctest_config_output_dir>/<service>/<resource>.tf`. When the output
/// directory setting is blank the call is a no-op and returns `Ok(None)`.
pub fn save_config_content(
    content: &str,
    service: &str,
    resource: &str,
) -> Result<Option<PathBuf>, Error> {
    let dir = get_env_setting_with_blank_default(CONFIG_OUTPUT_DIR_SETTING);
    if dir.is_empty() {
        return Ok(None);
    }
    let service_dir = PathBuf::from(dir).join(service);
    fs::create_dir_all(&service_dir)?;
    let path = service_dir.join(format!("{}.tf", resource));
    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), "saved configuration content");
    Ok(Some(path))
}
