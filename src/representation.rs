//! Field-representation model for generated test configurations.
//!
//! A [`RepMap`] describes one resource or data source as a mapping from
//! attribute name to a requirement level plus a create-phase value and an
//! optional update-phase value. The configuration generator in
//! [`crate::config`] resolves a map against a [`GenerationMode`] and a
//! [`ValuePhase`] to produce configuration text; the map itself is a passive,
//! process-constant fixture.
//!
//! # Example
//!
//! ```
//! use solstice_provider_acctest::representation::{RepMap, RepValue, Representation};
//!
//! let rep = RepMap::new()
//!     .with_field(
//!         "compartment_id",
//!         Representation::required(RepValue::interp("${var.compartment_id}")),
//!     )
//!     .with_field(
//!         "display_name",
//!         Representation::optional(RepValue::lit("displayName"))
//!             .with_update(RepValue::lit("displayName2")),
//!     );
//! assert!(rep.get("display_name").is_some());
//! ```

use std::collections::BTreeMap;

/// Requirement level of an attribute within a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepType {
    /// Emitted in every generated configuration.
    Required,
    /// Emitted only when the generation mode asks for optional fields.
    Optional,
}

/// Which of a representation's two values to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePhase {
    /// Use the create-phase value.
    Create,
    /// Use the update-phase value, falling back to the create-phase value
    /// for fields that define none (immutable fields stay unchanged across
    /// update steps).
    Update,
}

/// Which fields of a representation map to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Emit only `Required` fields.
    RequiredOnly,
    /// Emit `Required` and `Optional` fields.
    WithOptionals,
}

impl GenerationMode {
    /// Whether a field of the given requirement level is emitted under this
    /// mode.
    pub fn emits(&self, rep_type: RepType) -> bool {
        match self {
            GenerationMode::RequiredOnly => rep_type == RepType::Required,
            GenerationMode::WithOptionals => true,
        }
    }
}

/// A strongly typed attribute value.
///
/// The split between [`RepValue::Literal`] and [`RepValue::Interpolation`]
/// controls escaping at emission time: literals are quoted with `"` and `\`
/// escaped, interpolation expressions are quoted but emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum RepValue {
    /// A plain string, quoted and escaped on emission.
    Literal(String),
    /// An interpolation expression such as `${var.compartment_id}`, emitted
    /// without escaping.
    Interpolation(String),
    /// A bare boolean literal.
    Bool(bool),
    /// A bare integer literal.
    Int(i64),
    /// A bare floating-point literal. Values are expected to be finite;
    /// NaN and infinities have no bare-literal syntax and are emitted as
    /// quoted sentinels instead.
    Float(f64),
    /// A list emitted in native `[...]` syntax.
    List(Vec<RepValue>),
    /// A map emitted in native `{ "key" = value }` syntax, sorted by key.
    Map(BTreeMap<String, RepValue>),
}

impl RepValue {
    /// Shorthand for [`RepValue::Literal`].
    pub fn lit(value: impl Into<String>) -> Self {
        RepValue::Literal(value.into())
    }

    /// Shorthand for [`RepValue::Interpolation`].
    pub fn interp(expr: impl Into<String>) -> Self {
        RepValue::Interpolation(expr.into())
    }

    /// Build a list value from anything yielding [`RepValue`]s.
    pub fn list(values: impl IntoIterator<Item = RepValue>) -> Self {
        RepValue::List(values.into_iter().collect())
    }

    /// Build a string-to-string map value, the common tag-map shape.
    pub fn string_map<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        RepValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), RepValue::lit(v)))
                .collect(),
        )
    }
}

/// One attribute's representation: requirement level, create value, and an
/// optional update value.
#[derive(Debug, Clone, PartialEq)]
pub struct Representation {
    /// Requirement level of the attribute.
    pub rep_type: RepType,
    /// Value emitted during create-phase generation.
    pub create: RepValue,
    /// Value emitted during update-phase generation, if the attribute is
    /// mutable.
    pub update: Option<RepValue>,
}

impl Representation {
    /// A required attribute with the given create value.
    pub fn required(create: RepValue) -> Self {
        Self {
            rep_type: RepType::Required,
            create,
            update: None,
        }
    }

    /// An optional attribute with the given create value.
    pub fn optional(create: RepValue) -> Self {
        Self {
            rep_type: RepType::Optional,
            create,
            update: None,
        }
    }

    /// Set the update-phase value.
    pub fn with_update(mut self, update: RepValue) -> Self {
        self.update = Some(update);
        self
    }

    /// Resolve the value for a phase. Update-phase resolution falls back to
    /// the create value when no update value is defined.
    pub fn value_for(&self, phase: ValuePhase) -> &RepValue {
        match phase {
            ValuePhase::Create => &self.create,
            ValuePhase::Update => self.update.as_ref().unwrap_or(&self.create),
        }
    }
}

/// An entry in a representation map: either a single attribute or a nested
/// group emitted as a block (e.g. a datasource `filter`).
#[derive(Debug, Clone, PartialEq)]
pub enum RepEntry {
    /// A single attribute assignment.
    Field(Representation),
    /// A nested block; the inner map recurses with the same phase.
    Group {
        /// Requirement level of the whole block.
        rep_type: RepType,
        /// The block's own representation map.
        map: RepMap,
    },
}

impl RepEntry {
    /// Requirement level of this entry.
    pub fn rep_type(&self) -> RepType {
        match self {
            RepEntry::Field(rep) => rep.rep_type,
            RepEntry::Group { rep_type, .. } => *rep_type,
        }
    }
}

/// An ordered map from attribute name to [`RepEntry`].
///
/// Entries are kept sorted by name so generated configuration is
/// deterministic and diffable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepMap {
    entries: BTreeMap<String, RepEntry>,
}

impl RepMap {
    /// Create an empty representation map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single attribute.
    pub fn with_field(mut self, name: impl Into<String>, rep: Representation) -> Self {
        self.entries.insert(name.into(), RepEntry::Field(rep));
        self
    }

    /// Add a nested group emitted as a block.
    pub fn with_group(mut self, name: impl Into<String>, rep_type: RepType, map: RepMap) -> Self {
        self.entries
            .insert(name.into(), RepEntry::Group { rep_type, map });
        self
    }

    /// Copy this map with entries from `overrides` added or replaced.
    ///
    /// This is how a test swaps a single attribute for one step, e.g. moving
    /// a resource to a different compartment while keeping the rest of the
    /// fixture unchanged.
    pub fn with_properties(mut self, overrides: RepMap) -> Self {
        for (name, entry) in overrides.entries {
            self.entries.insert(name, entry);
        }
        self
    }

    /// Copy this map with the named entry removed.
    pub fn without_property(mut self, name: &str) -> Self {
        self.entries.remove(name);
        self
    }

    /// Look up an entry by attribute name.
    pub fn get(&self, name: &str) -> Option<&RepEntry> {
        self.entries.get(name)
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &RepEntry)> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
