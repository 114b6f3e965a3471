//! Form Layer
//!
//! Explicit field configuration, pure validation and the mutable value holder
//! the UI binds to. Values are stored as JSON so the same holder can be patched
//! from, and decoded into, any serde record.

mod rules;

use std::collections::{BTreeMap, BTreeSet};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::FormError;

pub use rules::Rule;

/// One field: its name, initial value and ordered validation rules
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub initial: Value,
    pub rules: Vec<Rule>,
}

/// Ordered set of field specs describing a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormConfig {
    fields: Vec<FieldSpec>,
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field; a later field with the same name replaces the earlier one
    pub fn field(mut self, name: &str, initial: Value, rules: impl IntoIterator<Item = Rule>) -> Self {
        let spec = FieldSpec {
            name: name.to_string(),
            initial,
            rules: rules.into_iter().collect(),
        };
        match self.fields.iter_mut().find(|f| f.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.fields.push(spec),
        }
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Initial value of every field
    pub fn initial_values(&self) -> BTreeMap<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.initial.clone()))
            .collect()
    }
}

/// Violated rules per field; fields without violations are absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(BTreeMap<String, BTreeSet<Rule>>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn field(&self, name: &str) -> Option<&BTreeSet<Rule>> {
        self.0.get(name)
    }

    pub fn has(&self, name: &str, rule: Rule) -> bool {
        self.0.get(name).is_some_and(|rules| rules.contains(&rule))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn insert(&mut self, name: &str, rule: Rule) {
        self.0.entry(name.to_string()).or_default().insert(rule);
    }
}

/// Check every configured field against its rules
///
/// A field missing from `values` is validated as `null`.
pub fn validate(config: &FormConfig, values: &BTreeMap<String, Value>) -> Violations {
    let mut violations = Violations::default();
    for spec in config.fields() {
        let value = values.get(&spec.name).unwrap_or(&Value::Null);
        for rule in &spec.rules {
            if !rule.check(value) {
                violations.insert(&spec.name, *rule);
            }
        }
    }
    violations
}

/// Current values plus interaction flags for one form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    config: FormConfig,
    values: BTreeMap<String, Value>,
    touched: BTreeSet<String>,
    dirty: bool,
}

impl FormState {
    pub fn new(config: FormConfig) -> Self {
        let values = config.initial_values();
        Self {
            config,
            values,
            touched: BTreeSet::new(),
            dirty: false,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// String value of a field, empty for null or non-string values
    pub fn text(&self, name: &str) -> String {
        self.values
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.values.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Programmatic write; leaves the interaction flags alone
    ///
    /// Returns false for names the config does not know.
    pub fn set_value(&mut self, name: &str, value: Value) -> bool {
        if !self.config.contains(name) {
            return false;
        }
        self.values.insert(name.to_string(), value);
        true
    }

    /// Write coming from user input; marks the form dirty
    pub fn input(&mut self, name: &str, value: Value) -> bool {
        let known = self.set_value(name, value);
        if known {
            self.dirty = true;
        }
        known
    }

    pub fn touch(&mut self, name: &str) {
        if self.config.contains(name) {
            self.touched.insert(name.to_string());
        }
    }

    pub fn touch_all(&mut self) {
        self.touched = self.config.fields().iter().map(|f| f.name.clone()).collect();
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_pristine(&self) -> bool {
        !self.dirty
    }

    /// Copy the keys of `source` that are also configured fields
    ///
    /// Returns the number of fields written. Non-object sources write nothing.
    pub fn patch<T: Serialize>(&mut self, source: &T) -> usize {
        let Ok(Value::Object(object)) = serde_json::to_value(source) else {
            return 0;
        };
        let mut written = 0;
        for (key, value) in object {
            if self.set_value(&key, value) {
                written += 1;
            }
        }
        written
    }

    /// Back to initial values, pristine and untouched
    pub fn reset(&mut self) {
        self.values = self.config.initial_values();
        self.touched.clear();
        self.dirty = false;
    }

    pub fn violations(&self) -> Violations {
        validate(&self.config, &self.values)
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Decode all current values into a typed record
    pub fn raw_value<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        let object: Map<String, Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value(Value::Object(object)).map_err(|e| FormError::Malformed(e.to_string()))
    }
}
