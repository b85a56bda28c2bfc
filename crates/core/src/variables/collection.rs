//! Generic, validated variable collection.
//!
//! [`PromptVariables`] is the catch-all container: it accepts anything that
//! can be flattened into a string map, validates it once, and hands out new
//! instances from every transform. The receiver is never mutated.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::errors::VariableError;
use super::record::{ToRecord, VariableRecord};

/// Upper bound on entries in a single collection.
pub const MAX_VARIABLES: usize = 256;

/// Entries shown by the `Display` preview before truncating.
const PREVIEW_LEN: usize = 3;

/// An ordered, validated mapping of variable names to string values.
///
/// Keys are unique, non-empty and trimmed. Insertion order is kept for the
/// `Display` preview and for serialization, but lookups and equality ignore
/// it.
#[derive(Debug, Clone, Default)]
pub struct PromptVariables {
    entries: Vec<(String, String)>,
}

impl PromptVariables {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_record(record: &VariableRecord) -> Result<Self, VariableError> {
        Self::from_pairs(record.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Build from key/value pairs. Repeated keys are rejected.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, VariableError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let key = validate_key(key.as_ref())?;
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(VariableError::DuplicateKey { key });
            }
            entries.push((key, value.into()));
        }
        check_len(entries.len())?;
        Ok(Self { entries })
    }

    /// Accept any value exposing [`ToRecord`].
    pub fn from_prompt_variables(source: &dyn ToRecord) -> Result<Self, VariableError> {
        Self::from_record(&source.to_record())
    }

    /// Accept a loosely-typed JSON value.
    ///
    /// Only an object whose every value is a string qualifies. Anything else
    /// is reported with the offending key or the value's JSON type.
    pub fn from_value(value: &Value) -> Result<Self, VariableError> {
        let Value::Object(map) = value else {
            return Err(VariableError::ValidationFailed {
                value: value.to_string(),
                constraint: format!(
                    "expected an object of string values, got {}",
                    json_type(value)
                ),
            });
        };

        let mut pairs = Vec::with_capacity(map.len());
        for (key, v) in map {
            match v {
                Value::String(s) => pairs.push((key.as_str(), s.clone())),
                Value::Null => {
                    return Err(VariableError::NullOrUndefined {
                        variable_name: key.clone(),
                    });
                }
                other => {
                    return Err(VariableError::ValidationFailed {
                        value: other.to_string(),
                        constraint: format!(
                            "value for key '{key}' must be a string, got {}",
                            json_type(other)
                        ),
                    });
                }
            }
        }
        Self::from_pairs(pairs)
    }

    pub fn from_json(json: &str) -> Result<Self, VariableError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| VariableError::ValidationFailed {
                value: json.to_string(),
                constraint: format!("invalid JSON: {e}"),
            })?;
        Self::from_value(&value)
    }

    pub fn to_json(&self) -> String {
        // Serializing string pairs into a JSON object cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set one variable. An existing key keeps its position.
    pub fn with_variable(
        &self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<Self, VariableError> {
        let key = validate_key(key)?;
        let value = value.into();
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => entries.push((key, value)),
        }
        check_len(entries.len())?;
        Ok(Self { entries })
    }

    /// Set several variables at once; later pairs override earlier ones.
    pub fn with_variables<K, V, I>(&self, pairs: I) -> Result<Self, VariableError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .try_fold(self.clone(), |acc, (k, v)| acc.with_variable(k.as_ref(), v))
    }

    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        let entries = self.entries.iter().filter(|(k, _)| k != key).cloned().collect();
        Self { entries }
    }

    /// Keep only the listed keys. Unknown keys are ignored.
    #[must_use]
    pub fn pick(&self, keys: &[&str]) -> Self {
        self.filter(|k, _| keys.contains(&k))
    }

    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&str, &str) -> bool,
    {
        let entries =
            self.entries.iter().filter(|(k, v)| predicate(k, v)).cloned().collect();
        Self { entries }
    }

    /// Replace every value with `mapper(key, value)`.
    ///
    /// A mapper returning `None` has not produced a string; the whole
    /// operation fails instead of dropping or coercing that entry.
    pub fn map<F>(&self, mut mapper: F) -> Result<Self, VariableError>
    where
        F: FnMut(&str, &str) -> Option<String>,
    {
        let mut entries = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let Some(mapped) = mapper(key, value) else {
                return Err(VariableError::ValidationFailed {
                    value: value.clone(),
                    constraint: format!("mapper for key '{key}' did not return a string"),
                });
            };
            entries.push((key.clone(), mapped));
        }
        Ok(Self { entries })
    }

    /// Check `predicate` against every entry, stopping at the first failure.
    pub fn validate<F>(&self, mut predicate: F) -> Result<(), VariableError>
    where
        F: FnMut(&str, &str) -> bool,
    {
        match self.entries.iter().find(|(k, v)| !predicate(k, v)) {
            Some((key, value)) => Err(VariableError::ValidationFailed {
                value: value.clone(),
                constraint: format!("predicate failed for key '{key}'"),
            }),
            None => Ok(()),
        }
    }
}

fn validate_key(key: &str) -> Result<String, VariableError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(VariableError::empty_key());
    }
    Ok(trimmed.to_string())
}

fn check_len(count: usize) -> Result<(), VariableError> {
    if count > MAX_VARIABLES {
        return Err(VariableError::TooManyVariables { count, max: MAX_VARIABLES });
    }
    Ok(())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ToRecord for PromptVariables {
    fn to_record(&self) -> VariableRecord {
        self.entries.iter().cloned().collect()
    }
}

impl PartialEq for PromptVariables {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(k, v)| other.get(k) == Some(v.as_str()))
    }
}

impl Eq for PromptVariables {}

impl Serialize for PromptVariables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl fmt::Display for PromptVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PromptVariables {{")?;
        for (i, (k, v)) in self.entries.iter().take(PREVIEW_LEN).enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {k}: {v:?}")?;
        }
        if self.entries.len() > PREVIEW_LEN {
            write!(f, ", ... (+{} more)", self.entries.len() - PREVIEW_LEN)?;
        }
        write!(f, " }}")
    }
}
