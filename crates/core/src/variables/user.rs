//! User-defined variables collected from `--uv-*` CLI options and config.

use serde_json::{Map, Value};

use super::errors::VariableError;
use super::record::{ToRecord, VariableRecord};
use super::variable::{USER_VARIABLE_PREFIX, UserVariable};

/// A validated set of [`UserVariable`]s, keyed by their record key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPromptVariables {
    variables: Vec<UserVariable>,
}

impl UserPromptVariables {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate every entry; the first failure aborts the whole batch.
    pub fn create<K, V, I>(entries: I) -> Result<Self, VariableError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().try_fold(Self::empty(), |acc, (k, v)| {
            let variable = UserVariable::create(k.as_ref(), v.as_ref())?;
            Ok(acc.insert(variable))
        })
    }

    /// Extract user variables from a raw CLI options map.
    ///
    /// Only keys of the form `uv-<name>` (at least one character after the
    /// prefix) are considered; everything else is ignored. Values are coerced
    /// to strings the way the CLI layer renders them. Fail-fast like
    /// [`UserPromptVariables::create`].
    pub fn from_options(options: &Map<String, Value>) -> Result<Self, VariableError> {
        let mut result = Self::empty();
        for (key, value) in options {
            let Some(name) = key.strip_prefix(USER_VARIABLE_PREFIX) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            let coerced = coerce_option_value(value);
            let variable = UserVariable::create(name, coerced.as_deref())?;
            result = result.insert(variable);
        }
        tracing::debug!(count = result.len(), "extracted user variables from options");
        Ok(result)
    }

    /// Panicking variant of [`UserPromptVariables::from_options`].
    ///
    /// # Panics
    ///
    /// Panics when any user variable fails validation.
    #[deprecated(note = "use `from_options` and handle the error")]
    pub fn from_options_unchecked(options: &Map<String, Value>) -> Self {
        match Self::from_options(options) {
            Ok(v) => v,
            Err(e) => panic!("invalid user variables: {e}"),
        }
    }

    pub fn with<'a>(
        &self,
        key: &str,
        value: impl Into<Option<&'a str>>,
    ) -> Result<Self, VariableError> {
        let variable = UserVariable::create(key, value)?;
        Ok(self.clone().insert(variable))
    }

    pub fn without(&self, key: &str) -> Self {
        let variables = self.variables.iter().filter(|v| v.key() != key).cloned().collect();
        Self { variables }
    }

    /// Union with `other`; incoming entries override existing keys.
    pub fn merge(&self, other: &VariableRecord) -> Result<Self, VariableError> {
        let combined = self.to_record().into_iter().chain(other.clone());
        Self::create(combined)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.iter().find(|v| v.key() == key).map(UserVariable::value)
    }

    pub fn variables(&self) -> &[UserVariable] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn insert(mut self, variable: UserVariable) -> Self {
        match self.variables.iter_mut().find(|v| v.key() == variable.key()) {
            Some(slot) => *slot = variable,
            None => self.variables.push(variable),
        }
        self
    }
}

impl ToRecord for UserPromptVariables {
    fn to_record(&self) -> VariableRecord {
        self.variables.iter().map(|v| (v.key().to_string(), v.value().to_string())).collect()
    }
}

/// Render a raw option value as a string; `None` for null.
fn coerce_option_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(coerce_element(other)),
    }
}

fn coerce_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            items.iter().map(coerce_element).collect::<Vec<_>>().join(",")
        }
        Value::Object(_) => "[object Object]".to_string(),
    }
}
