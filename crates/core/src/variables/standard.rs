//! The standard variable set every prompt receives.

use super::collection::PromptVariables;
use super::errors::VariableError;
use super::names::StandardVariableName;
use super::record::{ToRecord, VariableRecord};
use super::variable::StandardVariable;

/// `input_text_file` and `destination_path`, optionally the directive and
/// layer, plus free-form additional variables.
///
/// Standard entries take precedence over additional entries of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardPromptVariables {
    standard: Vec<StandardVariable>,
    additional: PromptVariables,
}

impl StandardPromptVariables {
    pub fn create(
        input_text_file: &str,
        destination_path: &str,
        additional: &VariableRecord,
    ) -> Result<Self, VariableError> {
        let standard = vec![
            StandardVariable::create(StandardVariableName::INPUT_TEXT_FILE, input_text_file)?,
            StandardVariable::create(
                StandardVariableName::DESTINATION_PATH,
                destination_path,
            )?,
        ];
        let additional = PromptVariables::from_record(additional)?;
        Ok(Self { standard, additional })
    }

    pub fn with_demonstrative_type(&self, directive: &str) -> Result<Self, VariableError> {
        self.with_standard(StandardVariableName::DEMONSTRATIVE_TYPE, directive)
    }

    pub fn with_layer_type(&self, layer: &str) -> Result<Self, VariableError> {
        self.with_standard(StandardVariableName::LAYER_TYPE, layer)
    }

    pub fn with_standard(&self, name: &str, value: &str) -> Result<Self, VariableError> {
        let variable = StandardVariable::create(name, value)?;
        let mut standard = self.standard.clone();
        match standard.iter_mut().find(|v| v.name() == variable.name()) {
            Some(slot) => *slot = variable,
            None => standard.push(variable),
        }
        Ok(Self { standard, additional: self.additional.clone() })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.standard
            .iter()
            .find(|v| v.name() == name)
            .map(StandardVariable::value)
            .or_else(|| self.additional.get(name))
    }

    pub fn input_text_file(&self) -> &str {
        self.get(StandardVariableName::INPUT_TEXT_FILE).unwrap_or_default()
    }

    pub fn destination_path(&self) -> &str {
        self.get(StandardVariableName::DESTINATION_PATH).unwrap_or_default()
    }

    pub fn additional(&self) -> &PromptVariables {
        &self.additional
    }
}

impl ToRecord for StandardPromptVariables {
    fn to_record(&self) -> VariableRecord {
        let mut record = self.additional.to_record();
        for v in &self.standard {
            record.extend(v.to_record());
        }
        record
    }
}
