//! The `input_text` variable set, filled from piped standard input.

use super::errors::VariableError;
use super::names::StdinVariableName;
use super::record::{ToRecord, VariableRecord};
use super::variable::StdinVariable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdinPromptVariables {
    input_text: StdinVariable,
}

impl StdinPromptVariables {
    pub fn create(input_text: &str) -> Result<Self, VariableError> {
        let input_text = StdinVariable::create(StdinVariableName::INPUT_TEXT, input_text)?;
        Ok(Self { input_text })
    }

    pub fn input_text(&self) -> &str {
        self.input_text.value()
    }
}

impl ToRecord for StdinPromptVariables {
    fn to_record(&self) -> VariableRecord {
        self.input_text.to_record()
    }
}
