//! The flat string map every variable set reduces to.

use std::collections::BTreeMap;

/// Flattened variables, keyed by name.
pub type VariableRecord = BTreeMap<String, String>;

/// Anything that can be flattened into a [`VariableRecord`].
///
/// This is the only capability the composite and the generic collection
/// require from their inputs, so any type exposing it is accepted without a
/// shared base type.
pub trait ToRecord {
    fn to_record(&self) -> VariableRecord;
}

impl ToRecord for VariableRecord {
    fn to_record(&self) -> VariableRecord {
        self.clone()
    }
}

impl ToRecord for std::collections::HashMap<String, String> {
    fn to_record(&self) -> VariableRecord {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
