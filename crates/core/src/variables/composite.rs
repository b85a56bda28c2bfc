//! Ordered composition of variable sets with later-wins overlay.

use std::fmt;
use std::sync::Arc;

use super::record::{ToRecord, VariableRecord};

/// Shared handle to a component of a [`CompositePromptVariables`].
pub type Component = Arc<dyn ToRecord + Send + Sync>;

/// An immutable, ordered list of variable sets.
///
/// [`ToRecord::to_record`] overlays the components left to right, so for a
/// key present in several components the one added last wins.
#[derive(Clone, Default)]
pub struct CompositePromptVariables {
    components: Arc<[Component]>,
}

impl CompositePromptVariables {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from components in overlay order. The input is copied.
    pub fn of<I>(components: I) -> Self
    where
        I: IntoIterator<Item = Component>,
    {
        Self { components: components.into_iter().collect() }
    }

    /// Return a new composite with `component` appended.
    #[must_use]
    pub fn add<C>(&self, component: C) -> Self
    where
        C: ToRecord + Send + Sync + 'static,
    {
        self.add_shared(Arc::new(component))
    }

    pub fn add_shared(&self, component: Component) -> Self {
        let mut components = self.components.to_vec();
        components.push(component);
        Self { components: components.into() }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }
}

impl ToRecord for CompositePromptVariables {
    fn to_record(&self) -> VariableRecord {
        let mut record = VariableRecord::new();
        for component in self.components.iter() {
            record.extend(component.to_record());
        }
        record
    }
}

impl fmt::Debug for CompositePromptVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositePromptVariables")
            .field("components", &self.components.len())
            .field("record", &self.to_record())
            .finish()
    }
}
