use serde::Serialize;
use std::ops::Index;

/// Isolation values keyed by position in the candidate collection they were
/// computed from.
///
/// `values[i]` belongs to the i-th candidate of the collection labelled
/// `source`; the map never reorders or drops entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolationMap {
    source: String,
    values: Vec<f32>,
}

impl IsolationMap {
    pub fn new(source: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            source: source.into(),
            values,
        }
    }

    /// Label of the candidate collection the values refer to.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.values.iter().copied().enumerate()
    }
}

impl Index<usize> for IsolationMap {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}
