use crate::format::format_measurement;
use crate::Measurement;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Names bound by one pass over a document, in the order they were first bound.
///
/// Rebinding a name replaces its measurement entirely but keeps its original
/// position. A table is built fresh for every pass and never updated after
/// the pass returns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    entries: Vec<(String, Measurement)>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: impl Into<String>, measurement: Measurement) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.entries[position].1 = measurement,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, measurement));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Measurement)> {
        self.entries.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Each binding rendered for display, in table order
    pub fn formatted(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(name, m)| (name.clone(), format_measurement(m)))
            .collect()
    }
}

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = (&'a str, &'a Measurement);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Measurement)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
