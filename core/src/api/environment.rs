//! Variable storage owned by the caller.

use hashbrown::HashMap;

use crate::evaluator::Variables;

/// Bindings from single-letter names to values.
///
/// The evaluator only sees it through [`Variables`]; mutation goes through
/// [`Engine::execute`](crate::api::Engine::execute) or the methods here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<char, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: char) -> Option<f64> {
        self.bindings.get(&name).copied()
    }

    /// Bind `name`, returning the previous value.
    pub fn set(&mut self, name: char, value: f64) -> Option<f64> {
        self.bindings.insert(name, value)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> {
        let mut entries: Vec<(char, f64)> = self.bindings.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(name, _)| *name);
        entries.into_iter()
    }
}

impl Variables for Environment {
    fn lookup(&self, name: char) -> Option<f64> {
        self.get(name)
    }
}

impl FromIterator<(char, f64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}
