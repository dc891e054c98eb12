use std::collections::HashMap;
use std::hash::BuildHasher;

/// Read-only view of variable bindings.
pub trait Variables {
    fn lookup(&self, name: char) -> Option<f64>;
}

impl<S: BuildHasher> Variables for HashMap<char, f64, S> {
    fn lookup(&self, name: char) -> Option<f64> {
        self.get(&name).copied()
    }
}

impl<S: BuildHasher> Variables for hashbrown::HashMap<char, f64, S> {
    fn lookup(&self, name: char) -> Option<f64> {
        self.get(&name).copied()
    }
}
