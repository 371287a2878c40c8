use indexmap::IndexMap;

use crate::value::Value;

/// The symbol table consulted during evaluation: one flat scope for the
/// whole interpreter lifetime. Threading it explicitly through every
/// `eval` call leaves room for parent-chained lexical scopes later without
/// disturbing the evaluator's contract.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    /// Inserts a binding, overwriting any previous value under the name.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Looks up a name, handing back an owned copy of the stored value.
    /// A miss is reported by the evaluator as an `unbound symbol` error
    /// value, so this stays a plain `Option`.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
