//! Read-only access to the host's variable table.
//!
//! Conditions read variables with `\v[N]`. The host owns the table; the
//! evaluator only ever sees it through [`VariableStore`].

use std::collections::{BTreeMap, HashMap};

/// Index-keyed numeric lookup.
///
/// Unset variables read as `0.0`.
pub trait VariableStore {
    fn get(&self, index: usize) -> f64;
}

impl<T: VariableStore + ?Sized> VariableStore for &T {
    fn get(&self, index: usize) -> f64 {
        (**self).get(index)
    }
}

impl VariableStore for [f64] {
    fn get(&self, index: usize) -> f64 {
        <[f64]>::get(self, index).copied().unwrap_or(0.0)
    }
}

impl VariableStore for Vec<f64> {
    fn get(&self, index: usize) -> f64 {
        self.as_slice().get(index).copied().unwrap_or(0.0)
    }
}

impl VariableStore for HashMap<usize, f64> {
    fn get(&self, index: usize) -> f64 {
        HashMap::get(self, &index).copied().unwrap_or(0.0)
    }
}

impl VariableStore for BTreeMap<usize, f64> {
    fn get(&self, index: usize) -> f64 {
        BTreeMap::get(self, &index).copied().unwrap_or(0.0)
    }
}

/// Adapts a closure into a [`VariableStore`].
///
/// ```
/// use choice_conditions::{FnStore, VariableStore};
///
/// let store = FnStore(|i| i as f64 * 10.0);
/// assert_eq!(store.get(3), 30.0);
/// ```
pub struct FnStore<F>(pub F);

impl<F: Fn(usize) -> f64> VariableStore for FnStore<F> {
    fn get(&self, index: usize) -> f64 {
        (self.0)(index)
    }
}

/// A store with no variables set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariables;

impl VariableStore for NoVariables {
    fn get(&self, _index: usize) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_indices_read_as_zero() {
        let vec = vec![1.0, 2.0];
        assert_eq!(VariableStore::get(&vec, 1), 2.0);
        assert_eq!(VariableStore::get(&vec, 9), 0.0);

        let map: HashMap<usize, f64> = [(3, 90.0)].into_iter().collect();
        assert_eq!(VariableStore::get(&map, 3), 90.0);
        assert_eq!(VariableStore::get(&map, 4), 0.0);

        let tree: BTreeMap<usize, f64> = [(1, -1.0)].into_iter().collect();
        assert_eq!(VariableStore::get(&tree, 1), -1.0);

        let slice: &[f64] = &[5.0];
        assert_eq!(VariableStore::get(slice, 0), 5.0);
        assert_eq!(NoVariables.get(42), 0.0);
    }
}
