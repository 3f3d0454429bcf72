use std::collections::BTreeSet;

/// Flip state for an expectation-vs-reality card set.
///
/// Every card starts face up; `toggle` flips exactly one card and leaves the
/// rest untouched. There is no cross-card coupling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlipSet {
    flipped: BTreeSet<String>,
}

impl FlipSet {
    pub fn toggle(&mut self, id: &str) {
        if !self.flipped.remove(id) {
            self.flipped.insert(id.to_string());
        }
    }

    pub fn is_flipped(&self, id: &str) -> bool {
        self.flipped.contains(id)
    }
}
