use std::collections::HashMap;

/// The user's current include/exclude choice per cleanup option.
///
/// Keys are option ids; a missing key reads as excluded. The generator
/// iterates the catalog, not this map, so iteration order here never
/// affects output order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    included: HashMap<String, bool>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(included: HashMap<String, bool>) -> Self {
        Self { included }
    }

    pub fn is_included(&self, id: &str) -> bool {
        self.included.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: &str, included: bool) {
        self.included.insert(id.to_string(), included);
    }

    /// Pure toggle: a new selection with exactly the one key flipped.
    pub fn toggled(&self, id: &str) -> Selection {
        let mut next = self.clone();
        let flipped = !next.is_included(id);
        next.included.insert(id.to_string(), flipped);
        next
    }

    pub fn included_count(&self) -> usize {
        self.included.values().filter(|v| **v).count()
    }

    pub fn as_map(&self) -> &HashMap<String, bool> {
        &self.included
    }
}
