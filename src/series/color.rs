use std::collections::HashMap;

/// Trace colors, handed out in order
pub const PALETTE: [&str; 12] = [
    "#2563eb", "#dc2626", "#16a34a", "#7c3aed", "#ea580c", "#0891b2", "#ca8a04", "#db2777",
    "#65a30d", "#0f766e", "#9333ea", "#be123c",
];

/// Stable file key → color assignment
///
/// A key keeps the color it got on its first request for the lifetime of
/// the assigner. New keys take the next palette entry and wrap around once
/// all twelve are used.
#[derive(Debug, Clone, Default)]
pub struct ColorAssigner {
    assigned: HashMap<String, &'static str>,
    next: usize,
}

impl ColorAssigner {
    /// Create an assigner with no keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `key`, assigning one on first request
    pub fn color_for(&mut self, key: &str) -> &'static str {
        if let Some(color) = self.assigned.get(key) {
            return color;
        }
        let color = PALETTE[self.next % PALETTE.len()];
        self.next += 1;
        self.assigned.insert(key.to_string(), color);
        color
    }

    /// Color already assigned to `key`
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.assigned.get(key).copied()
    }

    /// Number of keys with a color
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Whether no key has a color yet
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
