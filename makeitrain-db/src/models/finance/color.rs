use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

/// Named colours offered by the colour picker, keyed by upper-case hex code
const NAMED_COLORS: &[(&str, &str)] = &[
    ("#000000", "black"),
    ("#FFFFFF", "white"),
    ("#FF3B30", "red"),
    ("#FF9500", "orange"),
    ("#FFCC00", "yellow"),
    ("#34C759", "green"),
    ("#007AFF", "blue"),
    ("#AF52DE", "purple"),
    ("#FF2D55", "pink"),
    ("#8E8E93", "gray"),
];

/// Display colour of a record, stored as a normalised `#RRGGBB` hex code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    hex: HeaplessString<7>,
}

impl Color {
    /// Parse `#RRGGBB` or `RRGGBB` (any case)
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let mut hex = HeaplessString::<7>::new();
        hex.push('#').ok()?;
        hex.push_str(&digits.to_ascii_uppercase()).ok()?;
        Some(Self { hex })
    }

    pub fn hex(&self) -> &str {
        self.hex.as_str()
    }

    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(hex, _)| *hex == self.hex.as_str())
            .map(|(_, name)| *name)
    }
}

impl Default for Color {
    fn default() -> Self {
        let mut hex = HeaplessString::<7>::new();
        // Fits: seven ASCII bytes.
        let _ = hex.push_str(NAMED_COLORS[0].0);
        Self { hex }
    }
}
