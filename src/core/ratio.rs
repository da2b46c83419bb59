//! # Aspect Ratio
//!
//! The fixed set of aspect-ratio presets a user can pick from. The selection
//! is one-hot by construction: `ComposerState` holds a single `AspectRatio`
//! field, so there is never "no selection" or "two selections".

use serde::{Deserialize, Serialize};

/// One of the three aspect-ratio presets.
///
/// Serializes as its display label (`"1:1"`, `"4:5"`, `"16:9"`), which is
/// also what `from_label` accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "16:9")]
    Widescreen,
}

impl AspectRatio {
    /// All presets, in the order chips are laid out on screen.
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Square,
        AspectRatio::Portrait,
        AspectRatio::Widescreen,
    ];

    /// The display label shown inside the chip.
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "4:5",
            AspectRatio::Widescreen => "16:9",
        }
    }

    /// Parse a display label back into a preset. Anything outside the fixed
    /// set is rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }

    /// Accessibility label for the chip, consumed read-only by assistive
    /// collaborators.
    pub fn accessibility_label(&self) -> String {
        format!("Select aspect ratio {}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_square() {
        assert_eq!(AspectRatio::default(), AspectRatio::Square);
        assert_eq!(AspectRatio::default().label(), "1:1");
    }

    #[test]
    fn test_labels() {
        assert_eq!(AspectRatio::Square.label(), "1:1");
        assert_eq!(AspectRatio::Portrait.label(), "4:5");
        assert_eq!(AspectRatio::Widescreen.label(), "16:9");
    }

    #[test]
    fn test_from_label_round_trips() {
        for ratio in AspectRatio::ALL {
            assert_eq!(AspectRatio::from_label(ratio.label()), Some(ratio));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(AspectRatio::from_label("3:2"), None);
        assert_eq!(AspectRatio::from_label(""), None);
        assert_eq!(AspectRatio::from_label("1:1 "), None);
    }

    #[test]
    fn test_accessibility_labels_are_exact() {
        assert_eq!(
            AspectRatio::Square.accessibility_label(),
            "Select aspect ratio 1:1"
        );
        assert_eq!(
            AspectRatio::Portrait.accessibility_label(),
            "Select aspect ratio 4:5"
        );
        assert_eq!(
            AspectRatio::Widescreen.accessibility_label(),
            "Select aspect ratio 16:9"
        );
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&AspectRatio::Widescreen).unwrap();
        assert_eq!(json, "\"16:9\"");
        let back: AspectRatio = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AspectRatio::Widescreen);
    }
}
