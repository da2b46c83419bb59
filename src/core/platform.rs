//! # Platform Table
//!
//! Keyboard-avoidance behavior per platform, expressed as a lookup table so
//! new platforms are additive. While the prompt field has focus, the layout
//! reserves this many rows at the bottom of the screen for the platform's
//! input-method surface (IME candidate strips and the like).

/// Rows of bottom inset reserved while the prompt has focus, keyed by the
/// platform identity from `std::env::consts::OS`. Platforms not listed get
/// [`DEFAULT_KEYBOARD_INSET`].
pub const KEYBOARD_INSETS: &[(&str, u16)] = &[
    ("macos", 1),
    ("windows", 1),
    ("linux", 0),
];

/// Inset for platforms with no table entry.
pub const DEFAULT_KEYBOARD_INSET: u16 = 0;

/// Look up the keyboard inset for a platform identity.
pub fn keyboard_inset(platform: &str) -> u16 {
    KEYBOARD_INSETS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, rows)| *rows)
        .unwrap_or(DEFAULT_KEYBOARD_INSET)
}

/// The platform identity of the running build.
pub fn current_platform() -> &'static str {
    std::env::consts::OS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platforms() {
        assert_eq!(keyboard_inset("macos"), 1);
        assert_eq!(keyboard_inset("windows"), 1);
        assert_eq!(keyboard_inset("linux"), 0);
    }

    #[test]
    fn test_unknown_platform_gets_default() {
        assert_eq!(keyboard_inset("freebsd"), DEFAULT_KEYBOARD_INSET);
        assert_eq!(keyboard_inset(""), DEFAULT_KEYBOARD_INSET);
    }

    #[test]
    fn test_current_platform_is_in_table_or_defaults() {
        // Whatever we compile on, the lookup is total.
        let _ = keyboard_inset(current_platform());
    }
}
