use crossterm::style::Color;

/// Design tokens for the scengen CLI.
///
/// All colors and icons printed by the console sink come from here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const GENERATE: &str = "📄";
    pub const DIFF: &str = "Δ";
    pub const NEW: &str = "+";
    pub const MODIFIED: &str = "~";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const GENERATE: &str = "[GEN]";
    pub const DIFF: &str = "[DIFF]";
    pub const NEW: &str = "+";
    pub const MODIFIED: &str = "~";
}
