use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const VULNERABLE: Color = Color::BrightRed;
pub const NOT_VULNERABLE: Color = Color::Green;
pub const ERROR: Color = Color::Yellow;
