use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const FLIGHT_NUMBER: Color = Color::BrightGreen;
pub const COMPLIANT: Color = Color::Green;
pub const FLAGGED: Color = Color::Red;
