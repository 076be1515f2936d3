//! Terminal capability detection and colouring

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// The style a console message is printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A completed operation (green)
    Success,
    /// A rejected operation or bad input (amber)
    Warning,
}

impl Tone {
    /// Renders `text` in this tone, or unchanged when `colour` is off
    pub fn paint(self, text: &str, colour: bool) -> String {
        if !colour {
            return text.to_string();
        }
        match self {
            Self::Success => text.fg::<css::Green>().to_string(),
            Self::Warning => text.fg::<css::Orange>().to_string(),
        }
    }
}
