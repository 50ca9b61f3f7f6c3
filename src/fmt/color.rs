//! Foreground colors for level styling. The named variants map onto the classic
//! 16-color SGR codes every terminal understands; `Rgb` covers 24-bit themes.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Resets the foreground only, so any attributes set by the caller survive.
    pub const RESET: &'static str = "\x1b[39m";

    /// Clears every attribute; the console sink ends each colored line with it.
    pub const RESET_ALL: &'static str = "\x1b[0m";

    /// SGR parameter for the named variants; `None` for `Rgb`.
    const fn sgr(self) -> Option<u8> {
        Some(match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
            Self::Rgb(..) => return None,
        })
    }

    /// Terminals need the raw escape sequence; callers shouldn't hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        match (self.sgr(), self) {
            (Some(code), _) => format!("\x1b[{code}m"),
            (None, Self::Rgb(r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m"),
            (None, _) => String::new(),
        }
    }

    /// Parses `#RRGGBB`. Unlike a theme loader, a typo here is reported rather than
    /// silently falling back, because it decides how a whole level looks.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BrightWhite => "bright_white",
            Self::Rgb(..) => "rgb",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Color {
    type Err = crate::Error;

    /// Accepts names (`light_red`, `bright-red`, `grey`) or `#RRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s).ok_or_else(|| crate::Error::InvalidColor(s.to_string()));
        }

        let normalized = s.to_lowercase().replace('-', "_");
        let normalized = normalized
            .strip_prefix("light_")
            .map_or_else(|| normalized.clone(), |rest| format!("bright_{rest}"));

        let color = match normalized.as_str() {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" | "purple" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "bright_black" | "grey" | "gray" => Self::BrightBlack,
            "bright_red" => Self::BrightRed,
            "bright_green" => Self::BrightGreen,
            "bright_yellow" => Self::BrightYellow,
            "bright_blue" => Self::BrightBlue,
            "bright_magenta" | "bright_purple" => Self::BrightMagenta,
            "bright_cyan" => Self::BrightCyan,
            "bright_white" => Self::BrightWhite,
            _ => return Err(crate::Error::InvalidColor(s.to_string())),
        };
        Ok(color)
    }
}

/// Most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{text}{}", color.fg_ansi(), Color::RESET)
}
