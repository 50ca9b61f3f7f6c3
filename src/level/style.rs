//! Level name → style mapping. Each logger owns one table, built before the
//! logger and never modified afterwards, so console and file sinks always agree
//! on what a level looks like.

use super::Level;
use crate::Error;
use crate::fmt::Color;

/// A level name paired with the escape codes that open and close its styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyle {
    name: String,
    color: Color,
    open: String,
    reset: &'static str,
}

impl LevelStyle {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            open: color.fg_ansi(),
            reset: Color::RESET,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    #[must_use]
    pub const fn reset(&self) -> &'static str {
        self.reset
    }
}

/// Ordered set of level styles, looked up by exact level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: Vec<LevelStyle>,
}

impl Default for StyleTable {
    /// White debug, grey info, green success, yellow warning, red critical.
    fn default() -> Self {
        Self::empty()
            .with(Level::Debug.as_str(), Color::White)
            .with(Level::Info.as_str(), Color::BrightBlack)
            .with(Level::Success.as_str(), Color::Green)
            .with(Level::Warning.as_str(), Color::BrightYellow)
            .with(Level::Critical.as_str(), Color::BrightRed)
    }
}

impl StyleTable {
    /// A table with no entries; a logger rejects it until the built-in levels are added.
    #[must_use]
    pub const fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    /// Replaces the style for `name`, or appends a new level.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, color: Color) -> Self {
        self.insert(name, color);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        let style = LevelStyle::new(name, color);
        match self.styles.iter_mut().find(|s| s.name == style.name) {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LevelStyle> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// # Errors
    /// `Error::InvalidLevel` when `name` has no entry.
    pub fn resolve(&self, name: &str) -> Result<&LevelStyle, Error> {
        self.get(name)
            .ok_or_else(|| Error::InvalidLevel(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(LevelStyle::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The convenience methods on `Logger` rely on every built-in level resolving.
    ///
    /// # Errors
    /// `Error::MissingStyle` naming the first built-in level without an entry.
    pub fn ensure_builtin(&self) -> Result<(), Error> {
        for level in Level::all() {
            if self.get(level.as_str()).is_none() {
                return Err(Error::MissingStyle(level.as_str().to_string()));
            }
        }
        Ok(())
    }
}
