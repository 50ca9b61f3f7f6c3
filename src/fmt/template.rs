//! `%`-specifier templates. A template is scanned once, left to right, into literal
//! and specifier segments; rendering substitutes each specifier independently, so
//! an expansion can never be re-read as another specifier (`%%D` is `%D`, not a date).

use chrono::{DateTime, Local};
use std::path::Path;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Closed set of recognized specifiers; any other `%X` stays literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specifier {
    /// `%D`: current date.
    Date,
    /// `%T`: current time.
    Time,
    /// `%C`: the logger's creation time.
    Created,
    /// `%N`: the logger's name.
    Name,
    /// `%L`: the level being logged.
    Level,
    /// `%P`: the log file path, empty without a file sink.
    Path,
    /// `%%`: a literal percent sign.
    Percent,
}

impl Specifier {
    pub const ALL: &'static [Self] = &[
        Self::Date,
        Self::Time,
        Self::Created,
        Self::Name,
        Self::Level,
        Self::Path,
        Self::Percent,
    ];

    /// The character following `%`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Date => 'D',
            Self::Time => 'T',
            Self::Created => 'C',
            Self::Name => 'N',
            Self::Level => 'L',
            Self::Path => 'P',
            Self::Percent => '%',
        }
    }

    #[must_use]
    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == c)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Specifier(Specifier),
}

/// Everything a specifier can expand to, other than the level.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub logger_name: &'a str,
    /// Already formatted as `HH:MM:SS`; captured once when the logger is built.
    pub creation_time: &'a str,
    pub path: Option<&'a Path>,
    /// Instant used for `%D` and `%T`.
    pub now: DateTime<Local>,
}

impl<'a> RenderContext<'a> {
    /// Stamps the context with the current wall-clock time.
    #[must_use]
    pub fn new(logger_name: &'a str, creation_time: &'a str) -> Self {
        Self {
            logger_name,
            creation_time,
            path: None,
            now: Local::now(),
        }
    }

    #[must_use]
    pub fn path(mut self, path: Option<&'a Path>) -> Self {
        self.path = path;
        self
    }

    /// Pins `%D`/`%T` to a fixed instant.
    #[must_use]
    pub fn at(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }
}

/// Pre-parsed template. The logger's prefix is parsed once at construction;
/// messages are parsed per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '%'
                && let Some(spec) = chars.peek().copied().and_then(Specifier::from_code)
            {
                chars.next();
                if !current.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current)));
                }
                segments.push(Segment::Specifier(spec));
                continue;
            }
            current.push(c);
        }

        if !current.is_empty() {
            segments.push(Segment::Literal(current));
        }

        Self {
            source: template.to_string(),
            segments,
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn render(&self, level: &str, ctx: &RenderContext<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + 16);

        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Specifier(spec) => match spec {
                    Specifier::Date => out.push_str(&ctx.now.format(DATE_FORMAT).to_string()),
                    Specifier::Time => out.push_str(&ctx.now.format(TIME_FORMAT).to_string()),
                    Specifier::Created => out.push_str(ctx.creation_time),
                    Specifier::Name => out.push_str(ctx.logger_name),
                    Specifier::Level => out.push_str(level),
                    Specifier::Path => {
                        if let Some(path) = ctx.path {
                            out.push_str(&path.to_string_lossy());
                        }
                    }
                    Specifier::Percent => out.push('%'),
                },
            }
        }

        out
    }
}

/// One-shot parse and render.
#[must_use]
pub fn render(template: &str, level: &str, ctx: &RenderContext<'_>) -> String {
    Template::parse(template).render(level, ctx)
}
