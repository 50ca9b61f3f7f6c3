//! Rendering concerns: level colors and `%`-specifier templates.

mod color;
mod template;

pub use color::{Color, colorize};
pub use template::{
    DATE_FORMAT, RenderContext, Segment, Specifier, TIME_FORMAT, Template, render,
};
