//! Terminal status rendering.
//!
//! `RenderSink` is the contract the application flow writes status lines to.
//! `Renderer` is the default stderr implementation; tests substitute a
//! recording sink.

use crossterm::style::{Color, Stylize};

const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const GLYPH_BULLET: &str = "•";
const INDENT: &str = "  ";

/// Injectable rendering interface used by the application flow.
pub trait RenderSink {
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render activity/lifecycle text.
    fn activity(&self, text: &str);
    /// Render additional detail text under a preceding line.
    fn detail(&self, text: &str);
}

/// Stderr renderer with optional ANSI color.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl RenderSink for Renderer {
    fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    fn activity(&self, text: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                GLYPH_BULLET.with(Color::DarkCyan),
                text.with(Color::Cyan).bold()
            );
        } else {
            eprintln!("{text}");
        }
    }

    fn detail(&self, text: &str) {
        if self.color {
            eprintln!("{INDENT}{}", text.with(Color::DarkGrey));
        } else {
            eprintln!("{INDENT}{text}");
        }
    }
}
