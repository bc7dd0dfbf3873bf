//! Rendering utilities for operator surfaces (Markdown, plain console lines).

#![forbid(unsafe_code)]

mod console;
mod markdown;

pub use console::render_console;
pub use markdown::render_markdown;
