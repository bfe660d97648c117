//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces the shell-first pattern the page is written in:
//! - `Shell` / `HeadContent` - Document head and page chrome
//! - `StreamingSink` - Ordered writer that refuses sections before the shell

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
