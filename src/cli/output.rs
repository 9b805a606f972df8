//! Operator-facing terminal output.
//!
//! Status symbols are colored when the stream supports it; everything else is
//! plain text so captured output stays greppable.

use owo_colors::{OwoColorize, Stream};

pub mod symbols {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const SECTION: &str = "▸";
}

/// Prints progress, warnings and results for one run.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    ///
    /// `quiet` suppresses everything except errors; `verbose` additionally
    /// relays the bundler's diagnostic stream.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Section header.
    pub fn section(&self, title: &str) {
        if self.quiet {
            return;
        }
        println!(
            "\n{} {}",
            symbols::SECTION.if_supports_color(Stream::Stdout, |s| s.cyan()),
            title.if_supports_color(Stream::Stdout, |s| s.bold())
        );
    }

    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        println!(
            "{} {}",
            symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
            message
        );
    }

    pub fn warn(&self, message: &str) {
        if self.quiet {
            return;
        }
        println!(
            "{} {}",
            symbols::WARNING.if_supports_color(Stream::Stdout, |s| s.yellow()),
            message
        );
    }

    /// Errors go to stderr and are never suppressed.
    pub fn error(&self, message: &str) {
        eprintln!(
            "{} {}",
            symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
            message
        );
    }

    pub fn progress(&self, message: &str) {
        if self.quiet {
            return;
        }
        println!("{}", message);
    }

    pub fn indent(&self, message: &str) {
        if self.quiet {
            return;
        }
        println!("  {}", message);
    }

    pub fn verbose(&self, message: &str) {
        if !self.is_verbose() {
            return;
        }
        println!(
            "  {}",
            message.if_supports_color(Stream::Stdout, |s| s.dimmed())
        );
    }
}
