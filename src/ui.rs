//! @acp:module "Terminal Output"
//! @acp:summary "Styled status lines, boxes and scoped spinners"
//! @acp:domain cli
//! @acp:layer output
//!
//! A [`Reporter`] is passed to whatever needs to report progress. Spinners
//! are scoped: [`Reporter::spinner`] hands out a [`SpinnerGuard`] that is
//! finished explicitly or cleared when dropped.

use std::time::Duration;

use console::{measure_text_width, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::wizard::{Section, WizardObserver};

/// Writes user-facing status output; silent when quiet
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Reporter that prints nothing and draws hidden spinners
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn title(&self, message: &str) {
        if !self.quiet {
            println!("\n{}", style(message).bold().cyan());
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    pub fn warn(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn error(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✗").red(), message);
        }
    }

    pub fn list<S: AsRef<str>>(&self, items: &[S]) {
        if self.quiet {
            return;
        }
        for item in items {
            println!("  {} {}", style("•").dim(), item.as_ref());
        }
    }

    /// Lines framed in a rounded box
    pub fn boxed<S: AsRef<str>>(&self, lines: &[S]) {
        if self.quiet {
            return;
        }
        let width = lines
            .iter()
            .map(|l| measure_text_width(l.as_ref()))
            .max()
            .unwrap_or(0);
        let border = "─".repeat(width + 2);

        println!("{}", style(format!("╭{border}╮")).cyan());
        for line in lines {
            let line = line.as_ref();
            let padding = " ".repeat(width - measure_text_width(line));
            println!("{} {line}{padding} {}", style("│").cyan(), style("│").cyan());
        }
        println!("{}", style(format!("╰{border}╯")).cyan());
    }

    pub fn divider(&self) {
        if !self.quiet {
            println!("{}", style("─".repeat(50)).dim());
        }
    }

    pub fn newline(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Start a spinner that lives until the guard is finished or dropped
    pub fn spinner(&self, message: impl Into<String>) -> SpinnerGuard {
        let bar = if self.quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            let template = ProgressStyle::default_spinner().template("{spinner:.green} {msg}");
            if let Ok(spinner_style) = template {
                bar.set_style(spinner_style);
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        bar.set_message(message.into());

        SpinnerGuard {
            bar,
            reporter: *self,
            finished: false,
        }
    }
}

impl WizardObserver for Reporter {
    fn section_entered(&mut self, section: Section, total: usize) {
        self.title(&format!("{} ({}/{})", section.title, section.index, total));
        self.newline();
    }
}

/// Running spinner; cleared on drop unless finished
pub struct SpinnerGuard {
    bar: ProgressBar,
    reporter: Reporter,
    finished: bool,
}

impl SpinnerGuard {
    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    pub fn succeed(mut self, message: &str) {
        self.finish();
        self.reporter.success(message);
    }

    pub fn warn(mut self, message: &str) {
        self.finish();
        self.reporter.warn(message);
    }

    pub fn fail(mut self, message: &str) {
        self.finish();
        self.reporter.error(message);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
        self.finished = true;
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_spinner_is_hidden() {
        let reporter = Reporter::quiet();
        let guard = reporter.spinner("working");
        assert!(guard.bar.is_hidden());
        guard.succeed("done");
    }

    #[test]
    fn test_dropped_spinner_is_finished() {
        let reporter = Reporter::quiet();
        let bar = {
            let guard = reporter.spinner("working");
            guard.bar.clone()
        };
        assert!(bar.is_finished());
    }
}
