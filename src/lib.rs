#![forbid(unsafe_code)]

//! @acp:module "Claude Setup Library"
//! @acp:summary "Questionnaire-driven Claude Code configuration for projects"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # claude-setup
//!
//! Asks about a project's stack and workflow, picks agents, commands,
//! skills, rules, hooks and MCP servers that fit, and writes them into the
//! project.
//!
//! ## Example
//!
//! ```rust,no_run
//! use claude_setup::prompt::TerminalPrompter;
//! use claude_setup::ui::Reporter;
//! use claude_setup::{ask_all_questions, map_answers_to_components, Generator};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut prompter = TerminalPrompter::new();
//!     let mut reporter = Reporter::new();
//!
//!     let answers = ask_all_questions(&mut prompter, &mut reporter, None)?;
//!     let components = map_answers_to_components(&answers);
//!
//!     Generator::new(".", reporter).run(&answers, &components)?;
//!     Ok(())
//! }
//! ```

pub mod answers;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod selection;
pub mod setup;
pub mod ui;
pub mod wizard;

// Re-exports
pub use answers::{AnswerValue, Answers, PartialAnswers, QuestionKey};
pub use catalog::{Catalog, Category};
pub use config::{load_preset, SetupRecord};
pub use error::{Result, WizardError};
pub use generator::{GenerationSummary, Generator};
pub use prompt::{Choice, Navigation, Prompter};
pub use selection::{map_answers_to_components, SelectedComponents};
pub use setup::{ask_setup_questions, ExistingFilesAction, SetupAnswers};
pub use ui::Reporter;
pub use wizard::{ask_all_questions, Sequencer, Step};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
