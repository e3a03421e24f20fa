//! @acp:module "Question Sequencer"
//! @acp:summary "Cursor-driven traversal of conditional steps with go-back"
//! @acp:domain cli
//! @acp:layer logic
//!
//! The sequencer walks an ordered list of [`Step`]s. Each step may be
//! skipped by a predicate over the answers so far. Going back rewinds to the
//! nearest earlier step that would not be skipped under the answers held at
//! that moment, so the user never lands on a question that would vanish.

use crate::error::Result;
use crate::prompt::{Navigation, Prompter};

/// Accumulates answers recorded by the sequencer
pub trait AnswerSink: Default {
    type Value;

    fn record(&mut self, value: Self::Value);
}

impl AnswerSink for crate::answers::PartialAnswers {
    type Value = crate::answers::AnswerValue;

    fn record(&mut self, value: Self::Value) {
        self.apply(value);
    }
}

/// Named group of steps presented under one heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// 1-based position
    pub index: usize,
    pub title: &'static str,
}

/// What a step sees when it asks
pub struct AskContext<'a, A> {
    /// Answers recorded so far, possibly including stale downstream values
    pub answers: &'a A,
    /// Answers from an earlier run, used as defaults
    pub previous: Option<&'a A>,
    /// Cursor is at absolute index 0
    pub is_first: bool,
}

pub type SkipFn<A> = fn(&A) -> bool;
pub type AskFn<A> =
    fn(&mut dyn Prompter, &AskContext<'_, A>) -> Result<Navigation<<A as AnswerSink>::Value>>;

/// One question
pub struct Step<A: AnswerSink> {
    pub key: &'static str,
    pub section: Section,
    pub skip: SkipFn<A>,
    pub ask: AskFn<A>,
}

impl<A: AnswerSink> Step<A> {
    pub fn new(key: &'static str, section: Section, ask: AskFn<A>) -> Self {
        Self {
            key,
            section,
            skip: |_| false,
            ask,
        }
    }

    pub fn skip_when(mut self, skip: SkipFn<A>) -> Self {
        self.skip = skip;
        self
    }
}

/// Receives section transitions
pub trait WizardObserver {
    fn section_entered(&mut self, _section: Section, _total: usize) {}
}

impl WizardObserver for () {}

/// Drives a step list to completion
pub struct Sequencer<A: AnswerSink> {
    steps: Vec<Step<A>>,
    cursor: usize,
    last_section: Option<usize>,
    answers: A,
    previous: Option<A>,
}

impl<A: AnswerSink> Sequencer<A> {
    pub fn new(steps: Vec<Step<A>>) -> Self {
        Self {
            steps,
            cursor: 0,
            last_section: None,
            answers: A::default(),
            previous: None,
        }
    }

    /// Offer answers from an earlier run as defaults
    pub fn with_previous(mut self, previous: Option<A>) -> Self {
        self.previous = previous;
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &A {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Highest section index in the step list
    pub fn section_count(&self) -> usize {
        self.steps.iter().map(|s| s.section.index).max().unwrap_or(0)
    }

    /// Run every remaining step and hand back the accreted answers
    pub fn run(
        mut self,
        prompter: &mut dyn Prompter,
        observer: &mut dyn WizardObserver,
    ) -> Result<A> {
        while !self.is_complete() {
            self.advance(prompter, observer)?;
        }
        Ok(self.answers)
    }

    /// Process the step under the cursor: skip it, record its answer, or rewind
    pub fn advance(
        &mut self,
        prompter: &mut dyn Prompter,
        observer: &mut dyn WizardObserver,
    ) -> Result<()> {
        let Some(step) = self.steps.get(self.cursor) else {
            return Ok(());
        };

        if self.last_section != Some(step.section.index) {
            observer.section_entered(step.section, self.section_count());
            self.last_section = Some(step.section.index);
        }

        if (step.skip)(&self.answers) {
            tracing::debug!(step = step.key, "skipped");
            self.cursor += 1;
            return Ok(());
        }

        let cx = AskContext {
            answers: &self.answers,
            previous: self.previous.as_ref(),
            is_first: self.cursor == 0,
        };
        match (step.ask)(prompter, &cx)? {
            Navigation::Answered(value) => {
                tracing::debug!(step = step.key, "answered");
                self.answers.record(value);
                self.cursor += 1;
            }
            Navigation::Back => match self.previous_eligible(self.cursor) {
                Some(target) => {
                    tracing::debug!(from = step.key, to = self.steps[target].key, "going back");
                    self.cursor = target;
                }
                None => {
                    tracing::debug!(step = step.key, "no earlier step, asking again");
                }
            },
        }
        Ok(())
    }

    /// Nearest step before `from` that is not skipped under the current answers
    pub fn previous_eligible(&self, from: usize) -> Option<usize> {
        self.steps[..from.min(self.steps.len())]
            .iter()
            .rposition(|step| !(step.skip)(&self.answers))
    }
}
