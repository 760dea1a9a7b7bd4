//! Recording collaborators shared by the unit tests.

use crate::{Confirmer, ImportError, Reporter, Result, Severity};
use std::cell::RefCell;

/// Same shape as the one in tests/common/mod.rs.
#[derive(Default)]
pub struct RecordingReporter {
    pub lines: RefCell<Vec<(Severity, String)>>,
}

impl RecordingReporter {
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.lines.borrow_mut().push((severity, message.to_string()));
    }
}

/// Answers every yes/no question with `answer` and hands out `values` in
/// order. An empty value selects the prompt's default.
pub struct ScriptedConfirmer {
    answer: bool,
    values: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self::with_values(answer, &[])
    }

    pub fn with_values(answer: bool, values: &[&str]) -> Self {
        Self {
            answer,
            values: RefCell::new(values.iter().rev().map(|v| v.to_string()).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer
    }

    fn prompt_value(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match self.values.borrow_mut().pop() {
            Some(value) if value.is_empty() => default
                .map(str::to_string)
                .ok_or_else(|| ImportError::MissingValue(prompt.to_string())),
            Some(value) => Ok(value),
            None => Err(ImportError::MissingValue(prompt.to_string())),
        }
    }
}
