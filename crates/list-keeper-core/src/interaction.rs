//! Interaction provider
//!
//! Prompts and confirmations the controller needs from the user.

use std::collections::VecDeque;

pub trait Interaction {
    /// Ask for a line of text. `None` means the user dismissed the prompt.
    fn prompt_text(&mut self, message: &str, default: Option<&str>) -> Option<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;
}

/// Answers from pre-queued responses and records what was asked.
///
/// An exhausted queue behaves like a user who dismisses every dialog.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    prompts: VecDeque<Option<String>>,
    confirms: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.prompts.push_back(Some(text.into()));
        self
    }

    pub fn dismiss(mut self) -> Self {
        self.prompts.push_back(None);
        self
    }

    pub fn confirm_with(mut self, yes: bool) -> Self {
        self.confirms.push_back(yes);
        self
    }

    /// Messages shown so far, prompt defaults appended after ` | `
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt_text(&mut self, message: &str, default: Option<&str>) -> Option<String> {
        match default {
            Some(default) => self.asked.push(format!("{} | {}", message, default)),
            None => self.asked.push(message.to_string()),
        }
        self.prompts.pop_front().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirms.pop_front().unwrap_or(false)
    }
}
