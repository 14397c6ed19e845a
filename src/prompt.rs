//! User interaction for answers the command line did not provide.

use crate::error::Result;
use dialoguer::{FuzzySelect, Input, Select};

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for free text, returning `default` on empty input.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks to pick one of `choices`, returning its index.
    fn select(&self, prompt: &str, choices: &[String], default: usize) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn select(&self, prompt: &str, choices: &[String], default: usize) -> Result<usize> {
        let selection = if choices.len() > 5 {
            FuzzySelect::new()
                .with_prompt(prompt)
                .items(choices)
                .default(default)
                .interact()?
        } else {
            Select::new()
                .with_prompt(prompt)
                .items(choices)
                .default(default)
                .interact()?
        };
        Ok(selection)
    }
}
