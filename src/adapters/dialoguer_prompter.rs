use std::io;
use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::{AppError, Placeholder};
use crate::ports::ValuePrompter;

/// Interactive prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl ValuePrompter for DialoguerPrompter {
    fn collect(&self, placeholder: &Placeholder) -> Result<Option<String>, AppError> {
        if let Some(instruction) = &placeholder.long_instruction {
            println!("{}", instruction);
        }

        let prompt = match &placeholder.short_instruction {
            Some(instruction) => format!("{} ({})", placeholder.prompt, instruction),
            None => placeholder.prompt.clone(),
        };

        let result = Input::<String>::new()
            .with_prompt(prompt)
            .default(placeholder.default.clone())
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Io(io::Error::other(err))),
        }
    }
}
