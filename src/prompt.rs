//! Interactive prompts
//!
//! Commands talk to the user only through [`Prompter`], so tests can script
//! the answers.

use std::io::{BufRead, Write};

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before an answer was given")]
    Closed,
}

/// Text input, single choice and yes/no questions
#[cfg_attr(test, automock)]
pub trait Prompter {
    /// Ask for a line of text; an empty answer yields `default` when given
    fn input(&self, message: &str, default: Option<String>) -> Result<String, PromptError>;

    /// Ask to pick one of `options`; returns the chosen index
    fn select(
        &self,
        message: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize, PromptError>;

    fn confirm(&self, message: &str) -> Result<bool, PromptError>;
}

/// Ask until `validate` accepts the answer
pub fn input_validated(
    prompter: &dyn Prompter,
    message: &str,
    default: Option<&str>,
    validate: impl Fn(&str) -> bool,
) -> Result<String, PromptError> {
    loop {
        let answer = prompter.input(message, default.map(str::to_string))?;
        if validate(&answer) {
            return Ok(answer);
        }
    }
}

/// Line-based prompter over any reader/writer pair
pub struct TerminalPrompter<R, W> {
    reader: std::cell::RefCell<R>,
    writer: std::cell::RefCell<W>,
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: std::cell::RefCell::new(reader),
            writer: std::cell::RefCell::new(writer),
        }
    }

    fn ask(&self, question: &str) -> Result<String, PromptError> {
        {
            let mut writer = self.writer.borrow_mut();
            write!(writer, "{question} ")?;
            writer.flush()?;
        }

        let mut line = String::new();
        if self.reader.borrow_mut().read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&self, text: &str) -> Result<(), PromptError> {
        writeln!(self.writer.borrow_mut(), "{text}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn input(&self, message: &str, default: Option<String>) -> Result<String, PromptError> {
        let question = match &default {
            Some(default) => format!("? {message} ({default})"),
            None => format!("? {message}"),
        };
        let answer = self.ask(&question)?;
        Ok(match default {
            Some(default) if answer.is_empty() => default,
            _ => answer,
        })
    }

    fn select(
        &self,
        message: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        self.say(&format!("? {message}"))?;
        for (i, option) in options.iter().enumerate() {
            let marker = if i == default { '>' } else { ' ' };
            self.say(&format!("{marker} {}) {option}", i + 1))?;
        }

        loop {
            let answer = self.ask(&format!("  Choice [1-{}] ({})", options.len(), default + 1))?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice - 1),
                _ => self.say("  Please enter one of the listed numbers.")?,
            }
        }
    }

    fn confirm(&self, message: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.ask(&format!("? {message} (y/N)"))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => self.say("  Please answer y or n.")?,
            }
        }
    }
}
