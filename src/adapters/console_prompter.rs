//! Prompter adapters: interactive console input and scripted answers.

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use crate::{Result, error::Error, ports::Prompter};

/// Reads answers line by line from `input`, writing prompts to `output`.
///
/// Yes/no questions only accept `true` or `false` (case-insensitive) and
/// are asked again until one of them is given. Text questions are asked
/// again while the answer is blank.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read answer".to_string(),
            source,
        })?;
        if read == 0 {
            return Err(Error::Io {
                operation: "read answer".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask_bool(&mut self, message: &str) -> Result<bool> {
        loop {
            let answer = self.read_answer(&format!("{message} (true/false)"))?;
            match answer.to_lowercase().as_str() {
                "true" => return Ok(true),
                "false" => return Ok(false),
                _ => writeln!(self.output, "Please answer true or false.")?,
            }
        }
    }

    fn ask_text(&mut self, message: &str) -> Result<String> {
        loop {
            let answer = self.read_answer(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "Please enter text in this field.")?;
        }
    }
}

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scripted {
    Bool(bool),
    Text(String),
}

/// Replays a fixed queue of answers. Used to drive rounds in tests.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Scripted>,
    /// Every message that was asked, in order
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn yes(mut self) -> Self {
        self.answers.push_back(Scripted::Bool(true));
        self
    }

    pub fn no(mut self) -> Self {
        self.answers.push_back(Scripted::Bool(false));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.answers.push_back(Scripted::Text(text.into()));
        self
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Result<Scripted> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or_else(|| Error::Io {
            operation: format!("answer '{message}'"),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"),
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_bool(&mut self, message: &str) -> Result<bool> {
        match self.next(message)? {
            Scripted::Bool(answer) => Ok(answer),
            Scripted::Text(text) => Err(Error::InvalidConfiguration {
                message: format!("script gave text '{text}' for yes/no question '{message}'"),
            }),
        }
    }

    fn ask_text(&mut self, message: &str) -> Result<String> {
        match self.next(message)? {
            Scripted::Text(text) => Ok(text),
            Scripted::Bool(answer) => Err(Error::InvalidConfiguration {
                message: format!("script gave {answer} for text question '{message}'"),
            }),
        }
    }
}
