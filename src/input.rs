//! Line-based console input and output.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use error::GameError;

/// Trait for the player's terminal
pub trait Console {
    /// Print one line
    fn say(&mut self, line: &str);

    /// Show `prompt` and block for one line of input (without the newline).
    fn ask(&mut self, prompt: &str) -> Result<String, GameError>;
}

/// 标准输入输出
pub struct ConsoleIo<R: BufRead = io::StdinLock<'static>, W: Write = io::Stdout> {
    input: R,
    output: W,
}

impl ConsoleIo {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for ConsoleIo<R, W> {
    fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.output, "{line}") {
            tracing::warn!(%err, "console write failed");
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputError("stdin closed".to_string()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Pre-recorded answers; everything shown is kept in a transcript.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| GameError::InputError("no more scripted answers".to_string()))
    }
}
