use crate::error::{Result, SdkError};
use std::io::{BufRead, Write};

const EMPTY_NOTICE: &str = "Please enter a value.";

/// Source of interactive answers.
pub trait Prompter {
    /// Ask for a single line of text. `name` identifies the answer in logs;
    /// when `allow_empty` is false the prompt repeats until a non-empty value
    /// is entered.
    fn input(&mut self, name: &str, message: &str, allow_empty: bool) -> Result<String>;
}

/// Line-based prompter over any reader/writer pair (stdin/stdout in the
/// binaries, in-memory buffers in tests).
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_answer(&mut self, name: &str, message: &str) -> Result<String> {
        write!(self.writer, "? {message} ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SdkError::PromptClosed(name.to_string()));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn input(&mut self, name: &str, message: &str, allow_empty: bool) -> Result<String> {
        loop {
            let answer = self.read_answer(name, message)?;
            if allow_empty || !answer.is_empty() {
                tracing::debug!(prompt = name, "answer received");
                return Ok(answer);
            }
            writeln!(self.writer, "{EMPTY_NOTICE}")?;
        }
    }
}
