extern crate rustyline;

use super::Reader;
use rustyline::{error::ReadlineError, Editor};

#[derive(Debug)]
pub struct PromptReader(Editor<()>);

impl Reader for PromptReader {
    // Ctrl-C and Ctrl-D both end the session, so either closes the stream.
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.0.readline(prompt) {
            Ok(s) => Ok(Some(s)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl PromptReader {
    pub fn new() -> Self {
        Self(Editor::new())
    }
}
