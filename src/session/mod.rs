mod prompt;

pub use prompt::PromptReader;

use crate::eval::{help_text, Calculator, Response};

pub trait Reader {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

pub struct Session<T> {
    reader: T,
    calc: Calculator,
}

impl<T: Reader> Session<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            calc: Calculator::new(),
        }
    }

    pub fn next(&mut self) -> anyhow::Result<bool> {
        let line = match self.reader.next_line(&self.calc.prompt()) {
            Ok(Some(s)) => s,
            Ok(None) => {
                println!("\nExiting");
                return Ok(false);
            }
            Err(e) => {
                eprintln!("Readline Error: {}", e);
                return Ok(true);
            }
        };

        if line.trim().is_empty() {
            return Ok(true);
        }

        match self.calc.respond(&line) {
            Response::Print(reply) => {
                println!("{}", reply);
                Ok(true)
            }
            Response::Exit => {
                println!("Exiting");
                Ok(false)
            }
        }
    }

    pub fn all(&mut self) -> anyhow::Result<()> {
        println!("{}", help_text());
        while self.next()? {}
        Ok(())
    }
}
