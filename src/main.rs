extern crate anyhow;

mod eval;
mod parse;
mod session;

use session::{PromptReader, Session};

fn main() {
    Session::new(PromptReader::new()).all().unwrap_or_else(|e| {
        eprintln!("{}", e);
    })
}
