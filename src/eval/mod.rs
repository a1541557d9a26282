extern crate unindent;

mod number;

use crate::parse::{parse_line, Expr, Input, Op};
use number::{format_number, parse_number};
use unindent::unindent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Print(String),
    Exit,
}

#[derive(Debug)]
pub struct Calculator {
    result: Option<f64>,
}

impl Calculator {
    pub fn new() -> Self {
        Self { result: None }
    }

    pub fn prompt(&self) -> String {
        match self.result {
            Some(n) => format!("[{}] > ", format_number(n)),
            None => String::from("> "),
        }
    }

    pub fn respond(&mut self, line: &str) -> Response {
        match parse_line(line.trim()) {
            Ok(Input::Quit) => Response::Exit,
            Ok(Input::Help) => Response::Print(help_text()),
            Ok(Input::Clear) => {
                self.result = None;
                Response::Print(String::from("Cleared."))
            }
            Ok(Input::Show) => Response::Print(match self.result {
                Some(n) => format!("= {}", format_number(n)),
                None => String::from("No result yet."),
            }),
            Ok(Input::Expr(expr)) => match self.eval(expr) {
                Ok(n) => {
                    self.result = Some(n);
                    Response::Print(format_number(n))
                }
                Err(e) => Response::Print(format!("Error: {}", e)),
            },
            Err(e) => Response::Print(format!("Error: {}", e)),
        }
    }

    fn eval(&self, expr: Expr) -> anyhow::Result<f64> {
        match expr {
            Expr::Full(left, op, right) => {
                let a = parse_number(&left)?;
                let b = parse_number(&right)?;
                apply(op, a, b)
            }
            Expr::Continuation(op, right) => {
                let a = match self.result {
                    Some(n) => n,
                    None => anyhow::bail!(
                        "No previous result. Start with a full expression, e.g. '1 + 2'."
                    ),
                };
                let b = parse_number(&right)?;
                apply(op, a, b)
            }
        }
    }
}

fn apply(op: Op, a: f64, b: f64) -> anyhow::Result<f64> {
    Ok(match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div if b == 0.0 => anyhow::bail!("Division by zero."),
        Op::Div => a / b,
    })
}

pub fn help_text() -> String {
    unindent(
        "
        Calculator REPL
        ---------------
        Usage:
          <num> <op> <num>      Start a new expression e.g. 1 + 2
          <op> <num>            Continue from last result e.g. + 5
          =                     Show current result
          c / clear             Clear and start over
          h / help              Show this help
          q / quit              Exit
        ",
    )
}
