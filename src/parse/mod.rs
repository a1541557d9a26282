extern crate combine;

mod expr;
mod number;

pub use expr::{Expr, Op};

use combine::EasyParser;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Help,
    Clear,
    Show,
    Expr(Expr),
}

pub fn parse_line(line: &str) -> anyhow::Result<Input> {
    Ok(match line.to_lowercase().as_str() {
        "q" | "quit" => Input::Quit,
        "h" | "help" => Input::Help,
        "c" | "clear" => Input::Clear,
        "=" => Input::Show,
        _ => Input::Expr(parse_expr(line)?),
    })
}

fn parse_expr(line: &str) -> anyhow::Result<Expr> {
    match Expr::parse().easy_parse(line) {
        Ok((expr, rem)) if rem.len() == 0 => Ok(expr),
        _ => anyhow::bail!("Unrecognized input. Type 'h' for help."),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Expr, Input, Op};

    fn full(left: &str, op: Op, right: &str) -> Input {
        Input::Expr(Expr::Full(left.to_string(), op, right.to_string()))
    }

    fn cont(op: Op, right: &str) -> Input {
        Input::Expr(Expr::Continuation(op, right.to_string()))
    }

    #[test]
    fn commands_match_the_whole_line_case_insensitively() {
        let tests = [
            ("q", Input::Quit),
            ("quit", Input::Quit),
            ("Q", Input::Quit),
            ("QUIT", Input::Quit),
            ("h", Input::Help),
            ("Help", Input::Help),
            ("c", Input::Clear),
            ("CLEAR", Input::Clear),
            ("=", Input::Show),
        ];

        for (line, expected) in tests.iter() {
            assert_eq!(parse_line(line).unwrap(), *expected);
        }
    }

    #[test]
    fn full_expressions() {
        let tests = [
            ("1 + 2", full("1", Op::Add, "2")),
            ("1+2", full("1", Op::Add, "2")),
            ("10 / 4", full("10", Op::Div, "4")),
            ("3.5*2", full("3.5", Op::Mul, "2")),
            ("7 - 3", full("7", Op::Sub, "3")),
            ("-1 + -2", full("-1", Op::Add, "-2")),
            ("1 - -2", full("1", Op::Sub, "-2")),
            ("+2.5 * -0.5", full("+2.5", Op::Mul, "-0.5")),
        ];

        for (line, expected) in tests.iter() {
            assert_eq!(parse_line(line).unwrap(), *expected);
        }
    }

    #[test]
    fn continuations() {
        let tests = [
            ("+ 5", cont(Op::Add, "5")),
            ("+5", cont(Op::Add, "5")),
            ("* 3", cont(Op::Mul, "3")),
            ("/2", cont(Op::Div, "2")),
            ("- 0.5", cont(Op::Sub, "0.5")),
            ("- -5", cont(Op::Sub, "-5")),
            ("--5", cont(Op::Sub, "-5")),
        ];

        for (line, expected) in tests.iter() {
            assert_eq!(parse_line(line).unwrap(), *expected);
        }
    }

    // The full form cannot match a bare number, so "-5" falls through to
    // the continuation alternative.
    #[test]
    fn a_lone_signed_number_is_a_continuation() {
        assert_eq!(parse_line("-5").unwrap(), cont(Op::Sub, "5"));
    }

    #[test]
    fn number_tokens_keep_padding_between_sign_and_digits() {
        let tests = [
            ("- 5 + 2", full("- 5", Op::Add, "2")),
            ("1 + -  2", full("1", Op::Add, "-  2")),
            ("+ 5", cont(Op::Add, "5")),
        ];

        for (line, expected) in tests.iter() {
            assert_eq!(parse_line(line).unwrap(), *expected);
        }
    }

    #[test]
    fn anything_else_is_rejected() {
        let tests = [
            "xyz", "1 +", "+", "1 + 2 + 3", "1.2.3", "1 & 2", "one + two", "= 5", "q q", "1 . 2",
            "2.", ".5", "1 + 2.", "+ +", "5 5",
        ];

        for line in tests.iter() {
            assert!(parse_line(line).is_err(), "accepted {:?}", line);
        }
    }
}
