use super::number::{number, spaces};

use combine::{attempt, choice, one_of};
use combine::{Parser, Stream};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn parse<I: Stream<Token = char>>() -> impl Parser<I, Output = Self> {
        one_of("+-*/".chars()).map(|c| match c {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            _ => unreachable!(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Full(String, Op, String),
    Continuation(Op, String),
}

impl Expr {
    pub fn parse<I: Stream<Token = char>>() -> impl Parser<I, Output = Self> {
        choice((
            attempt((number(), spaces(), Op::parse(), spaces(), number()))
                .map(|(left, _, op, _, right)| Self::Full(left, op, right)),
            (Op::parse(), spaces(), number()).map(|(op, _, right)| Self::Continuation(op, right)),
        ))
    }
}
