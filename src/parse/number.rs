use combine::parser::char::digit;
use combine::{many, many1, one_of, optional, satisfy, token};
use combine::{Parser, Stream};

pub fn spaces<I: Stream<Token = char>>() -> impl Parser<I, Output = String> {
    many(satisfy(|c: char| c.is_whitespace()))
}

// A signed number token: sign, padding, digits, optional fraction. The
// output is the matched text; whitespace removal and the float conversion
// belong to the evaluator.
pub fn number<I: Stream<Token = char>>() -> impl Parser<I, Output = String> {
    (
        optional(one_of("+-".chars())),
        spaces(),
        many1(digit()),
        optional(token('.').with(many1(digit()))),
    )
        .map(
            |(sign, pad, int, frac): (Option<char>, String, String, Option<String>)| {
                let mut out = String::new();
                out.extend(sign);
                out.push_str(&pad);
                out.push_str(&int);
                if let Some(frac) = frac {
                    out.push('.');
                    out.push_str(&frac);
                }
                out
            },
        )
}
