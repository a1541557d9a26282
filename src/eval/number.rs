use anyhow::Context;

// Token text is caller-supplied and must not be assumed grammar-vetted.
pub fn parse_number(token: &str) -> anyhow::Result<f64> {
    let cleaned: String = token.split_whitespace().collect();
    cleaned
        .parse::<f64>()
        .context(format!("Not a valid number: '{}'", token))
}

pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        String::from("0")
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}
