// File: crates/plot-core/src/term.rs
// Summary: Term parsing and multiplication for distributive-law visuals.

use std::fmt;

use log::debug;

/// One additive factor of an expression, e.g. "-3x" or "5".
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    /// Sign + numeric literal exactly as written ("", "-", "3", "-2.5").
    pub coefficient_raw: String,
    /// Parsed coefficient; `None` when the input did not match the
    /// coefficient/variable shape and is carried as an opaque token.
    pub coefficient_value: Option<f64>,
    pub variable: String,
}

impl Term {
    /// Parse a single term: optional sign, optional numeric literal,
    /// optional variable suffix. Never fails; inputs outside that shape
    /// come back as opaque tokens with `coefficient_value = None`.
    pub fn parse(input: &str) -> Self {
        let s = input.trim();

        let mut rest = s;
        let mut sign = "";
        if let Some(r) = rest.strip_prefix('-') {
            sign = "-";
            rest = r;
        } else if let Some(r) = rest.strip_prefix('+') {
            sign = "+";
            rest = r;
        }

        let literal_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (literal, suffix) = rest.split_at(literal_end);

        let shape_ok = suffix.chars().all(|c| c.is_ascii_alphabetic());
        let value = if literal.is_empty() {
            if sign == "-" { Some(-1.0) } else { Some(1.0) }
        } else {
            literal
                .parse::<f64>()
                .ok()
                .map(|v| if sign == "-" { -v } else { v })
        };

        match (shape_ok, value) {
            (true, Some(v)) => Self {
                coefficient_raw: format!("{sign}{literal}"),
                coefficient_value: Some(v),
                variable: suffix.to_string(),
            },
            _ => {
                debug!("term {input:?} does not fit the coefficient/variable shape; kept as opaque token");
                Self {
                    coefficient_raw: String::new(),
                    coefficient_value: None,
                    variable: s.to_string(),
                }
            }
        }
    }

    /// True when the coefficient was spelled out with digits ("2x", "1x"),
    /// as opposed to implied ("x", "-x").
    pub fn has_explicit_coefficient(&self) -> bool {
        self.coefficient_raw.chars().any(|c| c.is_ascii_digit())
    }

    /// A term with no variable suffix is a pure constant.
    pub fn is_constant(&self) -> bool {
        self.coefficient_value.is_some() && self.variable.is_empty()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coefficient_value {
            None => f.write_str(&self.variable),
            Some(c) if self.variable.is_empty() => write!(f, "{c}"),
            Some(c) if c == 1.0 => f.write_str(&self.variable),
            Some(c) if c == -1.0 => write!(f, "-{}", self.variable),
            Some(c) => write!(f, "{c}{}", self.variable),
        }
    }
}

/// A scale factor applied to a term: a number, or free text (usually a
/// numeric string coming straight from lesson config).
#[derive(Clone, Debug, PartialEq)]
pub enum Multiplier {
    Num(f64),
    Text(String),
}

impl Multiplier {
    /// Numeric value when one exists.
    pub fn value(&self) -> Option<f64> {
        match self {
            Multiplier::Num(v) => Some(*v),
            Multiplier::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Multiplier::Num(v) => write!(f, "{v}"),
            Multiplier::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Multiplier {
    fn from(v: f64) -> Self { Multiplier::Num(v) }
}

impl From<i32> for Multiplier {
    fn from(v: i32) -> Self { Multiplier::Num(v as f64) }
}

impl From<&str> for Multiplier {
    fn from(s: &str) -> Self { Multiplier::Text(s.to_string()) }
}

impl From<String> for Multiplier {
    fn from(s: String) -> Self { Multiplier::Text(s) }
}

/// Operation joining the terms of a distributed expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
}

impl Op {
    pub const fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
        }
    }
}

/// Multiply a single term string by a multiplier and re-serialize it.
///
/// Policies, in priority order: identity for 1, sign toggle for -1, bare
/// variables pick up the multiplier as their coefficient, numeric pairs
/// multiply in floating point, and anything non-numeric degrades to a
/// literal "{multiplier}{term}" join.
pub fn multiply(term: &str, multiplier: impl Into<Multiplier>) -> String {
    multiply_with(term, &multiplier.into())
}

fn multiply_with(term: &str, multiplier: &Multiplier) -> String {
    let t = term.trim();
    match multiplier.value() {
        Some(m) if m == 1.0 => return t.to_string(),
        Some(m) if m == -1.0 => return toggle_sign(t),
        _ => {}
    }

    let parsed = Term::parse(t);
    match (parsed.coefficient_value, multiplier.value()) {
        (Some(c), Some(m)) => {
            if c == 1.0 && !parsed.has_explicit_coefficient() && !parsed.variable.is_empty() {
                format!("{multiplier}{}", parsed.variable)
            } else {
                // f64 Display already drops a trailing ".0" (6.0 prints "6").
                format!("{}{}", c * m, parsed.variable)
            }
        }
        _ => format!("{multiplier}{t}"),
    }
}

fn toggle_sign(term: &str) -> String {
    match term.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{term}"),
    }
}

/// Multiply one term and render it as a continuation segment ("+ 6x",
/// "- 15"): the join operation is merged with the product's sign so the
/// expression reads like a hand-written expansion.
pub fn term_multiply(term: &str, multiplier: impl Into<Multiplier>, op: Op) -> String {
    continuation(term, &multiplier.into(), op)
}

fn continuation(term: &str, multiplier: &Multiplier, op: Op) -> String {
    let product = multiply_with(term, multiplier);
    let (negated, bare) = match product.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, product.as_str()),
    };
    let sign = match (op, negated) {
        (Op::Add, true) => '-',
        (Op::Sub, true) => '+',
        (op, false) => op.symbol(),
    };
    format!("{sign} {bare}")
}

/// Expand `multiplier · (t1 op t2 op ...)` into a display expression.
/// `3 · (2x + -5)` renders as "6x - 15", not "6x + -15".
pub fn distribute(multiplier: impl Into<Multiplier>, terms: &[&str], op: Op) -> String {
    let m = multiplier.into();
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i == 0 {
            out.push_str(&multiply_with(term, &m));
        } else {
            out.push(' ');
            out.push_str(&continuation(term, &m, op));
        }
    }
    out
}

/// Split a whole expression ("2x - 5") into its signed terms. Interior
/// `+`/`-` start a new term and keep the sign; whitespace is ignored.
pub fn parse_expression(expr: &str) -> Vec<Term> {
    let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    let mut terms = Vec::new();
    let mut current = String::new();
    for (i, ch) in compact.chars().enumerate() {
        if (ch == '+' || ch == '-') && i > 0 {
            if !current.is_empty() {
                terms.push(Term::parse(&current));
            }
            current.clear();
            if ch == '-' {
                current.push('-');
            }
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        terms.push(Term::parse(&current));
    }
    terms
}
