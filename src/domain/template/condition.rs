//! `{{if ...}}` condition parsing and evaluation.

use super::modifier::parse_number_prefix;
use super::registry::{OverrideData, VariableRegistry};

/// A classified condition. Operands are trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition<'a> {
    /// `name`, true when the value is set (see [`VariableRegistry::is_truthy`])
    Truthy(&'a str),
    /// `name > literal`
    GreaterThan(&'a str, &'a str),
    /// `name < literal`
    LessThan(&'a str, &'a str),
    /// `name == literal`, compared as strings
    Equals(&'a str, &'a str),
}

impl<'a> Condition<'a> {
    /// Classify by the first operator found, checked in the order `>`, `<`, `==`.
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.trim();

        if let Some((left, right)) = raw.split_once('>') {
            Condition::GreaterThan(left.trim(), right.trim())
        } else if let Some((left, right)) = raw.split_once('<') {
            Condition::LessThan(left.trim(), right.trim())
        } else if let Some((left, right)) = raw.split_once("==") {
            Condition::Equals(left.trim(), strip_quotes(right.trim()))
        } else {
            Condition::Truthy(raw)
        }
    }

    /// The variable the condition reads
    pub fn variable(&self) -> &'a str {
        match *self {
            Condition::Truthy(name)
            | Condition::GreaterThan(name, _)
            | Condition::LessThan(name, _)
            | Condition::Equals(name, _) => name,
        }
    }

    /// Evaluate against `registry`, with `data` taking precedence.
    ///
    /// Numeric comparisons involving a non-numeric side are false.
    pub fn evaluate(&self, registry: &VariableRegistry, data: &OverrideData) -> bool {
        match *self {
            Condition::Truthy(name) => registry.is_truthy(name, data),
            Condition::GreaterThan(name, literal) => {
                parse_number_prefix(&registry.resolve(name, data)) > parse_number_prefix(literal)
            }
            Condition::LessThan(name, literal) => {
                parse_number_prefix(&registry.resolve(name, data)) < parse_number_prefix(literal)
            }
            Condition::Equals(name, literal) => registry.resolve(name, data) == literal,
        }
    }
}

/// Strip one layer of matching single or double quotes
fn strip_quotes(literal: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = literal
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    literal
}
