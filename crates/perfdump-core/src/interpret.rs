//! Heuristic glosses for raw parameter bytes.
//!
//! An [`Interpreter`] is an ordered rule list; the first rule whose name
//! matcher accepts the field decides the result, even when its formatter
//! declines the value.

use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};

/// Performance key mode
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum KeyMode {
    Layer = 0,
    Zone = 1,
    Single = 2,
}

impl KeyMode {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

/// Which field names a rule applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    Exact(String),
    Contains(String),
}

impl NameMatch {
    pub fn matches(&self, field_name: &str) -> bool {
        match self {
            Self::Exact(name) => field_name == name,
            Self::Contains(fragment) => field_name.contains(fragment.as_str()),
        }
    }
}

/// Formats a raw byte, or declines it with `None`.
pub type Formatter = fn(u8) -> Option<String>;

#[derive(Debug, Clone)]
pub struct Rule {
    pub matcher: NameMatch,
    pub format: Formatter,
}

impl Rule {
    pub fn exact(name: &str, format: Formatter) -> Self {
        Self {
            matcher: NameMatch::Exact(name.to_string()),
            format,
        }
    }

    pub fn contains(fragment: &str, format: Formatter) -> Self {
        Self {
            matcher: NameMatch::Contains(fragment.to_string()),
            format,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Interpreter {
    rules: Vec<Rule>,
}

impl Interpreter {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules for performance common params
    pub fn performance_common() -> Self {
        Self::new(vec![
            Rule::exact("keymode", |v| KeyMode::from_u8(v).map(|m| m.to_string())),
            Rule::contains("level", |v| Some(format!("{v}/127"))),
            Rule::contains("type", |v| Some(format!("type {v}"))),
            Rule::contains("reserve", |v| Some(format!("voices: {v}"))),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn interpret(&self, field_name: &str, raw_value: u8) -> Option<String> {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(field_name))
            .and_then(|rule| (rule.format)(raw_value))
    }
}
