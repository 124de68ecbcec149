use crate::error::FormsError;
use crate::registry::Validators;
use crate::schema::{RuleDefinition, RuleKind};
use serde_json::Value;

/// A single check applied to a field value, with its own configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Fails on null, empty text, `false` and zero.
    Required { message: String },
    /// Fails unless the value is text matching the registry's e-mail pattern.
    Email { message: String },
    MinLength { length: usize, message: String },
    MaxLength { length: usize, message: String },
    /// Presence check for selections: non-empty text, list or object.
    NonEmpty { message: String },
}

impl Rule {
    pub fn from_definition(field: &str, def: &RuleDefinition) -> Result<Self, FormsError> {
        let message = def.message.clone();
        let length = || {
            def.length.ok_or_else(|| FormsError::MissingLength {
                field: field.to_string(),
                rule: def.rule.as_str().to_string(),
            })
        };

        Ok(match def.rule {
            RuleKind::Required => Rule::Required { message },
            RuleKind::Email => Rule::Email { message },
            RuleKind::MinLength => Rule::MinLength { length: length()?, message },
            RuleKind::MaxLength => Rule::MaxLength { length: length()?, message },
            RuleKind::NonEmpty => Rule::NonEmpty { message },
        })
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required { .. } => RuleKind::Required,
            Rule::Email { .. } => RuleKind::Email,
            Rule::MinLength { .. } => RuleKind::MinLength,
            Rule::MaxLength { .. } => RuleKind::MaxLength,
            Rule::NonEmpty { .. } => RuleKind::NonEmpty,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::Email { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::NonEmpty { message } => message,
        }
    }

    /// Returns the rule's message when `value` fails it.
    pub fn check(&self, value: &Value, validators: &Validators) -> Option<&str> {
        let passes = match self {
            Rule::Required { .. } => !is_blank(value),
            Rule::Email { .. } => value.as_str().is_some_and(|s| validators.is_email(s)),
            Rule::MinLength { length, .. } => value_length(value) >= *length,
            Rule::MaxLength { length, .. } => value_length(value) <= *length,
            Rule::NonEmpty { .. } => match value {
                Value::String(s) => !s.is_empty(),
                Value::Array(items) => !items.is_empty(),
                Value::Object(map) => !map.is_empty(),
                _ => false,
            },
        };

        if passes {
            None
        } else {
            Some(self.message())
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn value_length(value: &Value) -> usize {
    match value {
        Value::Null => 0,
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        other => other.to_string().chars().count(),
    }
}

/// Ordered rules of one field. Fixed once the field is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(field: &str, defs: &[RuleDefinition]) -> Result<Self, FormsError> {
        let rules = defs
            .iter()
            .map(|def| Rule::from_definition(field, def))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.with(Rule::Required { message: message.into() })
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.with(Rule::Email { message: message.into() })
    }

    pub fn min_length(self, length: usize, message: impl Into<String>) -> Self {
        self.with(Rule::MinLength { length, message: message.into() })
    }

    pub fn max_length(self, length: usize, message: impl Into<String>) -> Self {
        self.with(Rule::MaxLength { length, message: message.into() })
    }

    pub fn non_empty(self, message: impl Into<String>) -> Self {
        self.with(Rule::NonEmpty { message: message.into() })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Message of the first failing rule. Later rules are not evaluated.
    pub fn validate(&self, value: &Value, validators: &Validators) -> Option<String> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(value, validators))
            .map(str::to_string)
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}
