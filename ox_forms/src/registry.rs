use crate::error::FormsError;
use lazy_static::lazy_static;
use regex::Regex;

/// Pattern used by the standard `isEmail` check: something, an `@`, a domain with a dot.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

lazy_static! {
    static ref DEFAULT_EMAIL: Regex =
        Regex::new(DEFAULT_EMAIL_PATTERN).expect("default e-mail pattern compiles");
}

/// Validator registry handed to a form at construction.
///
/// Rules carry their own configuration; the registry holds what is shared between
/// every field of a form, such as the e-mail pattern.
#[derive(Debug, Clone)]
pub struct Validators {
    email: Regex,
}

impl Validators {
    pub fn new() -> Self {
        Self {
            email: DEFAULT_EMAIL.clone(),
        }
    }

    pub fn with_email_pattern(pattern: &str) -> Result<Self, FormsError> {
        Ok(Self {
            email: Regex::new(pattern)?,
        })
    }

    pub fn is_email(&self, candidate: &str) -> bool {
        self.email.is_match(candidate)
    }
}

impl Default for Validators {
    fn default() -> Self {
        Self::new()
    }
}
