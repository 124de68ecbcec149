use crate::binding::FieldBinding;
use crate::registry::Validators;
use crate::validation::RuleSet;
use serde_json::Value;

/// State of one registered field.
///
/// The controller never sees the form's values map. The owning [`crate::Form`] pushes
/// values in and collects validity out, so every transition happens through an
/// explicit call.
#[derive(Debug, Clone)]
pub struct FieldController {
    name: String,
    default_value: Value,
    value: Value,
    rules: RuleSet,
    valid: bool,
    error: Option<String>,
    touched: bool,
    focused: bool,
}

impl FieldController {
    pub(crate) fn new(name: String, default_value: Value, rules: RuleSet, initial: Value) -> Self {
        Self {
            name,
            default_value,
            value: initial,
            rules,
            valid: true,
            error: None,
            touched: false,
            focused: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Message of the first failing rule, whether or not it is currently shown.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Errors surface only once the user has left the field with a bad value.
    pub fn shows_error(&self) -> bool {
        !self.valid && self.touched && !self.focused
    }

    pub fn helper_text(&self) -> &str {
        match (&self.error, self.shows_error()) {
            (Some(message), true) => message,
            _ => "",
        }
    }

    pub fn binding(&self) -> FieldBinding {
        FieldBinding {
            name: self.name.clone(),
            value: self.value.clone(),
            error: self.shows_error(),
            helper_text: self.helper_text().to_string(),
        }
    }

    /// Re-runs the rules against the current value and returns the new validity.
    pub(crate) fn evaluate(&mut self, validators: &Validators) -> bool {
        self.error = self.rules.validate(&self.value, validators);
        self.valid = self.error.is_none();
        self.valid
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// Takes a value pushed from outside the field. A different value restarts the
    /// field from a clean slate. Returns whether anything changed.
    pub(crate) fn sync_external(&mut self, value: Value) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.touched = false;
        self.focused = false;
        true
    }

    pub(crate) fn focus(&mut self) {
        self.touched = true;
        self.focused = true;
    }

    pub(crate) fn blur(&mut self) {
        self.focused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn email_field(initial: Value) -> FieldController {
        let rules = RuleSet::new().required("required").email("bad e-mail");
        FieldController::new("email".to_string(), json!(""), rules, initial)
    }

    #[test]
    fn test_error_hidden_until_blur() {
        let validators = Validators::new();
        let mut field = email_field(json!("oops"));
        assert!(!field.evaluate(&validators));
        assert_eq!(field.error_message(), Some("bad e-mail"));
        assert!(!field.shows_error(), "untouched fields never show errors");

        field.focus();
        assert!(!field.shows_error());
        assert_eq!(field.helper_text(), "");

        field.blur();
        assert!(field.shows_error());
        assert_eq!(field.helper_text(), "bad e-mail");
        assert!(field.binding().error);
    }

    #[test]
    fn test_valid_value_clears_helper_text() {
        let validators = Validators::new();
        let mut field = email_field(json!(""));
        field.evaluate(&validators);
        field.focus();
        field.blur();
        assert_eq!(field.helper_text(), "required");

        field.set_value(json!("a@b.com"));
        assert!(field.evaluate(&validators));
        assert!(!field.shows_error());
        assert_eq!(field.helper_text(), "");
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_sync_external_resets_flags() {
        let mut field = email_field(json!(""));
        field.focus();
        assert!(field.is_touched() && field.is_focused());

        assert!(!field.sync_external(json!("")), "same value is not a change");
        assert!(field.is_touched());

        assert!(field.sync_external(json!("a@b.com")));
        assert!(!field.is_touched());
        assert!(!field.is_focused());
        assert_eq!(field.value(), &json!("a@b.com"));
    }
}
