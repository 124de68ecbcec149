use crate::form::FormValues;
use crate::schema::InputType;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// What a presentation layer needs to draw one field.
///
/// The handlers of the binding contract (`onChange`, `onFocus`, `onBlur`) are
/// [`crate::Form::change`], [`crate::Form::focus`] and [`crate::Form::blur`], called
/// with this binding's `name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldBinding {
    pub name: String,
    pub value: Value,
    pub error: bool,
    #[serde(rename = "helperText")]
    pub helper_text: String,
}

/// An edit coming from an input element.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    pub value: Value,
    pub checked: bool,
    pub input_type: InputType,
}

impl ChangeEvent {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Value::String(value.into()),
            checked: false,
            input_type: InputType::Text,
        }
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            value: Value::Null,
            checked,
            input_type: InputType::Checkbox,
        }
    }

    /// A structured value, e.g. a multi-select list.
    pub fn value(value: Value) -> Self {
        Self {
            value,
            checked: false,
            input_type: InputType::Select,
        }
    }

    /// Checkboxes report their checked flag rather than their text.
    pub fn into_value(self) -> Value {
        match self.input_type {
            InputType::Checkbox => Value::Bool(self.checked),
            _ => self.value,
        }
    }
}

/// Maps records to form values for editing and back for submission.
pub trait Binder<T> {
    /// Form values populated from an existing record.
    fn hydrate(&self, record: &T) -> Result<FormValues>;

    /// Builds a record out of the form's current values.
    fn extract(&self, values: &FormValues) -> Result<T>;
}
