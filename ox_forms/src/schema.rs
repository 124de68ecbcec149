use crate::error::FormsError;
use crate::form::FormValues;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ModuleSchema {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub forms: Vec<FormDefinition>,
}

impl ModuleSchema {
    pub fn from_yaml_str(content: &str) -> Result<Self, FormsError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, FormsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a module from disk. `.json` files are read as JSON, anything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form definitions from {:?}", path))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let module = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
        .with_context(|| format!("Failed to parse form definitions in {:?}", path))?;

        log::debug!("Loaded module '{}' with {} forms from {:?}", module.name, module.forms.len(), path);
        Ok(module)
    }

    pub fn form(&self, id: &str) -> Result<&FormDefinition, FormsError> {
        self.forms
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| FormsError::UnknownForm {
                module: self.name.clone(),
                form: id.to_string(),
            })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FormDefinition {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Values the form starts with, before any field is registered.
    #[serde(default)]
    pub initial_values: FormValues,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub input_type: InputType,
    /// Fallback used when the form's values carry nothing for this field.
    #[serde(default = "empty_string")]
    pub default_value: Value,
    /// Checked in declaration order; the first failure wins.
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl Default for FieldDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            input_type: InputType::default(),
            default_value: empty_string(),
            rules: Vec::new(),
        }
    }
}

fn empty_string() -> Value {
    Value::String(String::new())
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Checkbox,
    Select,
    Multiselect,
    Hidden,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    #[serde(rename = "isRequired")]
    Required,
    #[serde(rename = "isEmail")]
    Email,
    #[serde(rename = "isMinLength")]
    MinLength,
    #[serde(rename = "isMaxLength")]
    MaxLength,
    #[serde(rename = "isEmpty")]
    NonEmpty,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Required => "isRequired",
            RuleKind::Email => "isEmail",
            RuleKind::MinLength => "isMinLength",
            RuleKind::MaxLength => "isMaxLength",
            RuleKind::NonEmpty => "isEmpty",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RuleDefinition {
    pub rule: RuleKind,
    pub message: String,
    /// Only meaningful for the length rules, where it is mandatory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}
