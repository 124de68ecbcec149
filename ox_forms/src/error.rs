use thiserror::Error;

/// Errors raised while turning form definitions into live forms.
///
/// Validation failures are never errors: they live on the field as a message.
#[derive(Debug, Error)]
pub enum FormsError {
    #[error("rule '{rule}' on field '{field}' requires a 'length' parameter")]
    MissingLength { field: String, rule: String },

    #[error("form '{form}' not found in module '{module}'")]
    UnknownForm { module: String, form: String },

    #[error("invalid e-mail pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to parse YAML form definitions: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON form definitions: {0}")]
    Json(#[from] serde_json::Error),
}
