use ox_forms::{ChangeEvent, Form, FormsError, ModuleSchema, Validators};
use serde_json::json;
use std::fs;

const AUTH_YAML: &str = r#"
name: auth
forms:
  - id: reset_password
    title: Reset password
    fields:
      - name: code
        rules:
          - rule: isRequired
            message: The field is required
      - name: password
        input_type: password
        rules:
          - rule: isRequired
            message: The field is required
          - rule: isMinLength
            length: 8
            message: The passwords must be at least 8 characters long
"#;

#[test]
fn test_load_yaml_module_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("auth.yaml");
    fs::write(&path, AUTH_YAML).unwrap();

    let module = ModuleSchema::load(&path).unwrap();
    assert_eq!(module.name, "auth");
    assert_eq!(module.form("reset_password").unwrap().fields.len(), 2);
}

#[test]
fn test_load_json_module_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("confirm.json");
    fs::write(
        &path,
        r#"{"name":"auth","forms":[{"id":"confirm_sign_up","initial_values":{"email":"a@b.com"},"fields":[{"name":"email","rules":[{"rule":"isEmail","message":"Invalid e-mail format"}]}]}]}"#,
    )
    .unwrap();

    let module = ModuleSchema::load(&path).unwrap();
    let mut form = Form::from_definition(module.form("confirm_sign_up").unwrap(), Validators::new()).unwrap();
    form.mount();
    assert!(form.is_valid());
    assert_eq!(form.binding("email").unwrap().value, json!("a@b.com"));
}

#[test]
fn test_load_reports_path_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "forms: [ { id: x, fields: [ { name: a, rules: [ { rule: isNope, message: m } ] } ] } ]").unwrap();

    let err = ModuleSchema::load(&path).unwrap_err();
    assert!(format!("{:?}", err).contains("broken.yaml"));

    let missing = ModuleSchema::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(format!("{}", missing).contains("Failed to read form definitions"));
}

#[test]
fn test_form_from_definition_runs_rules() {
    let module = ModuleSchema::from_yaml_str(AUTH_YAML).unwrap();
    let mut form = Form::from_definition(module.form("reset_password").unwrap(), Validators::new()).unwrap();
    form.mount();
    assert!(!form.is_valid());

    form.change("code", ChangeEvent::text("123456"));
    form.focus("password");
    form.change("password", ChangeEvent::text("short"));
    form.blur("password");

    let binding = form.binding("password").unwrap();
    assert!(binding.error);
    assert_eq!(binding.helper_text, "The passwords must be at least 8 characters long");

    form.focus("password");
    form.change("password", ChangeEvent::text("long enough"));
    assert!(form.is_valid());
    assert_eq!(form.values().get("code"), Some(&json!("123456")));
}

#[test]
fn test_length_rule_without_length_fails_to_build() {
    let yaml = r#"
forms:
  - id: sign_up
    fields:
      - name: password
        rules:
          - rule: isMinLength
            message: too short
"#;
    let module = ModuleSchema::from_yaml_str(yaml).unwrap();
    let err = Form::from_definition(module.form("sign_up").unwrap(), Validators::new()).unwrap_err();
    assert!(matches!(err, FormsError::MissingLength { ref field, .. } if field == "password"));
}
