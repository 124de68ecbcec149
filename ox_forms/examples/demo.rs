use ox_forms::{ChangeEvent, Form, ModuleSchema, Submitter, Toast, ToastVariant, Validators};

const SIGN_IN: &str = r#"
name: demo
forms:
  - id: sign_in
    title: Sign in
    fields:
      - name: email
        input_type: email
        rules:
          - rule: isRequired
            message: The field is required
          - rule: isEmail
            message: Invalid e-mail format
      - name: password
        input_type: password
        rules:
          - rule: isRequired
            message: The field is required
"#;

fn print_form(form: &Form) {
    for name in ["email", "password"] {
        if let Some(binding) = form.binding(name) {
            println!("  {:<9} value={} error={} helperText={:?}", name, binding.value, binding.error, binding.helper_text);
        }
    }
    println!("  valid={} invalid={:?}", form.is_valid(), form.invalid_fields());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let module = ModuleSchema::from_yaml_str(SIGN_IN)?;
    let mut form = Form::from_definition(module.form("sign_in")?, Validators::new())?;
    form.mount();
    println!("Mounted:");
    print_form(&form);

    form.focus("email");
    form.change("email", ChangeEvent::text("someone@"));
    println!("Typing an address:");
    print_form(&form);

    form.blur("email");
    println!("After leaving the field:");
    print_form(&form);

    form.focus("email");
    form.change("email", ChangeEvent::text("someone@example.com"));
    form.blur("email");
    form.focus("password");
    form.change("password", ChangeEvent::text("hunter22"));
    form.blur("password");
    println!("Filled in:");
    print_form(&form);

    let submitter = Submitter::new();
    let mut toast = Toast::new();
    let email = form.values()["email"].clone();
    let result = submitter
        .submit(|| async move {
            println!("Submitting sign in for {}", email);
            Err::<(), _>("Sign in failed")
        })
        .await;

    if result.is_err() {
        toast.show("Sign in failed", ToastVariant::Error);
    }
    println!("Toast: {:?}, submitting={}", toast, submitter.is_submitting());
    Ok(())
}
