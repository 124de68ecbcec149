pub use ox_forms::{
    Binder, ChangeEvent, FieldBinding, FieldController, Form, FormValues, FormsError, ModuleSchema, Rule, RuleSet,
    SubmitError, Submitter, Toast, ToastVariant, Validators,
};
pub use ox_listing::{console_form, console_forms, edit_listing_form, listing_input, new_listing_form, ListingInput};

/// Sets up `env_logger` for the console, honouring `RUST_LOG`. Calling it twice is harmless.
pub fn init_logging() {
    if env_logger::Builder::from_default_env().try_init().is_ok() {
        log::debug!("Logging initialised");
    }
}
