//! Form definitions bundled with the console and ready-made forms built from them.

use crate::defaults::listing_defaults;
use crate::model::{ListingBinder, ListingInput};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::debug;
use ox_forms::{Binder, Form, FormsError, ModuleSchema, Validators};

pub const SIGN_IN: &str = "sign_in";
pub const SIGN_UP: &str = "sign_up";
pub const FORGOT_PASSWORD: &str = "forgot_password";
pub const RESET_PASSWORD: &str = "reset_password";
pub const CONFIRM_SIGN_UP: &str = "confirm_sign_up";
pub const LISTING: &str = "listing";

const CONSOLE_FORMS: &str = include_str!("../forms/console.yaml");

pub fn console_forms() -> Result<ModuleSchema, FormsError> {
    ModuleSchema::from_yaml_str(CONSOLE_FORMS)
}

/// A mounted form for one of the bundled definitions, starting empty.
pub fn console_form(id: &str) -> Result<Form, FormsError> {
    let module = console_forms()?;
    let mut form = Form::from_definition(module.form(id)?, Validators::default())?;
    form.mount();
    Ok(form)
}

/// The listing form for a new listing, seeded with the listing defaults.
pub fn new_listing_form(now: DateTime<Utc>) -> Result<Form> {
    let mut form = console_form(LISTING)?;
    form.set_values(listing_defaults(now));
    Ok(form)
}

/// The listing form for editing a stored listing.
pub fn edit_listing_form(id: &str, record: &ListingInput) -> Result<Form> {
    let values = ListingBinder
        .hydrate_with_id(id, record)
        .with_context(|| format!("Failed to load listing '{}' into the form", id))?;

    let mut form = console_form(LISTING)?;
    form.set_values(values);
    debug!("Editing listing '{}', form valid: {}", id, form.is_valid());
    Ok(form)
}

/// Submit payload for the listing form.
pub fn listing_input(form: &Form) -> Result<ListingInput> {
    ListingBinder.extract(form.values())
}
