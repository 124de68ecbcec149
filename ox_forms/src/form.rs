use crate::binding::{ChangeEvent, FieldBinding};
use crate::error::FormsError;
use crate::field::FieldController;
use crate::registry::Validators;
use crate::schema::FormDefinition;
use crate::validation::RuleSet;
use log::{debug, trace};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// Field name to current value. Schema-less at this layer.
pub type FormValues = Map<String, Value>;

/// Coordinates the fields of one screen.
///
/// Owns the values map, every field controller and the set of invalid field names.
/// All handlers run to completion before returning, so `is_valid` read after any call
/// already reflects it.
#[derive(Debug)]
pub struct Form {
    values: FormValues,
    fields: HashMap<String, FieldController>,
    invalid: HashSet<String>,
    mounted: bool,
    /// Cleared by `suppress_validation`, restored by the next focus.
    validate: bool,
    validators: Validators,
}

impl Form {
    pub fn new() -> Self {
        Self::with_values(FormValues::new())
    }

    pub fn with_values(values: FormValues) -> Self {
        Self::with_validators(values, Validators::default())
    }

    pub fn with_validators(values: FormValues, validators: Validators) -> Self {
        Self {
            values,
            fields: HashMap::new(),
            invalid: HashSet::new(),
            mounted: false,
            validate: true,
            validators,
        }
    }

    /// Builds a form with every field of `def` registered. The form still has to be
    /// mounted before it can report itself valid.
    pub fn from_definition(def: &FormDefinition, validators: Validators) -> Result<Self, FormsError> {
        let mut form = Self::with_validators(def.initial_values.clone(), validators);
        for field in &def.fields {
            let rules = RuleSet::from_definitions(&field.name, &field.rules)?;
            form.register(field.name.as_str(), field.default_value.clone(), rules);
        }
        debug!("Built form '{}' with {} fields", def.id, form.fields.len());
        Ok(form)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Replaces the whole values map in one step.
    ///
    /// Fields whose resolved value differs from what they hold take the new value,
    /// lose their touched/focused flags and are validated again. Fields whose value
    /// did not move keep their state.
    pub fn set_values(&mut self, values: FormValues) {
        self.values = values;

        let mut reset = 0usize;
        for (name, field) in self.fields.iter_mut() {
            let incoming = resolve(&self.values, name, field.default_value());
            if field.sync_external(incoming) {
                let valid = field.evaluate(&self.validators);
                track(&mut self.invalid, name, valid);
                reset += 1;
            }
        }
        debug!("Replaced form values, {} fields reset", reset);
    }

    /// Merge-then-replace: applies `edit` to a copy of the values and installs it.
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FormValues),
    {
        let mut next = self.values.clone();
        edit(&mut next);
        self.set_values(next);
    }

    /// Registers a field and validates it straight away.
    ///
    /// The field starts from `values[name]` when present, else from `default_value`.
    /// Registering a name twice replaces the earlier field.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        default_value: impl Into<Value>,
        rules: impl Into<RuleSet>,
    ) -> FieldBinding {
        let name = name.into();
        let default_value = default_value.into();
        let initial = resolve(&self.values, &name, &default_value);

        let mut field = FieldController::new(name.clone(), default_value, rules.into(), initial);
        let valid = field.evaluate(&self.validators);
        let binding = field.binding();

        if self.fields.insert(name.clone(), field).is_some() {
            debug!("Field '{}' registered again, replacing previous registration", name);
        } else {
            debug!("Registered field '{}'", name);
        }
        track(&mut self.invalid, &name, valid);
        binding
    }

    /// Drops a field; it no longer counts towards the form's validity.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.invalid.remove(name);
        self.fields.remove(name).is_some()
    }

    /// Activates the form. Until then `is_valid` is false whatever the fields say.
    pub fn mount(&mut self) {
        if !self.mounted {
            self.mounted = true;
            debug!(
                "Form mounted with {} fields, {} invalid",
                self.fields.len(),
                self.invalid.len()
            );
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_valid(&self) -> bool {
        self.mounted && self.invalid.is_empty()
    }

    pub fn invalid_fields(&self) -> &HashSet<String> {
        &self.invalid
    }

    pub fn field(&self, name: &str) -> Option<&FieldController> {
        self.fields.get(name)
    }

    pub fn binding(&self, name: &str) -> Option<FieldBinding> {
        self.fields.get(name).map(FieldController::binding)
    }

    /// Names of the registered fields, in no particular order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// User edit of one field. Returns false when no such field is registered.
    pub fn change(&mut self, name: &str, event: ChangeEvent) -> bool {
        let Some(field) = self.fields.get_mut(name) else {
            debug!("Change for unregistered field '{}' ignored", name);
            return false;
        };

        let value = event.into_value();
        field.set_value(value.clone());
        let valid = field.evaluate(&self.validators);
        self.values.insert(name.to_string(), value);
        track(&mut self.invalid, name, valid);
        true
    }

    pub fn focus(&mut self, name: &str) -> bool {
        let Some(field) = self.fields.get_mut(name) else {
            return false;
        };

        field.focus();
        if self.validate {
            let valid = field.evaluate(&self.validators);
            track(&mut self.invalid, name, valid);
        }
        self.validate = true;
        trace!("Field '{}' focused", name);
        true
    }

    pub fn blur(&mut self, name: &str) -> bool {
        let Some(field) = self.fields.get_mut(name) else {
            return false;
        };

        if self.validate {
            field.blur();
            trace!("Field '{}' blurred", name);
        } else {
            trace!("Field '{}' blurred while validation is suppressed", name);
        }
        true
    }

    /// Keeps the next blur from revealing errors, e.g. when a secondary link is
    /// pressed. Errors already on screen stay. The next focus lifts the suppression.
    pub fn suppress_validation(&mut self) {
        self.validate = false;
    }

    pub fn is_validation_suppressed(&self) -> bool {
        !self.validate
    }

    pub fn validators(&self) -> &Validators {
        &self.validators
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(values: &FormValues, name: &str, default_value: &Value) -> Value {
    match values.get(name) {
        Some(value) if !value.is_null() => value.clone(),
        _ => default_value.clone(),
    }
}

fn track(invalid: &mut HashSet<String>, name: &str, valid: bool) {
    if valid {
        if invalid.remove(name) {
            debug!("Field '{}' became valid", name);
        }
    } else if !invalid.contains(name) {
        invalid.insert(name.to_string());
        debug!("Field '{}' became invalid", name);
    }
}
