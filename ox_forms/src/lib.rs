//! ox_forms - form state, field validation and submission tracking for console screens

pub mod binding;
pub mod error;
pub mod field;
pub mod form;
pub mod notify;
pub mod registry;
pub mod schema;
pub mod submit;
pub mod validation;


pub use binding::{Binder, ChangeEvent, FieldBinding};
pub use error::FormsError;
pub use field::FieldController;
pub use form::{Form, FormValues};
pub use notify::{Toast, ToastVariant, TOAST_AUTO_HIDE};
pub use registry::Validators;
pub use schema::*;
pub use submit::{SubmitError, Submitter};
pub use validation::{Rule, RuleSet};
