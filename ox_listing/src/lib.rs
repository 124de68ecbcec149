pub mod catalog;
pub mod constants;
pub mod defaults;
pub mod error;
pub mod model;
pub mod schedule;

pub use catalog::{
    console_form, console_forms, edit_listing_form, listing_input, new_listing_form, CONFIRM_SIGN_UP,
    FORGOT_PASSWORD, LISTING, RESET_PASSWORD, SIGN_IN, SIGN_UP,
};
pub use constants::{Category, Target, ThingToDoType, WeekDay};
pub use defaults::listing_defaults;
pub use error::ListingError;
pub use model::{
    format_hours, parse_hours, ContactInput, Coordinates, ListingBinder, ListingInput, OccurrenceInput, Span,
    TargetInput, UpdateListingInput, WhenInput, WhereInput,
};
pub use schedule::{add_occurrence, remove_occurrence, schedule, set_days, set_time, Occurrence, TimeBound, SCHEDULE};
