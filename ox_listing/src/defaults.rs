use crate::constants::ThingToDoType;
use crate::model::rfc3339;
use crate::schedule::SCHEDULE;
use chrono::{DateTime, Utc};
use ox_forms::FormValues;
use serde_json::{json, Value};

/// Values a freshly added listing starts from. Both ends of the date range are `now`.
pub fn listing_defaults(now: DateTime<Utc>) -> FormValues {
    let today = rfc3339(&now);
    let defaults = json!({
        "thingToDoType": ThingToDoType::RecurringEvent,
        "target": [],
        "category": "",
        "bookingMandatory": false,
        "adultMandatory": false,
        "age": [0, 100],
        "price": [0, 0],
        "coordinates": {},
        "fromDate": today,
        "toDate": today,
        "address": "",
    });
    let mut values = match defaults {
        Value::Object(map) => map,
        _ => FormValues::new(),
    };
    values.insert(SCHEDULE.to_string(), json!([]));
    values
}
