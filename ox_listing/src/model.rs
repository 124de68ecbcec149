//! What the listing form produces for the listing API, and the way back for edits.

use crate::constants::{Category, Target, ThingToDoType, WeekDay};
use crate::error::ListingError;
use crate::schedule::{self, Occurrence, SCHEDULE};
use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};
use ox_forms::{Binder, FormValues};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;

const HOURS_FORMAT: &str = "%H:%M:%SZ";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Span<T> {
    pub from: T,
    pub to: T,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TargetInput {
    pub age: Span<u32>,
    #[serde(rename = "type")]
    pub kinds: Vec<Target>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactInput {
    pub email: String,
    pub phone: String,
    pub www: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WhereInput {
    pub address: String,
    /// Left out of the payload until a location is picked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceInput {
    pub day_of_week: WeekDay,
    /// `HH:MM:SSZ`
    pub hours: Span<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WhenInput {
    pub date_time: Span<DateTime<Utc>>,
    pub occurrences: Vec<OccurrenceInput>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ThingToDoType,
    pub category: Category,
    pub booking_mandatory: bool,
    pub adult_mandatory: bool,
    pub target: TargetInput,
    pub price: Span<f64>,
    pub contact: ContactInput,
    #[serde(rename = "where")]
    pub place: WhereInput,
    pub when: WhenInput,
}

/// Payload for updating an existing listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingInput {
    pub id: String,
    pub thing_to_do: ListingInput,
}

/// Converts between listing form values and [`ListingInput`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingBinder;

impl ListingBinder {
    /// Update payload for the listing being edited; its id is carried in the values.
    pub fn extract_update(&self, values: &FormValues) -> anyhow::Result<UpdateListingInput> {
        Ok(UpdateListingInput {
            id: text(values, "id")?,
            thing_to_do: self.extract(values)?,
        })
    }

    /// Edit-screen values for a stored listing.
    pub fn hydrate_with_id(&self, id: &str, record: &ListingInput) -> anyhow::Result<FormValues> {
        let mut values = self.hydrate(record)?;
        values.insert("id".to_string(), Value::String(id.to_string()));
        Ok(values)
    }
}

impl Binder<ListingInput> for ListingBinder {
    fn hydrate(&self, record: &ListingInput) -> anyhow::Result<FormValues> {
        // One form occurrence per stored day, as the API keeps no grouping.
        let schedule = record
            .when
            .occurrences
            .iter()
            .map(|o| {
                Ok(Occurrence {
                    days: vec![o.day_of_week],
                    from_time: parse_hours(&o.hours.from)?,
                    to_time: parse_hours(&o.hours.to)?,
                })
            })
            .collect::<Result<Vec<_>, ListingError>>()?;

        let coordinates = match record.place.location {
            Some(c) => json!({ "lat": c.lat, "lon": c.lon }),
            None => json!({}),
        };

        let mut values = FormValues::new();
        values.insert("name".into(), json!(record.name));
        values.insert("description".into(), json!(record.description));
        values.insert("thingToDoType".into(), json!(record.kind));
        values.insert("category".into(), json!(record.category));
        values.insert("bookingMandatory".into(), json!(record.booking_mandatory));
        values.insert("adultMandatory".into(), json!(record.adult_mandatory));
        values.insert("age".into(), json!([record.target.age.from, record.target.age.to]));
        values.insert("target".into(), json!(record.target.kinds));
        values.insert("price".into(), json!([record.price.from, record.price.to]));
        values.insert("email".into(), json!(record.contact.email));
        values.insert("phone".into(), json!(record.contact.phone));
        values.insert("www".into(), json!(record.contact.www));
        values.insert("address".into(), json!(record.place.address));
        values.insert("coordinates".into(), coordinates);
        values.insert("fromDate".into(), json!(rfc3339(&record.when.date_time.from)));
        values.insert("toDate".into(), json!(rfc3339(&record.when.date_time.to)));
        values.insert(SCHEDULE.into(), serde_json::to_value(schedule)?);
        Ok(values)
    }

    fn extract(&self, values: &FormValues) -> anyhow::Result<ListingInput> {
        let age = pair::<u32>(values, "age")?;
        let price = pair::<f64>(values, "price")?;

        let occurrences = schedule::schedule(values)?
            .iter()
            .flat_map(|s| {
                s.days.iter().map(move |day| OccurrenceInput {
                    day_of_week: *day,
                    hours: Span {
                        from: format_hours(&s.from_time),
                        to: format_hours(&s.to_time),
                    },
                })
            })
            .collect();

        Ok(ListingInput {
            name: text(values, "name")?,
            description: text(values, "description")?,
            kind: key(values, "thingToDoType")?,
            category: key(values, "category")?,
            booking_mandatory: flag(values, "bookingMandatory"),
            adult_mandatory: flag(values, "adultMandatory"),
            target: TargetInput {
                age,
                kinds: typed(values, "target")?,
            },
            price,
            contact: ContactInput {
                email: text(values, "email")?,
                phone: text(values, "phone")?,
                www: text(values, "www")?,
            },
            place: WhereInput {
                address: text(values, "address")?,
                location: coordinates(values)?,
            },
            when: WhenInput {
                date_time: Span {
                    from: date(values, "fromDate")?,
                    to: date(values, "toDate")?,
                },
                occurrences,
            },
        })
    }
}

pub fn format_hours(time: &NaiveTime) -> String {
    time.format(HOURS_FORMAT).to_string()
}

pub fn parse_hours(hours: &str) -> Result<NaiveTime, ListingError> {
    NaiveTime::parse_from_str(hours, HOURS_FORMAT).map_err(|e| ListingError::invalid("hours", e))
}

pub(crate) fn rfc3339(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn get<'a>(values: &'a FormValues, field: &str) -> Result<&'a Value, ListingError> {
    match values.get(field) {
        None | Some(Value::Null) => Err(ListingError::MissingValue(field.to_string())),
        Some(value) => Ok(value),
    }
}

fn text(values: &FormValues, field: &str) -> Result<String, ListingError> {
    get(values, field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ListingError::invalid(field, "expected text"))
}

fn flag(values: &FormValues, field: &str) -> bool {
    values.get(field).and_then(Value::as_bool).unwrap_or(false)
}

fn key<T: FromStr>(values: &FormValues, field: &str) -> Result<T, ListingError> {
    let raw = text(values, field)?;
    T::from_str(&raw).map_err(|_| ListingError::invalid(field, format!("unknown key '{}'", raw)))
}

fn typed<T: DeserializeOwned>(values: &FormValues, field: &str) -> Result<T, ListingError> {
    serde_json::from_value(get(values, field)?.clone()).map_err(|e| ListingError::invalid(field, e))
}

fn pair<T: DeserializeOwned + Copy>(values: &FormValues, field: &str) -> Result<Span<T>, ListingError> {
    let [from, to]: [T; 2] = typed(values, field)?;
    Ok(Span { from, to })
}

fn date(values: &FormValues, field: &str) -> Result<DateTime<Utc>, ListingError> {
    let raw = text(values, field)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| ListingError::invalid(field, e))
}

/// An empty coordinates object means no location was picked yet.
fn coordinates(values: &FormValues) -> Result<Option<Coordinates>, ListingError> {
    match values.get("coordinates") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(_) => typed(values, "coordinates").map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> FormValues {
        let value = json!({
            "id": "ttd-42",
            "name": "Salsa night",
            "description": "Open floor",
            "thingToDoType": "RECURRING_EVENT",
            "category": "DANCE",
            "bookingMandatory": true,
            "adultMandatory": false,
            "age": [16, 99],
            "target": ["ADULT"],
            "price": [0, 12.5],
            "email": "host@example.com",
            "phone": "+33 1 23 45 67 89",
            "www": "https://example.com",
            "address": "1 rue de la Paix",
            "coordinates": {},
            "fromDate": "2026-06-01T00:00:00.000Z",
            "toDate": "2026-09-01T00:00:00.000Z",
            "schedule": [
                {"days": ["MON", "WED"], "fromTime": "18:00:00", "toTime": "20:00:00"},
                {"days": [], "fromTime": "10:00:00", "toTime": "11:00:00"}
            ]
        });
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_extract_flattens_days() {
        let input = ListingBinder.extract(&filled()).unwrap();
        assert_eq!(input.kind, ThingToDoType::RecurringEvent);
        assert_eq!(input.category, Category::Dance);
        assert_eq!(input.target.age, Span { from: 16, to: 99 });
        assert_eq!(input.price, Span { from: 0.0, to: 12.5 });
        assert_eq!(input.place.location, None);

        // The occurrence without days contributes nothing.
        let days: Vec<WeekDay> = input.when.occurrences.iter().map(|o| o.day_of_week).collect();
        assert_eq!(days, vec![WeekDay::Mon, WeekDay::Wed]);
        assert_eq!(input.when.occurrences[0].hours.from, "18:00:00Z");
        assert_eq!(input.when.date_time.from, Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap());

        let wire = serde_json::to_value(&input).unwrap();
        assert_eq!(wire["type"], json!("RECURRING_EVENT"));
        assert_eq!(wire["target"]["type"], json!(["ADULT"]));
        assert_eq!(wire["where"], json!({"address": "1 rue de la Paix"}));
        assert_eq!(wire["when"]["occurrences"][1], json!({"dayOfWeek": "WED", "hours": {"from": "18:00:00Z", "to": "20:00:00Z"}}));
    }

    #[test]
    fn test_extract_update_carries_id() {
        let update = ListingBinder.extract_update(&filled()).unwrap();
        assert_eq!(update.id, "ttd-42");
        assert_eq!(update.thing_to_do.name, "Salsa night");
    }

    #[test]
    fn test_hydrate_splits_occurrences_per_day() {
        let input = ListingBinder.extract(&filled()).unwrap();
        let values = ListingBinder.hydrate_with_id("ttd-42", &input).unwrap();

        assert_eq!(values["id"], json!("ttd-42"));
        assert_eq!(values["category"], json!("DANCE"));
        assert_eq!(values["age"], json!([16, 99]));
        assert_eq!(values["coordinates"], json!({}));
        assert_eq!(
            values[SCHEDULE],
            json!([
                {"days": ["MON"], "fromTime": "18:00:00", "toTime": "20:00:00"},
                {"days": ["WED"], "fromTime": "18:00:00", "toTime": "20:00:00"}
            ])
        );

        // Hydrated values extract back to the same payload.
        assert_eq!(ListingBinder.extract(&values).unwrap(), input);
    }

    #[test]
    fn test_extract_errors() {
        let mut values = filled();
        values.insert("category".into(), json!(""));
        let err = ListingBinder.extract(&values).unwrap_err();
        assert!(err.to_string().contains("category"));

        let mut values = filled();
        values.remove("name");
        let err = ListingBinder.extract(&values).unwrap_err();
        assert!(matches!(err.downcast_ref::<ListingError>(), Some(ListingError::MissingValue(f)) if f == "name"));

        let mut values = filled();
        values.insert("coordinates".into(), json!({"lat": 48.8, "lon": 2.3}));
        let input = ListingBinder.extract(&values).unwrap();
        assert_eq!(input.place.location, Some(Coordinates { lat: 48.8, lon: 2.3 }));
        let wire = serde_json::to_value(&input).unwrap();
        assert_eq!(wire["where"]["location"], json!({"lat": 48.8, "lon": 2.3}));
    }

    #[test]
    fn test_hours_format() {
        let time = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        assert_eq!(format_hours(&time), "07:05:00Z");
        assert_eq!(parse_hours("07:05:00Z").unwrap(), time);
        assert!(parse_hours("7h05").is_err());
    }
}
