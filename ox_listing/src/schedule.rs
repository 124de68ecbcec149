//! Recurring schedule of a listing.
//!
//! The schedule lives in the form values under [`SCHEDULE`] as a list of
//! occurrences. Every edit goes through [`Form::update`], so the whole values map is
//! replaced in one step, as with any other field edit.

use crate::constants::WeekDay;
use crate::error::ListingError;
use chrono::NaiveTime;
use log::debug;
use ox_forms::{Form, FormValues};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SCHEDULE: &str = "schedule";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    #[serde(default)]
    pub days: Vec<WeekDay>,
    pub from_time: NaiveTime,
    pub to_time: NaiveTime,
}

impl Occurrence {
    pub fn new(from_time: NaiveTime, to_time: NaiveTime) -> Self {
        Self {
            days: Vec::new(),
            from_time,
            to_time,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeBound {
    From,
    To,
}

/// Reads the schedule out of form values. A missing schedule is an empty one.
pub fn schedule(values: &FormValues) -> Result<Vec<Occurrence>, ListingError> {
    match values.get(SCHEDULE) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| ListingError::invalid(SCHEDULE, e)),
    }
}

pub fn add_occurrence(form: &mut Form, from_time: NaiveTime, to_time: NaiveTime) -> Result<usize, ListingError> {
    edit(form, |occurrences| {
        occurrences.push(Occurrence::new(from_time, to_time));
        Ok(occurrences.len() - 1)
    })
}

pub fn remove_occurrence(form: &mut Form, index: usize) -> Result<Occurrence, ListingError> {
    edit(form, |occurrences| {
        if index >= occurrences.len() {
            return Err(ListingError::NoOccurrence(index));
        }
        Ok(occurrences.remove(index))
    })
}

pub fn set_days(form: &mut Form, index: usize, days: Vec<WeekDay>) -> Result<(), ListingError> {
    edit(form, |occurrences| {
        let occurrence = occurrences.get_mut(index).ok_or(ListingError::NoOccurrence(index))?;
        occurrence.days = days;
        Ok(())
    })
}

pub fn set_time(form: &mut Form, index: usize, bound: TimeBound, time: NaiveTime) -> Result<(), ListingError> {
    edit(form, |occurrences| {
        let occurrence = occurrences.get_mut(index).ok_or(ListingError::NoOccurrence(index))?;
        match bound {
            TimeBound::From => occurrence.from_time = time,
            TimeBound::To => occurrence.to_time = time,
        }
        Ok(())
    })
}

fn edit<F, R>(form: &mut Form, change: F) -> Result<R, ListingError>
where
    F: FnOnce(&mut Vec<Occurrence>) -> Result<R, ListingError>,
{
    let mut occurrences = schedule(form.values())?;
    let result = change(&mut occurrences)?;
    let value = serde_json::to_value(&occurrences).map_err(|e| ListingError::invalid(SCHEDULE, e))?;

    form.update(|values| {
        values.insert(SCHEDULE.to_string(), value);
    });
    debug!("Schedule now has {} occurrences", occurrences.len());
    Ok(result)
}
