use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Music,
    Dance,
    Arts,
    Crafts,
    Sport,
    Outdoor,
    Culture,
    Cinema,
    Theater,
    PersonalDevelopment,
    Party,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::Dance => "Dance",
            Category::Arts => "Arts",
            Category::Crafts => "Crafts",
            Category::Sport => "Sport",
            Category::Outdoor => "Outdoor",
            Category::Culture => "Culture",
            Category::Cinema => "Cinema",
            Category::Theater => "Theater",
            Category::PersonalDevelopment => "Personal development",
            Category::Party => "Party",
            Category::Other => "Other",
        }
    }
}

/// Audience of a listing.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Target {
    Adult,
    Family,
    Child,
}

impl Target {
    pub fn label(&self) -> &'static str {
        match self {
            Target::Adult => "Adult",
            Target::Family => "Family",
            Target::Child => "Child",
        }
    }
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ThingToDoType {
    Event,
    RecurringEvent,
    Place,
}

impl ThingToDoType {
    pub fn label(&self) -> &'static str {
        match self {
            ThingToDoType::Event => "Event",
            ThingToDoType::RecurringEvent => "Recurring event",
            ThingToDoType::Place => "Place",
        }
    }
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekDay {
    pub fn label(&self) -> &'static str {
        match self {
            WeekDay::Mon => "Mon",
            WeekDay::Tue => "Tue",
            WeekDay::Wed => "Wed",
            WeekDay::Thu => "Thu",
            WeekDay::Fri => "Fri",
            WeekDay::Sat => "Sat",
            WeekDay::Sun => "Sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_names_match_serde() {
        for category in Category::iter() {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.to_string()));
        }
        assert_eq!(Category::PersonalDevelopment.as_ref(), "PERSONAL_DEVELOPMENT");
        assert_eq!(ThingToDoType::RecurringEvent.to_string(), "RECURRING_EVENT");
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(WeekDay::from_str("SAT").unwrap(), WeekDay::Sat);
        assert_eq!(Target::from_str("FAMILY").unwrap(), Target::Family);
        assert!(Category::from_str("music").is_err());
    }

    #[test]
    fn test_key_order_and_labels() {
        let days: Vec<&str> = WeekDay::iter().map(|d| d.label()).collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(Category::iter().count(), 12);
        assert_eq!(Category::iter().next(), Some(Category::Music));
        assert_eq!(Target::Child.label(), "Child");
    }
}
