//! The v1 api sends nearly everything as a string: `"beatmap_id":"75"`, `"perfect":"1"`,
//! `"approved_date":"2013-03-09 23:09:22"`. These accept both that and the native json type.
//! `null` and `""` fall back to the default value (or `None`).

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw<T> {
    Native(T),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Int(i64),
    Float(f64),
}

fn parse<T, E>(s: &str) -> Result<Option<T>, E>
where
    T: FromStr,
    T::Err: Display,
    E: Error,
{
    let s = s.trim();

    if s.is_empty() {
        return Ok(None);
    }

    s.parse().map(Some).map_err(E::custom)
}

pub fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Native(v)) => Ok(Some(v)),
        Some(Raw::Text(s)) => parse(&s),
    }
}

pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
    T::Err: Display,
{
    optional_number(deserializer).map(Option::unwrap_or_default)
}

/// `1`, `"1"` and `true` are all true
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawFlag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(RawFlag::Bool(v)) => Ok(v),
        Some(RawFlag::Int(v)) => Ok(v != 0),
        Some(RawFlag::Text(s)) => match s.trim() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            other => Err(D::Error::custom(format_args!("`{}` is not a flag", other))),
        },
    }
}

/// Ids the api hands out as opaque strings, numbers are accepted as well
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<RawText>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawText::Text(s)) => s,
        Some(RawText::Int(v)) => v.to_string(),
        Some(RawText::Float(v)) => v.to_string(),
    };

    Ok(text)
}

pub fn parse_date(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, DATE_FORMAT)
        .map(|date| Utc.from_utc_datetime(&date))
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|date| date.with_timezone(&Utc)))
}

pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => {
            parse_date(s.trim()).map(Some).map_err(D::Error::custom)
        }
        _ => Ok(None),
    }
}

pub fn date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_date(deserializer).map(Option::unwrap_or_default)
}
