//! JSON has no literals for infinities and NaN, so sample values travel
//! as numbers when finite and as the exposition spellings otherwise.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::Serializer;

use super::types::SampleValue;

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub fn serialize<S: Serializer>(value: &SampleValue, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_infinite() && value.is_sign_positive() {
        serializer.serialize_str("+Inf")
    } else if value.is_infinite() {
        serializer.serialize_str("-Inf")
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SampleValue, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Number(n) => Ok(n),
        Repr::Text(s) => parse(&s).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Str(&s), &"a number, +Inf, -Inf or NaN")
        }),
    }
}

fn parse(s: &str) -> Option<SampleValue> {
    match s {
        "+Inf" | "Inf" => Some(f64::INFINITY),
        "-Inf" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => s.parse().ok(),
    }
}
