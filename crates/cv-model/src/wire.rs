//! Wire-format deserialization for cycle-service responses.
//!
//! The service emits numeric fields inconsistently typed: sometimes JSON
//! numbers, sometimes numeric strings. Every numeric field accepts both;
//! anything else is a hard decode error, except the quality field, where a
//! non-numeric value is a legitimate single-phase sentinel and is kept as a
//! label.

use serde::{Deserialize, Deserializer, de};

use crate::types::Quality;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Num(f64),
    Text(String),
    Null,
}

pub(crate) fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Num(v) => Ok(v),
        RawNumber::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, got {s:?}"))),
        RawNumber::Null => Err(de::Error::custom("expected a number, got null")),
    }
}

pub(crate) fn quality<'de, D>(deserializer: D) -> Result<Quality, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawNumber::deserialize(deserializer)? {
        RawNumber::Num(v) => Quality::Value(v),
        RawNumber::Text(s) => match s.trim().parse() {
            Ok(v) => Quality::Value(v),
            Err(_) => Quality::Label(s),
        },
        // Single-phase states may carry no quality at all
        RawNumber::Null => Quality::Label("—".to_string()),
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody {
    pub cycle: WireCycle,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCycle {
    #[serde(deserialize_with = "flexible_f64")]
    pub en_eff: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub bwr: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub ex_eff: f64,
    pub states: Vec<WireState>,
    pub processes: Vec<WireProcess>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireState {
    pub name: String,
    #[serde(rename = "T", deserialize_with = "flexible_f64")]
    pub temperature: f64,
    #[serde(rename = "p", deserialize_with = "flexible_f64")]
    pub pressure: f64,
    #[serde(rename = "v", deserialize_with = "flexible_f64")]
    pub volume: f64,
    #[serde(rename = "h", deserialize_with = "flexible_f64")]
    pub enthalpy: f64,
    #[serde(rename = "s", deserialize_with = "flexible_f64")]
    pub entropy: f64,
    #[serde(rename = "ef", deserialize_with = "flexible_f64")]
    pub exergy: f64,
    #[serde(rename = "x", deserialize_with = "quality")]
    pub quality: Quality,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireProcess {
    pub name: String,
    pub state_in: String,
    pub state_out: String,
    #[serde(deserialize_with = "flexible_f64")]
    pub heat: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub work: f64,
}
