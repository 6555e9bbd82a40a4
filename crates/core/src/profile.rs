//! User profile fields and request input checks.
//!
//! Request bodies are checked for presence only; the helpers here turn
//! missing or malformed fields into [`CoreError::Validation`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// Must match the CHECK constraint on `users.gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!(
                "Invalid gender '{other}'. Must be one of: male, female, other"
            )),
        }
    }
}

/// Return the trimmed-nonempty value of a required string field.
pub fn require_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Validate an optional gender string. Empty strings count as absent.
pub fn parse_gender(value: Option<&str>) -> Result<Option<Gender>, CoreError> {
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => v.parse().map(Some).map_err(CoreError::Validation),
    }
}

/// Interpret an age sent either as a JSON number or a numeric string.
///
/// `null`, absent, and empty-string values are treated as "no age".
pub fn parse_age(value: Option<&Value>) -> Result<Option<i32>, CoreError> {
    let invalid = || CoreError::Validation("age must be a whole number".into());

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(invalid),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<i32>().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

/// Interpret a phone number sent either as a JSON string or a bare number.
///
/// `null`, absent, and empty-string values are treated as "no phone".
pub fn parse_phone(value: Option<&Value>) -> Result<Option<String>, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) if n.is_u64() => Ok(Some(n.to_string())),
        Some(_) => Err(CoreError::Validation(
            "phone must be a string or a whole number".into(),
        )),
    }
}
