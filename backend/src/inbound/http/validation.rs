//! Validation of untrusted request input for the user endpoints.
//!
//! Path identifiers and JSON bodies arrive as raw text. The helpers here turn
//! them into domain values or a client-facing [`Error`], collecting every
//! payload violation rather than stopping at the first.

use serde_json::{Map, Value};

use crate::domain::{Age, Error, UserDraft, UserId, Username};

pub(crate) const VALIDATION_FAILED_MESSAGE: &str = "User input validation failed";
pub(crate) const USERNAME_REQUIRED: &str = "Username is required and must be a non-empty string.";
pub(crate) const AGE_REQUIRED: &str = "Age is required and must be a number.";
pub(crate) const HOBBIES_REQUIRED: &str = "Hobbies is required and must be an array.";
pub(crate) const HOBBIES_MUST_BE_STRINGS: &str = "All hobbies must be strings.";

/// Parse a path segment into a [`UserId`].
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| Error::invalid_identifier(raw))
}

/// Parse a raw request body as JSON without imposing any shape.
pub(crate) fn parse_json_body(body: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(body).map_err(Error::malformed_body)
}

/// Check a JSON payload against the user shape.
///
/// Violations are reported in field order: username, age, hobbies. Fields the
/// payload does not describe are ignored.
pub(crate) fn validate_user_payload(payload: &Value) -> Result<UserDraft, Error> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);
    let mut violations = Vec::new();

    let username = fields
        .get("username")
        .and_then(Value::as_str)
        .and_then(|raw| Username::new(raw).ok());
    if username.is_none() {
        violations.push(USERNAME_REQUIRED.to_owned());
    }

    let age = match fields.get("age") {
        Some(Value::Number(number)) => Some(number.clone()),
        _ => None,
    };
    if age.is_none() {
        violations.push(AGE_REQUIRED.to_owned());
    }

    let hobbies = match fields.get("hobbies") {
        Some(Value::Array(items)) => {
            let strings = string_items(items);
            if strings.is_none() {
                violations.push(HOBBIES_MUST_BE_STRINGS.to_owned());
            }
            strings
        }
        _ => {
            violations.push(HOBBIES_REQUIRED.to_owned());
            None
        }
    };

    match (username, age, hobbies) {
        (Some(username), Some(age), Some(hobbies)) => {
            Ok(UserDraft::new(username, Age::from(age), hobbies))
        }
        _ => Err(Error::validation_failed(
            VALIDATION_FAILED_MESSAGE,
            violations,
        )),
    }
}

fn string_items(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect()
}
