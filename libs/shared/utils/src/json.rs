use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use shared_models::AppError;

/// Parses a raw request body as JSON, whatever the request's Content-Type.
///
/// Bytes that are not JSON, and a bare `null`, become
/// [`AppError::InvalidBody`] carrying `invalid_message`. Any other non-object
/// document (array, string, number, bool) has no fields, so it yields
/// `T::default()` and the caller's presence checks reject it.
pub fn parse_json_body<T>(body: &[u8], invalid_message: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    let invalid = |e: serde_json::Error| {
        debug!("Unparsable request body: {}", e);
        AppError::InvalidBody(invalid_message.to_string())
    };

    match serde_json::from_slice::<Value>(body).map_err(invalid)? {
        Value::Null => Err(AppError::InvalidBody(invalid_message.to_string())),
        document @ Value::Object(_) => serde_json::from_value(document).map_err(invalid),
        _ => Ok(T::default()),
    }
}

/// Presence test for loosely typed fields: `null`, `false`, `0` and `""`
/// count as missing, everything else as present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A present field as text. Strings are taken as-is, any other present
/// value is stored as its JSON rendering.
pub fn present_text(value: Option<Value>) -> Option<String> {
    match value.filter(is_present)? {
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// A present field read as an entity id. Only positive integral numbers can
/// name an entity; strings, booleans, fractions and negatives cannot.
pub fn entity_id(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(id) = number.as_u64() {
        return Some(id).filter(|id| *id > 0);
    }
    number
        .as_f64()
        .filter(|f| *f > 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
        .map(|f| f as u64)
}
