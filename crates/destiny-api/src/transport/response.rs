//! Response classification

use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{ApiError, Error, Result, SUCCESS_ERROR_CODE};

/// Turn a status and body into the API's JSON or a classified error.
pub(crate) fn classify(status: StatusCode, body: &[u8]) -> Result<Value> {
    if status == StatusCode::NO_CONTENT {
        return Ok(Value::Object(Map::new()));
    }

    if !status.is_success() {
        let parsed = serde_json::from_slice::<Value>(body).ok();
        return Err(Error::Api(ApiError::from_response(status, parsed.as_ref())));
    }

    let value: Value = serde_json::from_slice(body)?;

    if let Some(seconds) = value
        .get("ThrottleSeconds")
        .and_then(Value::as_i64)
        .filter(|s| *s > 0)
    {
        warn!(throttle_seconds = seconds, "API asked the client to throttle");
    }

    match value.get("ErrorCode").and_then(Value::as_i64) {
        Some(code) if code != SUCCESS_ERROR_CODE => {
            Err(Error::Api(ApiError::from_response(status, Some(&value))))
        }
        _ => Ok(value),
    }
}
