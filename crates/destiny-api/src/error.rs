//! Error types for API and manifest operations

use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Bungie's `PlatformErrorCodes::Success`.
pub const SUCCESS_ERROR_CODE: i64 = 1;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Request cancelled")]
    Cancelled,

    #[error("API error: {0}")]
    Api(ApiError),

    #[error("Manifest {step} step failed: {source}")]
    Manifest {
        step: ManifestStep,
        #[source]
        source: Box<Error>,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Unknown manifest definition: {0}")]
    UnknownDefinition(String),

    #[error("No {definition} entry for {key}")]
    DefinitionNotFound { definition: String, key: String },
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(e)
        }
    }
}

/// Failure reported by the remote API.
///
/// Produced both for non-2xx HTTP statuses and for 2xx responses whose
/// envelope carries an `ErrorCode` other than [`SUCCESS_ERROR_CODE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    /// `ErrorCode` from the response envelope, if the body had one
    pub error_code: Option<i64>,
    /// `ErrorStatus` from the response envelope, if the body had one
    pub error_status: Option<String>,
    pub message: String,
    pub throttle_seconds: Option<i64>,
}

impl ApiError {
    /// Build an error from a response status and whatever body came back.
    pub fn from_response(status: StatusCode, body: Option<&Value>) -> Self {
        let field = |name: &str| body.and_then(|b| b.get(name));

        let message = field("Message")
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .or_else(|| status.canonical_reason().map(ToString::to_string))
            .unwrap_or_default();

        Self {
            status,
            error_code: field("ErrorCode").and_then(Value::as_i64),
            error_status: field("ErrorStatus")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            message,
            throttle_seconds: field("ThrottleSeconds").and_then(Value::as_i64),
        }
    }

    /// Whether the remote asked us to slow down.
    pub fn is_throttled(&self) -> bool {
        self.status == StatusCode::TOO_MANY_REQUESTS
            || self.throttle_seconds.is_some_and(|s| s > 0)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status.as_u16())?;
        if let Some(code) = self.error_code {
            write!(f, ", code {code}")?;
        }
        if let Some(status) = &self.error_status {
            write!(f, " ({status})")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Step of the manifest pipeline that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStep {
    Metadata,
    Download,
    Decompress,
    Write,
}

impl fmt::Display for ManifestStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metadata => write!(f, "metadata"),
            Self::Download => write!(f, "download"),
            Self::Decompress => write!(f, "decompress"),
            Self::Write => write!(f, "write"),
        }
    }
}

impl Error {
    /// Attach manifest step context to an error
    pub fn at_step(self, step: ManifestStep) -> Self {
        Self::Manifest {
            step,
            source: Box::new(self),
        }
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an unexpected response error
    pub fn unexpected_response(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }

    /// Connection-level failure (DNS, refused, reset)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Failure reported by the remote API
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Timeout or explicit cancellation
    pub fn is_cancellation(&self) -> bool {
        match self {
            Self::Timeout | Self::Cancelled => true,
            Self::Manifest { source, .. } => source.is_cancellation(),
            _ => false,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            Self::Manifest { source, .. } => source.api_error(),
            _ => None,
        }
    }

    /// The failed pipeline step, for manifest errors
    pub fn manifest_step(&self) -> Option<ManifestStep> {
        match self {
            Self::Manifest { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Check if error is worth retrying.
    ///
    /// Advisory only: nothing in this crate retries automatically.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::Timeout => true,
            Self::Transport(e) => e.is_connect() || e.is_request(),
            Self::Api(e) => {
                e.is_throttled()
                    || matches!(
                        e.status,
                        StatusCode::INTERNAL_SERVER_ERROR
                            | StatusCode::BAD_GATEWAY
                            | StatusCode::SERVICE_UNAVAILABLE
                            | StatusCode::GATEWAY_TIMEOUT
                    )
            }
            Self::Manifest { source, .. } => source.should_retry(),
            _ => false,
        }
    }

    /// Get the throttle hint, if the API sent one.
    pub fn retry_after_hint(&self) -> Option<Duration> {
        self.api_error()
            .and_then(|e| e.throttle_seconds)
            .filter(|s| *s > 0)
            .map(|s| Duration::from_secs(s as u64))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
