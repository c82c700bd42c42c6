//! Unified error types for the analyzer.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when resolving runtime configuration from the environment.
#[derive(Debug)]
pub enum ConfigError {
    /// The named credential variable is unset or blank.
    MissingCredential(&'static str),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential(var) => write!(f, "{var} is not set."),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InputError
// ---------------------------------------------------------------------------

/// Errors while collecting values from the terminal.
#[derive(Debug)]
pub enum InputError {
    /// The email body was empty after trimming.
    EmptyInput,
    /// Input ended while a value was still required.
    Closed,
    Io(std::io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Email content cannot be empty."),
            Self::Closed => write!(f, "Input closed before all answers were given."),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the Messages API call.
#[derive(Debug)]
pub enum ApiError {
    /// The service rejected the credential (401).
    Authentication,
    /// The service throttled the request (429).
    RateLimited,
    /// Network-level failure before a response arrived.
    Connectivity(reqwest::Error),
    /// Any other non-2xx status.
    Status { code: u16, message: String },
    /// A 2xx response that carried no usable text.
    InvalidResponse(String),
}

impl ApiError {
    /// Map a non-success status code and body to an error kind.
    pub fn from_status(code: u16, body: &str) -> Self {
        match code {
            401 => Self::Authentication,
            429 => Self::RateLimited,
            _ => Self::Status {
                code,
                message: error_message_from_body(body),
            },
        }
    }

    /// HTTP status code, when the error originated from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication => Some(401),
            Self::RateLimited => Some(429),
            Self::Status { code, .. } => Some(*code),
            Self::Connectivity(_) | Self::InvalidResponse(_) => None,
        }
    }
}

/// Prefer the structured `error.message` field; fall back to the raw body.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => {
                write!(f, "Invalid API key. Check your ANTHROPIC_API_KEY value.")
            }
            Self::RateLimited => write!(f, "Rate limit reached. Wait a moment and try again."),
            Self::Connectivity(e) => write!(
                f,
                "Could not reach the Anthropic API. Check your internet connection. ({e})"
            ),
            Self::Status { code, message } => write!(f, "API error ({code}): {message}"),
            Self::InvalidResponse(msg) => write!(f, "unexpected API response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return Self::InvalidResponse(e.to_string());
        }
        Self::Connectivity(e)
    }
}

// ---------------------------------------------------------------------------
// AppError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for one analyzer run.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Input(InputError),
    Api(ApiError),
}

impl AppError {
    /// Process exit status for this failure. Every failure is terminal.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Input(e) => write!(f, "{e}"),
            Self::Api(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}
