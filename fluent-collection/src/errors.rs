use backtrace::Backtrace;
use serde::{de, ser};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for collection operations.
///
/// Each kind names one category of failure so callers can match on it
/// instead of parsing messages.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::errors::{CollectionError, CollectionResult, ErrorKind};
///
/// fn lookup() -> CollectionResult<()> {
///     Err(CollectionError::new("Key 'name' not found", ErrorKind::KeyNotFound))
/// }
///
/// assert_eq!(lookup().unwrap_err().kind(), &ErrorKind::KeyNotFound);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A callback declared a parameter count the operation cannot call
    InvalidCallbackArity,
    /// Strict key access on a key the collection does not hold
    KeyNotFound,
    /// Error encoding or decoding JSON
    EncodingError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidCallbackArity => write!(f, "Invalid callback arity"),
            ErrorKind::KeyNotFound => write!(f, "Key not found"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
        }
    }
}

/// Error type for collection operations.
///
/// `CollectionError` carries a message, an [ErrorKind], an optional cause and
/// the backtrace captured where it was created.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::errors::{CollectionError, ErrorKind};
///
/// let cause = CollectionError::new("expected value at line 1", ErrorKind::EncodingError);
/// let err = CollectionError::new_with_cause(
///     "Failed to parse collection",
///     ErrorKind::EncodingError,
///     cause,
/// );
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct CollectionError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<CollectionError>>,
    backtrace: Backtrace,
}

impl CollectionError {
    /// Creates a new `CollectionError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        CollectionError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new(),
        }
    }

    /// Creates a new `CollectionError` wrapping the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: CollectionError) -> Self {
        CollectionError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Backtrace::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&CollectionError> {
        self.cause.as_deref()
    }
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // message with stack trace, or message followed by the cause chain
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// Shorthand for `Result<T, CollectionError>`.
pub type CollectionResult<T> = Result<T, CollectionError>;

impl de::Error for CollectionError {
    fn custom<T: Display>(msg: T) -> Self {
        CollectionError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl ser::Error for CollectionError {
    fn custom<T: Display>(msg: T) -> Self {
        CollectionError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        CollectionError::new(&format!("JSON error: {}", err), ErrorKind::EncodingError)
    }
}

impl From<std::string::FromUtf8Error> for CollectionError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CollectionError::new(
            &format!("UTF-8 encoding error: {}", err),
            ErrorKind::EncodingError,
        )
    }
}
