use std::fmt::{Display, Formatter};

/// The key of an entry in a [Collection](crate::collection::Collection).
///
/// A key is either an integer index or a string name. Strings holding the
/// canonical decimal form of an `i64` are treated as indices, so `"5"` and
/// `5` address the same entry:
///
/// ```rust
/// use fluent_collection::common::Key;
///
/// assert_eq!(Key::from("5"), Key::Index(5));
/// assert_eq!(Key::from("-12"), Key::Index(-12));
/// assert_eq!(Key::from("05"), Key::Name("05".to_string()));
/// assert_eq!(Key::from("name"), Key::Name("name".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer index.
    Index(i64),
    /// Explicit string key.
    Name(String),
}

impl Key {
    /// Builds a key from a string, applying index normalization.
    pub fn parse(value: &str) -> Key {
        match parse_index(value) {
            Some(index) => Key::Index(index),
            None => Key::Name(value.to_string()),
        }
    }

    /// Re-applies index normalization to a key built directly as
    /// `Key::Name`, so `Key::Name("5")` becomes `Key::Index(5)`.
    pub fn canonical(self) -> Key {
        match self {
            Key::Name(name) => match parse_index(&name) {
                Some(index) => Key::Index(index),
                None => Key::Name(name),
            },
            index => index,
        }
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    #[inline]
    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }

    #[inline]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

/// Accepts `0`, `-7`, `42`; rejects `+1`, `007`, `-0`, `1.0` and anything
/// out of `i64` range.
fn parse_index(value: &str) -> Option<i64> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.starts_with('0') && (digits.len() > 1 || value.starts_with('-')) {
        return None;
    }
    value.parse::<i64>().ok()
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<i64> for Key {
    #[inline]
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(value: i32) -> Self {
        Key::Index(value as i64)
    }
}

impl From<u32> for Key {
    #[inline]
    fn from(value: u32) -> Self {
        Key::Index(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match parse_index(&value) {
            Some(index) => Key::Index(index),
            None => Key::Name(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::parse(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

/// A macro to create a [Key] from an integer or string expression.
///
/// ```rust
/// use fluent_collection::common::Key;
/// use fluent_collection::key;
///
/// assert_eq!(key!(3), Key::Index(3));
/// assert_eq!(key!("age"), Key::Name("age".to_string()));
/// ```
#[macro_export]
macro_rules! key {
    ($value:expr) => {
        $crate::common::Key::from($value)
    };
}
