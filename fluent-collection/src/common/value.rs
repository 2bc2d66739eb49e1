use crate::collection::Collection;
use crate::common::Key;
use indexmap::IndexMap;
use std::fmt::{Display, Formatter};
use std::ops::Add;

/// Ordered mapping from [Key] to [Value]. This is the storage behind every
/// [Collection] and behind nested [Value::Array] records.
pub type Items = IndexMap<Key, Value>;

/// Compare two floats for equality with NaN equal to itself.
#[inline]
fn num_eq_float(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else {
        a == b
    }
}

/// Order-sensitive equality of two item maps.
pub(crate) fn items_eq(a: &Items, b: &Items) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Represents one element of a [Collection]. It can be a scalar like
/// [Value::Int] or [Value::String], a nested record or sequence
/// ([Value::Array]), or a nested [Collection].
///
/// Create values through `From`, [Value::from] or the [val!](crate::val) macro:
///
/// ```rust
/// use fluent_collection::common::Value;
/// use fluent_collection::val;
///
/// assert_eq!(val!(42), Value::Int(42));
/// assert_eq!(val!("hello"), Value::String("hello".to_string()));
/// assert_eq!(val!(vec![1, 2]).as_array().map(|a| a.len()), Some(2));
/// ```
///
/// Equality is strict about scalar types (`Int(1) != Float(1.0)`) and about
/// order for `Array` and `Collection`. An `Array` and a `Collection` holding
/// the same entries are equal.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    String(String),
    /// Nested ordered mapping: a sequence when keyed `0..n`, a record otherwise.
    Array(Items),
    /// Nested collection.
    Collection(Collection),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => num_eq_float(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => items_eq(a, b),
            (Value::Collection(a), Value::Collection(b)) => a == b,
            // both render the same way, so they compare by entries
            (Value::Array(a), Value::Collection(b)) | (Value::Collection(b), Value::Array(a)) => {
                items_eq(a, b.items())
            }
            _ => false,
        }
    }
}

/// Numeric view of a [Value] used by aggregation.
///
/// Integer arithmetic stays integral until it overflows or meets a float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(sum) => Number::Int(sum),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(v) => Value::Int(v),
            Number::Float(v) => Value::Float(v),
        }
    }
}

/// Parses a trimmed numeric string. Only plain decimal and exponent
/// notation is accepted, so `"inf"` and `"NaN"` are not numbers.
fn parse_numeric(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.is_empty()
        || !text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    if let Ok(v) = text.parse::<i64>() {
        return Some(Number::Int(v));
    }
    text.parse::<f64>().ok().map(Number::Float)
}

impl Value {
    /// Creates a new [Value] from anything implementing [`Into<Value>`].
    pub fn from<T: Into<Value>>(value: T) -> Value {
        value.into()
    }

    /// Creates a sequential [Value::Array] from the given values.
    pub fn from_vec<T: Into<Value>>(values: Vec<T>) -> Value {
        Value::Array(
            values
                .into_iter()
                .enumerate()
                .map(|(index, v)| (Key::from(index), v.into()))
                .collect(),
        )
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Items> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Value::Collection(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Collection(_))
    }

    /// Loose truthiness: `null`, `false`, `0`, `0.0`, `""`, `"0"` and empty
    /// arrays are false. Collections are always true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(v) => *v,
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::String(v) => !v.is_empty() && v != "0",
            Value::Array(v) => !v.is_empty(),
            Value::Collection(_) => true,
        }
    }

    /// Coerces the value to a number; non-numeric values count as zero.
    pub fn to_number(&self) -> Number {
        match self {
            Value::Int(v) => Number::Int(*v),
            Value::Float(v) => Number::Float(*v),
            Value::Bool(v) => Number::Int(*v as i64),
            Value::String(v) => parse_numeric(v).unwrap_or_default(),
            _ => Number::default(),
        }
    }

    /// Looks up `key` inside a record value. Scalars have no fields.
    pub fn field(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(key),
            Value::Collection(collection) => collection.items().get(key),
            _ => None,
        }
    }

    /// String form used when joining: numbers and strings only.
    ///
    /// Floats use Rust's shortest round-trip decimal form: whole floats
    /// drop the fraction (`2.0` is `"2"`), no exponent notation is used
    /// (`1e20` is `"100000000000000000000"`) and no precision is trimmed
    /// (`0.1 + 0.2` is `"0.30000000000000004"`).
    pub(crate) fn to_join_string(&self) -> Option<String> {
        match self {
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::String(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Takes the value, leaving [Value::Null] in its place.
    pub fn take(&mut self) -> Value {
        std::mem::replace(self, Value::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! int_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

int_value_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Value::Int(v),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<Items> for Value {
    fn from(value: Items) -> Self {
        Value::Array(value)
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Value::Collection(value)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Index(index) => Value::Int(index),
            Key::Name(name) => Value::String(name),
        }
    }
}

impl From<&Key> for Value {
    fn from(value: &Key) -> Self {
        Value::from(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::from_vec(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

/// A macro to create a [Value] from a given expression.
///
/// ```rust
/// use fluent_collection::common::Value;
/// use fluent_collection::val;
///
/// assert_eq!(val!(true), Value::Bool(true));
/// assert_eq!(val!(2.5), Value::Float(2.5));
/// ```
#[macro_export]
macro_rules! val {
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
