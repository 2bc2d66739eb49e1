use crate::common::{Key, Value};
use crate::errors::{CollectionError, CollectionResult, ErrorKind};
use std::fmt::{Debug, Formatter};

type DynamicFn<'a> = Box<dyn FnMut(&[Value]) -> Value + 'a>;

/// A callable whose parameter count is only known at runtime.
///
/// Typed closures go straight to [`Collection::filter`](crate::collection::Collection::filter)
/// and friends. `Callback` is for callers that receive functions as data,
/// such as a scripting bridge, where the declared arity decides what the
/// function is called with:
///
/// * arity 1 - `[value]`
/// * arity 2 - `[value, key]`, the key as [Value::Int] or [Value::String]
///
/// Any other arity is rejected by the operation before the callback runs.
///
/// ```rust
/// use fluent_collection::collection;
/// use fluent_collection::collection::Callback;
/// use fluent_collection::errors::ErrorKind;
///
/// let numbers = collection![1, 2, 3, 4];
///
/// let mut even = Callback::unary(|v| v.as_int().map_or(false, |n| n % 2 == 0));
/// assert_eq!(numbers.filter_callback(&mut even).unwrap().count(), 2);
///
/// let mut three = Callback::new(3, |_args| true.into());
/// let err = numbers.filter_callback(&mut three).unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::InvalidCallbackArity);
/// ```
pub struct Callback<'a> {
    arity: usize,
    func: DynamicFn<'a>,
}

impl<'a> Callback<'a> {
    /// Creates a callback declaring `arity` parameters.
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: FnMut(&[Value]) -> Value + 'a,
    {
        Callback {
            arity,
            func: Box::new(func),
        }
    }

    /// Creates a one-parameter callback receiving the value.
    pub fn unary<F, R>(mut func: F) -> Self
    where
        F: FnMut(&Value) -> R + 'a,
        R: Into<Value>,
    {
        Callback::new(1, move |args| match args.first() {
            Some(value) => func(value).into(),
            None => Value::Null,
        })
    }

    /// Creates a two-parameter callback receiving the value and its key.
    pub fn binary<F, R>(mut func: F) -> Self
    where
        F: FnMut(&Value, &Key) -> R + 'a,
        R: Into<Value>,
    {
        Callback::new(2, move |args| match args {
            [value, key, ..] => func(value, &key_of(key)).into(),
            _ => Value::Null,
        })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Fails with [ErrorKind::InvalidCallbackArity] unless the callback takes
    /// one or two parameters. The message names `operation`.
    pub fn check_arity(&self, operation: &str) -> CollectionResult<()> {
        match self.arity {
            1 | 2 => Ok(()),
            arity => {
                log::error!(
                    "{}() called with a callback declaring {} parameters",
                    operation,
                    arity
                );
                Err(CollectionError::new(
                    &format!(
                        "{}() expects a callback with 1 or 2 parameters, got {}",
                        operation, arity
                    ),
                    ErrorKind::InvalidCallbackArity,
                ))
            }
        }
    }

    /// Calls the callback with the arguments its arity asks for.
    ///
    /// Callers validate arity first with [Callback::check_arity].
    pub(crate) fn invoke(&mut self, value: &Value, key: &Key) -> Value {
        if self.arity >= 2 {
            (self.func)(&[value.clone(), Value::from(key)])
        } else {
            (self.func)(std::slice::from_ref(value))
        }
    }
}

fn key_of(value: &Value) -> Key {
    match value {
        Value::Int(index) => Key::Index(*index),
        Value::String(name) => Key::from(name),
        other => Key::Name(other.to_string()),
    }
}

impl Debug for Callback<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback").field("arity", &self.arity).finish()
    }
}
