use crate::collection::{Callback, JsonOptions};
use crate::common::serialization::{contains_non_finite, EncodedItems};
use crate::common::value::items_eq;
use crate::common::{Items, Key, Number, Value};
use crate::errors::{CollectionError, CollectionResult, ErrorKind};
use itertools::Itertools;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt::{Debug, Display, Formatter};

/// An ordered collection of [Value]s keyed by integer index or string name.
///
/// A collection behaves like an ordered associative array: keys are unique,
/// iteration follows insertion order, and appending with [Collection::push]
/// uses the next free integer key. On top of that it offers a chainable API
/// for mutation, transformation, aggregation and serialization.
///
/// Transformations ([map](Collection::map), [filter](Collection::filter),
/// [reject](Collection::reject), [flatten](Collection::flatten)) return new
/// collections and leave the receiver untouched. Mutations
/// ([push](Collection::push), [pop](Collection::pop),
/// [shift](Collection::shift), [set](Collection::set),
/// [remove](Collection::remove)) change it in place.
///
/// Queries on an empty collection ([first](Collection::first),
/// [last](Collection::last), [pop](Collection::pop),
/// [shift](Collection::shift)) return `None`, while strict key access through
/// [get](Collection::get) fails with [ErrorKind::KeyNotFound].
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection;
/// use fluent_collection::common::Value;
///
/// let mut numbers = collection![1, 2, 3];
/// numbers.push(4).push(5);
///
/// let total = numbers
///     .filter(|v| v.as_int().map_or(false, |n| n % 2 == 1))
///     .reduce(|acc, v| acc + v.as_int().unwrap_or(0), 0);
/// assert_eq!(total, 9);
///
/// assert_eq!(numbers.pop(), Some(Value::Int(5)));
/// assert_eq!(numbers.implode(","), "1,2,3,4");
/// ```
#[derive(Clone)]
pub struct Collection {
    items: Items,
    /// Key used by the next `push`, `None` once `i64::MAX` is taken.
    next_index: Option<i64>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Collection {
            items: Items::new(),
            next_index: Some(0),
        }
    }

    /// Creates a collection from a value.
    ///
    /// Arrays and collections are copied in with their keys; any other
    /// value, `Null` included, becomes the single element at key `0`.
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    /// use fluent_collection::common::Value;
    ///
    /// let single = Collection::make("solo");
    /// assert_eq!(single.count(), 1);
    /// assert_eq!(single.first(), Some(&Value::from("solo")));
    ///
    /// let copied = Collection::make(vec![1, 2, 3]);
    /// assert_eq!(copied.count(), 3);
    /// ```
    pub fn make<T: Into<Value>>(value: T) -> Self {
        match value.into() {
            Value::Array(items) => Collection::from(items),
            Value::Collection(collection) => collection,
            other => {
                let mut collection = Collection::new();
                collection.push(other);
                collection
            }
        }
    }

    /// Parses a JSON document into a collection.
    ///
    /// Arrays produce sequential keys, objects keep their keys (numeric
    /// strings become indices) and a scalar document is wrapped as a single
    /// element, as with [Collection::make].
    pub fn from_json(json: &str) -> CollectionResult<Self> {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Ok(Collection::make(value)),
            Err(err) => {
                log::error!("Failed to parse collection from JSON: {}", err);
                Err(CollectionError::new_with_cause(
                    "Failed to parse collection from JSON",
                    ErrorKind::EncodingError,
                    err.into(),
                ))
            }
        }
    }

    /// Appends `item` at the next free integer key.
    ///
    /// Once an entry sits at `i64::MAX` there is no next key; the item is
    /// then dropped with an error logged and existing entries stay intact.
    pub fn push<T: Into<Value>>(&mut self, item: T) -> &mut Self {
        match self.next_index {
            Some(index) => {
                self.items.insert(Key::Index(index), item.into());
                self.next_index = index.checked_add(1);
            }
            None => {
                log::error!(
                    "Cannot push onto collection, integer key {} is already taken",
                    i64::MAX
                );
            }
        }
        self
    }

    /// Alias for [Collection::push].
    pub fn add<T: Into<Value>>(&mut self, item: T) -> &mut Self {
        self.push(item)
    }

    /// Pushes every value of `values` in order.
    pub fn put_all<I, T>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        for value in values {
            self.push(value);
        }
        self
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<Value> {
        let (key, value) = self.items.pop()?;
        // popping the most recently pushed index frees it again
        if let Some(index) = key.as_index() {
            let last_pushed = match self.next_index {
                Some(next) if next > 0 => Some(next - 1),
                Some(_) => None,
                None => Some(i64::MAX),
            };
            if last_pushed == Some(index) {
                self.next_index = Some(index);
            }
        }
        Some(value)
    }

    /// Removes and returns the first element, or `None` if empty.
    ///
    /// Remaining integer keys are renumbered `0, 1, 2, ...` in iteration
    /// order; string keys keep their names.
    ///
    /// ```rust
    /// use fluent_collection::collection;
    /// use fluent_collection::common::{Key, Value};
    ///
    /// let mut letters = collection![ "a", "b", "c" ];
    /// assert_eq!(letters.shift(), Some(Value::from("a")));
    /// assert_eq!(letters.keys().cloned().collect::<Vec<_>>(), vec![Key::Index(0), Key::Index(1)]);
    /// assert_eq!(letters.first(), Some(&Value::from("b")));
    /// ```
    pub fn shift(&mut self) -> Option<Value> {
        let (_, value) = self.items.shift_remove_index(0)?;
        self.reindex();
        Some(value)
    }

    fn reindex(&mut self) {
        let mut next = 0i64;
        let items = std::mem::take(&mut self.items);
        self.items = items
            .into_iter()
            .map(|(key, value)| match key {
                Key::Index(_) => {
                    let key = Key::Index(next);
                    next += 1;
                    (key, value)
                }
                name => (name, value),
            })
            .collect();
        self.next_index = Some(next);
        log::debug!("Re-indexed {} integer keys", next);
    }

    /// Inserts or replaces the value at `key`. A replaced entry keeps its
    /// position.
    pub fn set<K: Into<Key>, T: Into<Value>>(&mut self, key: K, value: T) -> &mut Self {
        let key = key.into().canonical();
        if let (Key::Index(index), Some(next)) = (&key, self.next_index) {
            if *index >= next {
                self.next_index = index.checked_add(1);
            }
        }
        self.items.insert(key, value.into());
        self
    }

    /// Removes the entry at `key`, returning its value if it was present.
    /// The order of the remaining entries is preserved.
    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Option<Value> {
        self.items.shift_remove(&key.into().canonical())
    }

    /// Checks whether an entry exists at `key`.
    pub fn has<K: Into<Key>>(&self, key: K) -> bool {
        self.items.contains_key(&key.into().canonical())
    }

    /// Returns the value at `key`.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::KeyNotFound] if the key is missing.
    pub fn get<K: Into<Key>>(&self, key: K) -> CollectionResult<&Value> {
        let key = key.into().canonical();
        match self.items.get(&key) {
            Some(value) => Ok(value),
            None => Err(key_not_found(&key)),
        }
    }

    /// Returns a mutable reference to the value at `key`.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::KeyNotFound] if the key is missing.
    pub fn get_mut<K: Into<Key>>(&mut self, key: K) -> CollectionResult<&mut Value> {
        let key = key.into().canonical();
        match self.items.get_mut(&key) {
            Some(value) => Ok(value),
            None => Err(key_not_found(&key)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns the number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// First element in iteration order, `None` if empty.
    pub fn first(&self) -> Option<&Value> {
        self.items.first().map(|(_, value)| value)
    }

    /// Last element in iteration order, `None` if empty.
    pub fn last(&self) -> Option<&Value> {
        self.items.last().map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.items.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.items.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.items.iter()
    }

    /// Calls `f` with every value in order.
    pub fn each<F: FnMut(&Value)>(&self, mut f: F) -> &Self {
        self.items.values().for_each(|value| f(value));
        self
    }

    /// Calls `f` with every value and its key in order.
    pub fn each_with_key<F: FnMut(&Value, &Key)>(&self, mut f: F) -> &Self {
        self.items.iter().for_each(|(key, value)| f(value, key));
        self
    }

    /// Calls `callback` with every element, as its arity asks.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::InvalidCallbackArity] before any call if the
    /// callback does not take one or two parameters.
    pub fn each_callback(&self, callback: &mut Callback) -> CollectionResult<&Self> {
        callback.check_arity("each")?;
        for (key, value) in &self.items {
            callback.invoke(value, key);
        }
        Ok(self)
    }

    /// Returns a new collection with the same keys and every value replaced
    /// by `f(value)`.
    pub fn map<F, R>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Value) -> R,
        R: Into<Value>,
    {
        Collection {
            items: self
                .items
                .iter()
                .map(|(key, value)| (key.clone(), f(value).into()))
                .collect(),
            next_index: self.next_index,
        }
    }

    fn select<F: FnMut(&Value, &Key) -> bool>(&self, keep: bool, mut test: F) -> Collection {
        let items: Items = self
            .items
            .iter()
            .filter(|&(key, value)| test(value, key) == keep)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Collection::from(items)
    }

    /// Keeps the elements for which `f(value)` is true. Keys are preserved.
    pub fn filter<F: FnMut(&Value) -> bool>(&self, mut f: F) -> Collection {
        self.select(true, |value, _| f(value))
    }

    /// Keeps the elements for which `f(value, key)` is true. Keys are preserved.
    pub fn filter_with_key<F: FnMut(&Value, &Key) -> bool>(&self, f: F) -> Collection {
        self.select(true, f)
    }

    /// Keeps the elements for which the callback result is truthy.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::InvalidCallbackArity] if the callback does not
    /// take one or two parameters. The receiver is never modified.
    pub fn filter_callback(&self, callback: &mut Callback) -> CollectionResult<Collection> {
        callback.check_arity("filter")?;
        Ok(self.select(true, |value, key| callback.invoke(value, key).is_truthy()))
    }

    /// Drops the elements for which `f(value)` is true.
    pub fn reject<F: FnMut(&Value) -> bool>(&self, mut f: F) -> Collection {
        self.select(false, |value, _| f(value))
    }

    /// Drops the elements for which `f(value, key)` is true.
    pub fn reject_with_key<F: FnMut(&Value, &Key) -> bool>(&self, f: F) -> Collection {
        self.select(false, f)
    }

    /// Drops the elements for which the callback result is truthy.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::InvalidCallbackArity] if the callback does not
    /// take one or two parameters.
    pub fn reject_callback(&self, callback: &mut Callback) -> CollectionResult<Collection> {
        callback.check_arity("reject")?;
        Ok(self.select(false, |value, key| callback.invoke(value, key).is_truthy()))
    }

    /// True when `f` holds for every value. Vacuously true when empty.
    pub fn every<F: FnMut(&Value) -> bool>(&self, f: F) -> bool {
        self.filter(f).count() == self.count()
    }

    pub fn every_with_key<F: FnMut(&Value, &Key) -> bool>(&self, f: F) -> bool {
        self.filter_with_key(f).count() == self.count()
    }

    /// True when the callback result is truthy for every element.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::InvalidCallbackArity] if the callback does not
    /// take one or two parameters.
    pub fn every_callback(&self, callback: &mut Callback) -> CollectionResult<bool> {
        callback.check_arity("every")?;
        let matched = self.select(true, |value, key| callback.invoke(value, key).is_truthy());
        Ok(matched.count() == self.count())
    }

    /// Left fold over the values in order.
    pub fn reduce<T, F: FnMut(T, &Value) -> T>(&self, f: F, initial: T) -> T {
        self.items.values().fold(initial, f)
    }

    /// Sums the values. Numeric strings count as their number, other
    /// non-numeric values as zero. The result is [Value::Int] unless a float
    /// is involved or the integer sum overflows.
    pub fn sum(&self) -> Value {
        self.items
            .values()
            .map(Value::to_number)
            .fold(Number::default(), |total, n| total + n)
            .into()
    }

    /// Sums `field` across record elements (nested arrays or collections).
    /// Scalars and records without the field contribute zero.
    ///
    /// ```rust
    /// use fluent_collection::collection;
    /// use fluent_collection::common::Value;
    ///
    /// let people = collection![{ "age": 30 }, { "age": 26 }, { "age": 44 }];
    /// assert_eq!(people.sum_by("age"), Value::Int(100));
    /// ```
    pub fn sum_by<K: Into<Key>>(&self, field: K) -> Value {
        let field = field.into();
        self.items
            .values()
            .map(|value| value.field(&field).map(Value::to_number).unwrap_or_default())
            .fold(Number::default(), |total, n| total + n)
            .into()
    }

    /// Returns every terminal value, descending depth-first into nested
    /// arrays and collections, re-indexed from `0`.
    pub fn flatten(&self) -> Collection {
        fn flatten_into(items: &Items, out: &mut Collection) {
            for value in items.values() {
                match value {
                    Value::Array(nested) => flatten_into(nested, out),
                    Value::Collection(nested) => flatten_into(&nested.items, out),
                    terminal => {
                        out.push(terminal.clone());
                    }
                }
            }
        }

        let mut flat = Collection::new();
        flatten_into(&self.items, &mut flat);
        flat
    }

    /// Joins the numeric and string elements with `glue`, skipping all
    /// other values.
    pub fn implode(&self, glue: &str) -> String {
        self.items
            .values()
            .filter_map(Value::to_join_string)
            .join(glue)
    }

    /// Returns a copy of the underlying items. Nested collections are not
    /// converted.
    pub fn to_array(&self) -> Items {
        self.items.clone()
    }

    /// Borrows the underlying items.
    pub fn items(&self) -> &Items {
        &self.items
    }

    pub fn into_items(self) -> Items {
        self.items
    }

    /// Encodes the collection as JSON.
    ///
    /// Collections keyed `0, 1, 2, ...` in order become arrays, anything else
    /// an object with keys in insertion order.
    ///
    /// # Errors
    ///
    /// Fails with [ErrorKind::EncodingError] if the collection holds a NaN or
    /// infinite float, which JSON cannot represent.
    pub fn to_json(&self, options: &JsonOptions) -> CollectionResult<String> {
        if contains_non_finite(&self.items) {
            log::error!("Collection contains a non-finite float that JSON cannot represent");
            return Err(CollectionError::new(
                "Inf and NaN cannot be JSON encoded",
                ErrorKind::EncodingError,
            ));
        }

        let encoded = EncodedItems::new(&self.items, options.is_force_object());
        let result = if options.is_pretty_print() {
            let mut buffer = Vec::with_capacity(self.items.len() * 16);
            let mut serializer = serde_json::Serializer::with_formatter(
                &mut buffer,
                PrettyFormatter::with_indent(b"    "),
            );
            encoded
                .serialize(&mut serializer)
                .map_err(CollectionError::from)
                .and_then(|_| String::from_utf8(buffer).map_err(CollectionError::from))
        } else {
            serde_json::to_string(&encoded).map_err(CollectionError::from)
        };

        result.map_err(|err| {
            log::error!("Failed to encode collection as JSON: {}", err);
            err
        })
    }
}

fn key_not_found(key: &Key) -> CollectionError {
    log::error!("Key '{}' not found in collection", key);
    CollectionError::new(
        &format!("Key '{}' not found in collection", key),
        ErrorKind::KeyNotFound,
    )
}

impl Default for Collection {
    fn default() -> Self {
        Collection::new()
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        items_eq(&self.items, &other.items)
    }
}

impl Debug for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Collection ")?;
        f.debug_map().entries(self.items.iter()).finish()
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

impl From<Items> for Collection {
    fn from(items: Items) -> Self {
        let items: Items = items
            .into_iter()
            .map(|(key, value)| (key.canonical(), value))
            .collect();
        let next_index = match items.keys().filter_map(Key::as_index).max() {
            Some(max) => max.checked_add(1).map(|next| next.max(0)),
            None => Some(0),
        };
        Collection { items, next_index }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Collection {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Value::from).collect()
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut collection = Collection::new();
        collection.put_all(iter);
        collection
    }
}

impl FromIterator<(Key, Value)> for Collection {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for (key, value) in iter {
            collection.set(key, value);
        }
        collection
    }
}

impl Extend<Value> for Collection {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[doc(hidden)]
pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [Collection] with literal syntax.
///
/// A comma-separated list builds a sequential collection; `key: value`
/// pairs build a keyed one. Nested `[...]` and `{...}` become
/// [Value::Array] elements. Wrap anything longer than a single token, such
/// as a negative number or a function call, in parentheses.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection;
///
/// let empty = collection![];
/// assert!(empty.is_empty());
///
/// let list = collection![1, "two", 3.0, (-4)];
/// assert_eq!(list.count(), 4);
///
/// let record = collection! {
///     name: "Ann",
///     "age": 30,
///     tags: ["admin", "user"],
///     address: { city: "Oslo" }
/// };
/// assert_eq!(record.count(), 4);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::collection::Collection::new()
    };

    ($($key:tt : $value:tt),+ $(,)?) => {
        {
            let mut collection = $crate::collection::Collection::new();
            $(
                collection.set(
                    $crate::common::Key::from($crate::collection::normalize(stringify!($key))),
                    $crate::collection_value!($value),
                );
            )+
            collection
        }
    };

    ($($value:tt),+ $(,)?) => {
        {
            let mut collection = $crate::collection::Collection::new();
            $(
                collection.push($crate::collection_value!($value));
            )+
            collection
        }
    };
}

/// Helper macro converting the elements of [collection!].
#[doc(hidden)]
#[macro_export]
macro_rules! collection_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Array($crate::collection!($($key : $value),*).into_items())
    };

    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array($crate::collection!($($value),*).into_items())
    };

    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
