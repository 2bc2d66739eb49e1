//! serde support for [Value] and [Collection].
//!
//! Items keyed exactly `0, 1, 2, ...` in order serialize as a sequence;
//! any other key layout serializes as a map with stringified keys in
//! insertion order.

use crate::collection::Collection;
use crate::common::{Items, Key, Value};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt::Formatter;

/// Checks whether the keys are `Index(0), Index(1), ...` in iteration order.
pub fn is_sequential(items: &Items) -> bool {
    items
        .keys()
        .enumerate()
        .all(|(position, key)| key.as_index() == Some(position as i64))
}

/// Finds a float JSON cannot represent, searching nested containers.
pub(crate) fn contains_non_finite(items: &Items) -> bool {
    items.values().any(|value| match value {
        Value::Float(v) => !v.is_finite(),
        Value::Array(nested) => contains_non_finite(nested),
        Value::Collection(nested) => contains_non_finite(nested.items()),
        _ => false,
    })
}

/// Serializable view over items with an encoding mode.
pub(crate) struct EncodedItems<'a> {
    items: &'a Items,
    force_object: bool,
}

impl<'a> EncodedItems<'a> {
    pub(crate) fn new(items: &'a Items, force_object: bool) -> Self {
        EncodedItems {
            items,
            force_object,
        }
    }
}

struct EncodedValue<'a> {
    value: &'a Value,
    force_object: bool,
}

impl Serialize for EncodedItems<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.force_object && is_sequential(self.items) {
            let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
            for value in self.items.values() {
                seq.serialize_element(&EncodedValue {
                    value,
                    force_object: self.force_object,
                })?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.items.len()))?;
            for (key, value) in self.items {
                map.serialize_entry(
                    &key.to_string(),
                    &EncodedValue {
                        value,
                        force_object: self.force_object,
                    },
                )?;
            }
            map.end()
        }
    }
}

impl Serialize for EncodedValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Array(items) => EncodedItems::new(items, self.force_object).serialize(serializer),
            Value::Collection(collection) => {
                EncodedItems::new(collection.items(), self.force_object).serialize(serializer)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EncodedValue {
            value: self,
            force_object: false,
        }
        .serialize(serializer)
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EncodedItems::new(self.items(), false).serialize(serializer)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a JSON-compatible value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Items::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<Value>()? {
            items.insert(Key::from(items.len()), value);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut items = Items::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            // later duplicates overwrite in place
            items.insert(Key::from(key), value);
        }
        Ok(Value::Array(items))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Collection::make)
    }
}
