//! # fluent-collection
//!
//! An ordered, array-like collection of dynamic values with a fluent API.
//!
//! A [`Collection`](collection::Collection) holds [`Value`](common::Value)s
//! under [`Key`](common::Key)s that are either integer indices or string
//! names, in insertion order. It supports:
//!
//! - **Mutation**: `push`, `add`, `pop`, `shift`, `set`, `remove`
//! - **Queries**: `count`, `is_empty`, `first`, `last`, `has`, `get`
//! - **Transformation**: `map`, `filter`, `reject`, `flatten`
//! - **Aggregation**: `every`, `reduce`, `sum`, `sum_by`, `implode`
//! - **Serialization**: `to_array`, `to_json`, `from_json`
//!
//! ## Quick Start
//!
//! ```rust
//! use fluent_collection::collection;
//! use fluent_collection::collection::JsonOptions;
//! use fluent_collection::common::Value;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut people = collection![
//!     { name: "Ann", age: 30 },
//!     { name: "Bob", age: 26 }
//! ];
//! people.push(collection! { name: "Cid", age: 44 });
//!
//! assert_eq!(people.sum_by("age"), Value::Int(100));
//!
//! let names = people.map(|p| p.field(&"name".into()).cloned().unwrap_or_default());
//! assert_eq!(names.implode(", "), "Ann, Bob, Cid");
//! assert_eq!(names.to_json(&JsonOptions::default())?, r#"["Ann","Bob","Cid"]"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - the `Collection` type, callbacks and JSON options
//! - [`common`] - keys, values and serde support
//! - [`errors`] - error types and result definitions

pub mod collection;
pub mod common;
pub mod errors;
