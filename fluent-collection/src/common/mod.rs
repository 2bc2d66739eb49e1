mod key;
pub mod serialization;
pub mod value;

pub use key::*;
pub use value::{Items, Number, Value};
