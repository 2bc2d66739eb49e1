mod callback;
#[allow(clippy::module_inception)]
mod collection;
mod json_options;

pub use callback::*;
pub use collection::*;
pub use json_options::*;
