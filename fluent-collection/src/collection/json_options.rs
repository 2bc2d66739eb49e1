/// Options controlling [`Collection::to_json`](crate::collection::Collection::to_json).
///
/// `JsonOptions` follows the builder style: start from [JsonOptions::new] (or
/// `Default`) and chain setters. The default is compact output that renders
/// sequential collections as arrays and everything else as objects.
///
/// Options can also be loaded from any serde format, so an application can
/// keep them alongside the rest of its settings.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection;
/// use fluent_collection::collection::JsonOptions;
///
/// let numbers = collection![1, 2];
/// assert_eq!(numbers.to_json(&JsonOptions::default()).unwrap(), "[1,2]");
///
/// let options = JsonOptions::new().force_object(true);
/// assert_eq!(numbers.to_json(&options).unwrap(), r#"{"0":1,"1":2}"#);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    pretty_print: bool,
    force_object: bool,
}

impl JsonOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        JsonOptions::default()
    }

    /// Emits multi-line output indented by four spaces.
    pub fn pretty_print(mut self, enabled: bool) -> Self {
        self.pretty_print = enabled;
        self
    }

    /// Renders sequential collections as objects keyed `"0"`, `"1"`, ...
    pub fn force_object(mut self, enabled: bool) -> Self {
        self.force_object = enabled;
        self
    }

    pub fn is_pretty_print(&self) -> bool {
        self.pretty_print
    }

    pub fn is_force_object(&self) -> bool {
        self.force_object
    }
}
