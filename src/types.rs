use serde::Serialize;

/// How the qualifying prefix changes when descending into a nested object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMode {
    /// The child prefix is only the enclosing key: `{"a":{"b":{"name":..}}}` -> `b_name`
    #[default]
    Replace,
    /// The child prefix extends the parent's: `{"a":{"b":{"name":..}}}` -> `a_b_name`
    Accumulate,
}

/// A translatable string found in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Qualified property name, e.g. "foo_name"
    pub name: String,

    /// Raw (unescaped) string value
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Configuration for the extraction process
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Key whose string values become properties
    pub marker: String,

    /// Separator between prefix parts and the marker key
    pub separator: String,

    /// Whether nested keys replace or extend the prefix
    pub prefix_mode: PrefixMode,
}

impl ExtractConfig {
    /// Build the prefix used for the children of `key`
    pub(crate) fn child_prefix(&self, prefix: &str, key: &str) -> String {
        match self.prefix_mode {
            PrefixMode::Replace => key.to_string(),
            PrefixMode::Accumulate if prefix.is_empty() => key.to_string(),
            PrefixMode::Accumulate => format!("{}{}{}", prefix, self.separator, key),
        }
    }

    /// Qualified name for a marker found under `prefix`
    pub(crate) fn qualify(&self, prefix: &str, key: &str) -> String {
        format!("{}{}{}", prefix, self.separator, key)
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            marker: String::from("name"),
            separator: String::from("_"),
            prefix_mode: PrefixMode::Replace,
        }
    }
}
