//! Raw style declarations and named style collections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single raw style declaration: an ordered set of property values.
///
/// The crate never interprets properties. Checking that `fontSize` is a
/// number or that `color` names a real color is the registry's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declaration {
    properties: Map<String, Value>,
}

impl Declaration {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated declaration for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use responsive_sheet::Declaration;
    ///
    /// let header = Declaration::new().set("fontSize", 18).set("color", "red");
    /// assert_eq!(header.get("fontSize"), Some(&serde_json::json!(18)));
    /// ```
    pub fn set(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(property.to_string(), value.into());
        self
    }

    /// Returns the value of a property, if set.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    /// Iterates over properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl From<Map<String, Value>> for Declaration {
    fn from(properties: Map<String, Value>) -> Self {
        Self { properties }
    }
}

/// An ordered collection of named style declarations.
///
/// Insertion order is kept: it decides the order in which names appear
/// on sheets built from these styles.
///
/// # Example
///
/// ```rust
/// use responsive_sheet::{Declaration, Styles};
///
/// let styles = Styles::new()
///     .add("header", Declaration::new().set("fontSize", 24))
///     .add("body", Declaration::new().set("fontSize", 14));
///
/// assert_eq!(styles.names().collect::<Vec<_>>(), ["header", "body"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles {
    entries: IndexMap<String, Declaration>,
}

impl Styles {
    /// Creates an empty style collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named declaration, returning the updated collection.
    ///
    /// Adding a name twice replaces the earlier declaration but keeps its
    /// original position.
    pub fn add(mut self, name: &str, declaration: Declaration) -> Self {
        self.entries.insert(name.to_string(), declaration);
        self
    }

    /// Returns the declaration registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.entries.get(name)
    }

    /// Returns true if a declaration exists for `name`.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Style names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(name, declaration)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Declaration)> for Styles {
    fn from_iter<I: IntoIterator<Item = (String, Declaration)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
