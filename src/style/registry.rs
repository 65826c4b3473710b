//! Style registration: turning raw declarations into renderer tokens.
//!
//! A [`StyleRegistry`] is the seam between this crate and whatever renders
//! the styles. Sheets call [`StyleRegistry::register`] once per bucket of
//! raw declarations while they are built, and afterwards only hand out the
//! tokens it returned.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;

use super::declaration::{Declaration, Styles};

/// Converts raw style declarations into renderer-usable tokens.
///
/// Implementations must return a map holding a token for every name in the
/// input. Sheets only ever look up names that were present in the input.
pub trait StyleRegistry {
    /// The opaque value handed back to callers for each registered style.
    type Token: Clone;

    /// Registers a collection of named declarations.
    fn register(&self, styles: &Styles) -> TokenMap<Self::Token>;
}

impl<R: StyleRegistry + ?Sized> StyleRegistry for &R {
    type Token = R::Token;

    fn register(&self, styles: &Styles) -> TokenMap<Self::Token> {
        (**self).register(styles)
    }
}

/// Ordered mapping from style name to registered token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMap<T> {
    tokens: IndexMap<String, T>,
}

impl<T> TokenMap<T> {
    pub fn new() -> Self {
        Self {
            tokens: IndexMap::new(),
        }
    }

    /// Returns the token registered under `name`.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.tokens.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Style names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<T> Default for TokenMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(String, T)> for TokenMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// Identifier assigned to each style registered with a [`StyleSheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(u32);

impl StyleId {
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Token produced by [`StyleSheet`]: an id plus the shared declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredStyle {
    id: StyleId,
    declaration: Arc<Declaration>,
}

impl RegisteredStyle {
    pub fn id(&self) -> StyleId {
        self.id
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }
}

static NEXT_STYLE_ID: AtomicU32 = AtomicU32::new(1);

/// The default registry.
///
/// Every registered declaration receives an id that is unique for the
/// lifetime of the process, so tokens from different sheets never compare
/// equal even when their declarations match.
///
/// # Example
///
/// ```rust
/// use responsive_sheet::{Declaration, StyleRegistry, StyleSheet, Styles};
///
/// let styles = Styles::new().add("title", Declaration::new().set("fontWeight", "bold"));
/// let tokens = StyleSheet.register(&styles);
///
/// let title = tokens.get("title").unwrap();
/// assert_eq!(title.declaration(), styles.get("title").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleSheet;

impl StyleRegistry for StyleSheet {
    type Token = RegisteredStyle;

    fn register(&self, styles: &Styles) -> TokenMap<RegisteredStyle> {
        styles
            .iter()
            .map(|(name, declaration)| {
                let id = StyleId(NEXT_STYLE_ID.fetch_add(1, Ordering::Relaxed));
                let token = RegisteredStyle {
                    id,
                    declaration: Arc::new(declaration.clone()),
                };
                (name.to_string(), token)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Styles {
        Styles::new()
            .add("foo", Declaration::new().set("width", 420))
            .add("bar", Declaration::new().set("color", "red"))
    }

    #[test]
    fn test_stylesheet_preserves_names_and_order() {
        let tokens = StyleSheet.register(&sample());
        assert_eq!(tokens.names().collect::<Vec<_>>(), ["foo", "bar"]);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_stylesheet_keeps_declarations() {
        let styles = sample();
        let tokens = StyleSheet.register(&styles);
        assert_eq!(
            tokens.get("foo").map(RegisteredStyle::declaration),
            styles.get("foo")
        );
    }

    #[test]
    fn test_stylesheet_ids_are_unique() {
        let first = StyleSheet.register(&sample());
        let second = StyleSheet.register(&sample());

        let mut ids: Vec<StyleId> = first
            .iter()
            .chain(second.iter())
            .map(|(_, token)| token.id())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert_ne!(first.get("foo"), second.get("foo"));
    }

    #[test]
    fn test_stylesheet_empty_styles() {
        let tokens = StyleSheet.register(&Styles::new());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_registry_through_reference() {
        let registry = &StyleSheet;
        let tokens = registry.register(&sample());
        assert!(tokens.contains("bar"));
    }
}
