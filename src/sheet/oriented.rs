//! Orientation sheets: one set of styles for landscape, one for portrait.

use indexmap::IndexSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::ResponsiveSheet;
use crate::style::{StyleRegistry, Styles, TokenMap};
use crate::viewport::{Dimensions, Orientation, ViewportProvider};

/// Raw styles for each orientation. Either branch may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Orientations {
    pub landscape: Styles,
    pub portrait: Styles,
}

impl Orientations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn landscape(mut self, styles: Styles) -> Self {
        self.landscape = styles;
        self
    }

    pub fn portrait(mut self, styles: Styles) -> Self {
        self.portrait = styles;
        self
    }
}

/// A sheet whose styles switch between a landscape and a portrait branch.
///
/// A name defined in only one branch resolves to `None` while the other
/// orientation is active.
///
/// # Example
///
/// ```rust
/// use responsive_sheet::{Declaration, OrientedSheet, Orientations, StyleSheet, Styles, Viewport};
///
/// let orientations = Orientations::new()
///     .landscape(Styles::new().add("hero", Declaration::new().set("flexDirection", "row")))
///     .portrait(Styles::new().add("hero", Declaration::new().set("flexDirection", "column")));
///
/// let viewport = Viewport::new(800.0, 600.0);
/// let sheet = OrientedSheet::new(&StyleSheet, viewport.clone(), &orientations);
///
/// let hero = sheet.get("hero").unwrap();
/// assert_eq!(hero.declaration().get("flexDirection"), Some(&serde_json::json!("row")));
///
/// viewport.resize(600.0, 800.0);
/// let hero = sheet.get("hero").unwrap();
/// assert_eq!(hero.declaration().get("flexDirection"), Some(&serde_json::json!("column")));
/// ```
#[derive(Debug, Clone)]
pub struct OrientedSheet<T, V> {
    viewport: V,
    landscape: TokenMap<T>,
    portrait: TokenMap<T>,
    names: IndexSet<String>,
}

impl<T: Clone, V: ViewportProvider> OrientedSheet<T, V> {
    /// Builds a sheet, registering each branch once even when it is empty.
    pub fn new<R>(registry: &R, viewport: V, orientations: &Orientations) -> Self
    where
        R: StyleRegistry<Token = T> + ?Sized,
    {
        let landscape = registry.register(&orientations.landscape);
        let portrait = registry.register(&orientations.portrait);

        let names: IndexSet<String> = orientations
            .landscape
            .names()
            .chain(orientations.portrait.names())
            .map(str::to_string)
            .collect();

        debug!(
            target: "responsive_sheet",
            "built oriented sheet: {} landscape, {} portrait, {} styles",
            orientations.landscape.len(),
            orientations.portrait.len(),
            names.len()
        );

        Self {
            viewport,
            landscape,
            portrait,
            names,
        }
    }

    /// Resolves `name` for the current orientation.
    pub fn get(&self, name: &str) -> Option<T> {
        let dimensions = self.viewport.dimensions();
        trace!(
            target: "responsive_sheet",
            "resolving \"{}\" for {}",
            name,
            dimensions.orientation()
        );
        self.resolve_at(name, dimensions)
    }

    /// Resolves `name` for the orientation implied by `dimensions`.
    pub fn resolve_at(&self, name: &str, dimensions: Dimensions) -> Option<T> {
        self.branch(dimensions.orientation()).get(name).cloned()
    }

    /// The orientation the viewport currently reports.
    pub fn orientation(&self) -> Orientation {
        self.viewport.dimensions().orientation()
    }
}

impl<T, V> OrientedSheet<T, V> {
    /// Registered tokens for one orientation.
    pub fn branch(&self, orientation: Orientation) -> &TokenMap<T> {
        match orientation {
            Orientation::Landscape => &self.landscape,
            Orientation::Portrait => &self.portrait,
        }
    }

    /// Landscape names first, then portrait-only names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}

impl<T: Clone, V: ViewportProvider> ResponsiveSheet for OrientedSheet<T, V> {
    type Value = T;

    fn get(&self, name: &str) -> Option<T> {
        OrientedSheet::get(self, name)
    }

    fn resolve_at(&self, name: &str, dimensions: Dimensions) -> Option<T> {
        OrientedSheet::resolve_at(self, name, dimensions)
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        OrientedSheet::names(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Declaration, StyleSheet};
    use crate::viewport::Viewport;
    use std::cell::Cell;

    fn sample() -> Orientations {
        Orientations::new()
            .landscape(Styles::new().add("foo", Declaration::new().set("width", 420)))
            .portrait(
                Styles::new()
                    .add("foo", Declaration::new().set("height", 420))
                    .add("bar", Declaration::new().set("color", "red")),
            )
    }

    #[test]
    fn test_landscape_and_portrait() {
        let styles = sample();
        let viewport = Viewport::new(100.0, 0.0);
        let sheet = OrientedSheet::new(&StyleSheet, viewport.clone(), &styles);

        assert_eq!(
            sheet.get("foo").map(|t| t.declaration().clone()).as_ref(),
            styles.landscape.get("foo")
        );
        assert!(sheet.get("bar").is_none());

        viewport.resize(0.0, 100.0);
        assert_eq!(
            sheet.get("foo").map(|t| t.declaration().clone()).as_ref(),
            styles.portrait.get("foo")
        );
        assert_eq!(
            sheet.get("bar").map(|t| t.declaration().clone()).as_ref(),
            styles.portrait.get("bar")
        );
    }

    #[test]
    fn test_only_one_orientation_defined() {
        let styles = Orientations::new()
            .landscape(Styles::new().add("foo", Declaration::new().set("width", 420)));
        let sheet = OrientedSheet::new(&StyleSheet, Dimensions::new(0.0, 100.0), &styles);

        assert!(sheet.contains("foo"));
        assert!(sheet.get("foo").is_none());
    }

    #[test]
    fn test_empty_orientations() {
        let sheet = OrientedSheet::new(&StyleSheet, Dimensions::default(), &Orientations::new());
        assert!(sheet.is_empty());
        assert!(sheet.get("foo").is_none());
    }

    #[test]
    fn test_square_viewport_uses_portrait() {
        let sheet = OrientedSheet::new(&StyleSheet, Dimensions::new(300.0, 300.0), &sample());
        assert_eq!(sheet.orientation(), Orientation::Portrait);
        assert!(sheet.get("bar").is_some());
    }

    #[test]
    fn test_names_landscape_first_without_duplicates() {
        let sheet = OrientedSheet::new(&StyleSheet, Dimensions::default(), &sample());
        assert_eq!(sheet.names().collect::<Vec<_>>(), ["foo", "bar"]);
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_resolve_at_ignores_viewport() {
        let sheet = OrientedSheet::new(&StyleSheet, Dimensions::new(0.0, 100.0), &sample());
        let landscape = sheet
            .resolve_at("foo", Dimensions::new(100.0, 0.0))
            .map(|t| t.declaration().clone());
        assert_eq!(landscape.as_ref(), sample().landscape.get("foo"));
    }

    #[test]
    fn test_orientations_deserialize_missing_branch() {
        let orientations: Orientations =
            serde_json::from_str(r#"{ "portrait": { "bar": { "color": "red" } } }"#).unwrap();
        assert!(orientations.landscape.is_empty());
        assert!(orientations.portrait.has("bar"));
    }

    #[test]
    fn test_orientations_reject_unknown_branch() {
        let result = serde_json::from_str::<Orientations>(r#"{ "sideways": {} }"#);
        assert!(result.is_err());
    }

    struct CountingRegistry {
        calls: Cell<usize>,
    }

    impl StyleRegistry for CountingRegistry {
        type Token = ();

        fn register(&self, styles: &Styles) -> TokenMap<()> {
            self.calls.set(self.calls.get() + 1);
            styles.names().map(|name| (name.to_string(), ())).collect()
        }
    }

    #[test]
    fn test_both_branches_registered_even_when_empty() {
        let registry = CountingRegistry {
            calls: Cell::new(0),
        };
        OrientedSheet::new(&registry, Dimensions::default(), &Orientations::new());
        assert_eq!(registry.calls.get(), 2);
    }
}
