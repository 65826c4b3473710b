//! Breakpoint sheets: styles that switch on at numeric size thresholds.

use indexmap::IndexMap;
use log::{debug, trace};

use super::axis::{Axis, Bound};
use super::threshold::Breakpoints;
use super::ResponsiveSheet;
use crate::error::ConfigurationError;
use crate::style::StyleRegistry;
use crate::viewport::{Dimensions, ViewportProvider};

/// A sheet whose styles resolve against breakpoints on a single axis.
///
/// Each style name resolves to the tokens of every applicable breakpoint
/// that defines it, ordered so that the tightest bound comes last. Merging
/// the list left to right with "later wins" yields the most specific
/// override:
///
/// - `min-*` axes list applicable thresholds ascending
/// - `max-*` axes list applicable thresholds descending
///
/// Nothing is cached. Every read asks the viewport for its current size.
///
/// # Example
///
/// ```rust
/// use responsive_sheet::{Axis, Breakpoints, Declaration, SizedSheet, StyleSheet, Styles, Viewport};
///
/// let breakpoints = Breakpoints::new()
///     .at(576, Styles::new().add("grid", Declaration::new().set("columns", 2)))
///     .at(992, Styles::new().add("grid", Declaration::new().set("columns", 4)));
///
/// let viewport = Viewport::new(320.0, 640.0);
/// let sheet = SizedSheet::new(&StyleSheet, viewport.clone(), Axis::MinWidth, &breakpoints).unwrap();
///
/// assert!(sheet.get("grid").unwrap().is_empty());
///
/// viewport.resize(1024.0, 768.0);
/// let grid = sheet.get("grid").unwrap();
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid[1].declaration().get("columns"), Some(&serde_json::json!(4)));
/// ```
#[derive(Debug, Clone)]
pub struct SizedSheet<T, V> {
    axis: Axis,
    viewport: V,
    /// Every threshold, ascending.
    thresholds: Vec<i32>,
    /// Per style name, the defining breakpoints ascending by threshold.
    entries: IndexMap<String, Vec<(i32, T)>>,
}

impl<T: Clone, V: ViewportProvider> SizedSheet<T, V> {
    /// Builds a sheet, registering every bucket with `registry` once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidThreshold`] if a key is not an
    /// integer, or [`ConfigurationError::DuplicateThreshold`] if two keys
    /// name the same threshold.
    pub fn new<R>(
        registry: &R,
        viewport: V,
        axis: Axis,
        breakpoints: &Breakpoints,
    ) -> Result<Self, ConfigurationError>
    where
        R: StyleRegistry<Token = T> + ?Sized,
    {
        let mut buckets = breakpoints
            .iter()
            .map(|(key, styles)| key.threshold().map(|threshold| (threshold, key, styles)))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: on a tie the later key is the one reported.
        buckets.sort_by_key(|(threshold, _, _)| *threshold);

        if let Some(pair) = buckets.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(ConfigurationError::DuplicateThreshold {
                key: pair[1].1.to_string(),
                threshold: pair[1].0,
            });
        }

        let mut entries: IndexMap<String, Vec<(i32, T)>> = IndexMap::new();
        for (threshold, _, styles) in &buckets {
            let tokens = registry.register(styles);
            for name in styles.names() {
                if let Some(token) = tokens.get(name) {
                    entries
                        .entry(name.to_string())
                        .or_default()
                        .push((*threshold, token.clone()));
                }
            }
        }

        let thresholds: Vec<i32> = buckets.iter().map(|(threshold, _, _)| *threshold).collect();

        debug!(
            target: "responsive_sheet",
            "built {} sheet: {} breakpoints {:?}, {} styles",
            axis,
            thresholds.len(),
            thresholds,
            entries.len()
        );

        Ok(Self {
            axis,
            viewport,
            thresholds,
            entries,
        })
    }

    /// Resolves `name` against the current viewport.
    ///
    /// Returns `None` if no breakpoint defines `name`, and an empty list if
    /// breakpoints define it but none currently applies.
    pub fn get(&self, name: &str) -> Option<Vec<T>> {
        let dimensions = self.viewport.dimensions();
        trace!(
            target: "responsive_sheet",
            "resolving \"{}\" on {} at {}",
            name,
            self.axis,
            self.axis.measure(dimensions)
        );
        self.resolve_at(name, dimensions)
    }

    /// Resolves `name` against explicit dimensions instead of the viewport.
    pub fn resolve_at(&self, name: &str, dimensions: Dimensions) -> Option<Vec<T>> {
        let defined = self.entries.get(name)?;
        let measurement = self.axis.measure(dimensions);

        let applicable = defined
            .iter()
            .filter(|(threshold, _)| self.axis.applies(*threshold, measurement))
            .map(|(_, token)| token.clone());

        let tokens: Vec<T> = match self.axis.bound() {
            Bound::Min => applicable.collect(),
            Bound::Max => applicable.rev().collect(),
        };
        Some(tokens)
    }

    /// Thresholds that apply to the current viewport, in merge order.
    pub fn applicable_thresholds(&self) -> Vec<i32> {
        self.applicable_thresholds_at(self.viewport.dimensions())
    }

    /// Thresholds that apply to `dimensions`, in merge order.
    pub fn applicable_thresholds_at(&self, dimensions: Dimensions) -> Vec<i32> {
        let measurement = self.axis.measure(dimensions);
        let applicable = self
            .thresholds
            .iter()
            .copied()
            .filter(|threshold| self.axis.applies(*threshold, measurement));

        match self.axis.bound() {
            Bound::Min => applicable.collect(),
            Bound::Max => applicable.rev().collect(),
        }
    }
}

impl<T, V> SizedSheet<T, V> {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// All thresholds, ascending.
    pub fn thresholds(&self) -> &[i32] {
        &self.thresholds
    }

    /// Style names, ordered by the first breakpoint defining each.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}

impl<T: Clone, V: ViewportProvider> ResponsiveSheet for SizedSheet<T, V> {
    type Value = Vec<T>;

    fn get(&self, name: &str) -> Option<Vec<T>> {
        SizedSheet::get(self, name)
    }

    fn resolve_at(&self, name: &str, dimensions: Dimensions) -> Option<Vec<T>> {
        SizedSheet::resolve_at(self, name, dimensions)
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        SizedSheet::names(self)
    }
}
