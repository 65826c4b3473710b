//! Responsive sheets.
//!
//! This module provides the two resolution strategies and their inputs:
//!
//! - [`SizedSheet`]: Styles applied at numeric thresholds along one [`Axis`]
//! - [`OrientedSheet`]: Styles chosen by landscape or portrait orientation
//! - [`Breakpoints`]: Threshold-keyed buckets of styles
//! - [`Orientations`]: The landscape and portrait branches
//! - [`ResponsiveSheet`]: The read interface both sheets share
//! - [`Sheet`]: Any of the sheet kinds, as built from a [`SheetConfig`](crate::SheetConfig)
//!
//! Sheets are immutable once built. Reading a style is a pure function of
//! the tables built at construction and the viewport's current size.

mod axis;
mod oriented;
mod sized;
mod threshold;

pub use axis::{Axis, Bound, Dimension};
pub use oriented::{Orientations, OrientedSheet};
pub use sized::SizedSheet;
pub use threshold::{Breakpoints, ThresholdKey};

use crate::style::TokenMap;
use crate::viewport::Dimensions;

/// Read access shared by every responsive sheet.
///
/// Each call to [`get`](Self::get) re-reads the viewport, so two calls
/// separated by a resize may disagree. Calls with no resize in between
/// always agree.
pub trait ResponsiveSheet {
    /// What a style name resolves to.
    type Value;

    /// Resolves `name` against the viewport's current size.
    fn get(&self, name: &str) -> Option<Self::Value>;

    /// Resolves `name` against explicit dimensions.
    fn resolve_at(&self, name: &str, dimensions: Dimensions) -> Option<Self::Value>;

    /// Every resolvable style name, each once.
    fn names(&self) -> impl Iterator<Item = &str>;

    fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }
}

/// A sheet of any kind.
#[derive(Debug, Clone)]
pub enum Sheet<T, V> {
    /// Registered styles with no responsiveness.
    Plain(TokenMap<T>),
    /// Breakpoint styles along one axis.
    Sized(SizedSheet<T, V>),
    /// Landscape/portrait styles.
    Oriented(OrientedSheet<T, V>),
}

impl<T: Clone, V: crate::viewport::ViewportProvider> Sheet<T, V> {
    /// Resolves `name` to the tokens a renderer should merge, in order.
    ///
    /// Plain sheets yield their single token and oriented sheets yield at
    /// most one. Returns `None` only for names the sheet does not define.
    pub fn styles(&self, name: &str) -> Option<Vec<T>> {
        match self {
            Sheet::Plain(tokens) => tokens.get(name).map(|token| vec![token.clone()]),
            Sheet::Sized(sheet) => sheet.get(name),
            Sheet::Oriented(sheet) => {
                if !sheet.contains(name) {
                    return None;
                }
                Some(sheet.get(name).into_iter().collect())
            }
        }
    }
}

impl<T, V> Sheet<T, V> {
    pub fn names(&self) -> Vec<&str> {
        match self {
            Sheet::Plain(tokens) => tokens.names().collect(),
            Sheet::Sized(sheet) => sheet.names().collect(),
            Sheet::Oriented(sheet) => sheet.names().collect(),
        }
    }

    pub fn as_plain(&self) -> Option<&TokenMap<T>> {
        match self {
            Sheet::Plain(tokens) => Some(tokens),
            _ => None,
        }
    }

    pub fn as_sized(&self) -> Option<&SizedSheet<T, V>> {
        match self {
            Sheet::Sized(sheet) => Some(sheet),
            _ => None,
        }
    }

    pub fn as_oriented(&self) -> Option<&OrientedSheet<T, V>> {
        match self {
            Sheet::Oriented(sheet) => Some(sheet),
            _ => None,
        }
    }
}

impl<T, V> From<TokenMap<T>> for Sheet<T, V> {
    fn from(tokens: TokenMap<T>) -> Self {
        Sheet::Plain(tokens)
    }
}

impl<T, V> From<SizedSheet<T, V>> for Sheet<T, V> {
    fn from(sheet: SizedSheet<T, V>) -> Self {
        Sheet::Sized(sheet)
    }
}

impl<T, V> From<OrientedSheet<T, V>> for Sheet<T, V> {
    fn from(sheet: OrientedSheet<T, V>) -> Self {
        Sheet::Oriented(sheet)
    }
}
