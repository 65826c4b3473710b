//! # Responsive Sheet - Viewport-aware named styles
//!
//! `responsive-sheet` builds sheets of named styles whose values are
//! recomputed from the current viewport every time they are read.
//!
//! ## Core Concepts
//!
//! - [`Styles`]: Named raw [`Declaration`]s, in insertion order
//! - [`StyleRegistry`]: Turns raw styles into renderer tokens ([`StyleSheet`] by default)
//! - [`ViewportProvider`]: Reports the current [`Dimensions`] ([`Viewport`] is a settable handle)
//! - [`SizedSheet`]: Styles switched on at numeric breakpoints along an [`Axis`]
//! - [`OrientedSheet`]: Styles switched between landscape and portrait
//! - [`SheetConfig`]: Sheet definitions loaded from JSON or YAML
//!
//! ## Breakpoints
//!
//! A sized sheet resolves each style name to the tokens of every breakpoint
//! that currently applies and defines it. The list is ordered so that the
//! most specific breakpoint comes last, ready for a "later wins" merge:
//!
//! | Axis | Applies when | Order |
//! |------|--------------|-------|
//! | `min-width` / `min-height` | `threshold <= size` | ascending |
//! | `max-width` / `max-height` | `size <= threshold` | descending |
//!
//! ```rust
//! use responsive_sheet::{create_sized, Breakpoints, Declaration, StyleSheet, Styles, Viewport};
//!
//! let breakpoints = Breakpoints::new()
//!     .at(10, Styles::new().add("foo", Declaration::new().set("width", 10)))
//!     .at(100, Styles::new().add("foo", Declaration::new().set("width", 100)));
//!
//! let viewport = Viewport::new(0.0, 0.0);
//! let sheet = create_sized(&StyleSheet, viewport.clone(), "min-width", &breakpoints).unwrap();
//!
//! assert!(sheet.get("foo").unwrap().is_empty());
//!
//! viewport.resize(100.0, 0.0);
//! assert_eq!(sheet.get("foo").unwrap().len(), 2);
//! ```
//!
//! ## Orientation
//!
//! An oriented sheet picks the landscape branch when the viewport is
//! strictly wider than tall, and the portrait branch otherwise.
//!
//! ```rust
//! use responsive_sheet::{create_oriented, Declaration, Dimensions, Orientations, StyleSheet, Styles};
//!
//! let orientations = Orientations::new()
//!     .portrait(Styles::new().add("bar", Declaration::new().set("color", "red")));
//!
//! let sheet = create_oriented(&StyleSheet, Dimensions::new(100.0, 0.0), &orientations);
//! assert!(sheet.get("bar").is_none());
//! ```
//!
//! ## Logging
//!
//! Construction is logged at `debug` and every resolution at `trace`
//! through the [`log`] facade, under the `responsive_sheet` target.

pub mod config;
mod error;
pub mod sheet;
pub mod style;
pub mod viewport;

pub use config::SheetConfig;
pub use error::{ConfigurationError, LoadError};
pub use sheet::{
    Axis, Bound, Breakpoints, Dimension, Orientations, OrientedSheet, ResponsiveSheet, Sheet,
    SizedSheet, ThresholdKey,
};
pub use style::{Declaration, RegisteredStyle, StyleId, StyleRegistry, StyleSheet, Styles, TokenMap};
pub use viewport::{from_fn, Dimensions, FnViewport, Orientation, Viewport, ViewportProvider};

/// Registers `styles` and returns the tokens unchanged.
///
/// No responsiveness is involved. This exists so plain styles can be built
/// through the same entry points as responsive ones.
pub fn create<R>(registry: &R, styles: &Styles) -> TokenMap<R::Token>
where
    R: StyleRegistry + ?Sized,
{
    registry.register(styles)
}

/// Builds a breakpoint sheet from an axis name.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidAxis`] unless `axis` is one of
/// `min-width`, `max-width`, `min-height` or `max-height`, and the errors of
/// [`SizedSheet::new`] for bad breakpoint keys.
pub fn create_sized<R, V>(
    registry: &R,
    viewport: V,
    axis: &str,
    breakpoints: &Breakpoints,
) -> Result<SizedSheet<R::Token, V>, ConfigurationError>
where
    R: StyleRegistry + ?Sized,
    V: ViewportProvider,
{
    let axis: Axis = axis.parse()?;
    SizedSheet::new(registry, viewport, axis, breakpoints)
}

/// Builds an orientation sheet. Missing branches count as empty.
pub fn create_oriented<R, V>(
    registry: &R,
    viewport: V,
    orientations: &Orientations,
) -> OrientedSheet<R::Token, V>
where
    R: StyleRegistry + ?Sized,
    V: ViewportProvider,
{
    OrientedSheet::new(registry, viewport, orientations)
}
