//! Viewport measurements.
//!
//! Sheets never store a measurement. They ask a [`ViewportProvider`] for
//! the current [`Dimensions`] every time a style is read, so whoever owns
//! the provider decides when the answer changes.
//!
//! - [`Dimensions`]: A width/height pair, also usable as a fixed provider
//! - [`Viewport`]: A shared, settable measurement handle
//! - [`Orientation`]: Landscape or portrait, derived from dimensions
//! - [`from_fn`]: Adapts a closure into a provider

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Current width and height of the viewport.
///
/// Values are taken as reported; zero and negative sizes are not rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Orientation implied by these dimensions.
    pub fn orientation(&self) -> Orientation {
        Orientation::of(*self)
    }
}

/// Whether the viewport is wider than it is tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Landscape when strictly wider than tall; a square viewport is portrait.
    pub fn of(dimensions: Dimensions) -> Self {
        if dimensions.width > dimensions.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the current viewport measurement.
pub trait ViewportProvider {
    /// Returns the latest known dimensions.
    fn dimensions(&self) -> Dimensions;
}

/// A fixed measurement.
impl ViewportProvider for Dimensions {
    fn dimensions(&self) -> Dimensions {
        *self
    }
}

impl<P: ViewportProvider + ?Sized> ViewportProvider for &P {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }
}

impl<P: ViewportProvider + ?Sized> ViewportProvider for Rc<P> {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }
}

impl<P: ViewportProvider + ?Sized> ViewportProvider for Arc<P> {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }
}

impl<P: ViewportProvider + ?Sized> ViewportProvider for Box<P> {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }
}

/// A shared, settable viewport measurement.
///
/// Clones share the same underlying value: resizing through any handle is
/// observed by every sheet holding another clone. This is what a window
/// event loop updates on resize.
///
/// # Example
///
/// ```rust
/// use responsive_sheet::{Dimensions, Viewport, ViewportProvider};
///
/// let viewport = Viewport::new(320.0, 640.0);
/// let handle = viewport.clone();
///
/// viewport.resize(1024.0, 768.0);
/// assert_eq!(handle.dimensions(), Dimensions::new(1024.0, 768.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    current: Rc<Cell<Dimensions>>,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self::from_dimensions(Dimensions::new(width, height))
    }

    pub fn from_dimensions(dimensions: Dimensions) -> Self {
        Self {
            current: Rc::new(Cell::new(dimensions)),
        }
    }

    /// Replaces the current measurement.
    pub fn set(&self, dimensions: Dimensions) {
        self.current.set(dimensions);
    }

    /// Shorthand for [`set`](Self::set) with separate width and height.
    pub fn resize(&self, width: f64, height: f64) {
        self.set(Dimensions::new(width, height));
    }

    pub fn get(&self) -> Dimensions {
        self.current.get()
    }
}

impl ViewportProvider for Viewport {
    fn dimensions(&self) -> Dimensions {
        self.get()
    }
}

/// Provider backed by a closure. Created with [`from_fn`].
#[derive(Clone)]
pub struct FnViewport<F> {
    measure: F,
}

impl<F> std::fmt::Debug for FnViewport<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnViewport").finish_non_exhaustive()
    }
}

impl<F: Fn() -> Dimensions> ViewportProvider for FnViewport<F> {
    fn dimensions(&self) -> Dimensions {
        (self.measure)()
    }
}

/// Wraps a closure that measures the viewport on demand.
///
/// Useful when the measurement lives in a windowing library's state rather
/// than in a [`Viewport`] handle.
pub fn from_fn<F: Fn() -> Dimensions>(measure: F) -> FnViewport<F> {
    FnViewport { measure }
}
