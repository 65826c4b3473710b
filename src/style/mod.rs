//! Style declarations and their registration.
//!
//! This module provides the raw and registered halves of a style:
//!
//! - [`Declaration`]: An ordered set of property values
//! - [`Styles`]: Named declarations in insertion order
//! - [`StyleRegistry`]: The trait that turns [`Styles`] into tokens
//! - [`StyleSheet`]: The default registry, producing [`RegisteredStyle`] tokens
//! - [`TokenMap`]: Registered tokens keyed by style name

mod declaration;
mod registry;

pub use declaration::{Declaration, Styles};
pub use registry::{RegisteredStyle, StyleId, StyleRegistry, StyleSheet, TokenMap};
