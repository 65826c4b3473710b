//! Declarative sheet definitions loaded from JSON or YAML.
//!
//! A definition names its kind with a `kind` field and carries the same
//! data the builder API takes:
//!
//! ```yaml
//! kind: sized
//! axis: min-width
//! breakpoints:
//!   576:
//!     header: { fontSize: 18 }
//!   "992px":
//!     header: { fontSize: 24 }
//! ```
//!
//! ```yaml
//! kind: oriented
//! landscape:
//!   hero: { flexDirection: row }
//! portrait:
//!   hero: { flexDirection: column }
//! ```
//!
//! ```yaml
//! kind: plain
//! styles:
//!   title: { fontWeight: bold }
//! ```
//!
//! Parsing only checks shape. Axis names are validated during parsing;
//! threshold keys are validated when the definition is built.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, LoadError};
use crate::sheet::{Axis, Breakpoints, Orientations, OrientedSheet, Sheet, SizedSheet};
use crate::style::{StyleRegistry, Styles};
use crate::viewport::ViewportProvider;

/// A sheet definition, as read from a file.
///
/// Fields other than `kind` and the ones a variant declares are rejected,
/// so a misspelled `landscape` or `breakpoints` fails instead of loading an
/// empty sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum SheetConfig {
    Plain {
        #[serde(default)]
        styles: Styles,
    },
    Sized {
        axis: Axis,
        #[serde(default)]
        breakpoints: Breakpoints,
    },
    Oriented {
        #[serde(default)]
        landscape: Styles,
        #[serde(default)]
        portrait: Styles,
    },
}

impl SheetConfig {
    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads a definition from disk, choosing the format by extension.
    ///
    /// `.json` is parsed as JSON; `.yaml` and `.yml` as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnsupportedFormat`] for any other extension,
    /// [`LoadError::Io`] if the file cannot be read, or a parse error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, LoadError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = parse(&source)?;
        debug!(
            target: "responsive_sheet",
            "loaded {} sheet definition from {}",
            config.kind(),
            path.display()
        );
        Ok(config)
    }

    /// The `kind` tag of this definition.
    pub fn kind(&self) -> &'static str {
        match self {
            SheetConfig::Plain { .. } => "plain",
            SheetConfig::Sized { .. } => "sized",
            SheetConfig::Oriented { .. } => "oriented",
        }
    }

    /// Builds the sheet this definition describes.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if a breakpoint key is invalid.
    pub fn build<R, V>(
        &self,
        registry: &R,
        viewport: V,
    ) -> Result<Sheet<R::Token, V>, ConfigurationError>
    where
        R: StyleRegistry + ?Sized,
        V: ViewportProvider,
    {
        let sheet = match self {
            SheetConfig::Plain { styles } => Sheet::Plain(registry.register(styles)),
            SheetConfig::Sized { axis, breakpoints } => {
                Sheet::Sized(SizedSheet::new(registry, viewport, *axis, breakpoints)?)
            }
            SheetConfig::Oriented {
                landscape,
                portrait,
            } => {
                let orientations = Orientations {
                    landscape: landscape.clone(),
                    portrait: portrait.clone(),
                };
                Sheet::Oriented(OrientedSheet::new(registry, viewport, &orientations))
            }
        };
        Ok(sheet)
    }
}
