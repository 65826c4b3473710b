//! Breakpoint keys and the threshold-keyed style buckets.

use cssparser::{Parser, ParserInput, Token};
use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigurationError;
use crate::style::Styles;

/// The key a bucket of styles is defined under, as written by the author.
///
/// Keys are kept verbatim until a sheet is built so that errors can quote
/// them. Accepted forms are a bare integer (`768`, `"768"`) or an integer
/// pixel length (`"768px"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ThresholdKey(String);

impl ThresholdKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the key into its numeric threshold.
    pub fn threshold(&self) -> Result<i32, ConfigurationError> {
        parse_threshold(&self.0)
    }
}

impl From<&str> for ThresholdKey {
    fn from(key: &str) -> Self {
        ThresholdKey(key.to_string())
    }
}

impl From<String> for ThresholdKey {
    fn from(key: String) -> Self {
        ThresholdKey(key)
    }
}

impl From<i32> for ThresholdKey {
    fn from(threshold: i32) -> Self {
        ThresholdKey(threshold.to_string())
    }
}

impl std::fmt::Display for ThresholdKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// YAML mapping keys such as `576:` arrive as integers, not strings.
impl<'de> Deserialize<'de> for ThresholdKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = ThresholdKey;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an integer breakpoint threshold")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ThresholdKey, E> {
                Ok(ThresholdKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ThresholdKey, E> {
                Ok(ThresholdKey(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ThresholdKey, E> {
                Ok(ThresholdKey(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ThresholdKey, E> {
                Ok(ThresholdKey(v.to_string()))
            }

            // Debug keeps the fraction (`10.0`), so float keys fail to parse later.
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ThresholdKey, E> {
                Ok(ThresholdKey(format!("{v:?}")))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Parses a breakpoint key with the CSS tokenizer.
///
/// Exactly one integer or integer `px` dimension is accepted, surrounded by
/// optional whitespace. Fractions, other units, trailing tokens and values
/// outside the `i32` range fail.
pub(crate) fn parse_threshold(key: &str) -> Result<i32, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidThreshold {
        key: key.to_string(),
    };

    let mut input = ParserInput::new(key);
    let mut parser = Parser::new(&mut input);
    parser.skip_whitespace();
    let start = parser.position();

    match parser.next() {
        Ok(&Token::Number {
            int_value: Some(_),
            ..
        }) => {}
        Ok(&Token::Dimension {
            int_value: Some(_),
            ref unit,
            ..
        }) if unit.eq_ignore_ascii_case("px") => {}
        _ => return Err(invalid()),
    }

    // The tokenizer clamps `int_value` to the i32 range, so read the digits
    // back from the source text.
    let text = parser.slice_from(start);
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '+' || c == '-'))
        .unwrap_or(text.len());
    let threshold = text[..end].parse::<i32>().map_err(|_| invalid())?;

    parser.expect_exhausted().map_err(|_| invalid())?;
    Ok(threshold)
}

/// Buckets of styles keyed by breakpoint threshold.
///
/// Keys are stored as written; they are parsed and sorted numerically when
/// a [`SizedSheet`](super::SizedSheet) is built, so insertion order here has
/// no effect on resolution.
///
/// # Example
///
/// ```rust
/// use responsive_sheet::{Breakpoints, Declaration, Styles};
///
/// let breakpoints = Breakpoints::new()
///     .at(768, Styles::new().add("column", Declaration::new().set("flex", 1)))
///     .add("1200px", Styles::new().add("column", Declaration::new().set("flex", 2)));
///
/// assert_eq!(breakpoints.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoints {
    buckets: IndexMap<ThresholdKey, Styles>,
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bucket under a raw key such as `"768"` or `"768px"`.
    ///
    /// Adding the same key again replaces the earlier bucket.
    pub fn add(mut self, key: impl Into<ThresholdKey>, styles: Styles) -> Self {
        self.buckets.insert(key.into(), styles);
        self
    }

    /// Adds a bucket at a numeric threshold.
    pub fn at(self, threshold: i32, styles: Styles) -> Self {
        self.add(threshold, styles)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ThresholdKey, &Styles)> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<K: Into<ThresholdKey>> FromIterator<(K, Styles)> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = (K, Styles)>>(iter: I) -> Self {
        Self {
            buckets: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
