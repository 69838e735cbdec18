//! Color handling for Limner diagrams
//!
//! This module provides the [`Color`] type. A color is written by callers as a
//! bare 6-digit hex string (`"769D8F"`) and rendered as `#769D8F` or as an
//! `rgb(r, g, b)` triple, depending on what the target language accepts.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::ChartingError;

/// A validated 6-digit hex color.
///
/// The literal is kept exactly as given (letter case included) so renderers
/// reproduce what the caller wrote. The parsed value is kept alongside for
/// conversions into other notations.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    literal: String,
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a 6-digit hex string without the leading `#`.
    ///
    /// The value must be exactly six hexadecimal digits and must be greater
    /// than zero, so `"000000"` (pure black) is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use limner_core::color::Color;
    ///
    /// let green = Color::new("769D8F").unwrap();
    /// assert_eq!(green.as_hex(), "#769D8F");
    ///
    /// assert!(Color::new("red").is_err());
    /// assert!(Color::new("000000").is_err());
    /// ```
    pub fn new(literal: &str) -> Result<Self, ChartingError> {
        let invalid = || ChartingError::InvalidColor(literal.to_string());

        if literal.len() != 6 || !literal.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(literal, 16).map_err(|_| invalid())?;
        if value == 0 {
            return Err(invalid());
        }

        let color = DynamicColor::from_str(&format!("#{literal}")).map_err(|_| invalid())?;
        Ok(Self {
            literal: literal.to_string(),
            color,
        })
    }

    /// Parses an optional color literal, passing `None` through.
    pub fn parse_optional(literal: Option<&str>) -> Result<Option<Self>, ChartingError> {
        literal.map(Self::new).transpose()
    }

    /// Returns the `#RRGGBB` representation.
    pub fn as_hex(&self) -> String {
        format!("#{}", self.literal)
    }

    /// Returns the color as an `rgb(r, g, b)` triple.
    ///
    /// # Examples
    ///
    /// ```
    /// use limner_core::color::Color;
    ///
    /// let color = Color::new("FF8000").unwrap();
    /// assert_eq!(color.as_rgb(), "rgb(255, 128, 0)");
    /// ```
    pub fn as_rgb(&self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.literal.hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.literal)
    }
}

impl FromStr for Color {
    type Err = ChartingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.literal
    }
}
