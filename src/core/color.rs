use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};

/// 8-bit RGB color with a normalized 0..=1 alpha.
///
/// Serializes as a CSS color string (`#rrggbb` when opaque,
/// `rgba(r,g,b,a)` otherwise), which is what charting engines consume.
/// Channels are stored at CSS precision so the string form is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.
    pub fn parse_css(input: &str) -> MapResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }
        if let Some(body) = trimmed
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(body, true).ok_or_else(|| invalid_color(input));
        }
        if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(body, false).ok_or_else(|| invalid_color(input));
        }
        Err(invalid_color(input))
    }

    #[must_use]
    pub fn to_css(self) -> String {
        let Self {
            red: r,
            green: g,
            blue: b,
            alpha,
        } = self;
        if alpha == 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r},{g},{b},{alpha})")
        }
    }

    pub fn validate(self) -> MapResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(MapError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

fn invalid_color(input: &str) -> MapError {
    MapError::InvalidData(format!("unsupported css color `{input}`"))
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [r, g, b] => Some(Color::rgba8(r * 17, g * 17, b * 17, 1.0)),
        [r1, r0, g1, g0, b1, b0] => Some(Color::rgba8(
            r1 * 16 + r0,
            g1 * 16 + g0,
            b1 * 16 + b0,
            1.0,
        )),
        _ => None,
    }
}

fn parse_functional(body: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let red = parts[0].parse::<u8>().ok()?;
    let green = parts[1].parse::<u8>().ok()?;
    let blue = parts[2].parse::<u8>().ok()?;
    let alpha = if with_alpha {
        parts[3].parse::<f64>().ok()?
    } else {
        1.0
    };
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return None;
    }
    Some(Color::rgba8(red, green, blue, alpha))
}

impl FromStr for Color {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s)
    }
}

impl TryFrom<String> for Color {
    type Error = MapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_css(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_css()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
