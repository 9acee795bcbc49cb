//! RGBA color and its string form

use std::{fmt::Display, str::FromStr};

use rand::Rng;

use crate::byte::gen_byte_value;
use crate::regex;

/// Alpha component of a color
///
/// Defaults to `0.75`. It is never validated or clamped, whatever is given
/// ends up in the color string.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(pub f64);

impl Opacity {
    pub const DEFAULT: Opacity = Opacity(0.75);
}

impl Default for Opacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for Opacity {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Display for Opacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Opacity {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Opacity)
            .map_err(|e| ParseColorError::Invalid(format!("alpha: {e}")))
    }
}

/// A color with its channels and opacity
///
/// The [`Display`] impl gives the color string, `rgba(R,G,B, A)`, with the
/// single space before the alpha. The [alternate modifier](std::fmt#sign0)
/// prints `rgba(R, G, B, A)` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Opacity,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, alpha: impl Into<Opacity>) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.into(),
        }
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Rgba { r, g, b, alpha } = self;
        if f.alternate() {
            write!(f, "rgba({r}, {g}, {b}, {alpha})")
        } else {
            write!(f, "rgba({r},{g},{b}, {alpha})")
        }
    }
}

/// Random color with the given opacity
///
/// Channels are drawn in order red, green, blue.
pub fn gen_color<R: Rng + ?Sized>(rng: &mut R, alpha: Opacity) -> Rgba {
    let r = gen_byte_value(rng);
    let g = gen_byte_value(rng);
    let b = gen_byte_value(rng);
    let color = Rgba { r, g, b, alpha };
    log::trace!("generated {color}");
    color
}

/// Random color with [`Opacity::DEFAULT`]
pub fn gen_default_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    gen_color(rng, Opacity::default())
}

/// Error from [`Rgba::from_str`]
#[derive(Debug, thiserror::Error)]
pub enum ParseColorError {
    #[error("the input is not an rgba color")]
    NoMatch,
    #[error("invalid rgba color: {0}")]
    Invalid(String),
}

fn parse_channel(num: &str, name: &str) -> Result<u8, ParseColorError> {
    num.parse::<u8>()
        .map_err(|e| ParseColorError::Invalid(format!("{name}: {e}")))
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = regex!(
            r"\A\s*rgba\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*([^,\s\)][^,\)]*?)\s*\)\s*\z"
        );
        let caps = re.captures(s).ok_or(ParseColorError::NoMatch)?;

        let r = parse_channel(&caps[1], "red")?;
        let g = parse_channel(&caps[2], "green")?;
        let b = parse_channel(&caps[3], "blue")?;
        let alpha = caps[4].parse::<Opacity>()?;

        Ok(Rgba { r, g, b, alpha })
    }
}
