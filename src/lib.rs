//! Random colors for web pages
//!
//! Generate single channel values with [`gen_byte_value`], colors with
//! [`gen_color`] and batches with [`gen_colors`]. All of them take the
//! generator as a parameter, or keep one around with [`ColorGen`].
//!
//! Colors are [`Rgba`] values, their [`Display`](std::fmt::Display) is the
//! color string:
//!
//! ```
//! use random_rgba::{ColorGen, Rgba};
//! let mut gen = ColorGen::with_seed(1);
//! let color = gen.color().to_string();
//! assert!(color.starts_with("rgba("));
//! assert!(color.ends_with(", 0.75)"));
//! assert_eq!(color.parse::<Rgba>().unwrap().to_string(), color);
//! ```

pub mod batch;
pub mod byte;
pub mod color;

use rand::SeedableRng;
use rand_pcg::Pcg64 as Pcg;

pub use batch::{clamp_count, gen_colors, gen_colors_with_opacity};
pub use byte::gen_byte_value;
pub use color::{gen_color, gen_default_color, Opacity, ParseColorError, Rgba};

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}
pub(crate) use regex;

/// Color generator
///
/// Owns a PCG generator, so the same seed always yields the same colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGen {
    rng: Pcg,
}

impl ColorGen {
    /// Create a new generator
    ///
    /// Seed is autogenerated form entropy.
    pub fn new() -> Self {
        log::debug!("seeding color generator from entropy");
        Self { rng: Pcg::from_entropy() }
    }
    /// Create a new generator with a seed
    pub fn with_seed(seed: u64) -> Self {
        log::debug!("seeding color generator with {seed}");
        Self {
            rng: Pcg::seed_from_u64(seed),
        }
    }
}

impl Default for ColorGen {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorGen {
    /// See [`gen_byte_value`]
    pub fn byte_value(&mut self) -> u8 {
        gen_byte_value(&mut self.rng)
    }

    /// Color with the default opacity
    pub fn color(&mut self) -> Rgba {
        gen_default_color(&mut self.rng)
    }

    pub fn color_with_opacity(&mut self, alpha: impl Into<Opacity>) -> Rgba {
        gen_color(&mut self.rng, alpha.into())
    }

    /// See [`gen_colors`]
    pub fn colors(&mut self, count: usize) -> Vec<Rgba> {
        gen_colors(&mut self.rng, count)
    }

    pub fn colors_with_opacity(&mut self, count: usize, alpha: impl Into<Opacity>) -> Vec<Rgba> {
        gen_colors_with_opacity(&mut self.rng, count, alpha.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_colors() {
        let a = ColorGen::with_seed(1234).colors(20);
        let b = ColorGen::with_seed(1234).colors(20);
        assert_eq!(a, b);
    }

    #[test]
    fn sequence_continues() {
        let mut gen = ColorGen::with_seed(5);
        let first = gen.colors(3);
        let second = gen.colors(3);
        assert_eq!(first.len() + second.len(), 6);
        let all = ColorGen::with_seed(5).colors(6);
        assert_eq!([first, second].concat(), all);
    }

    #[test]
    fn state_methods() {
        let mut gen = ColorGen::new();
        let b = gen.byte_value();
        assert!(b >= 1);
        assert_eq!(gen.color().alpha, Opacity(0.75));
        assert_eq!(gen.color_with_opacity(0.0).alpha, Opacity(0.0));
        let colors = gen.colors_with_opacity(5, 0.1);
        assert_eq!(colors.len(), 5);
        assert!(colors.iter().all(|c| c.alpha == Opacity(0.1)));
        assert!(gen.colors(0).is_empty());
    }
}
