//! Byte value for a single color channel

use rand::Rng;

/// Smallest value [`gen_byte_value`] can return
pub const MIN_BYTE: u8 = 1;
/// Largest value [`gen_byte_value`] can return
pub const MAX_BYTE: u8 = 255;

/// Random channel value in `1..=255`
///
/// A float in `[0, 1)` is scaled by 255, floored and shifted by one, so 0 is
/// never returned and 255 only comes from draws in `[254/255, 1)`.
pub fn gen_byte_value<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let x: f64 = rng.gen();
    // x < 1, so the floor is at most 254
    (x * 255.0).floor() as u8 + MIN_BYTE
}
