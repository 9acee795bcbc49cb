//! Batches of colors

use rand::Rng;

use crate::color::{gen_color, Opacity, Rgba};

/// `count` random colors with [`Opacity::DEFAULT`], in generation order
pub fn gen_colors<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Rgba> {
    gen_colors_with_opacity(rng, count, Opacity::default())
}

/// `count` random colors, all with the same opacity
pub fn gen_colors_with_opacity<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    alpha: Opacity,
) -> Vec<Rgba> {
    log::debug!("generating {count} colors with alpha {alpha}");
    (0..count).map(|_| gen_color(rng, alpha)).collect()
}

/// Batch size from a signed amount, negatives are an empty batch
pub fn clamp_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use test_case::test_case;

    #[test_case(0 ; "empty")]
    #[test_case(1 ; "one")]
    #[test_case(5 ; "five")]
    #[test_case(300 ; "many")]
    fn length(n: usize) {
        let mut rng = Pcg64::seed_from_u64(7);
        let colors = gen_colors(&mut rng, n);
        assert_eq!(colors.len(), n);
        assert!(colors.iter().all(|c| c.alpha == Opacity::DEFAULT));
    }

    #[test]
    fn same_order_as_single_calls() {
        let mut a = Pcg64::seed_from_u64(99);
        let mut b = a.clone();
        let batch = gen_colors(&mut a, 5);
        let singles = (0..5)
            .map(|_| crate::color::gen_default_color(&mut b))
            .collect::<Vec<_>>();
        assert_eq!(batch, singles);
    }

    #[test]
    fn custom_opacity() {
        let mut rng = Pcg64::seed_from_u64(1);
        let colors = gen_colors_with_opacity(&mut rng, 4, Opacity(0.0));
        assert_eq!(colors.len(), 4);
        for c in colors {
            assert!(c.to_string().ends_with(", 0)"), "{c}");
        }
    }

    #[test_case(-5 => 0 ; "negative")]
    #[test_case(i64::MIN => 0 ; "min")]
    #[test_case(0 => 0 ; "zero")]
    #[test_case(3 => 3 ; "positive")]
    fn clamp(n: i64) -> usize {
        clamp_count(n)
    }
}
