// Uniform sampling helpers on top of any `rand::Rng`, so the particle system can
// be driven by a seeded generator in tests and an entropy-seeded one in the browser.

use rand::Rng;

/// Returns a value in `[min, max)`. An empty or inverted range yields `min`,
/// which keeps a zero-sized canvas from panicking during a reset.
pub fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !(max > min) {
        return min;
    }
    let value = rng.gen::<f64>() * (max - min) + min;
    // rounding can land exactly on `max` for narrow ranges
    if value < max {
        value
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stays_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = uniform(&mut rng, -2.0, 2.0);
            assert!(v >= -2.0 && v < 2.0);
        }
    }

    #[test]
    fn empty_range_yields_lower_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(uniform(&mut rng, 0.0, 0.0), 0.0);
        assert_eq!(uniform(&mut rng, 5.0, 1.0), 5.0);
    }
}
