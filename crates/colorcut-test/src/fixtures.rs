//! Deterministic pixel fixtures
//!
//! Every generator is a pure function of its arguments; the random ones
//! take an explicit seed so regression output is reproducible.

use colorcut_core::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` copies of a single color
pub fn solid(color: Rgb, n: usize) -> Vec<Rgb> {
    vec![color; n]
}

/// `n` samples of `first` followed by `n` samples of `second`
pub fn two_clusters(first: Rgb, second: Rgb, n: usize) -> Vec<Rgb> {
    let mut pixels = Vec::with_capacity(2 * n);
    pixels.extend(std::iter::repeat_n(first, n));
    pixels.extend(std::iter::repeat_n(second, n));
    pixels
}

/// `n` samples scattered uniformly within `radius` of `center` per channel
///
/// Channels are clamped to [0, 255].
pub fn jittered_cluster(center: Rgb, radius: u8, n: usize, seed: u64) -> Vec<Rgb> {
    let mut rng = StdRng::seed_from_u64(seed);
    let radius = radius as i32;
    let jitter = |rng: &mut StdRng, c: u8| -> u8 {
        let offset = rng.random_range(-radius..=radius);
        (c as i32 + offset).clamp(0, 255) as u8
    };

    (0..n)
        .map(|_| {
            Rgb::new(
                jitter(&mut rng, center.r),
                jitter(&mut rng, center.g),
                jitter(&mut rng, center.b),
            )
        })
        .collect()
}

/// `n` uniformly random colors
pub fn random_pixels(n: usize, seed: u64) -> Vec<Rgb> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Rgb::new(rng.random(), rng.random(), rng.random()))
        .collect()
}

/// Row-major pixels of a `w` x `h` red/green gradient over a blue ramp
pub fn gradient(w: u32, h: u32) -> Vec<Rgb> {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let r = ((x * 255) / w.max(1)) as u8;
            let g = ((y * 255) / h.max(1)) as u8;
            let b = (128 + (x + y) * 64 / (w + h).max(1)) as u8;
            pixels.push(Rgb::new(r, g, b));
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_is_deterministic() {
        assert_eq!(random_pixels(64, 7), random_pixels(64, 7));
        assert_ne!(random_pixels(64, 7), random_pixels(64, 8));
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let center = Rgb::new(250, 5, 128);
        for p in jittered_cluster(center, 10, 500, 1) {
            assert!(p.r >= 240);
            assert!(p.g <= 15);
            assert!((118..=138).contains(&p.b));
        }
    }

    #[test]
    fn test_gradient_size() {
        assert_eq!(gradient(20, 10).len(), 200);
    }
}
