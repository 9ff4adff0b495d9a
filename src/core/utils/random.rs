//! Injectable randomness for sprite placement and motion.
//!
//! Everything random at startup (fallback positions, speed, heading, spin)
//! is drawn through [`RandomSource`], so a fixed seed reproduces a layout.

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

/// xorshift32 generator, same family as the particle world's RNG.
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A zero state would lock the generator at zero forever.
    const FALLBACK_SEED: u32 = 12345;

    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { Self::FALLBACK_SEED } else { seed };
        Self { state }
    }

    /// Seed from `Math.random()`; used by the browser boot path.
    pub fn from_js_entropy() -> Self {
        let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u32;
        Self::new(seed)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        // Top 24 bits give an exactly representable value strictly below 1.
        f64::from(self.next_u32() >> 8) / f64::from(1u32 << 24)
    }
}
