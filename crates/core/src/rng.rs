//! seeded PRNG - Mulberry32, bit-identical for a given 32-bit seed
//! plus the FNV-1a fold used to turn a seed string into that seed

/// Mulberry32 generator. One u32 of state, outputs in [0, 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from text: blank text has no seed, anything else is hashed.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            // the untrimmed text is hashed, trimming only decides blankness
            Some(Self::new(hash_seed(text)))
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// `floor(next_f64() * n)`, the tie-break draw. `n` must be non-zero.
    #[inline]
    pub fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "below() needs a non-empty range");
        ((self.next_f64() * n as f64) as usize).min(n.saturating_sub(1))
    }
}

/// 32-bit FNV-1a over the UTF-16 code units of `text`
pub fn hash_seed(text: &str) -> u32 {
    let mut h: u32 = 2_166_136_261;
    for unit in text.encode_utf16() {
        h ^= unit as u32;
        h = h.wrapping_mul(16_777_619);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mulberry32_seed_zero() {
        let mut rng = SeededRng::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
        assert_eq!(rng.next_u32(), 958_946_056);
    }

    #[test]
    fn test_mulberry32_floats() {
        let mut rng = SeededRng::new(42);
        assert_eq!(rng.next_f64(), 2_581_720_956.0 / 4_294_967_296.0);
        assert_eq!(rng.next_f64(), 1_925_393_290.0 / 4_294_967_296.0);
        assert_eq!(rng.next_f64(), 3_661_312_704.0 / 4_294_967_296.0);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeededRng::new(7);
        let mut b = SeededRng::new(7);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_floats_in_unit_interval() {
        let mut rng = SeededRng::new(123);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_below_range() {
        let mut rng = SeededRng::new(9);
        for _ in 0..1000 {
            assert!(rng.below(3) < 3);
        }
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn test_fnv1a_known_values() {
        assert_eq!(hash_seed(""), 2_166_136_261);
        assert_eq!(hash_seed("a"), 3_826_002_220);
        assert_eq!(hash_seed("blokus"), 2_936_305_337);
        assert_eq!(hash_seed("seed-42"), 3_411_273_461);
    }

    #[test]
    fn test_from_text_blank_is_none() {
        assert!(SeededRng::from_text("").is_none());
        assert!(SeededRng::from_text("   ").is_none());
        assert_eq!(
            SeededRng::from_text("blokus"),
            Some(SeededRng::new(2_936_305_337))
        );
    }
}
