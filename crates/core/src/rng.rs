//! RNG module - seeded float sequences for reproducible piece generation
//!
//! A string seed is hashed into a 32-bit state, which then drives a
//! mulberry32 stream. Everything is wrapping `u32` arithmetic, so the same
//! seed yields the same sequence on every platform. Daily challenges depend
//! on that: every player on a given day must see identical pieces.

/// Source of uniformly distributed floats in `[0, 1)`
///
/// The piece generator only ever asks for "the next float", so any
/// deterministic source can drive it (tests use scripted sequences).
pub trait SequenceSource {
    fn next_f64(&mut self) -> f64;

    /// Pick an index in `[0, len)`
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        // Guards against a source that returns exactly 1.0.
        idx.min(len - 1)
    }
}

/// Seeded generator: string hash + mulberry32
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a new generator from a string seed
    pub fn new(seed: &str) -> Self {
        Self {
            state: hash_seed(seed),
        }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }
}

impl SequenceSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Hash a seed string into the initial generator state
///
/// Operates on UTF-16 code units so seeds hash identically to hosts that
/// store strings that way.
fn hash_seed(seed: &str) -> u32 {
    let units = seed.encode_utf16().count() as u32;
    let mut h = 1_779_033_703u32 ^ units;
    for unit in seed.encode_utf16() {
        h = (h ^ u32::from(unit)).wrapping_mul(3_432_918_353);
        h = h.rotate_left(13);
    }
    h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507);
    h = (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
    h ^ (h >> 16)
}
