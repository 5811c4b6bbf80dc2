//! Pseudo-random source for randomized animations

/// Seed used when no other is configured
pub const DEFAULT_SEED: u64 = 42;

/// Source of uniformly distributed small integers
///
/// Implemented for [`fastrand::Rng`]; tests can provide a scripted source
/// to make animations deterministic.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: u8) -> u8;

    /// Fair coin flip
    fn coin_flip(&mut self) -> bool {
        self.below(2) == 1
    }
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, bound: u8) -> u8 {
        self.u8(0..bound.max(1))
    }

    fn coin_flip(&mut self) -> bool {
        self.bool()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: u8) -> u8 {
        (**self).below(bound)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Seeded generator the controller falls back to
pub fn seeded(seed: u64) -> fastrand::Rng {
    fastrand::Rng::with_seed(seed)
}
