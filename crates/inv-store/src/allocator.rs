use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use inv_types::MaterialId;

use crate::error::{StoreError, StoreResult};
use crate::policy::IdStrategy;

/// Hands out material identifiers according to an [`IdStrategy`].
///
/// The allocator does not track which ids are live; callers pass an
/// `in_use` predicate backed by the current collection.
pub struct IdAllocator {
    strategy: IdStrategy,
    next: u32,
    rng: StdRng,
}

impl IdAllocator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next: 1,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic random draws, for tests.
    pub fn with_seed(strategy: IdStrategy, seed: u64) -> Self {
        Self {
            strategy,
            next: 1,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick an id for which `in_use` returns `false`.
    ///
    /// `live` is the number of records currently stored; the random strategy
    /// uses it to detect a full range before drawing.
    pub fn allocate<F>(&mut self, live: usize, in_use: F) -> StoreResult<MaterialId>
    where
        F: Fn(MaterialId) -> bool,
    {
        match self.strategy {
            IdStrategy::Sequential => loop {
                let candidate = MaterialId::new(self.next);
                self.next = self
                    .next
                    .checked_add(1)
                    .ok_or(StoreError::IdSpaceExhausted { max: u32::MAX })?;
                if !in_use(candidate) {
                    return Ok(candidate);
                }
            },
            IdStrategy::Random { max } => {
                let taken = (1..=max).filter(|raw| in_use(MaterialId::new(*raw)));
                if max == 0 || (live >= max as usize && taken.count() >= max as usize) {
                    return Err(StoreError::IdSpaceExhausted { max });
                }
                loop {
                    let candidate = MaterialId::new(self.rng.gen_range(1..=max));
                    if !in_use(candidate) {
                        return Ok(candidate);
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdAllocator")
            .field("strategy", &self.strategy)
            .field("next", &self.next)
            .finish()
    }
}
