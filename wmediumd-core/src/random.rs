use rand::Rng;

/// A source of uniform `[0, 1)` draws.
///
/// The pipeline is generic over this trait: production wires up
/// [`OsRandomSource`], tests wire up [`FixedRandomSource`] so delivery
/// decisions are exactly reproducible.
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

/// Seeds from the OS's CSPRNG via `rand`'s thread-local generator.
pub struct OsRandomSource {
    rng: rand::rngs::ThreadRng,
}

impl OsRandomSource {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for OsRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandomSource {
    fn next(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a predetermined sequence of draws, for deterministic tests.
///
/// Panics if exhausted: a test that runs out of scripted draws has a
/// schedule/topology mismatch worth surfacing immediately rather than
/// silently wrapping around.
pub struct FixedRandomSource {
    draws: std::vec::IntoIter<f64>,
}

impl FixedRandomSource {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl RandomSource for FixedRandomSource {
    fn next(&mut self) -> f64 {
        self.draws
            .next()
            .expect("FixedRandomSource exhausted: scripted fewer draws than the pipeline needed")
    }
}
