//! Shared random source for shuffles and random cards.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

static RNG: Mutex<Option<ChaCha8Rng>> = Mutex::new(None);

/// Reseeds the shared random source.
///
/// Every later [`Deck::shuffle`](crate::Deck::shuffle) and
/// [`Card::random`](crate::Card::random) call draws from the new sequence.
///
/// # Example
///
/// ```
/// use deckrs::{Deck, seed};
///
/// seed(42);
/// let mut a = Deck::standard();
/// a.shuffle();
///
/// seed(42);
/// let mut b = Deck::standard();
/// b.shuffle();
///
/// assert_eq!(a, b);
/// ```
pub fn seed(seed: u64) {
    log::trace!("reseeding shared rng with {seed}");
    *RNG.lock() = Some(ChaCha8Rng::seed_from_u64(seed));
}

/// Runs `f` with the shared random source, seeding it on first use.
pub(crate) fn with_rng<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    let mut rng = RNG.lock();
    f(rng.get_or_insert_with(|| ChaCha8Rng::seed_from_u64(initial_seed())))
}

#[cfg(feature = "std")]
fn initial_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

#[cfg(not(feature = "std"))]
const fn initial_seed() -> u64 {
    0
}
