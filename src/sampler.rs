use rand::Rng;

use crate::cards::Card;

/// Draws `count` cards without replacement by a partial Fisher-Yates
/// shuffle: each step swaps a uniformly random element of the unshuffled
/// suffix into the prefix. The draw is the first `count` elements.
///
/// The pool is permuted in place but keeps the same contents, so the same
/// buffer can be reused across trials without resetting.
pub fn draw_without_replacement<'a, R: Rng>(
    pool: &'a mut [Card],
    count: usize,
    rng: &mut R,
) -> &'a [Card] {
    debug_assert!(count <= pool.len());
    for i in 0..count {
        let j = rng.gen_range(i..pool.len());
        pool.swap(i, j);
    }
    &pool[..count]
}
