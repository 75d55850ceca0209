use std::hash::Hash;

/// An opaque graph node identifier.
///
/// Anything small, hashable and comparable qualifies; the algorithms never
/// look inside a location.
pub trait Location: Copy + Eq + Hash {}

impl<T: Copy + Eq + Hash> Location for T {}

/// Neighbor enumeration for a graph whose topology lives elsewhere.
///
/// The lookup is queried afresh by every distance computation, so it may
/// change between calls (dynamic obstacles), but it must answer consistently
/// within a single computation.
pub trait NeighborLookup<L> {
    /// Append neighbors of `loc` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, loc: L, buf: &mut Vec<L>);
}

impl<L, F, I> NeighborLookup<L> for F
where
    F: Fn(L) -> I,
    I: IntoIterator<Item = L>,
{
    fn neighbors(&self, loc: L, buf: &mut Vec<L>) {
        buf.extend(self(loc));
    }
}

/// Source of uniform random draws consumed by move selection.
///
/// Every [`rand::Rng`] is an `Entropy`, so a seeded
/// [`StdRng`](rand::rngs::StdRng) makes move selection reproducible.
pub trait Entropy {
    /// Uniform integer in `0..=max`. `max` is never negative.
    fn depth(&mut self, max: i32) -> i32;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> Entropy for R {
    fn depth(&mut self, max: i32) -> i32 {
        self.random_range(0..=max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}
