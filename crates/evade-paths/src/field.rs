use std::collections::hash_map::{self, HashMap};
use std::collections::VecDeque;

use crate::traits::{Location, NeighborLookup};

/// Depth bound meaning "explore the whole connected component".
///
/// On an unbounded graph a field computed with this bound never finishes.
pub const UNBOUNDED: i32 = i32::MAX;

/// A location together with its hop distance from a field's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceRecord<L> {
    pub location: L,
    pub distance: i32,
}

/// Shortest-hop distances from a single source, optionally depth-bounded.
///
/// Every entry is keyed by the location its record describes, and every
/// distance is the true hop count from [`source`](Self::source). Locations
/// more than one hop past the bound, or unreachable, have no entry. Cloning
/// yields an independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField<L: Location> {
    source: L,
    max_depth: i32,
    records: HashMap<L, DistanceRecord<L>>,
}

impl<L: Location> DistanceField<L> {
    /// Compute a breadth-first distance field from `source`.
    ///
    /// Each step has cost 1. Expansion stops at the first dequeued location
    /// farther than `max_depth`, so the field holds every location within
    /// `max_depth` hops plus the ring at `max_depth + 1`, and nothing beyond.
    /// Pass [`UNBOUNDED`] for the whole component. A negative bound yields
    /// just the source.
    pub fn compute<N>(source: L, lookup: &N, max_depth: i32) -> Self
    where
        N: NeighborLookup<L> + ?Sized,
    {
        let mut records = HashMap::new();
        records.insert(
            source,
            DistanceRecord {
                location: source,
                distance: 0,
            },
        );

        let mut queue: VecDeque<DistanceRecord<L>> = VecDeque::new();
        queue.push_back(records[&source]);
        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = queue.pop_front() {
            // FIFO order keeps distances non-decreasing, so the first record
            // past the bound means every location up to it is already in.
            if current.distance > max_depth {
                break;
            }
            let nd = current.distance + 1;

            nbuf.clear();
            lookup.neighbors(current.location, &mut nbuf);

            for &np in nbuf.iter() {
                if let hash_map::Entry::Vacant(slot) = records.entry(np) {
                    let rec = DistanceRecord {
                        location: np,
                        distance: nd,
                    };
                    slot.insert(rec);
                    queue.push_back(rec);
                }
            }
        }

        Self {
            source,
            max_depth,
            records,
        }
    }

    /// Compute a field covering the whole connected component of `source`.
    pub fn compute_unbounded<N>(source: L, lookup: &N) -> Self
    where
        N: NeighborLookup<L> + ?Sized,
    {
        Self::compute(source, lookup, UNBOUNDED)
    }

    /// The location distances are measured from.
    #[inline]
    pub fn source(&self) -> L {
        self.source
    }

    /// The depth bound the field was computed with.
    #[inline]
    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    /// The record for `loc`, if it was reached.
    #[inline]
    pub fn get(&self, loc: L) -> Option<&DistanceRecord<L>> {
        self.records.get(&loc)
    }

    /// The hop distance to `loc`, if it was reached.
    #[inline]
    pub fn distance(&self, loc: L) -> Option<i32> {
        self.records.get(&loc).map(|r| r.distance)
    }

    #[inline]
    pub fn contains(&self, loc: L) -> bool {
        self.records.contains_key(&loc)
    }

    /// Number of reached locations, the source included.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: the source is part of every field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The largest recorded distance (0 for a lone source).
    pub fn max_distance(&self) -> i32 {
        self.records.values().map(|r| r.distance).max().unwrap_or(0)
    }

    /// Iterate over all records in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &DistanceRecord<L>> + '_ {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn path(n: u32) -> impl Fn(u32) -> Vec<u32> {
        move |i| {
            let mut out = vec![];
            if i > 0 {
                out.push(i - 1);
            }
            if i + 1 < n {
                out.push(i + 1);
            }
            out
        }
    }

    /// Random undirected graph as adjacency lists.
    fn random_graph(rng: &mut StdRng, nodes: usize, edges: usize) -> Vec<Vec<usize>> {
        let mut adj = vec![vec![]; nodes];
        for _ in 0..edges {
            let a = rng.random_range(0..nodes);
            let b = rng.random_range(0..nodes);
            adj[a].push(b);
            adj[b].push(a);
        }
        adj
    }

    /// Exhaustive all-pairs relaxation used as a reference.
    fn baseline(adj: &[Vec<usize>], src: usize) -> Vec<Option<i32>> {
        let mut dist = vec![None; adj.len()];
        dist[src] = Some(0);
        loop {
            let mut changed = false;
            for u in 0..adj.len() {
                let Some(du) = dist[u] else {
                    continue;
                };
                for &v in &adj[u] {
                    if dist[v].is_none_or(|dv| dv > du + 1) {
                        dist[v] = Some(du + 1);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    #[test]
    fn test_path_distances() {
        let f = DistanceField::compute_unbounded(0, &path(5));
        assert_eq!(f.len(), 5);
        for i in 0..5 {
            assert_eq!(f.distance(i), Some(i as i32));
            assert_eq!(f.get(i).map(|r| r.location), Some(i));
        }
        assert_eq!(f.max_distance(), 4);
        assert_eq!(f.source(), 0);
    }

    #[test]
    fn test_isolated_source() {
        let f = DistanceField::compute_unbounded(9u32, &|_: u32| Vec::<u32>::new());
        assert_eq!(f.len(), 1);
        assert_eq!(f.distance(9), Some(0));
        assert_eq!(f.max_distance(), 0);
        assert!(!f.is_empty());
    }

    #[test]
    fn test_self_loops_and_duplicates() {
        let lookup = |i: u32| match i {
            0 => vec![0, 1, 1, 0],
            1 => vec![1, 0],
            _ => vec![],
        };
        let f = DistanceField::compute_unbounded(0, &lookup);
        assert_eq!(f.len(), 2);
        assert_eq!(f.distance(1), Some(1));
    }

    #[test]
    fn test_depth_bound_keeps_one_frontier_ring() {
        let f = DistanceField::compute(0, &path(10), 3);
        assert_eq!(f.len(), 5);
        assert_eq!(f.distance(3), Some(3));
        assert_eq!(f.distance(4), Some(4));
        assert!(!f.contains(5));
        assert_eq!(f.max_depth(), 3);

        let zero = DistanceField::compute(5, &path(10), 0);
        assert_eq!(zero.len(), 3);
        assert_eq!(zero.distance(4), Some(1));
        assert_eq!(zero.distance(6), Some(1));
        assert!(!zero.contains(3));
    }

    #[test]
    fn test_negative_bound_keeps_source_only() {
        let f = DistanceField::compute(2, &path(10), -4);
        assert_eq!(f.len(), 1);
        assert_eq!(f.distance(2), Some(0));
    }

    #[test]
    fn test_every_key_matches_its_record() {
        let f = DistanceField::compute_unbounded(3, &path(8));
        for rec in f.iter() {
            assert_eq!(f.get(rec.location), Some(rec));
        }
    }

    #[test]
    fn test_matches_baseline_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let nodes = rng.random_range(1..40);
            let edges = rng.random_range(0..nodes * 2);
            let adj = random_graph(&mut rng, nodes, edges);
            let src = rng.random_range(0..nodes);
            let lookup = |i: usize| adj[i].clone();

            let f = DistanceField::compute_unbounded(src, &lookup);
            let want = baseline(&adj, src);
            for (v, d) in want.iter().enumerate() {
                assert_eq!(f.distance(v), *d, "node {v} from {src}");
            }
            assert_eq!(f.len(), want.iter().filter(|d| d.is_some()).count());
        }
    }

    #[test]
    fn test_bounded_agrees_with_unbounded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let nodes = rng.random_range(1..40);
            let adj = random_graph(&mut rng, nodes, nodes + 5);
            let src = rng.random_range(0..nodes);
            let k = rng.random_range(0..6);
            let lookup = |i: usize| adj[i].clone();

            let full = DistanceField::compute_unbounded(src, &lookup);
            let bounded = DistanceField::compute(src, &lookup, k);
            for rec in full.iter() {
                if rec.distance <= k + 1 {
                    assert_eq!(bounded.get(rec.location), Some(rec));
                }
            }
            assert!(bounded.iter().all(|r| r.distance <= k + 1));
        }
    }
}
