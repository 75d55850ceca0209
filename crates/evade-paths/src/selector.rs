use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::OnceLock;

use log::{debug, trace};

use crate::config::{NoMovePolicy, SelectorConfig, TieBreak};
use crate::error::MoveError;
use crate::field::DistanceField;
use crate::traits::{Entropy, Location, NeighborLookup};

/// A neighbor of the agent together with its composite score.
///
/// Lower scores are better: close to the destination and away from the
/// adversary's horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredMove<L> {
    pub location: L,
    pub score: i64,
}

/// Combine a destination field and an adversary field into composite scores.
///
/// Locations in the adversary field score `M + horizon - e`, where `M` is the
/// largest destination distance and `e` the adversary distance. Everything
/// else keeps its destination distance. Only locations in `dest` get a score.
///
/// Scores are widened to `i64`: a horizon near [`UNBOUNDED`](crate::UNBOUNDED)
/// still orders cells nearer the adversary as worse.
pub fn composite_scores<L: Location>(
    dest: &DistanceField<L>,
    adversary: &DistanceField<L>,
    horizon: i32,
) -> HashMap<L, i64> {
    let max = i64::from(dest.max_distance());
    dest.iter()
        .map(|rec| {
            let score = match adversary.distance(rec.location) {
                Some(e) => max + i64::from(horizon) - i64::from(e),
                None => i64::from(rec.distance),
            };
            (rec.location, score)
        })
        .collect()
}

/// Picks single-step moves toward a fixed destination while steering away
/// from a pursuer.
///
/// The full distance field from the destination is computed on first use and
/// kept for the life of the selector (or until [`invalidate`](Self::invalidate)).
/// The adversary field is rebuilt on every query with a randomly drawn
/// horizon, which keeps the agent's evasions from being predictable.
///
/// Queries take `&self`; when the lookup is `Sync` the selector can be shared
/// across threads, each caller supplying its own [`Entropy`].
pub struct MoveSelector<L: Location, N> {
    destination: L,
    lookup: N,
    config: SelectorConfig,
    destination_field: OnceLock<DistanceField<L>>,
}

impl<L, N> MoveSelector<L, N>
where
    L: Location + Debug,
    N: NeighborLookup<L>,
{
    /// Create a selector with the default [`SelectorConfig`].
    pub fn new(destination: L, lookup: N) -> Self {
        Self::with_config(destination, lookup, SelectorConfig::default())
    }

    pub fn with_config(destination: L, lookup: N, config: SelectorConfig) -> Self {
        Self {
            destination,
            lookup,
            config,
            destination_field: OnceLock::new(),
        }
    }

    #[inline]
    pub fn destination(&self) -> L {
        self.destination
    }

    #[inline]
    pub fn lookup(&self) -> &N {
        &self.lookup
    }

    #[inline]
    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SelectorConfig) {
        self.config = config;
    }

    fn cached_field(&self) -> &DistanceField<L> {
        self.destination_field.get_or_init(|| {
            let field = DistanceField::compute_unbounded(self.destination, &self.lookup);
            trace!(
                "destination field for {:?}: {} locations, max distance {}",
                self.destination,
                field.len(),
                field.max_distance()
            );
            field
        })
    }

    /// A copy of the unbounded distance field from the destination.
    ///
    /// The field is computed once; every call returns an independent copy.
    pub fn destination_field(&self) -> DistanceField<L> {
        self.cached_field().clone()
    }

    /// Forget the cached destination field so the next query recomputes it
    /// against the lookup's current topology.
    pub fn invalidate(&mut self) {
        self.destination_field.take();
    }

    /// Score every neighbor of `from` that can still reach the destination,
    /// with the adversary's influence limited to `horizon` hops.
    ///
    /// Candidates come in lookup order without duplicates. The result is
    /// empty when `from` has no such neighbor. Draws no entropy.
    pub fn score_moves(
        &self,
        from: L,
        adversary: L,
        horizon: i32,
    ) -> Result<Vec<ScoredMove<L>>, MoveError<L>> {
        if horizon < 0 {
            return Err(MoveError::InvalidArgument {
                max_search_depth: horizon,
            });
        }

        let dest = self.cached_field();
        let threat = DistanceField::compute(adversary, &self.lookup, horizon);
        let scores = composite_scores(dest, &threat, horizon);
        trace!(
            "adversary {:?} horizon {}: {} locations threatened",
            adversary,
            horizon,
            threat.len()
        );

        let mut nbuf = Vec::with_capacity(8);
        self.lookup.neighbors(from, &mut nbuf);

        let mut candidates: Vec<ScoredMove<L>> = Vec::with_capacity(nbuf.len());
        for np in nbuf {
            let Some(&score) = scores.get(&np) else {
                continue;
            };
            if candidates.iter().any(|c| c.location == np) {
                continue;
            }
            candidates.push(ScoredMove {
                location: np,
                score,
            });
        }
        Ok(candidates)
    }

    /// Choose the next location for an agent at `from` fleeing `adversary`.
    ///
    /// The adversary horizon is drawn uniformly from `0..=max_search_depth`.
    /// The neighbor with the lowest composite score wins; ties are resolved
    /// at random according to [`TieBreak`].
    pub fn next_move<E>(
        &self,
        from: L,
        adversary: L,
        max_search_depth: i32,
        entropy: &mut E,
    ) -> Result<L, MoveError<L>>
    where
        E: Entropy + ?Sized,
    {
        if max_search_depth < 0 {
            return Err(MoveError::InvalidArgument { max_search_depth });
        }
        let horizon = entropy.depth(max_search_depth);
        let candidates = self.score_moves(from, adversary, horizon)?;

        let Some(best) = candidates.iter().map(|c| c.score).min() else {
            return match self.config.on_no_moves {
                NoMovePolicy::Error => Err(MoveError::NoLegalMoves { from }),
                NoMovePolicy::Stay => {
                    debug!("no legal moves from {:?}, staying put", from);
                    Ok(from)
                }
            };
        };

        let tied: Vec<L> = candidates
            .iter()
            .filter(|c| c.score == best)
            .map(|c| c.location)
            .collect();
        if let [only] = tied.as_slice() {
            return Ok(*only);
        }

        // Several equally good moves: possibly a dead end.
        let pick = match self.config.tie_break {
            TieBreak::Tied => tied[entropy.index(tied.len())],
            TieBreak::AnyCandidate => candidates[entropy.index(candidates.len())].location,
        };
        debug!(
            "{} moves tied at score {} from {:?}, picked {:?}",
            tied.len(),
            best,
            from,
            pick
        );
        Ok(pick)
    }
}
