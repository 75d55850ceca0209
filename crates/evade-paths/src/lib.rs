//! Evasive next-move selection on abstract graphs.
//!
//! This crate answers one question per tick: *which neighbor should an agent
//! step to next, heading for a fixed destination while keeping away from a
//! pursuer?*
//!
//! - **BFS** hop-distance fields, optionally depth-bounded ([`DistanceField`])
//! - **Move selection** combining a cached destination field with a fresh,
//!   randomly bounded adversary field ([`MoveSelector`])
//!
//! The graph is never stored: topology comes from a [`NeighborLookup`]
//! (any `Fn(L) -> impl IntoIterator<Item = L>` qualifies) and randomness from
//! an [`Entropy`] source (any [`rand::Rng`] qualifies).
//!
//! ```
//! use evade_paths::MoveSelector;
//! use rand::SeedableRng;
//!
//! // A path 0 - 1 - 2 - 3 - 4 heading for 4.
//! let lookup = |n: u32| [n.checked_sub(1), (n < 4).then_some(n + 1)].into_iter().flatten();
//! let selector = MoveSelector::new(4, lookup);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! assert_eq!(selector.next_move(0, 4, 0, &mut rng), Ok(1));
//! ```

mod config;
mod error;
mod field;
mod selector;
mod traits;

pub use config::{NoMovePolicy, SelectorConfig, TieBreak};
pub use error::MoveError;
pub use field::{DistanceField, DistanceRecord, UNBOUNDED};
pub use selector::{MoveSelector, ScoredMove, composite_scores};
pub use traits::{Entropy, Location, NeighborLookup};
