//! Tunable policies for [`MoveSelector`](crate::MoveSelector).

/// How to choose among candidates when several share the best score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TieBreak {
    /// Pick uniformly among the candidates that share the best score.
    #[default]
    Tied,
    /// Treat a tie as a possible dead end and pick uniformly among *all*
    /// candidates, best or not.
    AnyCandidate,
}

/// What to do when the agent has no move toward the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NoMovePolicy {
    /// Report [`MoveError::NoLegalMoves`](crate::MoveError::NoLegalMoves).
    #[default]
    Error,
    /// Stay on the current location.
    Stay,
}

/// Selector configuration. The default breaks ties among tied candidates
/// only and reports a missing move as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectorConfig {
    pub tie_break: TieBreak,
    pub on_no_moves: NoMovePolicy,
}

impl SelectorConfig {
    /// Return the configuration with the given tie-break policy.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Return the configuration with the given no-move policy.
    pub fn on_no_moves(mut self, policy: NoMovePolicy) -> Self {
        self.on_no_moves = policy;
        self
    }
}
