/// Reasons a search ends without a solution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SolverError {
    /// The board has no player vehicle, so there is nothing to solve.
    #[display("board has no player vehicle")]
    NoPlayer,
    /// Every reachable state was explored and none is solved.
    #[display("puzzle has no solution")]
    Unsolvable,
    /// No solution within the depth limit; deeper states were not explored.
    #[display("no solution within {max_depth} moves")]
    DepthLimit {
        /// The configured depth limit.
        max_depth: usize,
    },
    /// The search visited more states than allowed.
    #[display("search exceeded {max_states} states")]
    StateLimit {
        /// The configured state limit.
        max_states: usize,
    },
}
