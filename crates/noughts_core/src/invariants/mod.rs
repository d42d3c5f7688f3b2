//! First-class invariants for the game state machine.
//!
//! Each invariant is a named property of a [`GameMachine`] that holds after
//! every operation. They are checked after each transition in debug builds
//! and can be tested on their own.

pub mod alternating_turn;
pub mod history_anchored;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_anchored::HistoryAnchoredInvariant;
pub use status_consistent::StatusConsistentInvariant;

use crate::GameMachine;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants checked together.
///
/// Implemented for triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant of [`GameMachine`].
pub type GameInvariants = (
    HistoryAnchoredInvariant,
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
);

/// Panics in debug builds if any invariant fails.
pub(crate) fn debug_assert_invariants(game: &GameMachine) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = GameInvariants::check_all(game) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(%descriptions, "Invariant violated");
        panic!("Invariant violated: {descriptions}");
    }
}
