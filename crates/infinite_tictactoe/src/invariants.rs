//! Engine invariants.
//!
//! Logical properties that hold after every engine operation. The engine
//! checks them in debug builds; tests check them directly.

use super::engine::BoardEngine;
use super::history::HISTORY_CAPACITY;
use super::types::Square;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
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
        collect(violations)
    }
}

/// Invariant: history length equals the number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardEngine> for HistoryConsistentInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        engine.history().len() == engine.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

/// Invariant: history never holds more than nine records.
pub struct HistoryBoundedInvariant;

impl Invariant<BoardEngine> for HistoryBoundedInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        engine.history().len() <= HISTORY_CAPACITY
    }

    fn description() -> &'static str {
        "History holds at most nine records"
    }
}

/// Invariant: every record points at a distinct square holding its mark.
pub struct HistoryMatchesBoardInvariant;

impl Invariant<BoardEngine> for HistoryMatchesBoardInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        let mut seen = [false; 9];
        engine.history().iter().all(|record| {
            let fresh = seen
                .get_mut(record.index)
                .is_some_and(|slot| !std::mem::replace(slot, true));
            fresh && engine.board().get(record.index) == Some(Square::Occupied(record.mark))
        })
    }

    fn description() -> &'static str {
        "Each history record's square holds its mark"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    HistoryConsistentInvariant,
    HistoryBoundedInvariant,
    HistoryMatchesBoardInvariant,
);
