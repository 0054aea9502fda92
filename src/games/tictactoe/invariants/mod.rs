//! Post-ply invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every ply.
//! The game loop checks the full set and turns any failure into
//! `GameError::InvariantViolation`.

/// A logical property that must hold for a given state.
///
/// Each invariant is a unit struct so sets of them can be composed as
/// tuple types.
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

/// Invariants checked together as one tuple type.
pub trait InvariantSet<S> {
    /// Runs every member, collecting one violation per failed invariant in
    /// tuple order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($member::holds(state), $member::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);
impl_invariant_set!(A, B, C, D);

pub mod monotonic_board;
pub mod move_count;
pub mod turn_agreement;

pub use monotonic_board::MonotonicBoardInvariant;
pub use move_count::MoveCountInvariant;
pub use turn_agreement::TurnAgreementInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MoveCountInvariant,
    MonotonicBoardInvariant,
    TurnAgreementInvariant,
);
