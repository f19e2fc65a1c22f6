//! Round state types.

/// Progress of a single round.
///
/// Each state names the last phase the round has completed; every public
/// round operation moves the engine exactly one step forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Nothing has been dealt yet.
    NotStarted,
    /// Dealer and players hold their initial cards.
    InitialDeal,
    /// Every player hand has finished acting.
    PlayersActing,
    /// The dealer has drawn to the stand value.
    DealerActing,
    /// Every hand has a result.
    Resolved,
    /// Bankrolls have been settled; the round is over.
    PayoutsApplied,
    /// A phase failed; the round cannot continue.
    Aborted,
}
