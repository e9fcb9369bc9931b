// Optimistic vote transition for a single control.
//
// Purpose
// - Model the optimistic increment as an explicit two-phase transition:
//   begin (Idle -> Pending, +1 shown immediately), then commit (keep) or
//   roll_back (revert), never ad hoc flag toggling.
//
// Boundaries
// - No input or output; the handler drives the backend call around it.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotePhase {
    Idle,
    Pending,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VoteStateError {
    #[error("a vote is already in flight")]
    InFlight,

    #[error("already voted on this issue")]
    AlreadyVoted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteState {
    votes: u32,
    voted: bool,
    phase: VotePhase,
}

impl VoteState {
    pub fn new(votes: u32, voted: bool) -> Self {
        Self {
            votes,
            voted,
            phase: VotePhase::Idle,
        }
    }

    /// The count currently shown, optimistic increment included.
    pub fn votes(&self) -> u32 {
        self.votes
    }

    pub fn voted(&self) -> bool {
        self.voted
    }

    pub fn in_flight(&self) -> bool {
        self.phase == VotePhase::Pending
    }

    /// Starts the optimistic increment. The control stays disabled until the
    /// in-flight request settles, success or failure.
    pub fn begin(&mut self) -> Result<(), VoteStateError> {
        if self.phase == VotePhase::Pending {
            return Err(VoteStateError::InFlight);
        }
        if self.voted {
            return Err(VoteStateError::AlreadyVoted);
        }
        self.votes += 1;
        self.phase = VotePhase::Pending;
        Ok(())
    }

    pub fn commit(&mut self) {
        if self.phase == VotePhase::Pending {
            self.voted = true;
            self.phase = VotePhase::Idle;
        }
    }

    pub fn roll_back(&mut self) {
        if self.phase == VotePhase::Pending {
            self.votes = self.votes.saturating_sub(1);
            self.phase = VotePhase::Idle;
        }
    }

    /// Every tenth vote gets a celebratory notification.
    pub fn is_milestone(&self) -> bool {
        self.votes > 0 && self.votes % 10 == 0
    }
}
