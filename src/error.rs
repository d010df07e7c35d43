use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::voting::{PollId, VoterId};

/// Every way a registry operation can be refused. Each precondition
/// violation maps to its own variant; none are retried internally.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PollError {
    Unauthorized { caller: VoterId },
    EmptyQuestion,
    DuplicateQuestion,
    PollNotFound { poll_id: PollId },
    AlreadyVoted { poll_id: PollId, voter: VoterId },
    VotingClosed { poll_id: PollId },
    VotingNotEnded { poll_id: PollId },
    Overflow { poll_id: PollId },
}

impl Display for PollError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PollError::Unauthorized { caller } => {
                write!(f, "caller {caller} is not the registry owner")
            }
            PollError::EmptyQuestion => {
                write!(f, "poll question must not be empty")
            }
            PollError::DuplicateQuestion => {
                write!(f, "a poll with an identical question already exists")
            }
            PollError::PollNotFound { poll_id } => {
                write!(f, "no poll with id {poll_id}")
            }
            PollError::AlreadyVoted { poll_id, voter } => {
                write!(f, "voter {voter} already voted on poll {poll_id}")
            }
            PollError::VotingClosed { poll_id } => {
                write!(f, "poll {poll_id} is past its voting deadline")
            }
            PollError::VotingNotEnded { poll_id } => {
                write!(f, "poll {poll_id} is still open for voting")
            }
            PollError::Overflow { poll_id } => {
                write!(f, "a vote counter on poll {poll_id} is at its maximum")
            }
        }
    }
}

impl Error for PollError {}
