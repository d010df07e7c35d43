mod id;
mod poll;
mod registry;

pub use id::{PollId, VoterId};
pub use poll::{Choice, Outcome, Poll, PollStatus};
pub use registry::PollRegistry;
