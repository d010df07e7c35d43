//! An owner-gated ledger of yes/no polls with time-boxed voting windows,
//! one vote per participant, and a deterministic tally.

mod auth;
mod clock;
mod error;
mod event;
mod voting;

pub use auth::{Authorization, SingleOwner};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::PollError;
pub use event::{EventSink, JsonLinesSink, LogSink, NullSink, PollEvent};
pub use voting::{Choice, Outcome, Poll, PollId, PollRegistry, PollStatus, VoterId};
