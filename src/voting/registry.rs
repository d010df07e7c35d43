use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::auth::Authorization;
use crate::clock::Clock;
use crate::error::PollError;
use crate::event::{EventSink, NullSink, PollEvent};

use super::id::{PollId, VoterId};
use super::poll::{Choice, Outcome, Poll, PollStatus};

/// Owner-gated ledger of yes/no polls.
///
/// Polls live in an append-only sequence indexed by their `PollId`; nothing
/// is ever deleted or reordered. Question texts are unique across the
/// registry's whole lifetime, and each voter gets at most one vote per poll.
/// All mutations go through `&mut self`, so two writers can never interleave
/// a check with its matching insert.
pub struct PollRegistry {
    polls: Vec<Poll>,
    questions: HashSet<String>,
    // runs parallel to `polls`; a recorded voter is never removed
    voted: Vec<HashSet<VoterId>>,
    auth: Box<dyn Authorization>,
    clock: Box<dyn Clock>,
    sink: Box<dyn EventSink>,
}

impl PollRegistry {
    pub fn new(auth: Box<dyn Authorization>, clock: Box<dyn Clock>) -> PollRegistry {
        PollRegistry::with_sink(auth, clock, Box::new(NullSink))
    }

    pub fn with_sink(
        auth: Box<dyn Authorization>,
        clock: Box<dyn Clock>,
        sink: Box<dyn EventSink>,
    ) -> PollRegistry {
        PollRegistry {
            polls: vec![],
            questions: HashSet::new(),
            voted: vec![],
            auth,
            clock,
            sink,
        }
    }

    /// Opens a new poll closing `duration_seconds` from now. Owner-only.
    /// A duration of zero is legal; the poll is just born past its deadline.
    pub fn create_poll(
        &mut self,
        caller: VoterId,
        question: &str,
        duration_seconds: u32,
    ) -> Result<PollId, PollError> {
        if !self.auth.is_owner(caller) {
            return Err(PollError::Unauthorized { caller });
        }
        if question.is_empty() {
            return Err(PollError::EmptyQuestion);
        }
        if self.questions.contains(question) {
            return Err(PollError::DuplicateQuestion);
        }

        let poll_id = PollId(self.polls.len() as u32);
        let created_at = self.clock.now();
        self.questions.insert(String::from(question));
        self.polls
            .push(Poll::new(poll_id, String::from(question), created_at, duration_seconds));
        self.voted.push(HashSet::new());

        self.sink
            .publish(&PollEvent::PollCreated { poll_id, created_at });
        Ok(poll_id)
    }

    /// Records one vote. Checks run in a fixed order: the poll must exist,
    /// the voter must be new to it, and the deadline must not have passed.
    pub fn vote(
        &mut self,
        poll_id: PollId,
        voter: VoterId,
        choice: Choice,
    ) -> Result<(), PollError> {
        let index = self.index_of(poll_id)?;
        if self.voted[index].contains(&voter) {
            return Err(PollError::AlreadyVoted { poll_id, voter });
        }
        if self.clock.now() > self.polls[index].deadline {
            return Err(PollError::VotingClosed { poll_id });
        }

        let slot = match choice {
            Choice::Yes => &mut self.polls[index].yes_count,
            Choice::No => &mut self.polls[index].no_count,
        };
        let bumped = slot
            .checked_add(1)
            .ok_or(PollError::Overflow { poll_id })?;

        // all checks passed; mark and count together, then notify
        *slot = bumped;
        self.voted[index].insert(voter);

        self.sink.publish(&PollEvent::VoteCast {
            poll_id,
            voter,
            choice,
        });
        Ok(())
    }

    /// Final tally. Only answers once the deadline has passed; before that
    /// the counters are not a result, and asking is an error.
    pub fn result(&self, poll_id: PollId) -> Result<Outcome, PollError> {
        let poll = self.poll(poll_id)?;
        if self.clock.now() <= poll.deadline {
            return Err(PollError::VotingNotEnded { poll_id });
        }
        Ok(poll.outcome())
    }

    pub fn poll_count(&self) -> usize {
        self.polls.len()
    }

    pub fn poll(&self, poll_id: PollId) -> Result<&Poll, PollError> {
        self.polls
            .get(poll_id.0 as usize)
            .ok_or(PollError::PollNotFound { poll_id })
    }

    pub fn question(&self, poll_id: PollId) -> Result<&str, PollError> {
        self.poll(poll_id).map(|poll| poll.question.as_str())
    }

    pub fn counts(&self, poll_id: PollId) -> Result<(u64, u64), PollError> {
        self.poll(poll_id)
            .map(|poll| (poll.yes_count, poll.no_count))
    }

    pub fn deadline(&self, poll_id: PollId) -> Result<DateTime<Utc>, PollError> {
        self.poll(poll_id).map(|poll| poll.deadline)
    }

    pub fn status(&self, poll_id: PollId) -> Result<PollStatus, PollError> {
        let poll = self.poll(poll_id)?;
        Ok(poll.status(self.clock.now()))
    }

    pub fn has_voted(&self, poll_id: PollId, voter: VoterId) -> Result<bool, PollError> {
        let index = self.index_of(poll_id)?;
        Ok(self.voted[index].contains(&voter))
    }

    fn index_of(&self, poll_id: PollId) -> Result<usize, PollError> {
        let index = poll_id.0 as usize;
        if index < self.polls.len() {
            Ok(index)
        } else {
            Err(PollError::PollNotFound { poll_id })
        }
    }
}
