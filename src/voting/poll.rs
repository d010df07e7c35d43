use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::id::PollId;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Choice {
    Yes,
    No,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Approved,
    Rejected,
    Tie,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PollStatus {
    Open,
    Closed,
}

/// One yes/no question under vote. Immutable after creation except for the
/// two counters, which only ever grow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub yes_count: u64,
    pub no_count: u64,
}

impl Poll {
    pub fn new(
        id: PollId,
        question: String,
        created_at: DateTime<Utc>,
        duration_seconds: u32,
    ) -> Poll {
        Poll {
            id,
            question,
            created_at,
            deadline: created_at + Duration::seconds(i64::from(duration_seconds)),
            yes_count: 0,
            no_count: 0,
        }
    }

    /// Open while `now` has not passed the deadline; `Closed` is terminal.
    pub fn status(&self, now: DateTime<Utc>) -> PollStatus {
        if now <= self.deadline {
            PollStatus::Open
        } else {
            PollStatus::Closed
        }
    }

    /// Pure tally of the counters as they stand. Callers gate on the
    /// deadline before treating this as final.
    pub fn outcome(&self) -> Outcome {
        match self.yes_count.cmp(&self.no_count) {
            Ordering::Greater => Outcome::Approved,
            Ordering::Less => Outcome::Rejected,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn deadline_is_creation_plus_duration() {
        let poll = Poll::new(PollId(0), String::from("Ship it?"), at(1000), 3600);
        assert_eq!(poll.deadline, at(4600));
        assert_eq!(poll.yes_count, 0);
        assert_eq!(poll.no_count, 0);
    }

    #[test]
    fn open_through_deadline_closed_after() {
        let poll = Poll::new(PollId(0), String::from("Ship it?"), at(1000), 3600);
        assert_eq!(poll.status(at(1000)), PollStatus::Open);
        assert_eq!(poll.status(at(4600)), PollStatus::Open);
        assert_eq!(poll.status(at(4601)), PollStatus::Closed);
    }

    #[test]
    fn outcome_follows_counter_comparison() {
        let mut poll = Poll::new(PollId(3), String::from("Ship it?"), at(0), 60);
        assert_eq!(poll.outcome(), Outcome::Tie);

        poll.yes_count = 2;
        poll.no_count = 1;
        assert_eq!(poll.outcome(), Outcome::Approved);

        poll.no_count = 5;
        assert_eq!(poll.outcome(), Outcome::Rejected);

        poll.yes_count = 5;
        assert_eq!(poll.outcome(), Outcome::Tie);
    }
}
