use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dense poll identifier: the poll's position in the registry's append-only
/// sequence. Assigned at creation, never reused, never reordered.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PollId(pub u32);

impl PollId {
    pub const fn nil() -> PollId {
        PollId(0)
    }
}

impl Display for PollId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<u32> for PollId {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

/// Opaque participant identity. No two distinct participants share one.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct VoterId(pub Uuid);

impl VoterId {
    pub const fn nil() -> VoterId {
        VoterId(Uuid::nil())
    }

    pub fn new() -> VoterId {
        VoterId(Uuid::new_v4())
    }
}

impl Display for VoterId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
