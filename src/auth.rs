use crate::voting::VoterId;

/// Answers "is this caller the registry owner?". How ownership is
/// established or transferred is the caller's business; the registry only
/// consumes the yes/no answer.
pub trait Authorization: Send + Sync {
    fn is_owner(&self, caller: VoterId) -> bool;
}

impl<F> Authorization for F
where
    F: Fn(VoterId) -> bool + Send + Sync,
{
    fn is_owner(&self, caller: VoterId) -> bool {
        self(caller)
    }
}

/// One fixed owner for the registry's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct SingleOwner {
    owner: VoterId,
}

impl SingleOwner {
    pub const fn new(owner: VoterId) -> SingleOwner {
        SingleOwner { owner }
    }
}

impl Authorization for SingleOwner {
    fn is_owner(&self, caller: VoterId) -> bool {
        caller == self.owner
    }
}
