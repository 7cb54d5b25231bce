multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Voting Status — derived from proposal count and deadline
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum VotingStatus {
    /// No proposal was ever created under this id.
    NotFound,
    /// Block timestamp is at or before the deadline.
    Open,
    /// Deadline has passed. Tallies are final.
    Closed,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub created_at: u64,
    /// Last block timestamp at which votes are accepted
    pub deadline: u64,
    /// Reserved for proposal execution; no endpoint sets it
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// Zero-valued record, returned for ids that were never allocated.
    pub fn empty() -> Self {
        Proposal {
            id: 0,
            proposer: ManagedAddress::zero(),
            description: ManagedBuffer::new(),
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            created_at: 0,
            deadline: 0,
            executed: false,
        }
    }
}
