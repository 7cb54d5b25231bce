#![no_std]

multiversx_sc::imports!();

pub mod governance_ledger_proxy;
pub mod types;

use types::{Proposal, VotingStatus};

// ============================================================
// Constants
// ============================================================

/// Voting window: 7 days in seconds, counted from proposal creation
pub const VOTING_PERIOD: u64 = 604_800;

/// Voting power granted to the deployer at init
pub const INITIAL_OWNER_POWER: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait GovernanceLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.voting_power(&caller).set(INITIAL_OWNER_POWER);
        self.proposal_count().set(0u64);

        self.power_granted_event(&caller, INITIAL_OWNER_POWER);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: delegate
    // Records who the caller defers to. The record is
    // informational: it never changes vote weight.
    // ========================================================

    #[endpoint(delegate)]
    fn delegate(&self, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(!to.is_zero(), "Invalid delegate");
        require!(to != caller, "Cannot delegate to self");

        self.delegates(&caller).set(&to);

        self.delegated_event(&caller, &to);
    }

    // ========================================================
    // ENDPOINT: vote
    // Yes/No voting weighted by the caller's own voting power.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        require!(
            proposal_id < self.proposal_count().get(),
            "Proposal does not exist"
        );
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            "Already voted"
        );

        let mut proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        require!(now <= proposal.deadline, "Voting period has ended");

        // Zero power still consumes the receipt
        let power = self.power_to_weight(self.voting_power(&caller).get());
        if support {
            proposal.votes_for += &power;
        } else {
            proposal.votes_against += &power;
        }

        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.voted_event(proposal_id, &caller, support);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Any address holding voting power can propose.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(self.voting_power(&caller).get() > 0, "No voting power");

        let proposal_id = self.proposal_count().get();
        let timestamp = self.blockchain().get_block_timestamp();
        let deadline = match timestamp.checked_add(VOTING_PERIOD) {
            Some(deadline) => deadline,
            None => sc_panic!("Deadline overflow"),
        };

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            created_at: timestamp,
            deadline,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &caller, deadline);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: grantPower
    // Owner-only. Overwrites, never accumulates.
    // ========================================================

    #[endpoint(grantPower)]
    fn grant_power(&self, to: ManagedAddress, amount: u64) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.owner().get(),
            "Only owner can grant voting power"
        );

        self.voting_power(&to).set(amount);

        self.power_granted_event(&to, amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Tally weight for a power value. `BigUint::from(u64)` stops at
    /// `i64::MAX`; the byte path covers the full `u64` range.
    fn power_to_weight(&self, power: u64) -> BigUint {
        BigUint::from_bytes_be(&power.to_be_bytes())
    }

    fn voting_status(&self, proposal_id: u64) -> VotingStatus {
        if proposal_id >= self.proposal_count().get() {
            return VotingStatus::NotFound;
        }

        let now = self.blockchain().get_block_timestamp();
        if now <= self.proposals(proposal_id).get().deadline {
            VotingStatus::Open
        } else {
            VotingStatus::Closed
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        if self.proposals(id).is_empty() {
            return Proposal::empty();
        }
        self.proposals(id).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for i in from..end {
            result.push(self.proposals(i).get());
        }
        result
    }

    /// Open proposals among ids `from..from + count`. Paged like
    /// `getProposals` so a single query never walks the whole history.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);
        let now = self.blockchain().get_block_timestamp();

        for i in from..end {
            let proposal = self.proposals(i).get();
            if now <= proposal.deadline {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, id: u64) -> VotingStatus {
        self.voting_status(id)
    }

    #[view(getDelegate)]
    fn get_delegate(&self, account: &ManagedAddress) -> ManagedAddress {
        if self.delegates(account).is_empty() {
            return ManagedAddress::zero();
        }
        self.delegates(account).get()
    }

    #[view(getVotingPower)]
    fn get_voting_power(&self, account: &ManagedAddress) -> u64 {
        self.voting_power(account).get()
    }

    #[view(hasVoted)]
    fn has_account_voted(&self, proposal_id: u64, account: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, account).get()
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue2<u64, u64> {
        (VOTING_PERIOD, INITIAL_OWNER_POWER).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("delegated")]
    fn delegated_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        deadline: u64,
    );

    #[event("powerGranted")]
    fn power_granted_event(&self, #[indexed] account: &ManagedAddress, amount: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Voting power & delegation ──

    #[storage_mapper("votingPower")]
    fn voting_power(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("delegates")]
    fn delegates(&self, account: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;
}
