#![no_std]

multiversx_sc::imports!();

pub mod contribution_ledger_proxy;
pub mod fhe_gateway_proxy;
pub mod types;

use types::{CiphertextHandle, Contribution, Member};

// ============================================================
// Contract
// ============================================================

/// Confidential contribution ledger for DAO member scoring.
///
/// Scores arrive as opaque ciphertext handles minted by an external FHE
/// gateway contract and stay confidential until an explicit, proof-backed
/// verification step reveals them. Per-member totals are folded in
/// incrementally at the moment of verification, never recomputed.
#[multiversx_sc::contract]
pub trait ContributionLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, fhe_gateway_address: ManagedAddress) {
        require!(!fhe_gateway_address.is_zero(), "FHE gateway not configured");
        self.fhe_gateway_address().set(&fhe_gateway_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Rewire the gateway collaborator, e.g. after a gateway upgrade.
    #[only_owner]
    #[endpoint(setFheGatewayAddress)]
    fn set_fhe_gateway_address(&self, fhe_gateway_address: ManagedAddress) {
        require!(!fhe_gateway_address.is_zero(), "FHE gateway not configured");
        self.fhe_gateway_address().set(&fhe_gateway_address);
    }

    // ========================================================
    // ENDPOINT: submitContribution
    // Creates the one record an id will ever have. The score stays
    // encrypted; the gateway only attests the ciphertext is well formed.
    // ========================================================

    #[endpoint(submitContribution)]
    fn submit_contribution(
        &self,
        id: ManagedBuffer,
        encrypted_score: CiphertextHandle<Self::Api>,
        input_proof: ManagedBuffer,
    ) {
        require!(!id.is_empty(), "Empty contribution id");
        require!(
            self.contributions(&id).is_empty(),
            "Contribution id already exists"
        );

        // Well-formedness check runs before any state mutation. An
        // unreachable gateway aborts the whole transaction: fail closed.
        let gateway = self.fhe_gateway_address().get();
        let well_formed: bool = self
            .tx()
            .to(&gateway)
            .typed(fhe_gateway_proxy::FheGatewayProxy)
            .check_well_formed(encrypted_score.clone(), input_proof)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(well_formed, "Malformed ciphertext");

        // Allow the gateway to later decrypt this handle for verification.
        // This is a capability grant, not a decryption.
        self.tx()
            .to(&gateway)
            .typed(fhe_gateway_proxy::FheGatewayProxy)
            .grant_decrypt_access(encrypted_score.clone())
            .sync_call();

        let submitter = self.blockchain().get_caller();
        let submitted_at = self.blockchain().get_block_timestamp();

        let contribution = Contribution {
            submitter: submitter.clone(),
            encrypted_score,
            submitted_at,
            clear_score: 0u64,
            verified: false,
        };

        self.contributions(&id).set(&contribution);
        self.contribution_ids().push(&id);

        self.contribution_added_event(&id, &submitter);
    }

    // ========================================================
    // ENDPOINT: verifyContribution
    // Exactly-once reveal. Binds the clear value to the stored handle
    // via the gateway's decryption proof, then folds the value into
    // the submitter's aggregate in the same transaction.
    // ========================================================

    #[endpoint(verifyContribution)]
    fn verify_contribution(
        &self,
        id: ManagedBuffer,
        clear_value: u64,
        decryption_proof: ManagedBuffer,
    ) {
        require!(
            !self.contributions(&id).is_empty(),
            "Unknown contribution id"
        );

        let mut contribution = self.contributions(&id).get();
        require!(!contribution.verified, "Contribution already verified");

        let gateway = self.fhe_gateway_address().get();
        let mut handles = MultiValueEncoded::new();
        handles.push(contribution.encrypted_score.clone());
        let clear_payload = ManagedBuffer::new_from_bytes(&clear_value.to_be_bytes());

        let accepted: bool = self
            .tx()
            .to(&gateway)
            .typed(fhe_gateway_proxy::FheGatewayProxy)
            .verify_clear_value(handles, clear_payload, decryption_proof)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(accepted, "Decryption proof rejected");

        contribution.clear_score = clear_value;
        contribution.verified = true;
        self.contributions(&id).set(&contribution);

        let now = self.blockchain().get_block_timestamp();
        let member_mapper = self.members(&contribution.submitter);
        let mut member = if member_mapper.is_empty() {
            Member::default()
        } else {
            member_mapper.get()
        };
        // Explicit checked arithmetic: the wasm release profile builds
        // with overflow-checks off, so a silent wrap would corrupt the
        // running total on-chain.
        member.total_score = match member.total_score.checked_add(clear_value) {
            Some(total) => total,
            None => sc_panic!("Score total overflow"),
        };
        member.contribution_count = match member.contribution_count.checked_add(1) {
            Some(count) => count,
            None => sc_panic!("Contribution count overflow"),
        };
        member.last_updated = now;
        member_mapper.set(&member);

        // Event order matters: consumers read the fresh aggregate only
        // after seeing the per-contribution reveal.
        self.score_verified_event(&id, clear_value);
        self.member_updated_event(&contribution.submitter, member.total_score);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getContribution)]
    fn get_contribution(&self, id: ManagedBuffer) -> MultiValue4<ManagedAddress, u64, bool, u64> {
        require!(
            !self.contributions(&id).is_empty(),
            "Unknown contribution id"
        );
        let contribution = self.contributions(&id).get();
        (
            contribution.submitter,
            contribution.submitted_at,
            contribution.verified,
            contribution.clear_score,
        )
            .into()
    }

    /// Handle fetch for the client's verification flow. The handle is
    /// public data; only the gateway can act on it.
    #[view(getEncryptedScore)]
    fn get_encrypted_score(&self, id: ManagedBuffer) -> CiphertextHandle<Self::Api> {
        require!(
            !self.contributions(&id).is_empty(),
            "Unknown contribution id"
        );
        self.contributions(&id).get().encrypted_score
    }

    #[view(listContributionIds)]
    fn list_contribution_ids(&self) -> MultiValueEncoded<ManagedBuffer> {
        let mut result = MultiValueEncoded::new();
        for id in self.contribution_ids().iter() {
            result.push(id);
        }
        result
    }

    #[view(getContributions)]
    fn get_contributions(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<Contribution<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.contribution_ids().len() as u64;
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for i in start..=end {
            let id = self.contribution_ids().get(i as usize);
            result.push(self.contributions(&id).get());
        }
        result
    }

    #[view(getContributionCount)]
    fn get_contribution_count(&self) -> u64 {
        self.contribution_ids().len() as u64
    }

    #[view(getMember)]
    fn get_member(&self, address: ManagedAddress) -> MultiValue4<u64, u64, u64, bool> {
        if self.members(&address).is_empty() {
            return (0u64, 0u64, 0u64, false).into();
        }
        let member = self.members(&address).get();
        (
            member.total_score,
            member.contribution_count,
            member.last_updated,
            true,
        )
            .into()
    }

    #[view(getFheGatewayAddress)]
    fn get_fhe_gateway_address(&self) -> ManagedAddress {
        self.fhe_gateway_address().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contributionAdded")]
    fn contribution_added_event(
        &self,
        #[indexed] id: &ManagedBuffer,
        #[indexed] submitter: &ManagedAddress,
    );

    #[event("scoreVerified")]
    fn score_verified_event(&self, #[indexed] id: &ManagedBuffer, clear_score: u64);

    #[event("memberUpdated")]
    fn member_updated_event(
        &self,
        #[indexed] member: &ManagedAddress,
        new_total_score: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("fheGatewayAddress")]
    fn fhe_gateway_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Contributions ──

    #[storage_mapper("contributions")]
    fn contributions(&self, id: &ManagedBuffer) -> SingleValueMapper<Contribution<Self::Api>>;

    /// Insertion-order id list backing the enumeration views.
    #[storage_mapper("contributionIds")]
    fn contribution_ids(&self) -> VecMapper<ManagedBuffer>;

    // ── Member aggregates ──

    #[storage_mapper("members")]
    fn members(&self, address: &ManagedAddress) -> SingleValueMapper<Member>;
}
