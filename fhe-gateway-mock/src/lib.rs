#![no_std]

multiversx_sc::imports!();

pub mod mock_proxy;

use contribution_ledger::types::CiphertextHandle;

// ============================================================
// Mock FHE gateway — test stand-in for the external capability
// ============================================================

/// Implements the gateway ABI the ledger calls into, with toggleable
/// reject switches so tests can drive every failure path. Tracks decrypt
/// grants so tests can assert the grant-before-verify protocol.
#[multiversx_sc::contract]
pub trait FheGatewayMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ── Test levers ──

    #[endpoint(setRejectCiphertexts)]
    fn set_reject_ciphertexts(&self, reject: bool) {
        self.reject_ciphertexts().set(reject);
    }

    #[endpoint(setRejectProofs)]
    fn set_reject_proofs(&self, reject: bool) {
        self.reject_proofs().set(reject);
    }

    // ── Gateway ABI ──

    #[view(checkWellFormed)]
    fn check_well_formed(
        &self,
        handle: CiphertextHandle<Self::Api>,
        input_proof: ManagedBuffer,
    ) -> bool {
        !handle.is_empty() && !input_proof.is_empty() && !self.reject_ciphertexts().get()
    }

    #[endpoint(grantDecryptAccess)]
    fn grant_decrypt_access(&self, handle: CiphertextHandle<Self::Api>) {
        self.granted(&handle).set(true);
    }

    /// Accepts only when every handle was previously granted and the
    /// reject-proofs lever is off.
    #[view(verifyClearValue)]
    fn verify_clear_value(
        &self,
        handles: MultiValueEncoded<CiphertextHandle<Self::Api>>,
        clear_payload: ManagedBuffer,
        proof: ManagedBuffer,
    ) -> bool {
        if self.reject_proofs().get() || clear_payload.is_empty() || proof.is_empty() {
            return false;
        }
        for handle in handles {
            if !self.granted(&handle).get() {
                return false;
            }
        }
        true
    }

    #[view(isDecryptGranted)]
    fn is_decrypt_granted(&self, handle: CiphertextHandle<Self::Api>) -> bool {
        self.granted(&handle).get()
    }

    // ── Storage ──

    #[storage_mapper("rejectCiphertexts")]
    fn reject_ciphertexts(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("rejectProofs")]
    fn reject_proofs(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("granted")]
    fn granted(&self, handle: &CiphertextHandle<Self::Api>) -> SingleValueMapper<bool>;
}
