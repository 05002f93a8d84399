use crate::error::{CapabilityError, LedgerRejection};
use crate::types::{
    CiphertextHandle, ClearValueAttestation, ContractContext, ContributionView,
    EncryptedSubmission,
};

/// Seam over the external FHE service. Implementations wrap the
/// vendor SDK; this crate never sees key material or plaintext
/// ciphertext internals.
pub trait EncryptionCapability {
    /// Cheap liveness probe, checked before any crypto call.
    fn is_available(&self) -> bool;

    /// Encrypt a plaintext score bound to the target ledger and caller.
    fn encrypt(
        &self,
        context: &ContractContext,
        score: u64,
    ) -> Result<EncryptedSubmission, CapabilityError>;

    /// Ask the capability to decrypt a stored handle, producing a clear
    /// value plus a proof the ledger can check against that handle.
    fn request_clear_value(
        &self,
        handle: &CiphertextHandle,
    ) -> Result<ClearValueAttestation, CapabilityError>;
}

/// Seam over the on-chain ledger. Implementations wrap transaction
/// submission and receipt polling; a mutating call that was dispatched
/// cannot be rolled back from here.
pub trait LedgerGateway {
    fn submit_contribution(
        &mut self,
        id: &str,
        submission: &EncryptedSubmission,
    ) -> Result<(), LedgerRejection>;

    fn encrypted_score(&self, id: &str) -> Result<CiphertextHandle, LedgerRejection>;

    /// Returns the confirmed clear value on success.
    fn verify_contribution(
        &mut self,
        id: &str,
        attestation: &ClearValueAttestation,
    ) -> Result<u64, LedgerRejection>;

    fn contribution(&self, id: &str) -> Result<ContributionView, LedgerRejection>;
}
