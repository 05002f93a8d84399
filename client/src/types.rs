/// Opaque reference to an encrypted score. Deliberately has no
/// accessors: the bytes only mean something to the FHE capability, and
/// nothing outside it should inspect or compare ciphertexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiphertextHandle(Vec<u8>);

impl CiphertextHandle {
    pub fn new(raw: Vec<u8>) -> Self {
        CiphertextHandle(raw)
    }
}

/// Output of the encryption step: the handle plus the input proof that
/// lets the ledger's gateway check well-formedness.
#[derive(Debug, Clone)]
pub struct EncryptedSubmission {
    pub handle: CiphertextHandle,
    pub input_proof: Vec<u8>,
}

/// Output of the decryption step: a clear value bound to a stored
/// handle by the capability's proof.
#[derive(Debug, Clone)]
pub struct ClearValueAttestation {
    pub handle: CiphertextHandle,
    pub clear_value: u64,
    pub proof: Vec<u8>,
}

/// Identifies the target ledger and the submitting wallet; the
/// capability binds ciphertexts to both.
#[derive(Debug, Clone)]
pub struct ContractContext {
    pub ledger_address: String,
    pub caller: String,
}

/// Read model of one on-chain contribution record.
#[derive(Debug, Clone)]
pub struct ContributionView {
    pub submitter: String,
    pub submitted_at: u64,
    pub verified: bool,
    /// Meaningless unless `verified` is true.
    pub clear_score: u64,
}
