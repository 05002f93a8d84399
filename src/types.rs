multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Ciphertext Handle — opaque reference to an encrypted score
// ============================================================

/// Opaque token produced by the FHE gateway. The ledger stores and
/// forwards it but never interprets the bytes; only the gateway can
/// act on what it refers to.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct CiphertextHandle<M: ManagedTypeApi> {
    raw: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> CiphertextHandle<M> {
    pub fn new(raw: ManagedBuffer<M>) -> Self {
        CiphertextHandle { raw }
    }

    /// An empty handle can never refer to a ciphertext.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

// ============================================================
// Contribution — one record per caller-supplied id
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Contribution<M: ManagedTypeApi> {
    pub submitter: ManagedAddress<M>,
    pub encrypted_score: CiphertextHandle<M>,
    pub submitted_at: u64,
    /// Revealed value. Meaningless until `verified` is true.
    pub clear_score: u64,
    /// Transitions false → true exactly once, never back.
    pub verified: bool,
}

// ============================================================
// Member — running aggregate over verified contributions
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Default, Debug)]
pub struct Member {
    pub total_score: u64,
    pub contribution_count: u64,
    /// Block timestamp of the most recent verification for this member.
    pub last_updated: u64,
}
