/// Rejections surfaced by the on-chain ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerRejection {
    #[error("contribution id already exists")]
    DuplicateId,

    #[error("unknown contribution id")]
    NotFound,

    #[error("contribution already verified")]
    AlreadyVerified,

    #[error("malformed ciphertext")]
    MalformedCiphertext,

    #[error("decryption proof rejected")]
    InvalidProof,

    #[error("ledger unreachable: {0}")]
    Unreachable(String),
}

/// Failures of the external FHE capability. There is never a plaintext
/// fallback: everything depending on the capability fails closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("encryption capability unavailable")]
    Unavailable,

    #[error("capability rejected the request: {0}")]
    Rejected(String),
}

/// User-facing reason a flow landed in the `Rejected` state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    #[error(transparent)]
    Ledger(#[from] LedgerRejection),
}

impl RejectReason {
    /// Everything is worth retrying except a duplicate id, which
    /// signals an id-generation bug: regenerate the id instead of
    /// resubmitting the same one.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, RejectReason::Ledger(LedgerRejection::DuplicateId))
    }
}

/// Errors returned by [`crate::ContributionFlow`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// The operation does not apply to the flow's current state.
    #[error("operation not valid in the {0} state")]
    InvalidState(&'static str),

    /// The flow transitioned to `Rejected` with this reason.
    #[error(transparent)]
    Rejected(#[from] RejectReason),
}
