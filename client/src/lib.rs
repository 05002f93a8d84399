//! Client-side orchestration for the confidential contribution ledger.
//!
//! The dapp frontend drives one [`ContributionFlow`] per submission:
//! encrypt the plaintext score through the FHE capability, submit the
//! opaque payload to the on-chain ledger, and later request a
//! proof-backed decryption and confirm the revealed value back to the
//! ledger.
//!
//! Crypto and chain I/O stay behind two trait seams
//! ([`EncryptionCapability`] and [`LedgerGateway`]); each external call
//! is modelled as a single request/response, so the traits are
//! synchronous and the host application owns suspension and retries.

pub mod error;
pub mod flow;
pub mod gateway;
pub mod types;

pub use error::{CapabilityError, FlowError, LedgerRejection, RejectReason};
pub use flow::{ContributionFlow, FlowState};
pub use gateway::{EncryptionCapability, LedgerGateway};
pub use types::{
    CiphertextHandle, ClearValueAttestation, ContractContext, ContributionView,
    EncryptedSubmission,
};
