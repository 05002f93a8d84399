use crate::error::{CapabilityError, FlowError, LedgerRejection, RejectReason};
use crate::gateway::{EncryptionCapability, LedgerGateway};
use crate::types::ContractContext;

/// Lifecycle of one submission from the client's perspective.
///
/// `Encrypting` and `VerificationRequested` are only observable if the
/// driving call is interrupted; on the happy path each operation moves
/// through them within a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Draft,
    Encrypting,
    Submitted,
    VerificationRequested,
    Verified { clear_score: u64 },
    Rejected { reason: RejectReason },
}

impl FlowState {
    fn name(&self) -> &'static str {
        match self {
            FlowState::Draft => "Draft",
            FlowState::Encrypting => "Encrypting",
            FlowState::Submitted => "Submitted",
            FlowState::VerificationRequested => "VerificationRequested",
            FlowState::Verified { .. } => "Verified",
            FlowState::Rejected { .. } => "Rejected",
        }
    }
}

/// One submit-then-verify flow for a single contribution id.
///
/// A rejected flow retains nothing reusable; the next attempt is a
/// fresh `Draft` (with a fresh id if the rejection was a duplicate).
#[derive(Debug)]
pub struct ContributionFlow {
    id: String,
    score: u64,
    context: ContractContext,
    state: FlowState,
}

impl ContributionFlow {
    pub fn new(id: impl Into<String>, score: u64, context: ContractContext) -> Self {
        ContributionFlow {
            id: id.into(),
            score,
            context,
            state: FlowState::Draft,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Best-effort cancellation: only a flow that has dispatched
    /// nothing can be discarded. Returns the flow unchanged otherwise.
    pub fn cancel(self) -> Result<(), Self> {
        match self.state {
            FlowState::Draft => Ok(()),
            _ => Err(self),
        }
    }

    /// Draft → Encrypting → Submitted, or Rejected on any failure.
    pub fn submit(
        &mut self,
        crypto: &impl EncryptionCapability,
        ledger: &mut impl LedgerGateway,
    ) -> Result<(), FlowError> {
        if self.state != FlowState::Draft {
            return Err(FlowError::InvalidState(self.state.name()));
        }
        if !crypto.is_available() {
            return Err(self.reject(CapabilityError::Unavailable.into()));
        }

        self.state = FlowState::Encrypting;
        log::debug!("contribution {}: encrypting score", self.id);
        let submission = match crypto.encrypt(&self.context, self.score) {
            Ok(submission) => submission,
            Err(err) => return Err(self.reject(err.into())),
        };

        match ledger.submit_contribution(&self.id, &submission) {
            Ok(()) => {
                log::info!("contribution {}: submitted", self.id);
                self.state = FlowState::Submitted;
                Ok(())
            }
            Err(err) => Err(self.reject(err.into())),
        }
    }

    /// Submitted → VerificationRequested → Verified, or Rejected.
    ///
    /// An `AlreadyVerified` answer from the ledger is success: someone
    /// beat us to the reveal, so fetch and present the recorded value
    /// instead of erroring.
    pub fn request_verification(
        &mut self,
        crypto: &impl EncryptionCapability,
        ledger: &mut impl LedgerGateway,
    ) -> Result<u64, FlowError> {
        if self.state != FlowState::Submitted {
            return Err(FlowError::InvalidState(self.state.name()));
        }
        if !crypto.is_available() {
            return Err(self.reject(CapabilityError::Unavailable.into()));
        }

        let handle = match ledger.encrypted_score(&self.id) {
            Ok(handle) => handle,
            Err(err) => return Err(self.reject(err.into())),
        };

        self.state = FlowState::VerificationRequested;
        log::debug!("contribution {}: requesting decryption", self.id);
        let attestation = match crypto.request_clear_value(&handle) {
            Ok(attestation) => attestation,
            Err(err) => return Err(self.reject(err.into())),
        };

        match ledger.verify_contribution(&self.id, &attestation) {
            Ok(clear_score) => {
                log::info!("contribution {}: verified", self.id);
                self.state = FlowState::Verified { clear_score };
                Ok(clear_score)
            }
            Err(LedgerRejection::AlreadyVerified) => self.adopt_existing_value(ledger),
            Err(err) => Err(self.reject(err.into())),
        }
    }

    fn adopt_existing_value(&mut self, ledger: &mut impl LedgerGateway) -> Result<u64, FlowError> {
        match ledger.contribution(&self.id) {
            Ok(view) if view.verified => {
                log::info!(
                    "contribution {}: already verified, adopting recorded value",
                    self.id
                );
                self.state = FlowState::Verified {
                    clear_score: view.clear_score,
                };
                Ok(view.clear_score)
            }
            // The ledger claimed AlreadyVerified but the record does not
            // show it; surface the original rejection.
            Ok(_) => Err(self.reject(LedgerRejection::AlreadyVerified.into())),
            Err(err) => Err(self.reject(err.into())),
        }
    }

    fn reject(&mut self, reason: RejectReason) -> FlowError {
        log::warn!("contribution {}: rejected: {}", self.id, reason);
        self.state = FlowState::Rejected {
            reason: reason.clone(),
        };
        FlowError::Rejected(reason)
    }
}
