use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Message wording wallets use when the owner turns a request down.
/// Covers "User rejected the request", "user denied transaction
/// signature" and the other variants seen in the wild.
static DECLINE_MESSAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)user (rejected|denied)").expect("valid decline pattern"));

/// Provider error code for a rejected request (EIP-1193 style)
const DECLINE_CODE: i64 = 4001;

/// Error name wallets attach to a rejected request
const DECLINE_NAME: &str = "UserRejectedRequestError";

/// Raw failure surfaced by the wallet/RPC transport for a read or a
/// write. The sync layer never inspects transports directly; whatever
/// adapter sits in front of the chain folds its native error into
/// this shape, and classification happens here against the code,
/// name, and message signatures.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct TxFailure {
    /// Numeric provider error code, when the transport reports one
    pub code: Option<i64>,
    /// Error name or class reported by the transport
    pub name: Option<String>,
    /// Human-readable failure message
    pub message: String,
}

impl TxFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            name: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this failure is the owner declining to authorize the
    /// request, rather than a fault in the transport or the store.
    pub fn is_user_declined(&self) -> bool {
        self.code == Some(DECLINE_CODE)
            || self.name.as_deref() == Some(DECLINE_NAME)
            || DECLINE_MESSAGE.is_match(&self.message)
    }
}

/// Failure of a store operation as seen by the sync layer.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum StoreError {
    /// The store rejected an out-of-range task index. An empty list
    /// and a short list both land here; there is no separate "no
    /// tasks" case.
    #[error("invalid task index {index}")]
    InvalidIndex { index: u32 },

    /// The transport reported a failure, declined or otherwise
    #[error(transparent)]
    Tx(#[from] TxFailure),
}

/// What a failure means for the user-facing surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    /// Out-of-range index rejected by the store
    InvalidIndex,
    /// The owner declined to authorize the write — a normal outcome,
    /// not a fault
    UserDeclined,
    /// Anything else arising from the channel to the store
    Transport,
}

impl StoreError {
    pub fn kind(&self) -> FailureKind {
        match self {
            StoreError::InvalidIndex { .. } => FailureKind::InvalidIndex,
            StoreError::Tx(failure) if failure.is_user_declined() => FailureKind::UserDeclined,
            StoreError::Tx(_) => FailureKind::Transport,
        }
    }

    pub fn is_user_declined(&self) -> bool {
        self.kind() == FailureKind::UserDeclined
    }
}
