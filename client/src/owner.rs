use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TxFailure;

/// Opaque identity of a list owner — an account address on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a deployed store derives the owner for its entry points.
///
/// Two deployment variants exist: one binds every call to the
/// transaction caller, the other takes the owner as an explicit
/// argument. The sync layer always resolves an owner and hands it to
/// the store adapter; this mode tells the adapter whether that owner
/// also goes on the wire or is left to the chain to bind. One config
/// value, no duplicated call paths.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OwnerMode {
    /// Writes and reads are bound to the transaction caller; the
    /// owner argument stays off the wire
    #[default]
    CallerBound,
    /// Entry points take the owner as an explicit argument
    Explicit,
}

/// Capability that names the active owner.
///
/// Called once per operation, so a wallet adapter can reflect account
/// switches between operations without the sync layer caching a stale
/// identity.
pub trait OwnerResolver {
    fn resolve_owner(&self) -> Result<OwnerId, TxFailure>;
}

/// Resolver for a session pinned to one connected account.
#[derive(Clone, Debug)]
pub struct FixedOwner(OwnerId);

impl FixedOwner {
    pub fn new(owner: OwnerId) -> Self {
        Self(owner)
    }
}

impl OwnerResolver for FixedOwner {
    fn resolve_owner(&self) -> Result<OwnerId, TxFailure> {
        Ok(self.0.clone())
    }
}
