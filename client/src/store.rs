use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::owner::OwnerId;
use crate::task::Task;

/// Receipt for a confirmed write.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TxReceipt {
    /// Transaction hash or ledger reference, when the transport
    /// reports one
    pub tx_hash: Option<String>,
}

/// Read and write surface of the on-chain task store.
///
/// An implementation wraps the deployed contract behind whatever
/// wallet and RPC plumbing the host application uses. Writes resolve
/// once the transaction is confirmed (or fail, including the owner
/// declining to sign); reads return current on-chain state. The owner
/// is always explicit at this seam — `OwnerMode` tells an adapter
/// whether to put it on the wire or let the chain bind it to the
/// caller.
#[async_trait]
pub trait TaskStore {
    /// Current length of the owner's list, zero for a never-seen
    /// owner
    async fn task_count(&self, owner: &OwnerId) -> Result<u32, StoreError>;

    /// Task at `index`; `InvalidIndex` past the end of the list
    async fn task(&self, owner: &OwnerId, index: u32) -> Result<Task, StoreError>;

    /// Submit an append of `{text, completed: false}`
    async fn add_task(&self, owner: &OwnerId, text: &str) -> Result<TxReceipt, StoreError>;

    /// Submit a completion flip at `index`; `InvalidIndex` past the
    /// end of the list
    async fn toggle_task(&self, owner: &OwnerId, index: u32) -> Result<TxReceipt, StoreError>;
}

#[async_trait]
impl<T> TaskStore for Arc<T>
where
    T: TaskStore + Send + Sync + ?Sized,
{
    async fn task_count(&self, owner: &OwnerId) -> Result<u32, StoreError> {
        (**self).task_count(owner).await
    }

    async fn task(&self, owner: &OwnerId, index: u32) -> Result<Task, StoreError> {
        (**self).task(owner, index).await
    }

    async fn add_task(&self, owner: &OwnerId, text: &str) -> Result<TxReceipt, StoreError> {
        (**self).add_task(owner, text).await
    }

    async fn toggle_task(&self, owner: &OwnerId, index: u32) -> Result<TxReceipt, StoreError> {
        (**self).toggle_task(owner, index).await
    }
}
