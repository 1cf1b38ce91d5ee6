//! Off-chain sync layer for the on-chain to-do list.
//!
//! Maintains a local view of one owner's task list over the four
//! contract entry points (add, toggle, get, count), reachable through
//! whatever wallet/RPC transport the host application wires in behind
//! the [`TaskStore`] trait. Writes are optimistic: the view changes
//! immediately, the transaction is submitted, and a failure rolls the
//! tentative change back. Failures are classified two-tier — the
//! owner declining to sign is a neutral "cancelled" outcome, anything
//! else is an error — and each submitted write produces exactly one
//! message on the [`NotificationSink`].

mod error;
mod notify;
mod owner;
mod store;
mod sync;
mod task;


pub use error::{FailureKind, StoreError, TxFailure};
pub use notify::{Notification, NotificationClass, NotificationSink};
pub use owner::{FixedOwner, OwnerId, OwnerMode, OwnerResolver};
pub use store::{TaskStore, TxReceipt};
pub use sync::SyncClient;
pub use task::Task;
