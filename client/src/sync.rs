use tracing::{debug, warn};

use crate::error::{FailureKind, StoreError};
use crate::notify::{Notification, NotificationSink};
use crate::owner::{OwnerId, OwnerResolver};
use crate::store::TaskStore;
use crate::task::Task;

/// Local view of one owner's task list, kept consistent with the
/// store under asynchronous, possibly-failing remote calls.
///
/// Every write is applied to the view first, then submitted. On
/// confirmation the tentative change simply stays; on failure it is
/// undone and a single notification goes to the sink — a neutral
/// "cancelled" note when the owner declined to sign, an error
/// otherwise. The view therefore diverges from the store for at most
/// one write round-trip.
///
/// Mutating methods take `&mut self` and are awaited to completion,
/// so there is never more than one write in flight per client; UI
/// elements representing a pending mutation are expected to disable
/// themselves for the duration of the call.
pub struct SyncClient<S, R, N> {
    store: S,
    resolver: R,
    sink: N,
    tasks: Vec<Task>,
    loading: bool,
    last_error: Option<String>,
}

impl<S, R, N> SyncClient<S, R, N>
where
    S: TaskStore,
    R: OwnerResolver,
    N: NotificationSink,
{
    pub fn new(store: S, resolver: R, sink: N) -> Self {
        Self {
            store,
            resolver,
            sink,
            tasks: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    /// Current view, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether a refresh is in progress
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the most recent error-class failure, cleared by the
    /// next operation
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Rebuild the view from the store.
    ///
    /// Reads the owner's task count, then each task by index up to
    /// that count. When the held view already has that many entries
    /// the per-task pass is skipped — nothing was written in between,
    /// so re-reading every task would only cost redundant round
    /// trips. Reads are silent: a failure lands in `last_error` and
    /// the returned `Err`, never in the notification sink.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        self.last_error = None;
        let owner = match self.resolver.resolve_owner() {
            Ok(owner) => owner,
            Err(failure) => return self.record_read_failure(failure.into()),
        };

        self.loading = true;
        let result = self.load(&owner).await;
        self.loading = false;

        match result {
            Ok(()) => Ok(()),
            Err(err) => self.record_read_failure(err),
        }
    }

    async fn load(&mut self, owner: &OwnerId) -> Result<(), StoreError> {
        let count = self.store.task_count(owner).await?;

        if count as usize == self.tasks.len() {
            debug!(count, "task count unchanged, keeping local view");
            return Ok(());
        }

        let mut loaded = Vec::with_capacity(count as usize);
        for index in 0..count {
            loaded.push(self.store.task(owner, index).await?);
        }
        debug!(count, "reloaded task list");
        self.tasks = loaded;
        Ok(())
    }

    /// Submit an add, reflecting it in the view right away.
    ///
    /// The entry is appended before the store is asked; a confirmed
    /// write leaves it in place (the next refresh reconciles it), a
    /// failed one removes it again.
    pub async fn submit_add(&mut self, text: &str) {
        self.last_error = None;
        let owner = match self.resolver.resolve_owner() {
            Ok(owner) => owner,
            Err(failure) => return self.report_write_failure(failure.into()),
        };

        self.tasks.push(Task::new(text));

        match self.store.add_task(&owner, text).await {
            Ok(_) => self.sink.notify(Notification::success("Task added")),
            Err(err) => {
                self.tasks.pop();
                self.report_write_failure(err);
            }
        }
    }

    /// Submit a toggle, flipping the view entry right away.
    ///
    /// The flip is only applied when `index` is within the view, and
    /// only an applied flip is reverted on failure — an index the
    /// view never had leaves nothing to roll back.
    pub async fn submit_toggle(&mut self, index: u32) {
        self.last_error = None;
        let owner = match self.resolver.resolve_owner() {
            Ok(owner) => owner,
            Err(failure) => return self.report_write_failure(failure.into()),
        };

        let applied = self.flip_local(index);

        match self.store.toggle_task(&owner, index).await {
            Ok(_) => self.sink.notify(Notification::success("Toggled")),
            Err(err) => {
                if applied {
                    self.flip_local(index);
                }
                self.report_write_failure(err);
            }
        }
    }

    fn flip_local(&mut self, index: u32) -> bool {
        match self.tasks.get_mut(index as usize) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    fn record_read_failure(&mut self, err: StoreError) -> Result<(), StoreError> {
        warn!(%err, "refresh failed");
        self.last_error = Some(err.to_string());
        Err(err)
    }

    fn report_write_failure(&mut self, err: StoreError) {
        match err.kind() {
            FailureKind::UserDeclined => {
                debug!(%err, "write declined by owner");
                self.sink
                    .notify(Notification::cancelled("Transaction rejected by user"));
            }
            FailureKind::InvalidIndex | FailureKind::Transport => {
                warn!(%err, "write failed");
                let message = err.to_string();
                self.last_error = Some(message.clone());
                self.sink.notify(Notification::error(message));
            }
        }
    }
}
