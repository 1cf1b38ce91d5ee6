use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::Task;

// ===== STORAGE KEYS =====

/// Persistent storage layout.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ordered task list for an owner
    Tasks(Address),
}

// ===== STORAGE MANAGER =====

/// Storage access for per-owner task lists.
///
/// A list that was never written reads as empty, so lists spring into
/// existence on the first `add_task` and a never-seen owner has a
/// count of zero without any explicit initialization step.
pub struct TaskStorage;

impl TaskStorage {
    /// Get the owner's task list, empty if none was ever stored
    pub fn tasks(env: &Env, owner: &Address) -> Vec<Task> {
        env.storage()
            .persistent()
            .get(&DataKey::Tasks(owner.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }

    /// Overwrite the owner's task list
    pub fn set_tasks(env: &Env, owner: &Address, tasks: &Vec<Task>) {
        env.storage()
            .persistent()
            .set(&DataKey::Tasks(owner.clone()), tasks);
    }

    /// Current length of the owner's task list
    pub fn task_count(env: &Env, owner: &Address) -> u32 {
        Self::tasks(env, owner).len()
    }
}
