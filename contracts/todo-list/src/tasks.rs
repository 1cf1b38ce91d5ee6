use soroban_sdk::{panic_with_error, Address, Env, String, Vec};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::TaskStorage;
use crate::types::Task;

// ===== TASK MANAGER =====

/// Operation logic behind the contract entry points.
///
/// Each owner's list is an append-only log: `add` pushes to the back,
/// `toggle` flips one flag in place, nothing is ever removed or
/// reordered. A task's index is therefore stable for the life of the
/// list, and counts only ever grow.
pub struct TaskManager;

impl TaskManager {
    /// Append a new incomplete task to the owner's list and emit
    /// `TaskAdded`. The text is stored verbatim; the empty string is
    /// as valid as any other label.
    pub fn add_task(env: &Env, owner: &Address, text: String) {
        let mut tasks = TaskStorage::tasks(env, owner);
        tasks.push_back(Task {
            text: text.clone(),
            completed: false,
        });
        TaskStorage::set_tasks(env, owner, &tasks);

        EventEmitter::emit_task_added(env, owner, &text);
    }

    /// Flip the completion flag at `index`.
    ///
    /// The flip is its own inverse: toggling twice restores the prior
    /// value. Aborts with `InvalidIndex` when `index` is past the end
    /// of the list, whether the list is short or empty.
    pub fn toggle_task(env: &Env, owner: &Address, index: u32) {
        let mut tasks = TaskStorage::tasks(env, owner);
        let mut task = match tasks.get(index) {
            Some(task) => task,
            None => panic_with_error!(env, Error::InvalidIndex),
        };

        task.completed = !task.completed;
        tasks.set(index, task);
        TaskStorage::set_tasks(env, owner, &tasks);
    }

    /// Read the task at `index`, aborting with `InvalidIndex` under
    /// the same out-of-range condition as `toggle_task`.
    pub fn get_task(env: &Env, owner: &Address, index: u32) -> Task {
        match TaskStorage::tasks(env, owner).get(index) {
            Some(task) => task,
            None => panic_with_error!(env, Error::InvalidIndex),
        }
    }

    /// Number of tasks the owner has ever added
    pub fn get_task_count(env: &Env, owner: &Address) -> u32 {
        TaskStorage::task_count(env, owner)
    }

    /// Full list in insertion order, empty for a never-seen owner
    pub fn get_tasks(env: &Env, owner: &Address) -> Vec<Task> {
        TaskStorage::tasks(env, owner)
    }
}
