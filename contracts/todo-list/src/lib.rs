#![no_std]

//! Per-owner to-do lists on Soroban.
//!
//! Each address owns exactly one ordered task list. Writes are bound
//! to the authenticated caller, so the owner key is the whole access
//! control model: nobody can touch a list they do not own, and no
//! per-task ownership bookkeeping is needed. Reads take an explicit
//! owner and are open to anyone.

mod errors;
mod events;
mod storage;
mod tasks;
mod types;


pub use errors::Error;
pub use events::TaskAddedEvent;
pub use types::Task;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use tasks::TaskManager;

#[contract]
pub struct TodoList;

#[contractimpl]
impl TodoList {
    /// Append a task with the given text to the caller's list.
    ///
    /// The text is accepted verbatim, empty string included. Emits a
    /// `TaskAdded` event carrying the caller and the text.
    pub fn add_task(env: Env, caller: Address, text: String) {
        caller.require_auth();

        TaskManager::add_task(&env, &caller, text);
    }

    /// Flip the completion flag of the caller's task at `index`.
    ///
    /// Aborts with `Error::InvalidIndex` when the index is past the
    /// end of the list. An empty list fails the same way as a short
    /// one.
    pub fn toggle_task(env: Env, caller: Address, index: u32) {
        caller.require_auth();

        TaskManager::toggle_task(&env, &caller, index);
    }

    /// Task at `index` in `owner`'s list.
    ///
    /// Read-only; aborts with `Error::InvalidIndex` under the same
    /// out-of-range condition as `toggle_task`.
    pub fn get_task(env: Env, owner: Address, index: u32) -> Task {
        TaskManager::get_task(&env, &owner, index)
    }

    /// Number of tasks in `owner`'s list, zero for a never-seen owner
    pub fn get_task_count(env: Env, owner: Address) -> u32 {
        TaskManager::get_task_count(&env, &owner)
    }

    /// Full task list for `owner`, in insertion order.
    ///
    /// Bulk equivalent of calling `get_task` for every index up to
    /// `get_task_count`; lets a client refresh in one read.
    pub fn get_tasks(env: Env, owner: Address) -> Vec<Task> {
        TaskManager::get_tasks(&env, &owner)
    }
}
