use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

// ===== EVENT TYPES =====

/// Event emitted when a task is appended to an owner's list.
///
/// Carries the owner address and the verbatim task text. The new
/// task's index is not part of the payload; observers derive it from
/// `get_task_count` (the task lands at `count - 1`). Toggling emits
/// nothing — the list length is the only externally watched signal,
/// and a flip never changes it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskAddedEvent {
    /// List owner the task was appended for
    pub owner: Address,
    /// Task text, exactly as submitted
    pub text: String,
}

// ===== EVENT EMITTER =====

/// Event emission helpers for the to-do list contract.
pub struct EventEmitter;

impl EventEmitter {
    /// Emit a task added event
    pub fn emit_task_added(env: &Env, owner: &Address, text: &String) {
        let event = TaskAddedEvent {
            owner: owner.clone(),
            text: text.clone(),
        };

        env.events().publish((symbol_short!("task_add"),), event);
    }
}
