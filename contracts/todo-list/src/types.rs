use soroban_sdk::{contracttype, String};

/// A single to-do entry in an owner's list.
///
/// The text is fixed at creation time; only the completion flag ever
/// changes afterwards, and it changes exclusively through
/// `toggle_task`. Tasks are stored in insertion order and are never
/// removed, so the index a task is created at identifies it for life.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Task {
    /// Task label, stored verbatim (the empty string is allowed)
    pub text: String,
    /// Completion flag, `false` at creation
    pub completed: bool,
}
