use serde::{Deserialize, Serialize};

/// A task as the view layer sees it: label plus completion flag.
///
/// Mirrors the on-chain record one to one, so the local list can be
/// rebuilt from the store at any time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// A fresh, incomplete task — the shape every add produces
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}
