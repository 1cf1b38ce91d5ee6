use soroban_sdk::contracterror;

/// Error codes for the to-do list contract.
///
/// Every failing entry point aborts the invocation with one of these
/// codes, which callers observe as `Error(Contract, #code)`. Adding a
/// task cannot fail at this layer (text is accepted verbatim, lists
/// grow without bound), so the only contract-level failure mode is an
/// out-of-range index on `toggle_task` or `get_task`.
///
/// An empty list and a list that is merely shorter than the requested
/// index fail identically: both are `InvalidIndex`. There is no
/// distinct "no tasks" error.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Index is past the end of the owner's task list
    InvalidIndex = 1,
}

impl Error {
    /// Stable string code for logs and client-side matching.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidIndex => "INVALID_INDEX",
        }
    }

    /// Human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            Error::InvalidIndex => "Invalid task index",
        }
    }
}
