//! The confirmation collaborator asked before an entry is deleted.

/// Message shown when asking to delete an entry.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this entry?";

/// Something that can ask the user a yes/no question.
///
/// Hosts with a blocking prompt answer directly. Hosts with a modal collect
/// the answer first and pass a closure returning it.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
