/// Prompt shown before a record is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

/// Yes/no prompt invoked before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
