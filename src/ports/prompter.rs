//! Input port: how the round driver asks the player things.

use crate::Result;

/// Supplies validated answers from the player.
///
/// The game trusts these values: rejecting malformed raw input is the
/// implementation's job.
pub trait Prompter {
    /// Ask a yes/no question.
    fn ask_bool(&mut self, message: &str) -> Result<bool>;

    /// Ask for free text. The returned text is never blank.
    fn ask_text(&mut self, message: &str) -> Result<String>;
}
