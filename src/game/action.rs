//! Player actions

/// Everything the player can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a letter into the active row
    KeyPressed(char),
    /// Clear the last typed letter
    Delete,
    /// Submit the active row as a guess
    Submit,
    /// Start over with a new secret word
    Retry,
    /// Copy the result transcript to the clipboard
    Share,
}
