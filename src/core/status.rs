//! Per-letter feedback status
//!
//! The derived ordering `Unseen < Absent < Present < Correct` is what the
//! keyboard merge relies on: a higher status always wins.

/// Feedback for one letter, ordered by how much it tells the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// Not guessed yet (keyboard only, never produced by evaluation)
    #[default]
    Unseen,
    /// Gray - letter not in the answer
    Absent,
    /// Yellow - letter in the answer at another position
    Present,
    /// Green - letter at this exact position
    Correct,
}

impl LetterStatus {
    /// The better of two statuses
    #[inline]
    #[must_use]
    pub fn upgrade(self, other: Self) -> Self {
        self.max(other)
    }

    /// Emoji square used in shareable summaries
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Unseen => '⬜',
        }
    }
}
