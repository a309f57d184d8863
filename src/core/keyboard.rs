//! On-screen keyboard state
//!
//! Tracks the best status seen so far for every letter. Statuses only ever
//! move forward along `Unseen < Absent < Present < Correct`.

use super::{ALPHABET_LEN, GuessResult, Letter, LetterStatus};

/// Letters shown on the first keyboard row (`a..=m`)
pub const KEYBOARD_SPLIT: usize = 13;

/// Best-known status per alphabet letter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardState {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl KeyboardState {
    /// Every letter starts Unseen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a guess into the keyboard, keeping the higher status per letter
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{KeyboardState, Letter, LetterStatus, evaluate_str};
    ///
    /// let mut keyboard = KeyboardState::new();
    /// keyboard.merge(&evaluate_str("crane", "crane").unwrap());
    /// keyboard.merge(&evaluate_str("crane", "recap").unwrap());
    ///
    /// let c = Letter::new('c').unwrap();
    /// assert_eq!(keyboard.status_of(c), LetterStatus::Correct);
    /// ```
    pub fn merge(&mut self, result: &GuessResult) {
        for cell in result {
            let slot = &mut self.statuses[cell.letter.index()];
            *slot = slot.upgrade(cell.status);
        }
    }

    #[inline]
    #[must_use]
    pub const fn status_of(&self, letter: Letter) -> LetterStatus {
        self.statuses[letter.index()]
    }

    /// `(letter, status)` pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, LetterStatus)> + '_ {
        Letter::alphabet().map(|letter| (letter, self.status_of(letter)))
    }

    /// The two display rows, `a..=m` then `n..=z`
    #[must_use]
    pub fn rows(&self) -> [Vec<(Letter, LetterStatus)>; 2] {
        let (first, second): (Vec<_>, Vec<_>) =
            self.iter().partition(|(letter, _)| letter.index() < KEYBOARD_SPLIT);
        [first, second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_str;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn merged(answer: &str, guesses: &[&str]) -> KeyboardState {
        let mut keyboard = KeyboardState::new();
        for guess in guesses {
            keyboard.merge(&evaluate_str(answer, guess).unwrap());
        }
        keyboard
    }

    #[test]
    fn starts_all_unseen() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.iter().count(), ALPHABET_LEN);
        assert!(
            keyboard
                .iter()
                .all(|(_, status)| status == LetterStatus::Unseen)
        );
    }

    #[test]
    fn merge_records_each_letter() {
        let keyboard = merged("crane", &["trace"]);
        assert_eq!(keyboard.status_of(letter('t')), LetterStatus::Absent);
        assert_eq!(keyboard.status_of(letter('r')), LetterStatus::Correct);
        assert_eq!(keyboard.status_of(letter('c')), LetterStatus::Present);
        assert_eq!(keyboard.status_of(letter('z')), LetterStatus::Unseen);
    }

    #[test]
    fn light_then_crane() {
        let after_light = merged("crane", &["light"]);
        for ch in ['l', 'i', 'g', 'h', 't'] {
            assert_eq!(after_light.status_of(letter(ch)), LetterStatus::Absent);
        }

        let after_crane = merged("crane", &["light", "crane"]);
        for ch in ['c', 'r', 'a', 'n', 'e'] {
            assert_eq!(after_crane.status_of(letter(ch)), LetterStatus::Correct);
        }
        assert_eq!(after_crane.status_of(letter('t')), LetterStatus::Absent);
    }

    #[test]
    fn correct_is_never_downgraded() {
        // 'c' goes green, then shows up displaced in "recap"
        let keyboard = merged("crane", &["crane", "recap"]);
        assert_eq!(keyboard.status_of(letter('c')), LetterStatus::Correct);
        assert_eq!(keyboard.status_of(letter('p')), LetterStatus::Absent);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let keyboard = merged("crane", &["recap", "crane"]);
        assert_eq!(keyboard.status_of(letter('c')), LetterStatus::Correct);
    }

    #[test]
    fn merge_is_idempotent() {
        assert_eq!(merged("crane", &["eerie"]), merged("crane", &["eerie", "eerie"]));
    }

    #[test]
    fn rows_split_alphabet() {
        let [first, second] = KeyboardState::new().rows();
        assert_eq!(first.len(), KEYBOARD_SPLIT);
        assert_eq!(second.len(), ALPHABET_LEN - KEYBOARD_SPLIT);
        assert_eq!(first[0].0, letter('a'));
        assert_eq!(first[12].0, letter('m'));
        assert_eq!(second[0].0, letter('n'));
        assert_eq!(second[12].0, letter('z'));
    }
}
