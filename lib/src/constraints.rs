use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// The number of letters in every Wordle word.
pub const WORD_LENGTH: usize = 5;

/// Everything that is known about the hidden word.
///
/// Positions are one-based, so the first letter of the word is at position `1` and the last is at
/// position [`WORD_LENGTH`]. Letters are lowercase ASCII.
///
/// Contradictory constraints (for example a letter that is both accepted and denied) are not
/// rejected. They simply cannot be satisfied by any word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordConstraints {
    /// Letters that must appear somewhere in the word.
    pub accepted_chars: BTreeSet<char>,
    /// Letters that must not appear anywhere in the word.
    pub denied_chars: BTreeSet<char>,
    /// The letter that must appear at each of these positions.
    pub known_positions: BTreeMap<u8, char>,
    /// Letters that must not appear at each of these positions. They may still appear elsewhere.
    pub rejected_positions: BTreeMap<u8, BTreeSet<char>>,
}

impl WordConstraints {
    /// Creates constraints that any word of the right length satisfies.
    pub fn new() -> WordConstraints {
        WordConstraints::default()
    }

    /// Starts building a set of constraints.
    ///
    /// ```
    /// use wordle_constraint_solver::WordConstraints;
    ///
    /// let constraints = WordConstraints::builder()
    ///     .accept('a')
    ///     .deny_all("rse".chars())
    ///     .known(1, 'c')
    ///     .reject(3, 'a')
    ///     .build();
    ///
    /// assert!(constraints.accepted_chars.contains(&'a'));
    /// assert_eq!(constraints.known_positions.get(&1), Some(&'c'));
    /// ```
    pub fn builder() -> WordConstraintsBuilder {
        WordConstraintsBuilder::default()
    }

    /// Returns `true` if nothing is known about the word yet.
    pub fn is_empty(&self) -> bool {
        self.accepted_chars.is_empty()
            && self.denied_chars.is_empty()
            && self.known_positions.is_empty()
            && self.rejected_positions.values().all(BTreeSet::is_empty)
    }
}

/// Builds [`WordConstraints`]. The constraints cannot be changed once built.
#[derive(Debug, Clone, Default)]
pub struct WordConstraintsBuilder {
    constraints: WordConstraints,
}

impl WordConstraintsBuilder {
    /// Requires the letter to appear somewhere in the word.
    pub fn accept(mut self, letter: char) -> Self {
        self.constraints.accepted_chars.insert(letter);
        self
    }

    pub fn accept_all<I: IntoIterator<Item = char>>(mut self, letters: I) -> Self {
        self.constraints.accepted_chars.extend(letters);
        self
    }

    /// Requires the letter to be absent from the whole word.
    pub fn deny(mut self, letter: char) -> Self {
        self.constraints.denied_chars.insert(letter);
        self
    }

    pub fn deny_all<I: IntoIterator<Item = char>>(mut self, letters: I) -> Self {
        self.constraints.denied_chars.extend(letters);
        self
    }

    /// Requires the letter at the given one-based position. A later call for the same position
    /// replaces the earlier letter.
    pub fn known(mut self, position: u8, letter: char) -> Self {
        self.constraints.known_positions.insert(position, letter);
        self
    }

    /// Forbids the letter at the given one-based position.
    pub fn reject(mut self, position: u8, letter: char) -> Self {
        self.constraints
            .rejected_positions
            .entry(position)
            .or_default()
            .insert(letter);
        self
    }

    pub fn build(self) -> WordConstraints {
        self.constraints
    }
}
