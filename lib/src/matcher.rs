//! Checks whether a single candidate word satisfies a set of [`WordConstraints`].
//!
//! Every function here is pure. Positions are one-based, as in [`WordConstraints`].

use crate::constraints::WordConstraints;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Returns the letter at the given one-based position, if the word is long enough.
fn letter_at(word: &str, position: u8) -> Option<char> {
    (position as usize)
        .checked_sub(1)
        .and_then(|index| word.chars().nth(index))
}

/// Returns `true` iff every accepted letter appears somewhere in the word.
///
/// ```
/// use std::collections::BTreeSet;
/// use wordle_constraint_solver::matcher::has_all_required_characters;
///
/// assert!(has_all_required_characters("hello", &BTreeSet::from(['h', 'e'])));
/// assert!(!has_all_required_characters("hello", &BTreeSet::from(['a'])));
/// ```
pub fn has_all_required_characters(word: &str, accepted_chars: &BTreeSet<char>) -> bool {
    accepted_chars.iter().all(|letter| word.contains(*letter))
}

/// Returns `true` iff the word has the known letter at each known position.
pub fn has_correct_known_positions(word: &str, known_positions: &BTreeMap<u8, char>) -> bool {
    known_positions
        .iter()
        .all(|(position, letter)| letter_at(word, *position) == Some(*letter))
}

/// Returns `true` iff none of the positions hold one of the letters rejected there.
pub fn has_valid_rejected_positions(
    word: &str,
    rejected_positions: &BTreeMap<u8, BTreeSet<char>>,
) -> bool {
    rejected_positions.iter().all(|(position, letters)| {
        letter_at(word, *position).map_or(true, |letter| !letters.contains(&letter))
    })
}

/// Returns `true` iff the word contains none of the denied letters.
pub fn has_no_denied_characters(word: &str, denied_chars: &BTreeSet<char>) -> bool {
    !word.chars().any(|letter| denied_chars.contains(&letter))
}

/// Returns `true` iff the word satisfies every constraint, including the denied letters.
///
/// Word sources already exclude denied letters, so the solver only runs the first three checks.
/// This is the full check for callers that test words one at a time.
pub fn matches_all_constraints(word: &str, constraints: &WordConstraints) -> bool {
    has_all_required_characters(word, &constraints.accepted_chars)
        && has_correct_known_positions(word, &constraints.known_positions)
        && has_valid_rejected_positions(word, &constraints.rejected_positions)
        && has_no_denied_characters(word, &constraints.denied_chars)
}
