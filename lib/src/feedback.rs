use crate::constraints::WordConstraints;
use crate::constraints::WORD_LENGTH;
use crate::results::SolverError;
use std::collections::BTreeSet;
use std::iter::zip;

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterResult {
    /// The letter is in the word at this location (green).
    Correct,
    /// The letter is in the word, but not at this location (yellow).
    PresentNotHere,
    /// The letter is not in the word, or not as many times as it was guessed (grey).
    NotPresent,
}

/// The result of a single word guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Reads the feedback for a guess, written with one symbol per letter:
    ///
    /// * `g` = this letter is in the word and in the right location.
    /// * `y` = this letter is in the word, but not in this location.
    /// * `.` = this letter is not in the word.
    ///
    /// For example, if the word was "spade" and the guess was "soapy", the feedback is "g.gy.".
    pub fn from_feedback(guess: &'a str, feedback: &str) -> Result<GuessResult<'a>, SolverError> {
        if guess.chars().count() != feedback.chars().count() {
            return Err(SolverError::InvalidFeedback(format!(
                "feedback {} doesn't match the length of guess {}",
                feedback, guess
            )));
        }
        Ok(GuessResult {
            guess,
            results: feedback
                .chars()
                .map(|symbol| match symbol.to_ascii_lowercase() {
                    'g' => Ok(LetterResult::Correct),
                    'y' => Ok(LetterResult::PresentNotHere),
                    '.' => Ok(LetterResult::NotPresent),
                    _ => Err(SolverError::InvalidFeedback(format!(
                        "unknown symbol {:?} in {}, expected only 'g', 'y' or '.'",
                        symbol, feedback
                    ))),
                })
                .collect::<Result<Vec<LetterResult>, SolverError>>()?,
        })
    }
}

impl WordConstraints {
    /// Collects the constraints implied by a series of guesses.
    ///
    /// Guesses that aren't exactly [`WORD_LENGTH`] ASCII letters are skipped. A grey letter is only
    /// denied if it isn't green or yellow anywhere in the guesses; otherwise it is just rejected at
    /// that position, since the word holds fewer copies of it than were guessed.
    ///
    /// ```
    /// use wordle_constraint_solver::{GuessResult, WordConstraints};
    ///
    /// let guess = GuessResult::from_feedback("crane", "gg..y").unwrap();
    /// let constraints = WordConstraints::from_guess_results(&[guess]);
    ///
    /// assert_eq!(constraints.known_positions.get(&2), Some(&'r'));
    /// assert!(constraints.denied_chars.contains(&'n'));
    /// assert!(constraints.rejected_positions[&5].contains(&'e'));
    /// ```
    pub fn from_guess_results(guesses: &[GuessResult]) -> WordConstraints {
        let mut constraints = WordConstraints::new();
        let mut grey: Vec<(u8, char)> = Vec::new();

        let valid_guesses = guesses.iter().filter(|guess| {
            guess.guess.len() == WORD_LENGTH
                && guess.guess.chars().all(|letter| letter.is_ascii_alphabetic())
                && guess.results.len() == WORD_LENGTH
        });
        for guess in valid_guesses {
            let word = guess.guess.to_ascii_lowercase();
            for (index, (letter, result)) in zip(word.chars(), &guess.results).enumerate() {
                let position = index as u8 + 1;
                match result {
                    LetterResult::Correct => {
                        constraints.accepted_chars.insert(letter);
                        constraints.known_positions.insert(position, letter);
                    }
                    LetterResult::PresentNotHere => {
                        constraints.accepted_chars.insert(letter);
                        constraints
                            .rejected_positions
                            .entry(position)
                            .or_insert_with(BTreeSet::new)
                            .insert(letter);
                    }
                    LetterResult::NotPresent => grey.push((position, letter)),
                }
            }
        }

        for (position, letter) in grey {
            if constraints.accepted_chars.contains(&letter) {
                constraints
                    .rejected_positions
                    .entry(position)
                    .or_insert_with(BTreeSet::new)
                    .insert(letter);
            } else {
                constraints.denied_chars.insert(letter);
            }
        }
        constraints
    }
}
