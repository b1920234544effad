use crate::constraints::WordConstraints;
use crate::dictionary::Dictionary;
use crate::dictionary::LazyDictionary;
use crate::matcher::has_all_required_characters;
use crate::matcher::has_correct_known_positions;
use crate::matcher::has_valid_rejected_positions;
use crate::results::SolveResult;
use crate::results::SolverError;
use crate::source::WordSource;
use std::borrow::Cow;

/// Finds every candidate from the word source that satisfies the constraints.
///
/// Candidates are checked for the required letters first, then the known positions, then the
/// rejected positions, and finally against the dictionary if one is given. Pass a dictionary when
/// the source produces strings that may not be words, such as [`AllCombinations`]; leave it out
/// for a [`WordList`] of real words.
///
/// Finding no words is not an error. Errors only come from the word source.
///
/// [`AllCombinations`]: crate::AllCombinations
/// [`WordList`]: crate::WordList
///
/// ```
/// use wordle_constraint_solver::{solve, WordConstraints, WordList};
///
/// let list = WordList::from_iterator(["crate", "zebra", "tacit"]);
/// let constraints = WordConstraints::builder().known(1, 'c').build();
///
/// let result = solve(&constraints, &list, None).unwrap();
///
/// assert!(result.success);
/// assert_eq!(result.words, vec!["crate"]);
/// assert_eq!(result.count, 1);
/// ```
pub fn solve<S: WordSource + ?Sized>(
    constraints: &WordConstraints,
    source: &S,
    dictionary: Option<&dyn Dictionary>,
) -> Result<SolveResult, SolverError> {
    let words: Vec<String> = source
        .candidates(constraints)?
        .filter(|word| has_all_required_characters(word, &constraints.accepted_chars))
        .filter(|word| has_correct_known_positions(word, &constraints.known_positions))
        .filter(|word| has_valid_rejected_positions(word, &constraints.rejected_positions))
        .filter(|word| dictionary.map_or(true, |dictionary| dictionary.check(word)))
        .map(Cow::into_owned)
        .collect();
    Ok(SolveResult::new(words, constraints.clone()))
}

/// Like [`solve`], but checks words against a dictionary that is loaded on first use.
///
/// If the dictionary can't be loaded, that error is returned instead of a result.
pub fn solve_with_lazy_dictionary<S: WordSource + ?Sized>(
    constraints: &WordConstraints,
    source: &S,
    dictionary: &LazyDictionary,
) -> Result<SolveResult, SolverError> {
    let dictionary = dictionary.get()?;
    solve(constraints, source, Some(dictionary))
}
