use crate::constraints::WORD_LENGTH;
use std::collections::BTreeSet;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// The letters that words are made of.
pub const ALPHABET: RangeInclusive<char> = 'a'..='z';

/// The letters that candidate words may be built from, in alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// All 26 lowercase English letters.
    pub fn full() -> Alphabet {
        Alphabet {
            letters: ALPHABET.collect(),
        }
    }

    /// All 26 lowercase English letters except the given ones.
    pub fn excluding(denied: &BTreeSet<char>) -> Alphabet {
        Alphabet {
            letters: ALPHABET.filter(|letter| !denied.contains(letter)).collect(),
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Lazily produces every [`WORD_LENGTH`]-letter string over the alphabet.
///
/// Letters may repeat, so an alphabet of `k` letters produces `k^5` words. Words come out in
/// lexicographic order of the alphabet, with the first letter changing slowest.
///
/// ```
/// use wordle_constraint_solver::enumerator::{enumerate, Alphabet};
/// use std::collections::BTreeSet;
///
/// let denied: BTreeSet<char> = ('c'..='z').collect();
/// let words: Vec<String> = enumerate(&Alphabet::excluding(&denied)).collect();
///
/// assert_eq!(words.len(), 32);
/// assert_eq!(words[0], "aaaaa");
/// assert_eq!(words[1], "aaaab");
/// assert_eq!(words[31], "bbbbb");
/// ```
pub fn enumerate(alphabet: &Alphabet) -> Combinations {
    Combinations::new(alphabet.clone())
}

/// The iterator returned by [`enumerate`].
///
/// Only the current letter indices are kept in memory, no matter how many words remain.
#[derive(Debug, Clone)]
pub struct Combinations {
    alphabet: Alphabet,
    /// The alphabet index of the letter at each position of the next word, or `None` once every
    /// word has been produced.
    next: Option<[usize; WORD_LENGTH]>,
    remaining: usize,
}

impl Combinations {
    fn new(alphabet: Alphabet) -> Combinations {
        let remaining = alphabet.len().saturating_pow(WORD_LENGTH as u32);
        let next = if alphabet.is_empty() {
            None
        } else {
            Some([0; WORD_LENGTH])
        };
        Combinations {
            alphabet,
            next,
            remaining,
        }
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut indices = self.next?;
        let letters = self.alphabet.letters();
        let word: String = indices.iter().map(|index| letters[*index]).collect();

        // Advance like an odometer, carrying from the last position towards the first.
        self.next = None;
        for position in (0..WORD_LENGTH).rev() {
            indices[position] += 1;
            if indices[position] < letters.len() {
                self.next = Some(indices);
                break;
            }
            indices[position] = 0;
        }
        self.remaining -= 1;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations {}

impl FusedIterator for Combinations {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn alphabet_of(letters: &str) -> Alphabet {
        let allowed: BTreeSet<char> = letters.chars().collect();
        Alphabet::excluding(&('a'..='z').filter(|c| !allowed.contains(c)).collect())
    }

    #[test]
    fn alphabet_excluding() {
        let alphabet = Alphabet::excluding(&BTreeSet::from(['a', 'z', 'm']));

        assert_eq!(alphabet.len(), 23);
        assert_eq!(alphabet.letters()[0], 'b');
        assert!(!alphabet.letters().contains(&'m'));
        assert_eq!(Alphabet::full().len(), 26);
    }

    #[test]
    fn enumerate_count_is_k_to_the_fifth() {
        for letters in ["a", "ab", "abc", "wxyz"] {
            let alphabet = alphabet_of(letters);
            let expected = alphabet.len().pow(5);

            let words: Vec<String> = enumerate(&alphabet).collect();
            let unique: HashSet<&String> = words.iter().collect();

            assert_eq!(words.len(), expected);
            assert_eq!(unique.len(), expected);
            assert!(words.iter().all(|word| word.len() == 5));
        }
    }

    #[test]
    fn enumerate_full_alphabet_len() {
        assert_eq!(enumerate(&Alphabet::full()).len(), 11_881_376);
    }

    #[test]
    fn enumerate_order_first_position_slowest() {
        let words: Vec<String> = enumerate(&alphabet_of("abc")).collect();

        assert_eq!(words[0], "aaaaa");
        assert_eq!(words[1], "aaaab");
        assert_eq!(words[2], "aaaac");
        assert_eq!(words[3], "aaaba");
        assert_eq!(words[81], "baaaa");
        assert_eq!(words[242], "ccccc");
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
    }

    #[test]
    fn enumerate_only_uses_alphabet_letters() {
        let words = enumerate(&alphabet_of("qz"));

        assert!(words
            .into_iter()
            .all(|word| word.chars().all(|c| c == 'q' || c == 'z')));
    }

    #[test]
    fn enumerate_empty_alphabet() {
        let mut words = enumerate(&Alphabet::excluding(&('a'..='z').collect()));

        assert_eq!(words.len(), 0);
        assert_eq!(words.next(), None);
        assert_eq!(words.next(), None);
    }

    #[test]
    fn enumerate_size_hint_counts_down() {
        let mut words = enumerate(&alphabet_of("ab"));

        assert_eq!(words.len(), 32);
        words.next();
        words.next();
        assert_eq!(words.len(), 30);
        assert_eq!(words.by_ref().count(), 30);
        assert_eq!(words.next(), None);
    }
}
