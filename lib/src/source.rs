use crate::constraints::WordConstraints;
use crate::constraints::WORD_LENGTH;
use crate::enumerator::enumerate;
use crate::enumerator::Alphabet;
use crate::matcher::has_no_denied_characters;
use crate::results::SolverError;
use serde::Deserialize;
use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;

/// A lazily produced sequence of candidate words.
pub type Candidates<'a> = Box<dyn Iterator<Item = Cow<'a, str>> + 'a>;

/// Produces the candidate words for a solve.
///
/// Implementations must never produce a word containing one of the constraints' denied letters.
/// All other constraints are checked by the solver.
pub trait WordSource {
    /// Returns the candidates for the given constraints, in a stable order.
    fn candidates<'a>(
        &'a self,
        constraints: &'a WordConstraints,
    ) -> Result<Candidates<'a>, SolverError>;
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn candidates<'a>(
        &'a self,
        constraints: &'a WordConstraints,
    ) -> Result<Candidates<'a>, SolverError> {
        (**self).candidates(constraints)
    }
}

/// Generates every combination of the letters that aren't denied.
///
/// Most of these aren't real words, so this should be paired with a dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCombinations;

impl WordSource for AllCombinations {
    fn candidates<'a>(
        &'a self,
        constraints: &'a WordConstraints,
    ) -> Result<Candidates<'a>, SolverError> {
        let alphabet = Alphabet::excluding(&constraints.denied_chars);
        Ok(Box::new(enumerate(&alphabet).map(Cow::Owned)))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonWordList {
    Bare(Vec<serde_json::Value>),
    Wrapped { words: Vec<serde_json::Value> },
}

/// A fixed list of real words, which can be filtered without a dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Arc<str>>,
}

impl WordList {
    /// Constructs a `WordList` from the given words.
    ///
    /// Each word is trimmed and converted to lower case. Words that don't have exactly
    /// [`WORD_LENGTH`] letters are skipped.
    ///
    /// ```
    /// use wordle_constraint_solver::WordList;
    ///
    /// let list = WordList::from_iterator(["Crate", "", "toolong", " zebra "]);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(&*list.words()[0], "crate");
    /// ```
    pub fn from_iterator<S, I>(words: I) -> WordList
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordList {
            words: words
                .into_iter()
                .filter_map(|word| {
                    let word = word.as_ref().trim().to_lowercase();
                    if word.chars().count() != WORD_LENGTH {
                        return None;
                    }
                    Some(Arc::from(word.as_str()))
                })
                .collect(),
        }
    }

    /// Constructs a `WordList` by reading words from the given reader, one word per line.
    pub fn from_reader<R: BufRead>(word_reader: R) -> io::Result<WordList> {
        let lines = word_reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(WordList::from_iterator(lines))
    }

    /// Constructs a `WordList` from JSON, either a bare array of words or an object with a
    /// `words` array. Entries that aren't strings are skipped.
    pub fn from_json_reader<R: Read>(json_reader: R) -> Result<WordList, SolverError> {
        let parsed: JsonWordList = serde_json::from_reader(json_reader)
            .map_err(|err| SolverError::WordListFormat(err.to_string()))?;
        let (JsonWordList::Bare(values) | JsonWordList::Wrapped { words: values }) = parsed;
        Ok(WordList::from_iterator(
            values.iter().filter_map(serde_json::Value::as_str),
        ))
    }

    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| &**word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn candidates<'a>(
        &'a self,
        constraints: &'a WordConstraints,
    ) -> Result<Candidates<'a>, SolverError> {
        Ok(Box::new(
            self.iter()
                .filter(move |word| has_no_denied_characters(word, &constraints.denied_chars))
                .map(Cow::Borrowed),
        ))
    }
}

/// A [`WordList`] that is read from a file the first time it is needed, then kept for as long as
/// this value lives.
///
/// Files ending in `.json` are read with [`WordList::from_json_reader`], anything else with
/// [`WordList::from_reader`]. A failed load is not cached, so a later call tries again.
#[derive(Debug)]
pub struct CachedWordList {
    path: PathBuf,
    words: OnceLock<WordList>,
    load_lock: Mutex<()>,
}

impl CachedWordList {
    pub fn new<P: Into<PathBuf>>(path: P) -> CachedWordList {
        CachedWordList {
            path: path.into(),
            words: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` once the list has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    /// Returns the word list, loading it if this is the first successful call.
    pub fn get(&self) -> Result<&WordList, SolverError> {
        if let Some(words) = self.words.get() {
            return Ok(words);
        }
        let _guard = self
            .load_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(words) = self.words.get() {
            return Ok(words);
        }
        let loaded = self.load()?;
        Ok(self.words.get_or_init(|| loaded))
    }

    fn load(&self) -> Result<WordList, SolverError> {
        let unavailable = |source: io::Error| SolverError::WordListUnavailable {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(unavailable)?;
        let is_json = self
            .path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("json"));
        if is_json {
            WordList::from_json_reader(BufReader::new(file))
        } else {
            WordList::from_reader(BufReader::new(file)).map_err(unavailable)
        }
    }
}

impl WordSource for CachedWordList {
    fn candidates<'a>(
        &'a self,
        constraints: &'a WordConstraints,
    ) -> Result<Candidates<'a>, SolverError> {
        self.get()?.candidates(constraints)
    }
}
