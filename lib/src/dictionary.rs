use crate::affix::AffixRules;
use crate::results::SolverError;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;

/// Answers whether a string is a real word.
pub trait Dictionary: Send + Sync {
    /// Returns `true` iff the word is in the dictionary. Lookups are case-sensitive.
    fn check(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn check(&self, word: &str) -> bool {
        (**self).check(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn check(&self, word: &str) -> bool {
        (**self).check(word)
    }
}

/// An immutable dictionary, stored as a finite state transducer set.
pub struct FstDictionary {
    words: fst::Set<Vec<u8>>,
}

impl fmt::Debug for FstDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FstDictionary")
            .field("len", &self.words.len())
            .finish()
    }
}

impl FstDictionary {
    /// Constructs a dictionary containing exactly the given words. Empty entries are skipped.
    ///
    /// ```
    /// use wordle_constraint_solver::{Dictionary, FstDictionary};
    ///
    /// let dictionary = FstDictionary::from_words(["crate", "zebra", "crate"]).unwrap();
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.check("zebra"));
    /// assert!(!dictionary.check("zebr"));
    /// ```
    pub fn from_words<S, I>(words: I) -> Result<FstDictionary, SolverError>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        // fst sets must be built from sorted, unique keys.
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| !word.is_empty())
            .collect();
        let words = fst::Set::from_iter(sorted).map_err(|err| SolverError::DictionaryFormat {
            line: 0,
            message: err.to_string(),
        })?;
        Ok(FstDictionary { words })
    }

    /// Constructs a dictionary from a plain word list, one word per line.
    pub fn from_word_reader<R: BufRead>(word_reader: R) -> Result<FstDictionary, SolverError> {
        let mut words = Vec::new();
        for (index, line) in word_reader.lines().enumerate() {
            let line = line.map_err(|err| SolverError::DictionaryFormat {
                line: index + 1,
                message: err.to_string(),
            })?;
            words.push(line.trim().to_string());
        }
        FstDictionary::from_words(words)
    }

    /// Constructs a dictionary from a Hunspell affix file and dictionary file, containing every
    /// word the pair describes.
    pub fn from_hunspell<A: BufRead, D: BufRead>(
        aff_reader: A,
        dic_reader: D,
    ) -> Result<FstDictionary, SolverError> {
        let rules = AffixRules::from_reader(aff_reader)?;
        let mut words = BTreeSet::new();
        rules.expand_dic(dic_reader, |word| {
            words.insert(word);
        })?;
        FstDictionary::from_words(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for FstDictionary {
    fn check(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Where a [`LazyDictionary`] loads its words from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// A Hunspell affix file and dictionary file.
    Hunspell { aff: PathBuf, dic: PathBuf },
    /// A plain list of words, one per line.
    WordList(PathBuf),
}

fn open(path: &Path) -> Result<BufReader<File>, SolverError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source: io::Error| SolverError::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

impl DictionarySource {
    /// Reads and parses the dictionary files.
    pub fn load(&self) -> Result<FstDictionary, SolverError> {
        match self {
            DictionarySource::Hunspell { aff, dic } => {
                FstDictionary::from_hunspell(open(aff)?, open(dic)?)
            }
            DictionarySource::WordList(path) => FstDictionary::from_word_reader(open(path)?),
        }
    }
}

/// A dictionary that is loaded the first time it is needed.
///
/// Once loaded, the dictionary is shared read-only for the rest of this value's life and is
/// never reloaded. Concurrent first calls to [`LazyDictionary::get`] load the files only once.
/// If loading fails, the error is returned and nothing is cached, so a later call tries again.
///
/// To share one dictionary across a whole process, keep the `LazyDictionary` in a `static` or
/// an [`Arc`] owned by `main`.
#[derive(Debug)]
pub struct LazyDictionary {
    source: DictionarySource,
    dictionary: OnceLock<FstDictionary>,
    load_lock: Mutex<()>,
}

impl LazyDictionary {
    pub fn new(source: DictionarySource) -> LazyDictionary {
        LazyDictionary {
            source,
            dictionary: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    pub fn source(&self) -> &DictionarySource {
        &self.source
    }

    /// Returns `true` once the dictionary has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.dictionary.get().is_some()
    }

    /// Returns the dictionary, loading it if this is the first successful call.
    pub fn get(&self) -> Result<&FstDictionary, SolverError> {
        if let Some(dictionary) = self.dictionary.get() {
            return Ok(dictionary);
        }
        let _guard = self
            .load_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(dictionary) = self.dictionary.get() {
            return Ok(dictionary);
        }
        let loaded = self.source.load()?;
        Ok(self.dictionary.get_or_init(|| loaded))
    }
}
