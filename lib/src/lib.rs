mod affix;
mod constraints;
mod dictionary;
pub mod enumerator;
mod feedback;
pub mod matcher;
pub mod normalize;
mod results;
mod solver;
mod source;

pub use affix::AffixRules;
pub use constraints::WordConstraints;
pub use constraints::WordConstraintsBuilder;
pub use constraints::WORD_LENGTH;
pub use dictionary::Dictionary;
pub use dictionary::DictionarySource;
pub use dictionary::FstDictionary;
pub use dictionary::LazyDictionary;
pub use feedback::GuessResult;
pub use feedback::LetterResult;
pub use results::*;
pub use solver::*;
pub use source::AllCombinations;
pub use source::CachedWordList;
pub use source::Candidates;
pub use source::WordList;
pub use source::WordSource;
