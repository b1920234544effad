#[macro_use]
extern crate assert_matches;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use wordle_constraint_solver::*;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn fixture_dictionary() -> Result<FstDictionary, SolverError> {
    let aff = BufReader::new(File::open(data_path("en_fixture.aff")).unwrap());
    let dic = BufReader::new(File::open(data_path("en_fixture.dic")).unwrap());
    FstDictionary::from_hunspell(aff, dic)
}

fn cacti_constraints() -> WordConstraints {
    WordConstraints::builder()
        .accept_all(['c', 'a', 't'])
        .deny_all(['r', 'n', 'e', 's', 'l', 'o', 'h', 'y'])
        .known(1, 'c')
        .known(2, 'a')
        .known(4, 't')
        .reject(3, 'a')
        .build()
}

#[test]
fn fixture_dictionary_expands_affixes() -> Result<(), SolverError> {
    let dictionary = fixture_dictionary()?;

    assert!(dictionary.check("cacti"));
    assert!(dictionary.check("zebras"));
    assert!(dictionary.check("spies"));
    assert!(dictionary.check("unlaced"));
    assert!(!dictionary.check("spy"));
    assert!(!dictionary.check("tacits"));
    assert!(dictionary.check("Paris"));
    assert!(!dictionary.check("paris"));
    Ok(())
}

#[test]
fn solve_enumerated_with_fixture_dictionary() -> Result<(), SolverError> {
    let dictionary = fixture_dictionary()?;
    let constraints = cacti_constraints();

    let result = solve(&constraints, &AllCombinations, Some(&dictionary))?;

    assert_eq!(
        result,
        SolveResult::new(vec!["cacti".to_string()], constraints)
    );
    assert!(result.success);
    assert_eq!(result.count, 1);
    Ok(())
}

#[test]
fn solve_with_lazy_hunspell_dictionary() -> Result<(), SolverError> {
    let dictionary = LazyDictionary::new(DictionarySource::Hunspell {
        aff: data_path("en_fixture.aff"),
        dic: data_path("en_fixture.dic"),
    });
    assert!(!dictionary.is_loaded());

    let result = solve_with_lazy_dictionary(&cacti_constraints(), &AllCombinations, &dictionary)?;

    assert_eq!(result.words, vec!["cacti"]);
    assert!(dictionary.is_loaded());
    Ok(())
}

#[test]
fn solve_excludes_proper_nouns() -> Result<(), SolverError> {
    let dictionary = fixture_dictionary()?;
    let constraints = WordConstraints::builder()
        .accept_all(['p', 'a', 'r', 'i', 's'])
        .deny_all(('a'..='z').filter(|letter| !"paris".contains(*letter)))
        .build();

    let result = solve(&constraints, &AllCombinations, Some(&dictionary))?;

    assert!(result.words.is_empty());
    Ok(())
}

#[test]
fn solve_cached_word_list_keeps_file_order() -> Result<(), SolverError> {
    let list = CachedWordList::new(data_path("words.txt"));

    let result = solve(&WordConstraints::new(), &list, None)?;

    assert_eq!(
        result.words,
        vec!["zebra", "crate", "tacit", "aback", "hello"]
    );
    assert_eq!(result.count, 5);
    assert!(list.is_loaded());
    Ok(())
}

#[test]
fn solve_cached_json_word_list() -> Result<(), SolverError> {
    let list = CachedWordList::new(data_path("words.json"));
    let constraints = WordConstraints::builder()
        .accept('c')
        .deny('h')
        .reject(1, 'c')
        .build();

    let result = solve(&constraints, &list, None)?;

    assert_eq!(result.words, vec!["attic", "tacit"]);
    Ok(())
}

#[test]
fn solve_missing_word_list() {
    let list = CachedWordList::new(data_path("missing.txt"));

    assert_matches!(
        solve(&WordConstraints::new(), &list, None),
        Err(SolverError::WordListUnavailable { .. })
    );
    assert!(!list.is_loaded());
}

#[test]
fn solve_from_guesses() -> Result<(), SolverError> {
    let list = WordList::from_iterator(["crate", "cacti", "catch", "tacit", "attic", "zebra"]);
    let guesses = [
        GuessResult::from_feedback("crane", "g.y..")?,
        GuessResult::from_feedback("coast", "g.y.y")?,
    ];

    let result = solve(&WordConstraints::from_guess_results(&guesses), &list, None)?;

    assert_eq!(result.words, vec!["cacti", "catch"]);
    Ok(())
}

#[test]
fn solve_from_query_pairs() -> Result<(), SolverError> {
    let dictionary = fixture_dictionary()?;
    let constraints = normalize::parse_constraints_from_query([
        ("acceptedChars", "c,a,t"),
        ("deniedChars", "r,n,e,s,l,o,h,y"),
        ("knownPositions", r#"{"1":"c","2":"a","4":"t"}"#),
        ("rejectedPositions", r#"{"3":["a"]}"#),
    ]);

    let result = solve(&constraints, &AllCombinations, Some(&dictionary))?;

    assert_eq!(result.words, vec!["cacti"]);
    assert_eq!(result.constraints, cacti_constraints());
    Ok(())
}
