use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use wordle_constraint_solver::normalize::{
    parse_constraints_from_body, parse_constraints_from_query,
};
use wordle_constraint_solver::*;

/// Lists every five-letter word that fits what is known about a hidden Wordle word.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a list of possible words, either one word per line or a JSON array. Candidates
    /// are filtered straight from this list.
    #[arg(short = 'f', long, env = "WORDLE_WORDS_FILE")]
    words_file: Option<PathBuf>,

    /// Path to a Hunspell affix file. Every letter combination is generated, then checked
    /// against this dictionary. Requires --dic.
    #[arg(long, env = "WORDLE_AFF", requires = "dic")]
    aff: Option<PathBuf>,

    /// Path to the Hunspell dictionary file that goes with --aff.
    #[arg(long, env = "WORDLE_DIC", requires = "aff")]
    dic: Option<PathBuf>,

    /// Path to a plain word list, one word per line, used as the dictionary when generating
    /// every letter combination.
    #[arg(long)]
    dictionary_words: Option<PathBuf>,

    /// Print the result as JSON. Everything else is written to stderr.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve using query-style fields.
    Query {
        /// Comma-separated letters that must be in the word, like "c,a,t".
        #[arg(long, default_value = "")]
        accepted: String,
        /// Comma-separated letters that must not be in the word.
        #[arg(long, default_value = "")]
        denied: String,
        /// JSON object from position to letter, like '{"1":"c"}'.
        #[arg(long, default_value = "{}")]
        known: String,
        /// JSON object from position to letters, like '{"3":["a"]}'.
        #[arg(long, default_value = "{}")]
        rejected: String,
    },
    /// Solve using a JSON request body, read from a file or from stdin.
    Body {
        /// Path to the JSON body. Reads stdin if missing or "-".
        path: Option<PathBuf>,
    },
    /// Solve using the feedback from previous guesses, written as WORD:FEEDBACK.
    ///
    /// Feedback has one symbol per letter: 'g' if the letter is in the right location, 'y' if it
    /// is in the word but not in this location, and '.' if it is not in the word. For example,
    /// "crane:g.y..".
    Guesses {
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

/// How candidate words are produced and checked.
enum Strategy {
    List(CachedWordList),
    Generate(LazyDictionary),
}

/// Exits because the request itself was invalid.
fn invalid_request(message: &str) -> ! {
    eprintln!("Invalid request: {}", message);
    process::exit(2);
}

fn failed(err: &dyn std::error::Error) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

fn main() {
    let start_time = Instant::now();
    let args = Args::parse();
    let report = |message: String| {
        if args.json {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    };

    let strategy = choose_strategy(&args);
    match &strategy {
        Strategy::List(list) => report(format!("Words file: {}", list.path().display())),
        Strategy::Generate(dictionary) => report(format!("Dictionary: {:?}", dictionary.source())),
    }

    let constraints = read_constraints(&args.command);
    let result = match &strategy {
        Strategy::List(list) => solve(&constraints, list, None),
        Strategy::Generate(dictionary) => {
            solve_with_lazy_dictionary(&constraints, &AllCombinations, dictionary)
        }
    };
    let result = result.unwrap_or_else(|err| failed(&err));

    if let Some(summary) = loaded_summary(&strategy) {
        report(summary);
    }

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(err) => failed(&err),
        }
    } else {
        println!("Found {} matching words:", result.count);
        for word in &result.words {
            println!("\t{}", word);
        }
    }

    report(format!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    ));
}

/// Describes how many words were loaded, once the words file or dictionary has been read.
fn loaded_summary(strategy: &Strategy) -> Option<String> {
    match strategy {
        Strategy::List(list) if list.is_loaded() => list
            .get()
            .ok()
            .map(|words| format!("There are {} possible words.", words.len())),
        Strategy::Generate(dictionary) if dictionary.is_loaded() => dictionary
            .get()
            .ok()
            .map(|loaded| format!("The dictionary has {} words.", loaded.len())),
        _ => None,
    }
}

fn choose_strategy(args: &Args) -> Strategy {
    if let Some(path) = &args.words_file {
        return Strategy::List(CachedWordList::new(path));
    }
    if let (Some(aff), Some(dic)) = (&args.aff, &args.dic) {
        return Strategy::Generate(LazyDictionary::new(DictionarySource::Hunspell {
            aff: aff.clone(),
            dic: dic.clone(),
        }));
    }
    if let Some(path) = &args.dictionary_words {
        return Strategy::Generate(LazyDictionary::new(DictionarySource::WordList(
            path.clone(),
        )));
    }
    invalid_request("one of --words-file, --aff with --dic, or --dictionary-words is needed")
}

fn read_constraints(command: &Command) -> WordConstraints {
    match command {
        Command::Query {
            accepted,
            denied,
            known,
            rejected,
        } => parse_constraints_from_query([
            ("acceptedChars", accepted),
            ("deniedChars", denied),
            ("knownPositions", known),
            ("rejectedPositions", rejected),
        ]),
        Command::Body { path } => {
            let body = read_body(path.as_ref()).unwrap_or_else(|err| failed(&err));
            let body: Value = serde_json::from_str(&body)
                .unwrap_or_else(|err| invalid_request(&format!("body is not JSON: {}", err)));
            parse_constraints_from_body(&body)
                .unwrap_or_else(|| invalid_request("body must be a JSON object"))
        }
        Command::Guesses { guesses } => {
            let guess_results = guesses
                .iter()
                .map(|entry| {
                    let (guess, feedback) = entry.split_once(':').unwrap_or_else(|| {
                        invalid_request(&format!("expected WORD:FEEDBACK, got {}", entry))
                    });
                    GuessResult::from_feedback(guess, feedback)
                        .unwrap_or_else(|err| invalid_request(&err.to_string()))
                })
                .collect::<Vec<GuessResult>>();
            WordConstraints::from_guess_results(&guess_results)
        }
    }
}

fn read_body(path: Option<&PathBuf>) -> io::Result<String> {
    let mut body = String::new();
    match path {
        Some(path) if path.as_os_str() != "-" => {
            File::open(path)?.read_to_string(&mut body)?;
        }
        _ => {
            io::stdin().read_to_string(&mut body)?;
        }
    }
    Ok(body)
}
