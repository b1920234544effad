//! Turns untrusted input into [`WordConstraints`].
//!
//! Invalid entries are dropped rather than failing the whole request: a letter must be a single
//! ASCII letter (it is lowercased), and a position must be an integer from 1 to 5.

use crate::constraints::WordConstraints;
use crate::constraints::WORD_LENGTH;
use serde_json::Map;
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// The field names shared by request bodies and query strings.
const ACCEPTED_CHARS: &str = "acceptedChars";
const DENIED_CHARS: &str = "deniedChars";
const KNOWN_POSITIONS: &str = "knownPositions";
const REJECTED_POSITIONS: &str = "rejectedPositions";

fn parse_letter(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Some(letter.to_ascii_lowercase()),
        _ => None,
    }
}

/// Keys are read as numbers, so `"1.0"` and `"1e0"` are both position 1.
fn parse_position(key: &str) -> Option<u8> {
    let position = key.trim().parse::<f64>().ok()?;
    if position.fract() != 0.0 || !(1.0..=WORD_LENGTH as f64).contains(&position) {
        return None;
    }
    Some(position as u8)
}

fn letters_from_value(value: Option<&Value>) -> BTreeSet<char> {
    value
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .filter_map(parse_letter)
                .collect()
        })
        .unwrap_or_default()
}

fn known_positions_from_object(object: Option<&Map<String, Value>>) -> BTreeMap<u8, char> {
    object
        .into_iter()
        .flatten()
        .filter_map(|(key, value)| {
            let letter = value.as_str().and_then(parse_letter)?;
            Some((parse_position(key)?, letter))
        })
        .collect()
}

fn rejected_positions_from_object(
    object: Option<&Map<String, Value>>,
) -> BTreeMap<u8, BTreeSet<char>> {
    object
        .into_iter()
        .flatten()
        .filter(|(_, value)| value.is_array())
        .filter_map(|(key, value)| {
            Some((parse_position(key)?, letters_from_value(Some(value))))
        })
        .collect()
}

/// Reads constraints from a JSON request body.
///
/// Returns `None` if the body isn't a JSON object at all, so that the caller can reject the
/// request. Otherwise each field is validated on its own: a missing or malformed field becomes
/// empty, and invalid entries within a field are skipped.
///
/// ```
/// use serde_json::json;
/// use wordle_constraint_solver::normalize::parse_constraints_from_body;
///
/// let constraints = parse_constraints_from_body(&json!({
///     "acceptedChars": ["A", "bc", 7],
///     "knownPositions": {"1": "c", "9": "x"}
/// }))
/// .unwrap();
///
/// assert_eq!(constraints.accepted_chars.len(), 1);
/// assert_eq!(constraints.known_positions.len(), 1);
/// assert!(parse_constraints_from_body(&json!("crate")).is_none());
/// ```
pub fn parse_constraints_from_body(body: &Value) -> Option<WordConstraints> {
    let body = body.as_object()?;
    Some(WordConstraints {
        accepted_chars: letters_from_value(body.get(ACCEPTED_CHARS)),
        denied_chars: letters_from_value(body.get(DENIED_CHARS)),
        known_positions: known_positions_from_object(
            body.get(KNOWN_POSITIONS).and_then(Value::as_object),
        ),
        rejected_positions: rejected_positions_from_object(
            body.get(REJECTED_POSITIONS).and_then(Value::as_object),
        ),
    })
}

fn letters_from_list(list: Option<&str>) -> BTreeSet<char> {
    list.into_iter()
        .flat_map(|list| list.split(','))
        .filter_map(|entry| parse_letter(entry.trim()))
        .collect()
}

fn object_from_json(json: Option<&str>) -> Option<Map<String, Value>> {
    match serde_json::from_str(json?) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Reads constraints from flat key/value pairs, such as a decoded query string.
///
/// `acceptedChars` and `deniedChars` are comma-separated letters. `knownPositions` and
/// `rejectedPositions` are JSON objects, like `{"1":"c"}` and `{"3":["a","e"]}`. Unknown keys are
/// ignored, and if a key is repeated the last value wins.
///
/// Unlike [`parse_constraints_from_body`], this always returns constraints: an empty query is a
/// request for every word.
pub fn parse_constraints_from_query<I, K, V>(pairs: I) -> WordConstraints
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let fields: BTreeMap<String, String> = pairs
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
        .collect();
    let field = |name: &str| fields.get(name).map(String::as_str);
    let known_positions = object_from_json(field(KNOWN_POSITIONS));
    let rejected_positions = object_from_json(field(REJECTED_POSITIONS));

    WordConstraints {
        accepted_chars: letters_from_list(field(ACCEPTED_CHARS)),
        denied_chars: letters_from_list(field(DENIED_CHARS)),
        known_positions: known_positions_from_object(known_positions.as_ref()),
        rejected_positions: rejected_positions_from_object(rejected_positions.as_ref()),
    }
}
