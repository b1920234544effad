//! Reads Hunspell `.aff`/`.dic` pairs and expands every stem into the words it stands for.
//!
//! Only what's needed to list valid words is supported: the `FLAG` format, `PFX`/`SFX` classes
//! (including cross products) and `NEEDAFFIX`. Everything else in the affix file, such as
//! suggestion or compounding settings, is ignored.

use crate::results::SolverError;
use std::collections::HashMap;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagMode {
    /// One character per flag. This also covers `FLAG UTF-8`.
    Single,
    /// Two characters per flag.
    Long,
    /// Comma-separated decimal numbers.
    Numeric,
}

impl FlagMode {
    fn parse_flags(self, flags: &str) -> Vec<String> {
        match self {
            FlagMode::Single => flags.chars().map(String::from).collect(),
            FlagMode::Long => {
                let chars: Vec<char> = flags.chars().collect();
                chars.chunks(2).map(|pair| pair.iter().collect()).collect()
            }
            FlagMode::Numeric => flags
                .split(',')
                .map(str::trim)
                .filter(|flag| !flag.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConditionPart {
    Any,
    Letter(char),
    OneOf(Vec<char>),
    NoneOf(Vec<char>),
}

impl ConditionPart {
    fn matches(&self, letter: char) -> bool {
        match self {
            ConditionPart::Any => true,
            ConditionPart::Letter(expected) => *expected == letter,
            ConditionPart::OneOf(letters) => letters.contains(&letter),
            ConditionPart::NoneOf(letters) => !letters.contains(&letter),
        }
    }
}

/// The letters a stem must start (for prefixes) or end (for suffixes) with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Condition {
    parts: Vec<ConditionPart>,
}

impl Condition {
    fn parse(condition: &str) -> Option<Condition> {
        let mut parts = Vec::new();
        let mut chars = condition.chars();
        while let Some(letter) = chars.next() {
            let part = match letter {
                '.' => ConditionPart::Any,
                '[' => {
                    let mut negated = false;
                    let mut letters = Vec::new();
                    loop {
                        match chars.next()? {
                            ']' => break,
                            '^' if letters.is_empty() && !negated => negated = true,
                            other => letters.push(other),
                        }
                    }
                    if negated {
                        ConditionPart::NoneOf(letters)
                    } else {
                        ConditionPart::OneOf(letters)
                    }
                }
                other => ConditionPart::Letter(other),
            };
            parts.push(part);
        }
        // "." on its own means there is no condition.
        if parts == [ConditionPart::Any] {
            parts.clear();
        }
        Some(Condition { parts })
    }

    fn matches_start(&self, word: &[char]) -> bool {
        word.len() >= self.parts.len()
            && self
                .parts
                .iter()
                .zip(word)
                .all(|(part, letter)| part.matches(*letter))
    }

    fn matches_end(&self, word: &[char]) -> bool {
        word.len() >= self.parts.len()
            && self
                .parts
                .iter()
                .zip(&word[word.len() - self.parts.len()..])
                .all(|(part, letter)| part.matches(*letter))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AffixKind {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone)]
struct AffixRule {
    strip: Vec<char>,
    add: Vec<char>,
    condition: Condition,
}

impl AffixRule {
    fn apply(&self, kind: AffixKind, word: &[char]) -> Option<Vec<char>> {
        match kind {
            AffixKind::Prefix => {
                if !word.starts_with(&self.strip) || !self.condition.matches_start(word) {
                    return None;
                }
                let mut result = self.add.clone();
                result.extend_from_slice(&word[self.strip.len()..]);
                Some(result)
            }
            AffixKind::Suffix => {
                if !word.ends_with(&self.strip) || !self.condition.matches_end(word) {
                    return None;
                }
                let mut result = word[..word.len() - self.strip.len()].to_vec();
                result.extend_from_slice(&self.add);
                Some(result)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct AffixClass {
    kind: AffixKind,
    cross_product: bool,
    rules: Vec<AffixRule>,
}

/// The prefix and suffix rules from a Hunspell `.aff` file.
#[derive(Debug, Clone)]
pub struct AffixRules {
    flag_mode: FlagMode,
    classes: HashMap<String, AffixClass>,
    need_affix: Option<String>,
}

impl Default for AffixRules {
    fn default() -> Self {
        AffixRules {
            flag_mode: FlagMode::Single,
            classes: HashMap::new(),
            need_affix: None,
        }
    }
}

fn format_error(line: usize, message: impl Into<String>) -> SolverError {
    SolverError::DictionaryFormat {
        line,
        message: message.into(),
    }
}

/// Converts the `0` placeholder that affix files use for "nothing" into an empty affix.
fn affix_text(text: &str) -> Vec<char> {
    if text == "0" {
        Vec::new()
    } else {
        text.chars().collect()
    }
}

impl AffixRules {
    /// Parses the affix rules from the contents of an `.aff` file.
    pub fn from_reader<R: BufRead>(aff_reader: R) -> Result<AffixRules, SolverError> {
        let mut rules = AffixRules::default();
        for (index, line) in aff_reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|err| format_error(line_number, err.to_string()))?;
            let fields: Vec<&str> = line
                .trim_start_matches('\u{feff}')
                .split_whitespace()
                .collect();
            match fields.as_slice() {
                ["FLAG", mode, ..] => {
                    rules.flag_mode = match *mode {
                        "long" => FlagMode::Long,
                        "num" => FlagMode::Numeric,
                        _ => FlagMode::Single,
                    };
                }
                ["NEEDAFFIX", flag, ..] => rules.need_affix = Some(flag.to_string()),
                [kind @ ("PFX" | "SFX"), flag, rest @ ..] => {
                    let kind = if *kind == "PFX" {
                        AffixKind::Prefix
                    } else {
                        AffixKind::Suffix
                    };
                    rules.parse_affix_line(kind, flag, rest, line_number)?;
                }
                _ => {}
            }
        }
        Ok(rules)
    }

    fn parse_affix_line(
        &mut self,
        kind: AffixKind,
        flag: &str,
        fields: &[&str],
        line_number: usize,
    ) -> Result<(), SolverError> {
        let Some(class) = self.classes.get_mut(flag) else {
            // The first line for a flag is the class header: `SFX <flag> <Y|N> <count>`.
            let [cross_product, count, ..] = fields else {
                return Err(format_error(line_number, "incomplete affix header"));
            };
            count
                .parse::<usize>()
                .map_err(|_| format_error(line_number, format!("invalid rule count {}", count)))?;
            self.classes.insert(
                flag.to_string(),
                AffixClass {
                    kind,
                    cross_product: *cross_product == "Y",
                    rules: Vec::new(),
                },
            );
            return Ok(());
        };
        if class.kind != kind {
            return Err(format_error(
                line_number,
                format!("flag {} is used for both prefixes and suffixes", flag),
            ));
        }
        let [strip, add, rest @ ..] = fields else {
            return Err(format_error(line_number, "incomplete affix rule"));
        };
        // Continuation classes after the slash only matter for twofold affixes.
        let add = add.split('/').next().unwrap_or_default();
        let condition_text = rest.first().copied().unwrap_or(".");
        let condition = Condition::parse(condition_text).ok_or_else(|| {
            format_error(line_number, format!("invalid condition {}", condition_text))
        })?;
        class.rules.push(AffixRule {
            strip: affix_text(strip),
            add: affix_text(add),
            condition,
        });
        Ok(())
    }

    /// Expands one `.dic` entry (`stem/FLAGS`) into every word it represents, passing each to
    /// `emit`. Words may be emitted more than once.
    pub fn expand<F: FnMut(String)>(&self, entry: &str, mut emit: F) {
        let (stem, flags) = match entry.split_once('/') {
            Some((stem, flags)) => (stem, self.flag_mode.parse_flags(flags)),
            None => (entry, Vec::new()),
        };
        if stem.is_empty() {
            return;
        }
        let needs_affix = self
            .need_affix
            .as_ref()
            .map_or(false, |need_affix| flags.contains(need_affix));
        if !needs_affix {
            emit(stem.to_string());
        }

        let stem: Vec<char> = stem.chars().collect();
        let classes: Vec<&AffixClass> = flags
            .iter()
            .filter_map(|flag| self.classes.get(flag))
            .collect();

        let mut cross_suffixed: Vec<Vec<char>> = Vec::new();
        for class in classes
            .iter()
            .filter(|class| class.kind == AffixKind::Suffix)
        {
            for rule in &class.rules {
                if let Some(word) = rule.apply(AffixKind::Suffix, &stem) {
                    emit(word.iter().collect());
                    if class.cross_product {
                        cross_suffixed.push(word);
                    }
                }
            }
        }
        for class in classes
            .iter()
            .filter(|class| class.kind == AffixKind::Prefix)
        {
            for rule in &class.rules {
                if let Some(word) = rule.apply(AffixKind::Prefix, &stem) {
                    emit(word.iter().collect());
                }
                if !class.cross_product {
                    continue;
                }
                for suffixed in &cross_suffixed {
                    if let Some(word) = rule.apply(AffixKind::Prefix, suffixed) {
                        emit(word.iter().collect());
                    }
                }
            }
        }
    }

    /// Reads every entry of a `.dic` file and expands it with these rules.
    ///
    /// The optional first line holding the approximate number of entries is skipped, as is
    /// anything after the first whitespace on a line (morphological fields).
    pub fn expand_dic<R: BufRead, F: FnMut(String)>(
        &self,
        dic_reader: R,
        mut emit: F,
    ) -> Result<(), SolverError> {
        for (index, line) in dic_reader.lines().enumerate() {
            let line = line.map_err(|err| format_error(index + 1, err.to_string()))?;
            let line = line.trim_start_matches('\u{feff}').trim();
            let Some(entry) = line.split_whitespace().next() else {
                continue;
            };
            if index == 0 && entry.parse::<usize>().is_ok() {
                continue;
            }
            self.expand(entry, &mut emit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    const AFF: &str = "\
# Comments and unknown directives are ignored.
SET UTF-8
TRY esianrtolcdugmphbyfvkwz

NEEDAFFIX X

PFX U Y 1
PFX U 0 un .

SFX S Y 2
SFX S y ies [^aeiou]y
SFX S 0 s [^y]

SFX D N 2
SFX D 0 d e
SFX D 0 ed [^e]
";

    fn expand_all(rules: &AffixRules, entry: &str) -> Vec<String> {
        let mut words = Vec::new();
        rules.expand(entry, |word| words.push(word));
        words.sort();
        words.dedup();
        words
    }

    #[test]
    fn condition_parse_and_match() {
        let condition = Condition::parse("[^aeiou]y").unwrap();
        let word = |text: &str| text.chars().collect::<Vec<char>>();

        assert!(condition.matches_end(&word("berry")));
        assert!(!condition.matches_end(&word("toy")));
        assert!(!condition.matches_end(&word("y")));
        assert!(Condition::parse(".").unwrap().matches_end(&word("")));
        assert!(Condition::parse("[ab").is_none());
    }

    #[test]
    fn expand_suffixes() -> Result<(), SolverError> {
        let rules = AffixRules::from_reader(Cursor::new(AFF))?;

        assert_eq!(expand_all(&rules, "berry/S"), vec!["berries", "berry"]);
        assert_eq!(
            expand_all(&rules, "crate/SD"),
            vec!["crate", "crated", "crates"]
        );
        assert_eq!(expand_all(&rules, "hack/D"), vec!["hack", "hacked"]);
        Ok(())
    }

    #[test]
    fn expand_prefix_with_cross_product() -> Result<(), SolverError> {
        let rules = AffixRules::from_reader(Cursor::new(AFF))?;

        assert_eq!(
            expand_all(&rules, "tie/US"),
            vec!["tie", "ties", "untie", "unties"]
        );
        // D is not a cross product class, so there is no "unlocked".
        assert_eq!(
            expand_all(&rules, "lock/UD"),
            vec!["lock", "locked", "unlock"]
        );
        Ok(())
    }

    #[test]
    fn expand_need_affix_skips_stem() -> Result<(), SolverError> {
        let rules = AffixRules::from_reader(Cursor::new(AFF))?;

        assert_eq!(expand_all(&rules, "cact/XS"), vec!["cacts"]);
        Ok(())
    }

    #[test]
    fn expand_unknown_flags_keeps_stem() -> Result<(), SolverError> {
        let rules = AffixRules::from_reader(Cursor::new(AFF))?;

        assert_eq!(expand_all(&rules, "zebra/QZ"), vec!["zebra"]);
        assert_eq!(expand_all(&rules, "zebra"), vec!["zebra"]);
        Ok(())
    }

    #[test]
    fn long_and_numeric_flags() -> Result<(), SolverError> {
        let long = AffixRules::from_reader(Cursor::new("FLAG long\nSFX Aa Y 1\nSFX Aa 0 s .\n"))?;
        let numeric =
            AffixRules::from_reader(Cursor::new("FLAG num\nSFX 101 Y 1\nSFX 101 0 s .\n"))?;

        assert_eq!(expand_all(&long, "cat/AaBb"), vec!["cat", "cats"]);
        assert_eq!(expand_all(&numeric, "cat/7,101"), vec!["cat", "cats"]);
        Ok(())
    }

    #[test]
    fn expand_dic_skips_count_and_morphology() -> Result<(), SolverError> {
        let rules = AffixRules::from_reader(Cursor::new(AFF))?;
        let mut words = Vec::new();

        rules.expand_dic(
            Cursor::new("3\ncrate/S po:noun\n\nzebra\nParis\n"),
            |word| words.push(word),
        )?;

        assert_eq!(words, vec!["crate", "crates", "zebra", "Paris"]);
        Ok(())
    }

    #[test]
    fn malformed_header_is_an_error() {
        assert_matches!(
            AffixRules::from_reader(Cursor::new("SFX S Y many\n")),
            Err(SolverError::DictionaryFormat { line: 1, .. })
        );
        assert_matches!(
            AffixRules::from_reader(Cursor::new("\nPFX U Y 1\nPFX U 0\n")),
            Err(SolverError::DictionaryFormat { line: 3, .. })
        );
    }
}
