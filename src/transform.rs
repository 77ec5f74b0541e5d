use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{Category, Lexicon};
use crate::normalize::normalize_apostrophes;
use crate::token::WORD_CLASS;

// Word core followed by trailing punctuation that holds no word characters or apostrophes.
static CORE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^([{WORD_CLASS}]+)([^\p{{L}}\p{{M}}\p{{N}}_'’]*)$"))
        .expect("core pattern is valid")
});

/// Replaces one token using the first table in `categories` that knows it.
/// Unknown tokens come back unchanged, trailing punctuation included.
pub fn transform_word(lexicon: &Lexicon, categories: &[Category], token: &str) -> String {
    let (core, trailing) = match CORE_REGEX.captures(token) {
        Some(caps) => (
            caps.get(1).map_or(token, |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (token, ""),
    };

    let key = normalize_apostrophes(core);
    match lexicon.lookup_in(&key, categories) {
        Some((Category::FirstPerson, target)) => preserve_case_first_word(target, core) + trailing,
        Some((_, target)) => preserve_case(target, core) + trailing,
        None => token.to_string(),
    }
}

/// Carries the capitalization pattern of `old` over to `new`.
///
/// Shouting (two or more cased characters, all upper) upper-cases the whole
/// replacement. Title case, or a leading capital, capitalizes its first character.
/// A lone capital such as "I" counts as title case.
pub fn preserve_case(new: &str, old: &str) -> String {
    if is_shouting(old) {
        new.to_uppercase()
    } else if is_title(old) || old.chars().next().is_some_and(char::is_uppercase) {
        capitalize(new)
    } else {
        new.to_string()
    }
}

/// [`preserve_case`] applied to the first word of a multi-word replacement only.
pub fn preserve_case_first_word(new: &str, old: &str) -> String {
    match new.split_once(' ') {
        Some((head, tail)) => format!("{} {}", preserve_case(head, old), tail),
        None => preserve_case(new, old),
    }
}

fn is_shouting(word: &str) -> bool {
    let mut cased = 0;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased += 1;
        }
    }
    cased > 1
}

// Upper-case letters only after uncased characters, lower-case only after cased ones.
fn is_title(word: &str) -> bool {
    let mut previous_cased = false;
    let mut any_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else {
            previous_cased = false;
        }
    }
    any_cased
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
