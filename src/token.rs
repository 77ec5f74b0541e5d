use std::sync::LazyLock;

use regex::Regex;

/// Characters that may appear inside a word: letters, marks, digits, `_`, apostrophes and `-`.
pub(crate) const WORD_CLASS: &str = r"\p{L}\p{M}\p{N}_'’\-";

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"([{WORD_CLASS}]+)|\S")).expect("token pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Splits `text` into word runs and single non-space characters. Whitespace is dropped.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let kind = if caps.get(1).is_some() {
                TokenKind::Word
            } else {
                TokenKind::Punct
            };
            Some(Token::new(m.as_str(), kind))
        })
        .collect()
}
