/// A slice of a line up to and excluding its terminal mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    /// `.`, `!` or `?`; `None` for a trailing fragment.
    pub terminal: Option<char>,
}

pub fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Splits on every terminal mark. Each mark closes its own sentence, so "..."
/// yields three sentences, the last two with empty text.
pub fn split_sentences(line: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for (idx, c) in line.char_indices() {
        if is_terminal(c) {
            sentences.push(Sentence {
                text: &line[start..idx],
                terminal: Some(c),
            });
            start = idx + c.len_utf8();
        }
    }
    if start < line.len() {
        sentences.push(Sentence {
            text: &line[start..],
            terminal: None,
        });
    }
    sentences
}
