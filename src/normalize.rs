use std::borrow::Cow;

const TYPOGRAPHIC_APOSTROPHES: [char; 3] = ['\u{2019}', '\u{2018}', '\u{02BC}'];

/// Replace typographic apostrophes with `'`. Nothing else is touched.
pub fn normalize_apostrophes(line: &str) -> Cow<'_, str> {
    if line.contains(&TYPOGRAPHIC_APOSTROPHES[..]) {
        Cow::Owned(line.replace(&TYPOGRAPHIC_APOSTROPHES[..], "'"))
    } else {
        Cow::Borrowed(line)
    }
}
