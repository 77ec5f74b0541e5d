use crate::error::Result;
use crate::lexicon::LexiconData;

/// The vocabulary compiled into the binary.
pub fn load_bundled() -> Result<LexiconData> {
    let data = include_str!("../data/lexicon.json");
    Ok(serde_json::from_str(data)?)
}
