use regex::{NoExpand, Regex};
use tracing::debug;

use crate::error::Result;

struct IdiomRule {
    pattern: Regex,
    replacement: String,
}

/// Collapses multi-word phrases into their single replacement before tokenizing.
pub struct IdiomRewriter {
    rules: Vec<IdiomRule>,
}

impl IdiomRewriter {
    pub fn new(idioms: &[(String, String)]) -> Result<Self> {
        let mut rules = Vec::with_capacity(idioms.len());
        for (phrase, replacement) in idioms {
            // Any run of whitespace between the words counts as a separator.
            let body = phrase
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+");
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", body))?;
            rules.push(IdiomRule {
                pattern,
                replacement: replacement.clone(),
            });
        }
        Ok(Self { rules })
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every idiom in table order, each across the whole line.
    pub fn rewrite(&self, line: &str) -> String {
        let mut current = line.to_string();
        for rule in &self.rules {
            if rule.pattern.is_match(&current) {
                debug!(pattern = %rule.pattern, replacement = %rule.replacement, "idiom hit");
                current = rule
                    .pattern
                    .replace_all(&current, NoExpand(&rule.replacement))
                    .into_owned();
            }
        }
        current
    }
}
