use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data;
use crate::error::{BorgError, Result};

/// Substitution table a word can be found in. Declaration order is lookup priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FirstPerson,
    Pronoun,
    Noun,
    Verb,
    Adjective,
}

impl Category {
    pub const PRIORITY: [Category; 5] = [
        Category::FirstPerson,
        Category::Pronoun,
        Category::Noun,
        Category::Verb,
        Category::Adjective,
    ];
}

/// On-disk shape of a lexicon, see `data/lexicon.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexiconData {
    #[serde(default)]
    pub phrases: Vec<String>,
    /// Ordered; earlier idioms are applied first.
    #[serde(default)]
    pub idioms: Vec<(String, String)>,
    #[serde(default)]
    pub first_person: HashMap<String, String>,
    #[serde(default)]
    pub pronouns: HashMap<String, String>,
    #[serde(default)]
    pub nouns: HashMap<String, String>,
    #[serde(default)]
    pub verbs: HashMap<String, String>,
    #[serde(default)]
    pub adjectives: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    pub phrases: Vec<String>,
    pub idioms: Vec<(String, String)>,
    tables: HashMap<Category, HashMap<String, String>>,
}

impl Lexicon {
    pub fn bundled() -> Result<Self> {
        Self::from_data(data::load_bundled()?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_data(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BorgError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_data(raw: LexiconData) -> Result<Self> {
        if let Some(idx) = raw.idioms.iter().position(|(phrase, _)| phrase.trim().is_empty()) {
            return Err(BorgError::EmptyIdiom(idx));
        }

        let mut tables = HashMap::new();
        tables.insert(Category::FirstPerson, fold_keys(raw.first_person));
        tables.insert(Category::Pronoun, fold_keys(raw.pronouns));
        tables.insert(Category::Noun, fold_keys(raw.nouns));
        tables.insert(Category::Verb, fold_keys(raw.verbs));
        tables.insert(Category::Adjective, fold_keys(raw.adjectives));

        let lexicon = Self {
            phrases: raw.phrases,
            idioms: raw.idioms,
            tables,
        };
        for (key, categories) in lexicon.collisions() {
            warn!(key = %key, ?categories, "word appears in several categories, first one wins");
        }
        Ok(lexicon)
    }

    pub fn get(&self, category: Category, key: &str) -> Option<&str> {
        self.tables
            .get(&category)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Case-insensitive lookup across every category in priority order.
    pub fn lookup(&self, word: &str) -> Option<(Category, &str)> {
        self.lookup_in(word, &Category::PRIORITY)
    }

    /// Like [`Lexicon::lookup`] but only consults `categories`, in the order given.
    pub fn lookup_in(&self, word: &str, categories: &[Category]) -> Option<(Category, &str)> {
        let key = word.to_lowercase();
        categories
            .iter()
            .find_map(|&category| self.get(category, &key).map(|target| (category, target)))
    }

    pub fn len(&self, category: Category) -> usize {
        self.tables.get(&category).map_or(0, HashMap::len)
    }

    /// Keys present in more than one category, sorted by key.
    pub fn collisions(&self) -> Vec<(String, Vec<Category>)> {
        let mut seen: HashMap<&str, Vec<Category>> = HashMap::new();
        for category in Category::PRIORITY {
            if let Some(table) = self.tables.get(&category) {
                for key in table.keys() {
                    seen.entry(key.as_str()).or_default().push(category);
                }
            }
        }
        let mut out: Vec<(String, Vec<Category>)> = seen
            .into_iter()
            .filter(|(_, categories)| categories.len() > 1)
            .map(|(key, categories)| (key.to_string(), categories))
            .collect();
        out.sort();
        out
    }
}

fn fold_keys(table: HashMap<String, String>) -> HashMap<String, String> {
    table
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect()
}
