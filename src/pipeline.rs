use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::Config;
use crate::error::{BorgError, Result};
use crate::idiom::IdiomRewriter;
use crate::lexicon::{Category, Lexicon};
use crate::normalize::normalize_apostrophes;
use crate::sentence::split_sentences;
use crate::token::tokenize;
use crate::transform::transform_word;

/// The line transformer. Owns the lexicon, the compiled idioms and the only
/// piece of mutable state: the RNG deciding on flavor phrases.
pub struct Assimilator {
    lexicon: Lexicon,
    config: Config,
    idioms: IdiomRewriter,
    categories: Vec<Category>,
    rng: StdRng,
}

impl Assimilator {
    pub fn new(lexicon: Lexicon, config: Config) -> Result<Self> {
        config.validate()?;
        if config.phrase_chance > 0.0 && lexicon.phrases.is_empty() {
            return Err(BorgError::EmptyPhrasePool(config.phrase_chance));
        }

        let idioms = if config.idioms {
            IdiomRewriter::new(&lexicon.idioms)?
        } else {
            IdiomRewriter::empty()
        };
        let categories = Category::PRIORITY
            .into_iter()
            .filter(|&c| config.extended_pronouns || c != Category::FirstPerson)
            .collect();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            lexicon,
            config,
            idioms,
            categories,
            rng,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn transform_word(&self, token: &str) -> String {
        transform_word(&self.lexicon, &self.categories, token)
    }

    pub fn is_attribution(&self, line: &str) -> bool {
        match self.config.skip_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => line.trim().starts_with(prefix),
            _ => false,
        }
    }

    /// One input record in, one output line out. Attribution lines pass through
    /// untouched; trailing whitespace is dropped either way.
    pub fn process_line(&mut self, line: &str) -> String {
        let record = line.trim_end();
        if self.is_attribution(record) {
            debug!(line = record, "attribution line, skipped");
            return record.to_string();
        }
        self.transform_line(record)
    }

    pub fn transform_line(&mut self, line: &str) -> String {
        let normalized = normalize_apostrophes(line);
        let rewritten = self.idioms.rewrite(&normalized);

        let mut output = Vec::new();
        for sentence in split_sentences(&rewritten) {
            let text = sentence.text.trim();
            if text.is_empty() {
                continue;
            }

            let mut assimilated = tokenize(text)
                .iter()
                .map(|token| {
                    if token.is_word() {
                        self.transform_word(&token.text)
                    } else {
                        token.text.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            if let Some(terminal) = sentence.terminal {
                assimilated.push(terminal);
                if let Some(phrase) = self.roll_phrase() {
                    assimilated.push(' ');
                    assimilated.push_str(&phrase);
                }
            }
            output.push(assimilated);
        }
        output.join(" ")
    }

    fn roll_phrase(&mut self) -> Option<String> {
        if !self.rng.gen_bool(self.config.phrase_chance) {
            return None;
        }
        let phrase = self.lexicon.phrases.choose(&mut self.rng)?;
        debug!(phrase = %phrase, "flavor phrase injected");
        Some(format!(
            "{} {} {}",
            self.config.phrase_open, phrase, self.config.phrase_close
        ))
    }
}
