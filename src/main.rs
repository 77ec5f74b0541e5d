use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use borgify::{Assimilator, Config, Input, Lexicon};

#[derive(Parser)]
#[command(name = "borgify")]
#[command(version)]
#[command(about = "Assimilate your text. < RESISTANCE IS FUTILE >")]
struct Cli {
    /// Text or filename to assimilate
    input: Vec<String>,

    /// Seed for flavor-phrase decisions (repeatable output)
    #[arg(long)]
    seed: Option<u64>,

    /// Chance of a flavor phrase after each sentence, 0.0 to 1.0
    #[arg(long)]
    chance: Option<f64>,

    /// Skip the idiom pre-pass
    #[arg(long)]
    no_idioms: bool,

    /// Leave "I" and its contractions alone
    #[arg(long)]
    simple: bool,

    /// Transform attribution lines ("-- Name") too
    #[arg(long)]
    no_skip: bool,

    /// Replacement lexicon (JSON)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Config file (JSON); flags override it
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(chance) = self.chance {
            config.phrase_chance = chance;
        }
        if self.no_idioms {
            config.idioms = false;
        }
        if self.simple {
            config.extended_pronouns = false;
        }
        if self.no_skip {
            config.skip_prefix = None;
        }
        Ok(config)
    }

    fn lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon {
            Some(path) => Lexicon::from_path(path)
                .with_context(|| format!("loading lexicon {}", path.display())),
            None => Lexicon::bundled().context("loading bundled lexicon"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut assimilator = Assimilator::new(cli.lexicon()?, cli.config()?)
        .context("invalid settings")?;

    let input = Input::resolve(&cli.input, io::stdin().is_terminal());
    tracing::debug!(?input, "input resolved");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    input.run(&mut assimilator, &mut out)?;
    Ok(())
}
