pub mod config;
pub mod data;
pub mod error;
pub mod idiom;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod sentence;
pub mod source;
pub mod token;
pub mod transform;

pub use config::Config;
pub use error::BorgError;
pub use lexicon::{Category, Lexicon};
pub use pipeline::Assimilator;
pub use source::Input;
pub use token::Token;
