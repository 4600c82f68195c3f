pub mod data;
pub mod error;
pub mod language;
pub mod languages;
pub mod lexicon;
pub mod tagger;
pub mod token;

pub use data::{bundled_lexicon, load_lexicon};
pub use error::LexiconError;
pub use language::Language;
pub use lexicon::Lexicon;
pub use tagger::Tagger;
pub use token::TaggedToken;
